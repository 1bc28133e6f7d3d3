//! Display price normalization, e.g. `₹42,999/-` to `42999.0`.

/// Currency symbol used when formatting prices.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Strips the currency prefix, thousands separators and the trailing `/-`,
/// then parses what is left.
///
/// # Examples
///
/// ```rust
/// use wayfare_core::parse::normalize_price;
///
/// assert_eq!(normalize_price("₹42,999/-"), Ok(42999.0));
/// assert_eq!(normalize_price("Rs. 1,20,000"), Ok(120000.0));
/// assert!(normalize_price("on request").is_err());
/// ```
pub fn normalize_price(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Price is required".to_string());
    }

    let body = trimmed.trim_end_matches(|c: char| c == '/' || c == '-' || c.is_whitespace());

    let mut start = body
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| format!("'{raw}' does not contain a number"))?;

    // ".5" and "₹.5" keep their decimal point, "Rs.5" does not
    if let Some(before) = body[..start].strip_suffix('.') {
        if !before.chars().last().is_some_and(char::is_alphabetic) {
            start -= 1;
        }
    }

    let (prefix, number) = body.split_at(start);
    if prefix.contains('-') {
        return Err("Price must be greater than zero".to_string());
    }

    let cleaned: String = number
        .chars()
        .filter(|c| *c != ',' && *c != '_' && !c.is_whitespace())
        .collect();

    let value: f64 = cleaned
        .parse()
        .map_err(|_| format!("'{raw}' is not a valid price"))?;

    if !value.is_finite() || value <= 0.0 {
        return Err("Price must be greater than zero".to_string());
    }

    Ok(value)
}

/// Formats a price for display with Indian digit grouping.
///
/// The fractional part is printed with the shortest exact representation so
/// that normalizing the output gives back the same value.
///
/// ```rust
/// use wayfare_core::parse::format_price;
///
/// assert_eq!(format_price(42999.0), "₹42,999/-");
/// assert_eq!(format_price(1250000.0), "₹12,50,000/-");
/// assert_eq!(format_price(1299.5), "₹1,299.5/-");
/// ```
pub fn format_price(value: f64) -> String {
    let text = format!("{value}");
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac)) => (int_part.to_string(), Some(frac.to_string())),
        None => (text, None),
    };

    let mut out = String::from(CURRENCY_SYMBOL);
    out.push_str(&group_indian(&int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }
    out.push_str("/-");
    out
}

/// Groups digits as 12,34,567: the last three together, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let begin = end.saturating_sub(2);
        groups.push(&head[begin..end]);
        end = begin;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbol_separators_and_suffix() {
        assert_eq!(normalize_price("₹42,999/-"), Ok(42999.0));
        assert_eq!(normalize_price("  $1,299.50 "), Ok(1299.5));
        assert_eq!(normalize_price("INR 15000/"), Ok(15000.0));
        assert_eq!(normalize_price("₹.5"), Ok(0.5));
        assert_eq!(normalize_price("Rs.500"), Ok(500.0));
    }

    #[test]
    fn rejects_non_numeric_and_non_positive() {
        assert!(normalize_price("").is_err());
        assert!(normalize_price("   ").is_err());
        assert!(normalize_price("Price on request").is_err());
        assert!(normalize_price("₹0/-").is_err());
        assert!(normalize_price("-500").is_err());
        assert!(normalize_price("₹42,999 per person").is_err());
    }

    #[test]
    fn groups_digits_the_indian_way() {
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("4999"), "4,999");
        assert_eq!(group_indian("42999"), "42,999");
        assert_eq!(group_indian("120000"), "1,20,000");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn normalization_is_idempotent_through_formatting() {
        let inputs = [
            "₹42,999/-",
            "₹1,20,000/-",
            "$1,299.50",
            "799",
            "12,34,567.125",
            "0.1",
            "Rs. 3,33,333.333",
        ];
        for input in inputs {
            let first = normalize_price(input).expect("valid price");
            let again = normalize_price(&format_price(first)).expect("formatted price parses");
            assert_eq!(again, first, "round trip changed {input}");
        }
    }
}
