//! Duration grammar for free-text package lengths.
//!
//! The numeric day count is taken from, in order of preference:
//!
//! 1. a number followed by `day`/`days` (`5 Days 7 Nights` gives 5)
//! 2. a number followed by `night`/`nights` (`7 Nights` gives 7)
//! 3. the first number anywhere (`Tour of 6` gives 6)
//!
//! When the text has no number at all the raw text is kept as-is
//! ([`DurationParse::Unparsed`]).

use crate::models::DayCount;

/// Outcome of parsing a duration string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationParse {
    Days(u32),
    Nights(u32),
    FirstNumber(u32),
    /// No number found; carries the original text unchanged
    Unparsed(String),
}

impl DurationParse {
    /// Value persisted as `numericDays`.
    pub fn day_count(&self) -> DayCount {
        match self {
            DurationParse::Days(n) | DurationParse::Nights(n) | DurationParse::FirstNumber(n) => {
                DayCount::Count(*n)
            }
            DurationParse::Unparsed(raw) => DayCount::Raw(raw.clone()),
        }
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, DurationParse::Unparsed(_))
    }
}

#[derive(Debug, PartialEq)]
enum Token {
    Number(Option<u32>),
    Word(String),
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut digits = String::new();
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            tokens.push(Token::Number(digits.parse().ok()));
        } else if c.is_alphabetic() {
            let mut word = String::new();
            while let Some(&w) = chars.peek() {
                if !w.is_alphabetic() {
                    break;
                }
                word.extend(w.to_lowercase());
                chars.next();
            }
            tokens.push(Token::Word(word));
        } else {
            chars.next();
        }
    }

    tokens
}

fn number_before(tokens: &[Token], units: &[&str]) -> Option<u32> {
    tokens.windows(2).find_map(|pair| match pair {
        [Token::Number(Some(n)), Token::Word(word)] if units.contains(&word.as_str()) => Some(*n),
        _ => None,
    })
}

/// Parses a display duration such as `5 Days 7 Nights`.
///
/// ```rust
/// use wayfare_core::parse::{parse_duration, DurationParse};
///
/// assert_eq!(parse_duration("5 Days 7 Nights"), DurationParse::Days(5));
/// assert_eq!(parse_duration("4 Nights"), DurationParse::Nights(4));
/// assert_eq!(parse_duration("Weekend"), DurationParse::Unparsed("Weekend".into()));
/// ```
pub fn parse_duration(raw: &str) -> DurationParse {
    let tokens = tokenize(raw);

    if let Some(n) = number_before(&tokens, &["day", "days"]) {
        return DurationParse::Days(n);
    }

    if let Some(n) = number_before(&tokens, &["night", "nights"]) {
        return DurationParse::Nights(n);
    }

    let first = tokens.iter().find_map(|token| match token {
        Token::Number(Some(n)) => Some(*n),
        _ => None,
    });

    match first {
        Some(n) => DurationParse::FirstNumber(n),
        None => DurationParse::Unparsed(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_win_over_nights_regardless_of_order() {
        assert_eq!(parse_duration("5 Days 7 Nights"), DurationParse::Days(5));
        assert_eq!(parse_duration("4 Nights / 5 Days"), DurationParse::Days(5));
        assert_eq!(parse_duration("1 day"), DurationParse::Days(1));
        assert_eq!(parse_duration("6-DAYS"), DurationParse::Days(6));
    }

    #[test]
    fn nights_then_first_number() {
        assert_eq!(parse_duration("3 Nights"), DurationParse::Nights(3));
        assert_eq!(parse_duration("Tour of 8 cities"), DurationParse::FirstNumber(8));
        assert_eq!(parse_duration("5D/4N"), DurationParse::FirstNumber(5));
    }

    #[test]
    fn text_without_digits_passes_through_unchanged() {
        let parsed = parse_duration("  Flexible ");
        assert_eq!(parsed, DurationParse::Unparsed("  Flexible ".to_string()));
        assert_eq!(parsed.day_count(), DayCount::Raw("  Flexible ".to_string()));
        assert!(parsed.is_unparsed());
    }

    #[test]
    fn day_count_for_numbers() {
        assert_eq!(parse_duration("5 Days 7 Nights").day_count(), DayCount::Count(5));
        assert_eq!(parse_duration("2 Nights").day_count(), DayCount::Count(2));
    }

    #[test]
    fn oversized_numbers_are_skipped() {
        assert_eq!(
            parse_duration("99999999999 Days or 3 Nights"),
            DurationParse::Nights(3)
        );
    }
}
