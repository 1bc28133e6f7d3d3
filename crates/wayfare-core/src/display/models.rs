//! Markdown cards for the catalog documents.
//!
//! `Display` renders the full detail view of a document. List views use
//! [`Card::fmt_entry`], which is the same card for packages and destinations
//! and a header-only summary for itineraries.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    destinations::destination_label,
    models::{
        DayCount, Destination, HomeContent, Itinerary, Package, RomanticItinerary,
        RomanticPackage,
    },
    parse::{format_price, join_highlights},
};

/// Documents that render as list entries.
pub trait Card {
    /// Title shown in headings and confirmations
    fn heading(&self) -> &str;

    fn fmt_entry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Filled and empty stars for a hotel rating.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn id_suffix(id: Option<&str>) -> String {
    id.map(|id| format!(" (ID: {id})")).unwrap_or_default()
}

fn location_line(destination: &str, location: &str) -> String {
    let label = destination_label(destination);
    if location.is_empty() || location.eq_ignore_ascii_case(label) {
        label.to_string()
    } else {
        format!("{location}, {label}")
    }
}

impl Package {
    fn fmt_card(&self, f: &mut fmt::Formatter<'_>, heading: &str) -> fmt::Result {
        writeln!(f, "{heading} {}{}", self.title, id_suffix(self.id.as_deref()))?;
        writeln!(f)?;
        writeln!(f, "- **Where**: {}", location_line(&self.destination, &self.location))?;

        // numericPrice is 0 for documents stored before it was derived
        if self.numeric_price > 0.0 && self.price.is_empty() {
            writeln!(f, "- **Price**: {}", format_price(self.numeric_price))?;
        } else {
            writeln!(f, "- **Price**: {}", self.price)?;
        }

        match &self.numeric_days {
            DayCount::Count(n) => writeln!(f, "- **Duration**: {} ({n} days)", self.days)?,
            DayCount::Raw(_) => writeln!(f, "- **Duration**: {}", self.days)?,
        }
        writeln!(f, "- **Hotel**: {}", stars(self.hotel_rating))?;
        writeln!(f, "- **Type**: {}", self.package_type)?;
        if !self.category.is_empty() {
            writeln!(f, "- **Category**: {}", self.category)?;
        }
        if !self.image.is_empty() && !self.image.starts_with("data:") {
            writeln!(f, "- **Image**: {}", self.image)?;
        }
        if !self.highlights.is_empty() {
            writeln!(f, "- **Highlights**: {}", join_highlights(&self.highlights))?;
        }

        if !self.features.is_empty() {
            writeln!(f)?;
            for feature in &self.features {
                writeln!(f, "- {feature}")?;
            }
        }

        writeln!(f)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_card(f, "#")?;
        if let Some(created) = &self.created_at {
            writeln!(f, "Created {}", LocalDateTime(created))?;
        }
        Ok(())
    }
}

impl Card for Package {
    fn heading(&self) -> &str {
        &self.title
    }

    fn fmt_entry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_card(f, "##")
    }
}

impl fmt::Display for RomanticPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Card for RomanticPackage {
    fn heading(&self) -> &str {
        &self.title
    }

    fn fmt_entry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_card(f, "##")
    }
}

impl Itinerary {
    fn fmt_header(&self, f: &mut fmt::Formatter<'_>, heading: &str) -> fmt::Result {
        writeln!(f, "{heading} {}{}", self.title, id_suffix(self.id.as_deref()))?;
        writeln!(f)?;
        writeln!(f, "- **Destination**: {}", destination_label(&self.destination))?;
        writeln!(f, "- **Duration**: {} ({} days planned)", self.duration, self.days.len())?;
        if !self.hotel_name.is_empty() {
            writeln!(f, "- **Hotel**: {} {}", self.hotel_name, stars(self.hotel_rating))?;
        }
        if let Some(package_id) = &self.package_id {
            writeln!(f, "- **Package**: {package_id}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f, "#")?;

        if !self.overview.is_empty() {
            writeln!(f, "{}", self.overview)?;
            writeln!(f)?;
        }

        if !self.hotel_description.is_empty() || !self.hotel_images.is_empty() {
            writeln!(f, "## Stay")?;
            writeln!(f)?;
            if !self.hotel_description.is_empty() {
                writeln!(f, "{}", self.hotel_description)?;
                writeln!(f)?;
            }
            for image in &self.hotel_images {
                let name = if image.name.is_empty() { &image.alt } else { &image.name };
                writeln!(f, "- {name}: {}", image.src)?;
            }
            if !self.hotel_images.is_empty() {
                writeln!(f)?;
            }
        }

        for day in &self.days {
            writeln!(f, "## Day {}: {}", day.day, day.title)?;
            writeln!(f)?;
            for activity in day.activities.iter().filter(|a| !a.is_empty()) {
                writeln!(f, "- {activity}")?;
            }
            if !day.meals.is_empty() {
                writeln!(f, "- **Meals**: {}", day.meals.join(", "))?;
            }
            if !day.accommodation.is_empty() {
                writeln!(f, "- **Stay**: {}", day.accommodation)?;
            }
            writeln!(f)?;
        }

        for (heading, items) in [("Inclusions", &self.inclusions), ("Exclusions", &self.exclusions)] {
            if items.is_empty() {
                continue;
            }
            writeln!(f, "## {heading}")?;
            writeln!(f)?;
            for item in items {
                writeln!(f, "- {item}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Card for Itinerary {
    fn heading(&self) -> &str {
        &self.title
    }

    fn fmt_entry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f, "##")
    }
}

impl fmt::Display for RomanticItinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Card for RomanticItinerary {
    fn heading(&self) -> &str {
        &self.title
    }

    fn fmt_entry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_header(f, "##")
    }
}

impl Destination {
    fn fmt_card(&self, f: &mut fmt::Formatter<'_>, heading: &str) -> fmt::Result {
        writeln!(f, "{heading} {}{}", self.name, id_suffix(self.id.as_deref()))?;
        writeln!(f)?;
        writeln!(f, "- **Slug**: {}", self.slug)?;
        if !self.tagline.is_empty() {
            writeln!(f, "- **Tagline**: {}", self.tagline)?;
        }
        if !self.image.is_empty() && !self.image.starts_with("data:") {
            writeln!(f, "- **Image**: {}", self.image)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_card(f, "#")
    }
}

impl Card for Destination {
    fn heading(&self) -> &str {
        &self.name
    }

    fn fmt_entry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_card(f, "##")
    }
}

impl fmt::Display for HomeContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Home page")?;
        writeln!(f)?;

        if self.destinations.is_empty() {
            writeln!(f, "No curated content yet.")?;
            return Ok(());
        }

        for (slug, section) in &self.destinations {
            writeln!(f, "## {}", destination_label(slug))?;
            writeln!(f)?;
            if section.featured_package_ids.is_empty() {
                writeln!(f, "- **Featured packages**: none")?;
            } else {
                writeln!(
                    f,
                    "- **Featured packages**: {}",
                    section.featured_package_ids.join(", ")
                )?;
            }
            for (position, tile) in section.top_destinations.iter().enumerate() {
                write!(f, "- **Tile {}**: {}", position + 1, tile.name)?;
                if !tile.link.is_empty() {
                    write!(f, " ({})", tile.link)?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }

        if let Some(updated) = &self.updated_at {
            writeln!(f, "Last saved {}", LocalDateTime(updated))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, PackageType};

    fn package() -> Package {
        Package {
            id: Some("7".into()),
            title: "Bali Bliss".into(),
            destination: "bali".into(),
            location: "Ubud".into(),
            price: "₹42,999/-".into(),
            numeric_price: 42999.0,
            days: "5 Days 7 Nights".into(),
            numeric_days: DayCount::Count(5),
            image: "data:image/png;base64,AAAA".into(),
            hotel_rating: 4,
            package_type: PackageType::Premium,
            features: vec!["Airport pickup".into()],
            highlights: vec!["Ubud".into(), "Kintamani".into()],
            category: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn package_card() {
        let text = package().to_string();
        assert!(text.starts_with("# Bali Bliss (ID: 7)"));
        assert!(text.contains("- **Where**: Ubud, Bali"));
        assert!(text.contains("- **Duration**: 5 Days 7 Nights (5 days)"));
        assert!(text.contains("★★★★☆"));
        assert!(text.contains("Ubud • Kintamani"));
        assert!(!text.contains("data:image"));
    }

    #[test]
    fn stars_are_capped() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn itinerary_days() {
        let itinerary = Itinerary {
            id: Some("3".into()),
            package_id: None,
            title: "Vietnam Discovery".into(),
            destination: "vietnam".into(),
            duration: "2 Days".into(),
            overview: String::new(),
            hotel_name: "Metropole".into(),
            hotel_rating: 5,
            hotel_description: String::new(),
            hotel_images: Vec::new(),
            days: vec![Day {
                day: 1,
                title: "Hanoi".into(),
                activities: vec!["Old Quarter walk".into()],
                meals: vec!["Dinner".into()],
                accommodation: String::new(),
            }],
            inclusions: vec!["Transfers".into()],
            exclusions: Vec::new(),
            created_at: None,
            updated_at: None,
        };
        let text = itinerary.to_string();
        assert!(text.contains("## Day 1: Hanoi"));
        assert!(text.contains("- **Meals**: Dinner"));
        assert!(text.contains("## Inclusions"));
        assert!(!text.contains("## Exclusions"));
    }
}
