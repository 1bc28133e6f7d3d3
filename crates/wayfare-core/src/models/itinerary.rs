//! Itinerary model: the day-by-day plan behind a package.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Document, ResourceKind};

/// Meals an itinerary day may include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
        }
    }
}

impl FromStr for Meal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Meal::Breakfast),
            "lunch" => Ok(Meal::Lunch),
            "dinner" => Ok(Meal::Dinner),
            _ => Err(format!("Invalid meal: {s}")),
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hotel photo shown on the itinerary page. Owned positionally by its
/// itinerary; it has no identifier of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotelImage {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One day of an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Day {
    /// Sequential day number starting at 1
    pub day: u32,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub activities: Vec<String>,

    #[serde(default)]
    pub meals: Vec<String>,

    #[serde(default)]
    pub accommodation: String,
}

impl Day {
    /// An empty day with the single blank activity every day starts with.
    pub fn blank(day: u32) -> Self {
        Self {
            day,
            activities: vec![String::new()],
            ..Default::default()
        }
    }
}

/// Day-by-day plan for a package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Weak reference to the package this itinerary describes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,

    pub title: String,

    pub destination: String,

    pub duration: String,

    #[serde(default)]
    pub overview: String,

    #[serde(default)]
    pub hotel_name: String,

    #[serde(default)]
    pub hotel_rating: u8,

    #[serde(default)]
    pub hotel_description: String,

    #[serde(default)]
    pub hotel_images: Vec<HotelImage>,

    #[serde(default)]
    pub days: Vec<Day>,

    #[serde(default)]
    pub inclusions: Vec<String>,

    #[serde(default)]
    pub exclusions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Document for Itinerary {
    const KIND: ResourceKind = ResourceKind::Itineraries;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn destination(&self) -> Option<&str> {
        Some(&self.destination)
    }
}
