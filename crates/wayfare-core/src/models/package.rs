//! Package model and the package type vocabulary.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Document, ResourceKind};

/// Package categories, covering both the standard and the romance sets.
///
/// Unknown values survive a round trip through `Other` so that documents
/// written by older tools still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PackageType {
    #[default]
    Standard,
    Premium,
    Luxury,
    Budget,
    Honeymoon,
    Family,
    Adventure,
    CandleNight,
    BeachRomance,
    Proposal,
    Anniversary,
    Other(String),
}

impl PackageType {
    /// Types offered on regular package forms.
    pub const STANDARD: [PackageType; 7] = [
        PackageType::Standard,
        PackageType::Premium,
        PackageType::Luxury,
        PackageType::Budget,
        PackageType::Honeymoon,
        PackageType::Family,
        PackageType::Adventure,
    ];

    /// Types offered on romantic package forms.
    pub const ROMANTIC: [PackageType; 5] = [
        PackageType::Honeymoon,
        PackageType::CandleNight,
        PackageType::BeachRomance,
        PackageType::Proposal,
        PackageType::Anniversary,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            PackageType::Standard => "Standard",
            PackageType::Premium => "Premium",
            PackageType::Luxury => "Luxury",
            PackageType::Budget => "Budget",
            PackageType::Honeymoon => "Honeymoon",
            PackageType::Family => "Family",
            PackageType::Adventure => "Adventure",
            PackageType::CandleNight => "Candle Night",
            PackageType::BeachRomance => "Beach Romance",
            PackageType::Proposal => "Proposal",
            PackageType::Anniversary => "Anniversary",
            PackageType::Other(raw) => raw,
        }
    }

    /// Whether the type belongs to the romance allow-list.
    pub fn is_romantic(&self) -> bool {
        Self::ROMANTIC.contains(self)
    }

    /// Whether the type belongs to the standard form vocabulary.
    pub fn is_standard(&self) -> bool {
        Self::STANDARD.contains(self)
    }
}

impl From<String> for PackageType {
    fn from(raw: String) -> Self {
        let key: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "standard" => PackageType::Standard,
            "premium" => PackageType::Premium,
            "luxury" => PackageType::Luxury,
            "budget" => PackageType::Budget,
            "honeymoon" => PackageType::Honeymoon,
            "family" => PackageType::Family,
            "adventure" => PackageType::Adventure,
            "candlenight" => PackageType::CandleNight,
            "beachromance" => PackageType::BeachRomance,
            "proposal" => PackageType::Proposal,
            "anniversary" => PackageType::Anniversary,
            _ => PackageType::Other(raw),
        }
    }
}

impl From<PackageType> for String {
    fn from(value: PackageType) -> Self {
        match value {
            PackageType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for PackageType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PackageType::from(s.to_string()))
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric day count derived from a free-text duration.
///
/// Falls back to the raw duration text when no number could be found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayCount {
    Count(u32),
    Raw(String),
}

impl DayCount {
    pub fn as_count(&self) -> Option<u32> {
        match self {
            DayCount::Count(n) => Some(*n),
            DayCount::Raw(_) => None,
        }
    }
}

impl Default for DayCount {
    fn default() -> Self {
        DayCount::Raw(String::new())
    }
}

/// A travel package as stored in the catalog.
///
/// Both the display strings (`price`, `days`) and their normalized numeric
/// forms are persisted so the display text is never regenerated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    /// Destination slug, e.g. `bali`
    pub destination: String,

    /// City or area within the destination
    #[serde(default)]
    pub location: String,

    /// Display price, e.g. `₹42,999/-`
    pub price: String,

    #[serde(default)]
    pub numeric_price: f64,

    /// Display duration, e.g. `5 Days 7 Nights`
    pub days: String,

    #[serde(default)]
    pub numeric_days: DayCount,

    /// URL, local asset path or `data:image/` URI
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub hotel_rating: u8,

    #[serde(rename = "type", default)]
    pub package_type: PackageType,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub highlights: Vec<String>,

    #[serde(default)]
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Document for Package {
    const KIND: ResourceKind = ResourceKind::Packages;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn destination(&self) -> Option<&str> {
        Some(&self.destination)
    }
}
