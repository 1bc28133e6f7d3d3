//! Parameter structures for wayfare operations
//!
//! These structures are shared across interfaces (CLI, HTTP) and stay free of
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  HTTP queries   │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the document to operate on
    pub id: String,
}

/// Parameters for listing a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResources {
    /// Only documents for this destination slug
    #[serde(default)]
    pub destination: Option<String>,
    /// Only documents of this package type
    #[serde(default, rename = "type")]
    pub package_type: Option<String>,
    /// Only documents with exactly this hotel rating
    #[serde(default)]
    pub hotel_rating: Option<u8>,
}

/// Parameters for deleting a document.
///
/// Deletion needs explicit confirmation; without it no request is issued.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteResource {
    /// ID of the document to delete
    pub id: String,
    /// Destination the document must belong to, when scoped
    #[serde(default)]
    pub destination: Option<String>,
    /// Whether the deletion has already been confirmed
    #[serde(default)]
    pub confirmed: bool,
}

/// Package form fields.
///
/// Every field is optional so the same structure serves both creation
/// (missing required fields fail validation) and partial edits (missing
/// fields keep their current value).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageFields {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
    pub days: Option<String>,
    pub image: Option<String>,
    pub hotel_rating: Option<u8>,
    #[serde(rename = "type")]
    pub package_type: Option<String>,
    /// Replaces the feature list when non-empty
    #[serde(default)]
    pub features: Vec<String>,
    /// Highlights joined with ` • `
    pub highlights: Option<String>,
    pub category: Option<String>,
}

/// Fields for appending a day to an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayInput {
    pub title: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub meals: Vec<String>,
    #[serde(default)]
    pub accommodation: Option<String>,
}

/// Parameters for removing a day from an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveDay {
    /// Itinerary ID
    pub id: String,
    /// Day number as shown to the user (1-based)
    pub day: u32,
}

/// Parameters for destination creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DestinationFields {
    pub name: String,
    pub slug: Option<String>,
    pub tagline: Option<String>,
    pub image: Option<String>,
}

/// Parameters for featuring or un-featuring a package on the home page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeature {
    pub destination: String,
    pub package_id: String,
}

/// Parameters for a "top destination" tile on the home page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeTile {
    pub destination: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
