//! Home page content: a singleton document loaded and saved wholesale.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Document, ResourceKind, HOME_CONTENT_ID};

/// Tile in the "top destinations" strip of a destination section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DestinationTile {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
}

/// Curated content for one destination on the home page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationHome {
    /// Package ids in display order
    #[serde(default)]
    pub featured_package_ids: Vec<String>,

    #[serde(default)]
    pub top_destinations: Vec<DestinationTile>,
}

impl DestinationHome {
    pub fn is_empty(&self) -> bool {
        self.featured_package_ids.is_empty() && self.top_destinations.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Sections keyed by destination slug
    #[serde(default)]
    pub destinations: BTreeMap<String, DestinationHome>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Document for HomeContent {
    const KIND: ResourceKind = ResourceKind::HomeContent;

    fn id(&self) -> Option<&str> {
        Some(self.id.as_deref().unwrap_or(HOME_CONTENT_ID))
    }
}
