//! Destination documents listed on the marketing site.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Document, ResourceKind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    /// Lowercase key used by packages and itineraries, e.g. `bali`
    pub slug: String,

    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Document for Destination {
    const KIND: ResourceKind = ResourceKind::Destinations;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn destination(&self) -> Option<&str> {
        Some(&self.slug)
    }
}
