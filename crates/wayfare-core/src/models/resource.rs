//! Resource kinds and the document contract shared by every collection.

use std::{fmt, str::FromStr};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Identifier of the singleton home content document.
pub const HOME_CONTENT_ID: &str = "home";

/// Type-safe enumeration of the document collections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Destinations,
    Packages,
    Itineraries,
    RomanticPackages,
    RomanticItineraries,
    HomeContent,
}

impl ResourceKind {
    /// Every collection, in the order the admin menu lists them.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Destinations,
        ResourceKind::Packages,
        ResourceKind::Itineraries,
        ResourceKind::RomanticPackages,
        ResourceKind::RomanticItineraries,
        ResourceKind::HomeContent,
    ];

    /// URL path segment and database collection name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Destinations => "destinations",
            ResourceKind::Packages => "packages",
            ResourceKind::Itineraries => "itineraries",
            ResourceKind::RomanticPackages => "romantic-packages",
            ResourceKind::RomanticItineraries => "romantic-itineraries",
            ResourceKind::HomeContent => "home-content",
        }
    }

    /// Human readable singular name.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Destinations => "Destination",
            ResourceKind::Packages => "Package",
            ResourceKind::Itineraries => "Itinerary",
            ResourceKind::RomanticPackages => "Romantic package",
            ResourceKind::RomanticItineraries => "Romantic itinerary",
            ResourceKind::HomeContent => "Home content",
        }
    }

    /// JSON key older endpoints used to wrap a single document.
    pub fn singular_key(&self) -> &'static str {
        match self {
            ResourceKind::Destinations => "destination",
            ResourceKind::Packages => "package",
            ResourceKind::Itineraries => "itinerary",
            ResourceKind::RomanticPackages => "romanticPackage",
            ResourceKind::RomanticItineraries => "romanticItinerary",
            ResourceKind::HomeContent => "homeContent",
        }
    }

    /// JSON key older endpoints used to wrap a list of documents.
    pub fn plural_key(&self) -> &'static str {
        match self {
            ResourceKind::Destinations => "destinations",
            ResourceKind::Packages => "packages",
            ResourceKind::Itineraries => "itineraries",
            ResourceKind::RomanticPackages => "romanticPackages",
            ResourceKind::RomanticItineraries => "romanticItineraries",
            ResourceKind::HomeContent => "homeContent",
        }
    }

    /// Whether the collection holds exactly one document.
    pub fn is_singleton(&self) -> bool {
        matches!(self, ResourceKind::HomeContent)
    }

    /// Admin list page the UI returns to after a save or a failed lookup.
    pub fn list_route(&self, destination: Option<&str>) -> String {
        match destination.filter(|d| !d.is_empty()) {
            Some(dest) => format!("/admin/{}?destination={dest}", self.as_str()),
            None => format!("/admin/{}", self.as_str()),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("Unknown resource: {s}"))
    }
}

/// A stored document belonging to one collection.
///
/// `id` is the app-level alias of the store's native key; it is absent on
/// drafts that have never been saved.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection this document lives in.
    const KIND: ResourceKind;

    /// Identifier, if the document has been stored.
    fn id(&self) -> Option<&str>;

    /// Destination the document is scoped to, if any.
    fn destination(&self) -> Option<&str> {
        None
    }
}
