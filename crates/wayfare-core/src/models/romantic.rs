//! Romantic packages and their linked itineraries.
//!
//! Both share the shape of their regular counterparts and live in their own
//! collections.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::{Document, Itinerary, Package, ResourceKind};

/// A package sold from the romance section of the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RomanticPackage(pub Package);

impl Deref for RomanticPackage {
    type Target = Package;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RomanticPackage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Document for RomanticPackage {
    const KIND: ResourceKind = ResourceKind::RomanticPackages;

    fn id(&self) -> Option<&str> {
        self.0.id.as_deref()
    }

    fn destination(&self) -> Option<&str> {
        Some(&self.0.destination)
    }
}

/// Day-by-day plan linked to a romantic package through `package_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RomanticItinerary(pub Itinerary);

impl Deref for RomanticItinerary {
    type Target = Itinerary;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Document for RomanticItinerary {
    const KIND: ResourceKind = ResourceKind::RomanticItineraries;

    fn id(&self) -> Option<&str> {
        self.0.id.as_deref()
    }

    fn destination(&self) -> Option<&str> {
        Some(&self.0.destination)
    }
}
