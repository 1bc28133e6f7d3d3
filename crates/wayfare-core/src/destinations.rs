//! Per-destination configuration.
//!
//! One table drives every destination-specific form and page: the label shown
//! to administrators, the cities offered as package locations and the image
//! used until a package gets its own.

/// Static configuration for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationConfig {
    /// Slug stored on documents
    pub id: &'static str,
    pub label: &'static str,
    /// Locations offered on forms; the first is the default
    pub cities: &'static [&'static str],
    pub default_image: &'static str,
}

impl DestinationConfig {
    /// Location pre-filled on new drafts.
    pub fn default_city(&self) -> &'static str {
        self.cities.first().copied().unwrap_or(self.label)
    }
}

pub const DESTINATIONS: &[DestinationConfig] = &[
    DestinationConfig {
        id: "bali",
        label: "Bali",
        cities: &["Ubud", "Seminyak", "Kuta", "Nusa Dua", "Uluwatu"],
        default_image: "/images/destinations/bali.jpg",
    },
    DestinationConfig {
        id: "dubai",
        label: "Dubai",
        cities: &["Dubai", "Abu Dhabi"],
        default_image: "/images/destinations/dubai.jpg",
    },
    DestinationConfig {
        id: "vietnam",
        label: "Vietnam",
        cities: &["Hanoi", "Ha Long Bay", "Da Nang", "Hoi An", "Ho Chi Minh City"],
        default_image: "/images/destinations/vietnam.jpg",
    },
    DestinationConfig {
        id: "thailand",
        label: "Thailand",
        cities: &["Bangkok", "Phuket", "Krabi", "Pattaya", "Chiang Mai"],
        default_image: "/images/destinations/thailand.jpg",
    },
    DestinationConfig {
        id: "maldives",
        label: "Maldives",
        cities: &["Male", "Maafushi", "Baa Atoll"],
        default_image: "/images/destinations/maldives.jpg",
    },
    DestinationConfig {
        id: "singapore",
        label: "Singapore",
        cities: &["Singapore", "Sentosa"],
        default_image: "/images/destinations/singapore.jpg",
    },
    DestinationConfig {
        id: "malaysia",
        label: "Malaysia",
        cities: &["Kuala Lumpur", "Langkawi", "Penang"],
        default_image: "/images/destinations/malaysia.jpg",
    },
];

/// Looks up a destination by slug, ignoring case.
pub fn destination_config(id: &str) -> Option<&'static DestinationConfig> {
    let id = id.trim();
    DESTINATIONS
        .iter()
        .find(|config| config.id.eq_ignore_ascii_case(id))
}

/// Display label for a destination slug; unknown slugs show as-is.
pub fn destination_label(id: &str) -> &str {
    match destination_config(id) {
        Some(config) => config.label,
        None => id,
    }
}
