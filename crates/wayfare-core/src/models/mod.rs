//! Data models for the travel catalog.
//!
//! This module contains the documents stored in each collection. Display
//! implementations live in [`crate::display::models`] so that data structures
//! stay separate from presentation.
//!
//! # Collections
//!
//! | Kind                   | Model                 |
//! |------------------------|-----------------------|
//! | `destinations`         | [`Destination`]       |
//! | `packages`             | [`Package`]           |
//! | `itineraries`          | [`Itinerary`]         |
//! | `romantic-packages`    | [`RomanticPackage`]   |
//! | `romantic-itineraries` | [`RomanticItinerary`] |
//! | `home-content`         | [`HomeContent`]       |
//!
//! Nested lists (days, activities, meals, features, inclusions, exclusions,
//! hotel images) are owned by their parent document. The only cross-document
//! link is [`Itinerary::package_id`], which the store does not enforce.
//!
//! # Examples
//!
//! ```rust
//! use wayfare_core::models::{DayCount, Package, PackageType};
//!
//! let json = r#"{
//!     "id": "3",
//!     "title": "Bali Bliss",
//!     "destination": "bali",
//!     "price": "₹42,999/-",
//!     "numericPrice": 42999.0,
//!     "days": "5 Days 7 Nights",
//!     "numericDays": 5,
//!     "hotelRating": 4,
//!     "type": "Premium"
//! }"#;
//! let package: Package = serde_json::from_str(json).unwrap();
//! assert_eq!(package.numeric_days, DayCount::Count(5));
//! assert_eq!(package.package_type, PackageType::Premium);
//! ```

pub mod destination;
pub mod filters;
pub mod home;
pub mod itinerary;
pub mod package;
pub mod resource;
pub mod romantic;

#[cfg(test)]
mod tests;

pub use destination::Destination;
pub use filters::{Filterable, ListFilter};
pub use home::{DestinationHome, DestinationTile, HomeContent};
pub use itinerary::{Day, HotelImage, Itinerary, Meal};
pub use package::{DayCount, Package, PackageType};
pub use resource::{Document, ResourceKind, HOME_CONTENT_ID};
pub use romantic::{RomanticItinerary, RomanticPackage};
