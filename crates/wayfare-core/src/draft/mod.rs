//! Form State Manager: in-memory drafts of the documents being edited.
//!
//! Drafts hold raw form text (the price as typed, highlights as one bullet
//! string) and are only turned into documents by their `build` methods,
//! which run the batch validation and derive the numeric fields.
//!
//! Every editing operation consumes the draft and returns the updated one,
//! so a caller always holds a complete, consistent value:
//!
//! ```rust
//! use wayfare_core::draft::{DayField, ItineraryDraft};
//!
//! let draft = ItineraryDraft::new()
//!     .add_day()
//!     .add_day()
//!     .update_day(2, DayField::Title("Departure".into()))
//!     .remove_day(1);
//!
//! let numbers: Vec<u32> = draft.days.iter().map(|d| d.day).collect();
//! assert_eq!(numbers, vec![1, 2]);
//! assert_eq!(draft.days[1].title, "Departure");
//! ```
//!
//! Nothing here touches the network; navigating away simply drops the draft.

pub mod destination;
pub mod home;
pub mod itinerary;
pub mod list;
pub mod package;
pub mod romantic;

pub use destination::{slugify, DestinationDraft};
pub use home::HomeContentDraft;
pub use itinerary::{DayField, HotelImageField, ItineraryDraft, StringList};
pub use list::ListEdit;
pub use package::PackageDraft;
pub use romantic::RomanticPackageDraft;
