//! Parsers for the free-text fields of the admin forms.
//!
//! Each parser returns a plain `String` reason on failure; validation turns
//! those into field errors.

pub mod duration;
pub mod highlights;
pub mod image;
pub mod price;

pub use duration::{parse_duration, DurationParse};
pub use highlights::{join_highlights, split_highlights, HIGHLIGHT_DELIMITER};
pub use image::{classify_image, ImageSource};
pub use price::{format_price, normalize_price};
