//! Package form draft.

use log::warn;
use serde::{Deserialize, Serialize};

use super::ListEdit;
use crate::{
    destinations::destination_config,
    models::{Package, PackageType},
    params::PackageFields,
    parse::{join_highlights, normalize_price, parse_duration, split_highlights},
    validate::{clean_list, ValidationErrors, MIN_HOTEL_RATING},
};

/// Unsaved package as typed into the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageDraft {
    /// Set when editing a stored package
    pub id: Option<String>,
    pub title: String,
    pub destination: String,
    pub location: String,
    /// Price as typed, e.g. `₹42,999/-`
    pub price: String,
    /// Duration as typed, e.g. `5 Days 7 Nights`
    pub days: String,
    pub image: String,
    pub hotel_rating: u8,
    #[serde(rename = "type")]
    pub package_type: PackageType,
    pub features: Vec<String>,
    /// Highlights joined with ` • `
    pub highlights: String,
    pub category: String,
}

impl Default for PackageDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            destination: String::new(),
            location: String::new(),
            price: String::new(),
            days: String::new(),
            image: String::new(),
            hotel_rating: MIN_HOTEL_RATING,
            package_type: PackageType::Standard,
            features: Vec::new(),
            highlights: String::new(),
            category: String::new(),
        }
    }
}

impl PackageDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty draft pre-filled from the destination's configuration.
    pub fn for_destination(destination: &str) -> Self {
        let mut draft = Self {
            destination: destination.trim().to_lowercase(),
            ..Self::default()
        };
        if let Some(config) = destination_config(destination) {
            draft.location = config.default_city().to_string();
            draft.image = config.default_image.to_string();
        }
        draft
    }

    /// Draft pre-populated from a stored package for editing.
    pub fn from_package(package: &Package) -> Self {
        Self {
            id: package.id.clone(),
            title: package.title.clone(),
            destination: package.destination.clone(),
            location: package.location.clone(),
            price: package.price.clone(),
            days: package.days.clone(),
            image: package.image.clone(),
            hotel_rating: package.hotel_rating,
            package_type: package.package_type.clone(),
            features: package.features.clone(),
            highlights: join_highlights(&package.highlights),
            category: package.category.clone(),
        }
    }

    /// Overwrites every field present in `fields`.
    pub fn apply(mut self, fields: PackageFields) -> Self {
        let PackageFields {
            title,
            destination,
            location,
            price,
            days,
            image,
            hotel_rating,
            package_type,
            features,
            highlights,
            category,
        } = fields;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(destination) = destination {
            self.destination = destination;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(days) = days {
            self.days = days;
        }
        if let Some(image) = image {
            self.image = image;
        }
        if let Some(rating) = hotel_rating {
            self.hotel_rating = rating;
        }
        if let Some(package_type) = package_type {
            self.package_type = PackageType::from(package_type);
        }
        if !features.is_empty() {
            self.features = features;
        }
        if let Some(highlights) = highlights {
            self.highlights = highlights;
        }
        if let Some(category) = category {
            self.category = category;
        }
        self
    }

    pub fn add_feature(mut self) -> Self {
        self.features = self.features.add_item();
        self
    }

    pub fn remove_feature(mut self, index: usize) -> Self {
        self.features = self.features.remove_item(index);
        self
    }

    pub fn update_feature(mut self, index: usize, value: impl Into<String>) -> Self {
        let value = value.into();
        self.features = self.features.update_item(index, |feature| *feature = value);
        self
    }

    /// Validates the draft as a regular package.
    pub fn build(&self) -> Result<Package, ValidationErrors> {
        self.build_with(&PackageType::STANDARD)
    }

    /// Validates the draft against the given type vocabulary and derives
    /// the numeric price and day count.
    pub(crate) fn build_with(&self, allowed: &[PackageType]) -> Result<Package, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("title", "Title", &self.title);
        errors.require("destination", "Destination", &self.destination);

        let numeric_price = match normalize_price(&self.price) {
            Ok(value) => value,
            Err(reason) => {
                errors.push("price", reason);
                0.0
            }
        };

        errors.require("days", "Duration", &self.days);
        let duration = parse_duration(self.days.trim());
        if duration.is_unparsed() && !self.days.trim().is_empty() {
            warn!(
                "Duration '{}' has no day count, storing the text as-is",
                self.days.trim()
            );
        }

        errors.check_image("image", &self.image);
        errors.check_rating("hotelRating", self.hotel_rating);

        if !allowed.contains(&self.package_type) {
            let names: Vec<&str> = allowed.iter().map(PackageType::as_str).collect();
            errors.push(
                "type",
                format!(
                    "'{}' is not a valid type, expected one of: {}",
                    self.package_type,
                    names.join(", ")
                ),
            );
        }

        let highlights = clean_list(&split_highlights(&self.highlights));

        errors.into_result(Package {
            id: self.id.clone(),
            title: self.title.trim().to_string(),
            destination: self.destination.trim().to_string(),
            location: self.location.trim().to_string(),
            price: self.price.trim().to_string(),
            numeric_price,
            days: self.days.trim().to_string(),
            numeric_days: duration.day_count(),
            image: self.image.trim().to_string(),
            hotel_rating: self.hotel_rating,
            package_type: self.package_type.clone(),
            features: clean_list(&self.features),
            highlights,
            category: self.category.trim().to_string(),
            created_at: None,
            updated_at: None,
        })
    }
}
