//! Filter types for list views.

use super::{Destination, Itinerary, Package, PackageType, RomanticItinerary, RomanticPackage};

/// Fields list filters look at.
pub trait Filterable {
    fn destination_key(&self) -> &str;

    /// Package type, for documents that carry one.
    fn package_type(&self) -> Option<&PackageType>;

    fn hotel_rating(&self) -> u8;
}

impl Filterable for Package {
    fn destination_key(&self) -> &str {
        &self.destination
    }

    fn package_type(&self) -> Option<&PackageType> {
        Some(&self.package_type)
    }

    fn hotel_rating(&self) -> u8 {
        self.hotel_rating
    }
}

impl Filterable for RomanticPackage {
    fn destination_key(&self) -> &str {
        self.0.destination_key()
    }

    fn package_type(&self) -> Option<&PackageType> {
        Filterable::package_type(&self.0)
    }

    fn hotel_rating(&self) -> u8 {
        self.0.hotel_rating
    }
}

impl Filterable for Itinerary {
    fn destination_key(&self) -> &str {
        &self.destination
    }

    fn package_type(&self) -> Option<&PackageType> {
        None
    }

    fn hotel_rating(&self) -> u8 {
        self.hotel_rating
    }
}

impl Filterable for RomanticItinerary {
    fn destination_key(&self) -> &str {
        &self.0.destination
    }

    fn package_type(&self) -> Option<&PackageType> {
        None
    }

    fn hotel_rating(&self) -> u8 {
        self.0.hotel_rating
    }
}

/// Destinations are keyed by their slug and carry no type or rating.
impl Filterable for Destination {
    fn destination_key(&self) -> &str {
        &self.slug
    }

    fn package_type(&self) -> Option<&PackageType> {
        None
    }

    fn hotel_rating(&self) -> u8 {
        0
    }
}

/// Filter options for list views.
///
/// All set criteria must hold (AND). Rating is an exact match, not a
/// threshold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    /// Filter by destination slug (exact match)
    pub destination: Option<String>,

    /// Filter by package type (exact match)
    pub package_type: Option<PackageType>,

    /// Filter by hotel rating (exact match)
    pub hotel_rating: Option<u8>,

    /// Keep only romance-typed documents before the other criteria apply
    pub romantic_only: bool,
}

impl ListFilter {
    /// Create a filter for a single destination.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wayfare_core::models::ListFilter;
    ///
    /// let filter = ListFilter::for_destination("bali");
    /// assert_eq!(filter.destination.as_deref(), Some("bali"));
    /// assert!(!filter.romantic_only);
    /// ```
    pub fn for_destination(destination: impl Into<String>) -> Self {
        Self {
            destination: Some(destination.into()),
            ..Default::default()
        }
    }

    /// Restrict the filter to the romance allow-list.
    pub fn romantic(mut self) -> Self {
        self.romantic_only = true;
        self
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        if self.romantic_only && !item.package_type().is_some_and(PackageType::is_romantic) {
            return false;
        }

        if let Some(destination) = &self.destination {
            if !item.destination_key().trim().eq_ignore_ascii_case(destination.trim()) {
                return false;
            }
        }

        if let Some(wanted) = &self.package_type {
            if item.package_type() != Some(wanted) {
                return false;
            }
        }

        if let Some(rating) = self.hotel_rating {
            if item.hotel_rating() != rating {
                return false;
            }
        }

        true
    }

    /// Items matching the filter, in their original order.
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

impl From<&crate::params::ListResources> for ListFilter {
    /// Convert list parameters into a filter.
    ///
    /// An unparseable rating is treated as no rating filter.
    fn from(params: &crate::params::ListResources) -> Self {
        Self {
            destination: params
                .destination
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_lowercase),
            package_type: params
                .package_type
                .as_deref()
                .filter(|t| !t.is_empty())
                .map(|t| PackageType::from(t.to_string())),
            hotel_rating: params.hotel_rating,
            romantic_only: false,
        }
    }
}
