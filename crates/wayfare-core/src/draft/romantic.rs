//! Romantic package draft with its optional linked itinerary.

use crate::{
    models::{PackageType, RomanticItinerary, RomanticPackage},
    params::PackageFields,
    validate::ValidationErrors,
};

use super::{ItineraryDraft, PackageDraft};

/// Unsaved romantic package.
///
/// When `create_itinerary` is set, a successful create is followed by a
/// separate write of the linked itinerary built from `itinerary`.
#[derive(Debug, Clone, PartialEq)]
pub struct RomanticPackageDraft {
    pub package: PackageDraft,
    pub create_itinerary: bool,
    pub itinerary: ItineraryDraft,
}

impl Default for RomanticPackageDraft {
    fn default() -> Self {
        Self {
            package: PackageDraft {
                package_type: PackageType::Honeymoon,
                ..PackageDraft::default()
            },
            create_itinerary: false,
            itinerary: ItineraryDraft::default(),
        }
    }
}

impl RomanticPackageDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_destination(destination: &str) -> Self {
        Self {
            package: PackageDraft {
                package_type: PackageType::Honeymoon,
                ..PackageDraft::for_destination(destination)
            },
            create_itinerary: false,
            itinerary: ItineraryDraft::for_destination(destination),
        }
    }

    pub fn from_package(package: &RomanticPackage) -> Self {
        Self {
            package: PackageDraft::from_package(package),
            create_itinerary: false,
            itinerary: ItineraryDraft::for_destination(&package.destination),
        }
    }

    pub fn apply(mut self, fields: PackageFields) -> Self {
        self.package = self.package.apply(fields);
        self
    }

    pub fn with_itinerary(mut self, create: bool) -> Self {
        self.create_itinerary = create;
        self
    }

    /// Edits the linked itinerary draft.
    pub fn edit_itinerary(mut self, edit: impl FnOnce(ItineraryDraft) -> ItineraryDraft) -> Self {
        self.itinerary = edit(self.itinerary);
        self
    }

    /// Validates the package against the romance type set.
    pub fn build(&self) -> Result<RomanticPackage, ValidationErrors> {
        self.package
            .build_with(&PackageType::ROMANTIC)
            .map(RomanticPackage)
    }

    /// Itinerary written after the package was created as `package_id`.
    ///
    /// Blank itinerary fields fall back to the package's own values.
    pub fn linked_itinerary(&self, package: &RomanticPackage, package_id: &str) -> RomanticItinerary {
        let mut itinerary = self.itinerary.assemble_lenient();

        itinerary.id = None;
        itinerary.package_id = Some(package_id.to_string());
        if itinerary.title.is_empty() {
            itinerary.title = format!("{} Itinerary", package.title);
        }
        itinerary.destination = package.destination.clone();
        if itinerary.duration.is_empty() {
            itinerary.duration = package.days.clone();
        }
        if self.itinerary.hotel_rating == ItineraryDraft::default().hotel_rating {
            itinerary.hotel_rating = package.hotel_rating;
        }
        itinerary.days.retain(|day| !day.title.is_empty() || !day.activities.is_empty());
        for (position, day) in itinerary.days.iter_mut().enumerate() {
            day.day = position as u32 + 1;
            if day.activities.is_empty() {
                day.activities.push(String::new());
            }
        }

        RomanticItinerary(itinerary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DayField;

    fn maldives() -> RomanticPackageDraft {
        RomanticPackageDraft::for_destination("maldives").apply(PackageFields {
            title: Some("Overwater Honeymoon".into()),
            price: Some("₹1,89,999/-".into()),
            days: Some("4 Nights".into()),
            hotel_rating: Some(5),
            ..Default::default()
        })
    }

    #[test]
    fn only_romance_types_are_accepted() {
        assert!(maldives().build().is_ok());

        let mut draft = maldives();
        draft.package.package_type = PackageType::Family;
        let errors = draft.build().expect_err("family is not romantic");
        assert_eq!(errors.fields(), vec!["type"]);
    }

    #[test]
    fn linked_itinerary_borrows_package_fields() {
        let draft = maldives()
            .with_itinerary(true)
            .edit_itinerary(|it| {
                it.update_day(0, DayField::Title("Arrival by seaplane".into()))
                    .add_day()
            });
        let package = draft.build().expect("valid package");
        let itinerary = draft.linked_itinerary(&package, "42");

        assert_eq!(itinerary.package_id.as_deref(), Some("42"));
        assert_eq!(itinerary.title, "Overwater Honeymoon Itinerary");
        assert_eq!(itinerary.destination, "maldives");
        assert_eq!(itinerary.duration, "4 Nights");
        assert_eq!(itinerary.hotel_rating, 5);
        assert_eq!(itinerary.days.len(), 1);
        assert_eq!(itinerary.days[0].day, 1);
        assert_eq!(itinerary.days[0].title, "Arrival by seaplane");
    }
}
