//! Itinerary form draft: days, hotel gallery and the inclusion lists.

use serde::{Deserialize, Serialize};

use super::ListEdit;
use crate::{
    models::{Day, HotelImage, Itinerary, Meal},
    validate::{clean_list, ValidationErrors, MIN_HOTEL_RATING},
};

/// One field of a day, with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayField {
    Title(String),
    Accommodation(String),
    /// Replaces the activity at the given position
    Activity(usize, String),
    /// Replaces the meal at the given position
    Meal(usize, String),
}

/// One field of a hotel image, with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelImageField {
    Src(String),
    Alt(String),
    Name(String),
    Description(String),
}

/// Plain string lists of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringList {
    Inclusions,
    Exclusions,
}

/// Unsaved itinerary as typed into the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryDraft {
    pub id: Option<String>,
    pub package_id: Option<String>,
    pub title: String,
    pub destination: String,
    pub duration: String,
    pub overview: String,
    pub hotel_name: String,
    pub hotel_rating: u8,
    pub hotel_description: String,
    pub hotel_images: Vec<HotelImage>,
    pub days: Vec<Day>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
}

impl Default for ItineraryDraft {
    fn default() -> Self {
        Self {
            id: None,
            package_id: None,
            title: String::new(),
            destination: String::new(),
            duration: String::new(),
            overview: String::new(),
            hotel_name: String::new(),
            hotel_rating: MIN_HOTEL_RATING,
            hotel_description: String::new(),
            hotel_images: Vec::new(),
            days: vec![Day::blank(1)],
            inclusions: Vec::new(),
            exclusions: Vec::new(),
        }
    }
}

impl ItineraryDraft {
    /// Empty draft starting with one blank day.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_destination(destination: &str) -> Self {
        Self {
            destination: destination.trim().to_lowercase(),
            ..Self::default()
        }
    }

    /// Draft pre-populated from a stored itinerary for editing.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let mut draft = Self {
            id: itinerary.id.clone(),
            package_id: itinerary.package_id.clone(),
            title: itinerary.title.clone(),
            destination: itinerary.destination.clone(),
            duration: itinerary.duration.clone(),
            overview: itinerary.overview.clone(),
            hotel_name: itinerary.hotel_name.clone(),
            hotel_rating: itinerary.hotel_rating,
            hotel_description: itinerary.hotel_description.clone(),
            hotel_images: itinerary.hotel_images.clone(),
            days: itinerary.days.clone(),
            inclusions: itinerary.inclusions.clone(),
            exclusions: itinerary.exclusions.clone(),
        };
        for day in &mut draft.days {
            if day.activities.is_empty() {
                day.activities.push(String::new());
            }
        }
        draft.renumber();
        draft
    }

    /// Links the draft to a package.
    pub fn with_package(mut self, package_id: impl Into<String>) -> Self {
        self.package_id = Some(package_id.into());
        self
    }

    fn renumber(&mut self) {
        for (position, day) in self.days.iter_mut().enumerate() {
            day.day = position as u32 + 1;
        }
    }

    /// Appends a blank day numbered after the last one.
    pub fn add_day(mut self) -> Self {
        let next = self.days.len() as u32 + 1;
        self.days = self.days.push_item(Day::blank(next));
        self
    }

    /// Removes the day at `index` and renumbers the rest from 1.
    pub fn remove_day(mut self, index: usize) -> Self {
        self.days = self.days.remove_item(index);
        self.renumber();
        self
    }

    pub fn update_day(mut self, index: usize, field: DayField) -> Self {
        self.days = self.days.update_item(index, |day| match field {
            DayField::Title(title) => day.title = title,
            DayField::Accommodation(accommodation) => day.accommodation = accommodation,
            DayField::Activity(at, value) => {
                if let Some(activity) = day.activities.get_mut(at) {
                    *activity = value;
                }
            }
            DayField::Meal(at, value) => {
                if let Some(meal) = day.meals.get_mut(at) {
                    *meal = value;
                }
            }
        });
        self
    }

    pub fn add_activity(mut self, day_index: usize) -> Self {
        self.days = self.days.update_item(day_index, |day| day.activities.push(String::new()));
        self
    }

    /// Removes an activity; a day never ends up without one, the last is
    /// replaced by a blank placeholder.
    pub fn remove_activity(mut self, day_index: usize, activity_index: usize) -> Self {
        self.days = self.days.update_item(day_index, |day| {
            if activity_index >= day.activities.len() {
                return;
            }
            day.activities.remove(activity_index);
            if day.activities.is_empty() {
                day.activities.push(String::new());
            }
        });
        self
    }

    pub fn add_meal(mut self, day_index: usize) -> Self {
        self.days = self.days.update_item(day_index, |day| day.meals.push(String::new()));
        self
    }

    pub fn remove_meal(mut self, day_index: usize, meal_index: usize) -> Self {
        self.days = self.days.update_item(day_index, |day| {
            if meal_index < day.meals.len() {
                day.meals.remove(meal_index);
            }
        });
        self
    }

    pub fn add_hotel_image(mut self) -> Self {
        self.hotel_images = self.hotel_images.add_item();
        self
    }

    pub fn remove_hotel_image(mut self, index: usize) -> Self {
        self.hotel_images = self.hotel_images.remove_item(index);
        self
    }

    pub fn update_hotel_image(mut self, index: usize, field: HotelImageField) -> Self {
        self.hotel_images = self.hotel_images.update_item(index, |image| match field {
            HotelImageField::Src(src) => image.src = src,
            HotelImageField::Alt(alt) => image.alt = alt,
            HotelImageField::Name(name) => image.name = name,
            HotelImageField::Description(description) => image.description = description,
        });
        self
    }

    fn list_mut(&mut self, list: StringList) -> &mut Vec<String> {
        match list {
            StringList::Inclusions => &mut self.inclusions,
            StringList::Exclusions => &mut self.exclusions,
        }
    }

    pub fn add_entry(mut self, list: StringList) -> Self {
        let entries = std::mem::take(self.list_mut(list));
        *self.list_mut(list) = entries.add_item();
        self
    }

    pub fn remove_entry(mut self, list: StringList, index: usize) -> Self {
        let entries = std::mem::take(self.list_mut(list));
        *self.list_mut(list) = entries.remove_item(index);
        self
    }

    pub fn update_entry(mut self, list: StringList, index: usize, value: impl Into<String>) -> Self {
        let value = value.into();
        let entries = std::mem::take(self.list_mut(list));
        *self.list_mut(list) = entries.update_item(index, |entry| *entry = value);
        self
    }

    /// Validates the draft and produces the itinerary to store.
    pub fn build(&self) -> Result<Itinerary, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("title", "Title", &self.title);
        errors.require("destination", "Destination", &self.destination);
        errors.require("duration", "Duration", &self.duration);
        errors.require("hotelName", "Hotel name", &self.hotel_name);
        errors.require("hotelDescription", "Hotel description", &self.hotel_description);
        errors.check_rating("hotelRating", self.hotel_rating);

        if self.days.is_empty() {
            errors.push("days", "At least one day is required");
        }

        let itinerary = self.assemble(&mut errors);
        errors.into_result(itinerary)
    }

    /// Produces an itinerary without the required-field checks, for
    /// itineraries generated alongside another document. Malformed list
    /// entries are dropped.
    pub(crate) fn assemble_lenient(&self) -> Itinerary {
        let mut ignored = ValidationErrors::new();
        let mut itinerary = self.assemble(&mut ignored);
        for day in &mut itinerary.days {
            day.meals.retain(|meal| meal.parse::<Meal>().is_ok());
        }
        itinerary.hotel_images.retain(|image| !image.src.is_empty());
        itinerary
    }

    /// Cleans the nested lists, recording per-entry problems.
    fn assemble(&self, errors: &mut ValidationErrors) -> Itinerary {
        let days = self
            .days
            .iter()
            .enumerate()
            .map(|(position, day)| {
                let number = position as u32 + 1;
                let field = format!("days[{number}]");

                errors.require(&format!("{field}.title"), &format!("Day {number} title"), &day.title);

                let activities = clean_list(&day.activities);
                if activities.is_empty() {
                    errors.push(
                        format!("{field}.activities"),
                        format!("Day {number} needs at least one activity"),
                    );
                }

                let meals = clean_list(&day.meals)
                    .into_iter()
                    .map(|meal| match meal.parse::<Meal>() {
                        Ok(parsed) => parsed.as_str().to_string(),
                        Err(reason) => {
                            errors.push(format!("{field}.meals"), reason);
                            meal
                        }
                    })
                    .collect();

                Day {
                    day: number,
                    title: day.title.trim().to_string(),
                    activities,
                    meals,
                    accommodation: day.accommodation.trim().to_string(),
                }
            })
            .collect();

        let hotel_images = self
            .hotel_images
            .iter()
            .enumerate()
            .filter(|(_, image)| {
                ![&image.src, &image.alt, &image.name, &image.description]
                    .iter()
                    .all(|value| value.trim().is_empty())
            })
            .map(|(position, image)| {
                let field = format!("hotelImages[{}].src", position + 1);
                if image.src.trim().is_empty() {
                    errors.push(field, "Image is required");
                } else {
                    errors.check_image(&field, &image.src);
                }
                HotelImage {
                    src: image.src.trim().to_string(),
                    alt: image.alt.trim().to_string(),
                    name: image.name.trim().to_string(),
                    description: image.description.trim().to_string(),
                }
            })
            .collect();

        Itinerary {
            id: self.id.clone(),
            package_id: self.package_id.clone().filter(|id| !id.trim().is_empty()),
            title: self.title.trim().to_string(),
            destination: self.destination.trim().to_string(),
            duration: self.duration.trim().to_string(),
            overview: self.overview.trim().to_string(),
            hotel_name: self.hotel_name.trim().to_string(),
            hotel_rating: self.hotel_rating,
            hotel_description: self.hotel_description.trim().to_string(),
            hotel_images,
            days,
            inclusions: clean_list(&self.inclusions),
            exclusions: clean_list(&self.exclusions),
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_day_draft() -> ItineraryDraft {
        ItineraryDraft::for_destination("vietnam")
            .add_day()
            .add_day()
            .update_day(0, DayField::Title("Hanoi".into()))
            .update_day(1, DayField::Title("Ha Long Bay".into()))
            .update_day(2, DayField::Title("Hoi An".into()))
            .update_day(0, DayField::Activity(0, "Old Quarter walk".into()))
            .update_day(1, DayField::Activity(0, "Overnight cruise".into()))
            .update_day(2, DayField::Activity(0, "Lantern making".into()))
    }

    fn complete(draft: ItineraryDraft) -> ItineraryDraft {
        ItineraryDraft {
            title: "Vietnam Discovery".into(),
            duration: "3 Days 2 Nights".into(),
            hotel_name: "Sofitel Legend Metropole".into(),
            hotel_description: "Colonial-era landmark".into(),
            hotel_rating: 5,
            ..draft
        }
    }

    #[test]
    fn removing_a_middle_day_renumbers_the_rest() {
        let draft = three_day_draft().remove_day(1);
        let days: Vec<(u32, &str)> = draft.days.iter().map(|d| (d.day, d.title.as_str())).collect();
        assert_eq!(days, vec![(1, "Hanoi"), (2, "Hoi An")]);
    }

    #[test]
    fn removing_any_day_keeps_numbers_contiguous() {
        for n in 1..=6 {
            for i in 0..n {
                let mut draft = ItineraryDraft::new();
                for _ in 1..n {
                    draft = draft.add_day();
                }
                for (position, day) in draft.days.iter_mut().enumerate() {
                    day.title = format!("original {position}");
                }

                let draft = draft.remove_day(i);
                let numbers: Vec<u32> = draft.days.iter().map(|d| d.day).collect();
                let expected: Vec<u32> = (1..n as u32).collect();
                assert_eq!(numbers, expected);

                let titles: Vec<String> = draft.days.iter().map(|d| d.title.clone()).collect();
                let expected_titles: Vec<String> = (0..n)
                    .filter(|position| *position != i)
                    .map(|position| format!("original {position}"))
                    .collect();
                assert_eq!(titles, expected_titles);
            }
        }
    }

    #[test]
    fn last_activity_is_replaced_by_a_blank() {
        let draft = three_day_draft().remove_activity(0, 0);
        assert_eq!(draft.days[0].activities, vec![String::new()]);

        let draft = three_day_draft()
            .add_activity(0)
            .update_day(0, DayField::Activity(1, "Water puppets".into()))
            .remove_activity(0, 0);
        assert_eq!(draft.days[0].activities, vec!["Water puppets".to_string()]);
    }

    #[test]
    fn meals_are_canonicalized_and_checked() {
        let draft = complete(three_day_draft())
            .add_meal(0)
            .add_meal(0)
            .update_day(0, DayField::Meal(0, "breakfast".into()))
            .update_day(0, DayField::Meal(1, "DINNER".into()));
        let itinerary = draft.clone().build().expect("valid itinerary");
        assert_eq!(itinerary.days[0].meals, vec!["Breakfast", "Dinner"]);

        let errors = draft
            .add_meal(1)
            .update_day(1, DayField::Meal(0, "Brunch".into()))
            .build()
            .expect_err("brunch is not a meal");
        assert_eq!(errors.fields(), vec!["days[2].meals"]);
    }

    #[test]
    fn meal_removal() {
        let draft = three_day_draft()
            .add_meal(2)
            .add_meal(2)
            .update_day(2, DayField::Meal(0, "Lunch".into()))
            .remove_meal(2, 1);
        assert_eq!(draft.days[2].meals, vec!["Lunch".to_string()]);
    }

    #[test]
    fn required_fields_are_reported_in_one_pass() {
        let errors = ItineraryDraft::new().build().expect_err("empty draft");
        for field in [
            "title",
            "destination",
            "duration",
            "hotelName",
            "hotelDescription",
            "days[1].title",
            "days[1].activities",
        ] {
            assert!(errors.contains(field), "missing {field}");
        }
    }

    #[test]
    fn an_itinerary_needs_a_day() {
        let errors = complete(three_day_draft())
            .remove_day(0)
            .remove_day(0)
            .remove_day(0)
            .build()
            .expect_err("no days");
        assert_eq!(errors.fields(), vec!["days"]);
    }

    #[test]
    fn hotel_images_and_lists() {
        let draft = complete(three_day_draft())
            .add_hotel_image()
            .add_hotel_image()
            .add_hotel_image()
            .update_hotel_image(0, HotelImageField::Src("/images/hotel/lobby.jpg".into()))
            .update_hotel_image(0, HotelImageField::Name("Lobby".into()))
            .update_hotel_image(2, HotelImageField::Alt("Pool at dusk".into()))
            .remove_hotel_image(1)
            .add_entry(StringList::Inclusions)
            .update_entry(StringList::Inclusions, 0, "Airport transfers")
            .add_entry(StringList::Exclusions)
            .add_entry(StringList::Exclusions)
            .update_entry(StringList::Exclusions, 1, "Visa fees")
            .remove_entry(StringList::Exclusions, 0);

        let errors = draft.clone().build().expect_err("second image lacks a source");
        assert_eq!(errors.fields(), vec!["hotelImages[2].src"]);

        let itinerary = draft
            .update_hotel_image(1, HotelImageField::Src("https://res.cloudinary.com/demo/pool".into()))
            .build()
            .expect("valid itinerary");
        assert_eq!(itinerary.hotel_images.len(), 2);
        assert_eq!(itinerary.hotel_images[0].name, "Lobby");
        assert_eq!(itinerary.inclusions, vec!["Airport transfers"]);
        assert_eq!(itinerary.exclusions, vec!["Visa fees"]);
    }

    #[test]
    fn stored_itinerary_round_trips_through_the_draft() {
        let itinerary = complete(three_day_draft()).build().expect("valid itinerary");
        let again = ItineraryDraft::from_itinerary(&itinerary)
            .build()
            .expect("still valid");
        assert_eq!(again, itinerary);
    }
}
