//! Destination form draft.

use crate::{
    models::Destination,
    params::DestinationFields,
    validate::ValidationErrors,
};

/// Lowercase, hyphen-separated key for a destination name.
///
/// ```rust
/// use wayfare_core::draft::slugify;
///
/// assert_eq!(slugify("  Sri Lanka "), "sri-lanka");
/// assert_eq!(slugify("Côte d'Azur"), "côte-d-azur");
/// ```
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationDraft {
    pub id: Option<String>,
    pub name: String,
    /// Derived from the name when left blank
    pub slug: String,
    pub tagline: String,
    pub image: String,
}

impl DestinationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_destination(destination: &Destination) -> Self {
        Self {
            id: destination.id.clone(),
            name: destination.name.clone(),
            slug: destination.slug.clone(),
            tagline: destination.tagline.clone(),
            image: destination.image.clone(),
        }
    }

    pub fn apply(mut self, fields: DestinationFields) -> Self {
        self.name = fields.name;
        if let Some(slug) = fields.slug {
            self.slug = slug;
        }
        if let Some(tagline) = fields.tagline {
            self.tagline = tagline;
        }
        if let Some(image) = fields.image {
            self.image = image;
        }
        self
    }

    pub fn build(&self) -> Result<Destination, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", "Name", &self.name);

        let slug = if self.slug.trim().is_empty() {
            slugify(&self.name)
        } else {
            self.slug.trim().to_string()
        };
        if !self.name.trim().is_empty() && slugify(&slug) != slug {
            errors.push(
                "slug",
                "Slug may only contain lowercase letters, digits and hyphens",
            );
        }

        errors.check_image("image", &self.image);

        errors.into_result(Destination {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            slug,
            tagline: self.tagline.trim().to_string(),
            image: self.image.trim().to_string(),
            created_at: None,
            updated_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_defaults_to_the_name() {
        let destination = DestinationDraft::new()
            .apply(DestinationFields {
                name: "Sri Lanka".into(),
                ..Default::default()
            })
            .build()
            .expect("valid destination");
        assert_eq!(destination.slug, "sri-lanka");
    }

    #[test]
    fn bad_slug_and_image_are_reported() {
        let errors = DestinationDraft::new()
            .apply(DestinationFields {
                name: "Bali".into(),
                slug: Some("Bali Island".into()),
                image: Some("bali.bmp".into()),
                ..Default::default()
            })
            .build()
            .expect_err("invalid fields");
        assert_eq!(errors.fields(), vec!["slug", "image"]);
    }
}
