//! Home page content draft, loaded and saved as a whole.

use crate::{
    models::{DestinationHome, DestinationTile, HomeContent},
    validate::ValidationErrors,
};

use super::ListEdit;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeContentDraft {
    pub content: HomeContent,
}

impl HomeContentDraft {
    pub fn from_content(content: HomeContent) -> Self {
        Self { content }
    }

    fn section(&mut self, destination: &str) -> &mut DestinationHome {
        self.content
            .destinations
            .entry(destination.trim().to_lowercase())
            .or_default()
    }

    /// Adds a package to a destination's featured list; repeats are ignored.
    pub fn feature(mut self, destination: &str, package_id: &str) -> Self {
        let section = self.section(destination);
        if !section.featured_package_ids.iter().any(|id| id == package_id) {
            section.featured_package_ids.push(package_id.to_string());
        }
        self
    }

    pub fn unfeature(mut self, destination: &str, package_id: &str) -> Self {
        self.section(destination)
            .featured_package_ids
            .retain(|id| id != package_id);
        self
    }

    pub fn add_tile(mut self, destination: &str, tile: DestinationTile) -> Self {
        let section = self.section(destination);
        section.top_destinations = std::mem::take(&mut section.top_destinations).push_item(tile);
        self
    }

    pub fn remove_tile(mut self, destination: &str, index: usize) -> Self {
        let section = self.section(destination);
        section.top_destinations = std::mem::take(&mut section.top_destinations).remove_item(index);
        self
    }

    pub fn update_tile(
        mut self,
        destination: &str,
        index: usize,
        update: impl FnOnce(&mut DestinationTile),
    ) -> Self {
        let section = self.section(destination);
        section.top_destinations =
            std::mem::take(&mut section.top_destinations).update_item(index, update);
        self
    }

    /// Validates the tiles and drops empty destination sections.
    pub fn build(&self) -> Result<HomeContent, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut content = self.content.clone();

        content.destinations.retain(|_, section| !section.is_empty());
        for (destination, section) in &mut content.destinations {
            section.featured_package_ids.retain(|id| !id.trim().is_empty());
            for (position, tile) in section.top_destinations.iter_mut().enumerate() {
                let field = format!("{destination}.topDestinations[{}]", position + 1);
                tile.name = tile.name.trim().to_string();
                tile.image = tile.image.trim().to_string();
                tile.link = tile.link.trim().to_string();
                errors.require(&format!("{field}.name"), "Tile name", &tile.name);
                errors.check_image(&format!("{field}.image"), &tile.image);
            }
        }

        errors.into_result(content)
    }
}
