//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper prefixes the document card with a one-line summary naming
//! the collection and the document ID.

use std::fmt;

use super::models::Card;
use crate::models::Document;

fn label<T: Document>() -> String {
    T::KIND.label().to_lowercase()
}

fn id_of<T: Document>(document: &T) -> &str {
    document.id().unwrap_or("?")
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use wayfare_core::{display::CreateResult, models::Destination};
///
/// let destination = Destination {
///     id: Some("4".to_string()),
///     name: "Bali".to_string(),
///     slug: "bali".to_string(),
///     tagline: String::new(),
///     image: String::new(),
///     created_at: None,
///     updated_at: None,
/// };
/// let output = CreateResult::new(destination).to_string();
/// assert!(output.starts_with("Created destination with ID: 4"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Document + fmt::Display> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", label::<T>(), id_of(&self.resource))?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can list the edits that were applied, e.g. "Added day 3".
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Document + fmt::Display> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", label::<T>(), id_of(&self.resource))?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Document + Card> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            label::<T>(),
            self.resource.heading(),
            id_of(&self.resource)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Destination;

    fn bali() -> Destination {
        Destination {
            id: Some("9".into()),
            name: "Bali".into(),
            slug: "bali".into(),
            tagline: "Island of the Gods".into(),
            image: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn update_lists_changes() {
        let output =
            UpdateResult::with_changes(bali(), vec!["Changed tagline".to_string()]).to_string();
        assert!(output.starts_with("Updated destination with ID: 9"));
        assert!(output.contains("Changes made:\n- Changed tagline"));
        assert!(output.contains("# Bali (ID: 9)"));
    }

    #[test]
    fn delete_names_the_document() {
        let output = DeleteResult::new(bali()).to_string();
        assert_eq!(output, "Deleted destination 'Bali' (ID: 9)\n");
    }
}
