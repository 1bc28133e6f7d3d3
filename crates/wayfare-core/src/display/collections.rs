//! Collection wrapper for displaying a page of documents.

use std::{fmt, ops::Index};

use super::models::Card;
use crate::models::Document;

/// Newtype wrapper for displaying a list of documents of one kind.
///
/// Each entry uses its [`Card::fmt_entry`] form. An empty list renders as a
/// single "No ... found." line named after the collection.
///
/// # Examples
///
/// ```rust
/// use wayfare_core::{display::Documents, models::Destination};
///
/// let empty: Documents<Destination> = Documents(vec![]);
/// assert_eq!(empty.to_string(), "No destinations found.\n");
/// ```
pub struct Documents<T>(pub Vec<T>);

impl<T> Documents<T> {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of documents in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> Index<usize> for Documents<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IntoIterator for Documents<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Documents<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Card + Document> fmt::Display for Documents<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No {} found.", T::KIND.as_str().replace('-', " "));
        }

        for document in &self.0 {
            document.fmt_entry(f)?;
        }
        Ok(())
    }
}
