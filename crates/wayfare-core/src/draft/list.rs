//! Generic list editing shared by every nested list of a draft.

/// Consume-and-return editing of an ordered list.
///
/// Indexes past the end are ignored rather than panicking.
pub trait ListEdit<T>: Sized {
    /// Appends a default-initialized item.
    fn add_item(self) -> Self
    where
        T: Default;

    /// Appends the given item.
    fn push_item(self, item: T) -> Self;

    /// Removes the item at `index`.
    fn remove_item(self, index: usize) -> Self;

    /// Changes the item at `index` in place.
    fn update_item(self, index: usize, update: impl FnOnce(&mut T)) -> Self;
}

impl<T> ListEdit<T> for Vec<T> {
    fn add_item(mut self) -> Self
    where
        T: Default,
    {
        self.push(T::default());
        self
    }

    fn push_item(mut self, item: T) -> Self {
        self.push(item);
        self
    }

    fn remove_item(mut self, index: usize) -> Self {
        if index < self.len() {
            self.remove(index);
        }
        self
    }

    fn update_item(mut self, index: usize, update: impl FnOnce(&mut T)) -> Self {
        if let Some(item) = self.get_mut(index) {
            update(item);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_remove_update() {
        let list: Vec<String> = Vec::new()
            .add_item()
            .push_item("Pool".to_string())
            .update_item(0, |s| *s = "Spa".to_string())
            .remove_item(1);
        assert_eq!(list, vec!["Spa".to_string()]);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let list = vec![1, 2, 3].remove_item(9).update_item(5, |n| *n = 0);
        assert_eq!(list, vec![1, 2, 3]);
    }
}
