//! Ordered item store backing the drop-down list.
//!
//! Insertion order is display order; index 0 is the top row. The collection
//! itself allows duplicates; the MRU rules that forbid them live in
//! [`MruPolicy`](crate::policy::MruPolicy) and only apply to
//! [`MruComboBox::add_mru_item`](crate::MruComboBox::add_mru_item).
//!
//! Every mutation bumps a revision counter. Cached layout derived from row
//! indices (the delete-region map) compares revisions to detect that the rows
//! moved underneath it.

use std::fmt::Display;
use std::ops::Index;

use crate::error::{MruError, Result};

/// An ordered, index-addressable list of display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCollection {
    items: Vec<String>,
    revision: u64,
}

impl ItemCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of items (alias of [`len`](Self::len)).
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Iterate over the items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// The items as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Counter bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append an item and return its index. Empty strings are accepted.
    pub fn add(&mut self, item: impl Into<String>) -> usize {
        self.items.push(item.into());
        self.touch();
        self.items.len() - 1
    }

    /// Append an item that may be null.
    ///
    /// Returns [`MruError::NullItem`] for `None`, leaving the collection unchanged.
    pub fn try_add<S: Into<String>>(&mut self, item: Option<S>) -> Result<usize> {
        match item {
            Some(item) => Ok(self.add(item)),
            None => Err(MruError::NullItem),
        }
    }

    /// Append any displayable value, stored as its string form.
    ///
    /// The collection only ever holds text, so rows never need a conversion at
    /// paint time.
    pub fn add_display<T: Display + ?Sized>(&mut self, value: &T) -> usize {
        self.add(value.to_string())
    }

    /// Append every item from an iterator.
    pub fn add_range<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self.touch();
    }

    /// Insert an item at `index`, shifting later items down.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, item: impl Into<String>) -> Result<()> {
        if index > self.items.len() {
            return Err(MruError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, item.into());
        self.touch();
        Ok(())
    }

    /// Remove and return the item at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        if index >= self.items.len() {
            return Err(MruError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Remove the first item exactly equal to `item`.
    ///
    /// Returns `true` if an item was removed.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.items.remove(index);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    /// Whether an item exactly equal to `item` is present.
    pub fn contains(&self, item: &str) -> bool {
        self.index_of(item).is_some()
    }

    /// Index of the first item exactly equal to `item`.
    pub fn index_of(&self, item: &str) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }

    /// Remove the last item, if any.
    pub(crate) fn pop(&mut self) -> Option<String> {
        let removed = self.items.pop();
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Index<usize> for ItemCollection {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.items[index]
    }
}

impl<S: Into<String>> FromIterator<S> for ItemCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut items = Self::new();
        items.add_range(iter);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let mut items = ItemCollection::new();
        assert_eq!(items.add("Alpha"), 0);
        assert_eq!(items.add("Beta"), 1);
        assert_eq!(items.add("Gamma"), 2);

        assert_eq!(&items[0], "Alpha");
        assert_eq!(&items[1], "Beta");
        assert_eq!(&items[2], "Gamma");
        assert_eq!(items.count(), 3);
    }

    #[test]
    fn test_duplicates_allowed_in_raw_collection() {
        let mut items = ItemCollection::new();
        items.add("Duplicate");
        items.add("Duplicate");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_null_rejected_empty_accepted() {
        let mut items = ItemCollection::new();
        assert_eq!(items.try_add(None::<String>), Err(MruError::NullItem));
        assert!(items.is_empty());

        assert_eq!(items.try_add(Some("")), Ok(0));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_add_display_coerces_to_text() {
        let mut items = ItemCollection::new();
        items.add_display(&42);
        assert_eq!(items.get(0), Some("42"));
    }

    #[test]
    fn test_insert() {
        let mut items: ItemCollection = ["First", "Third"].into_iter().collect();
        items.insert(1, "Second").unwrap();
        assert_eq!(items.as_slice(), ["First", "Second", "Third"]);

        items.insert(3, "Fourth").unwrap();
        assert_eq!(items.get(3), Some("Fourth"));

        assert_eq!(
            items.insert(9, "Nope"),
            Err(MruError::IndexOutOfRange { index: 9, len: 4 })
        );
    }

    #[test]
    fn test_remove_at() {
        let mut items: ItemCollection = ["Item1", "Item2", "Item3"].into_iter().collect();
        assert_eq!(items.remove_at(1).unwrap(), "Item2");
        assert_eq!(items.as_slice(), ["Item1", "Item3"]);
        assert!(items.remove_at(2).is_err());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut items: ItemCollection = ["A", "B", "A"].into_iter().collect();
        assert!(items.remove("A"));
        assert_eq!(items.as_slice(), ["B", "A"]);
        assert!(!items.remove("Z"));

        items.clear();
        assert!(items.is_empty());
    }

    #[test]
    fn test_contains_and_index_of() {
        let items: ItemCollection = ["Zero", "One", "Two"].into_iter().collect();
        assert!(items.contains("One"));
        assert!(!items.contains("one"));
        assert_eq!(items.index_of("Two"), Some(2));
        assert_eq!(items.index_of("Missing"), None);
    }

    #[test]
    fn test_revision_bumps_on_mutation() {
        let mut items = ItemCollection::new();
        let r0 = items.revision();
        items.add("A");
        let r1 = items.revision();
        assert_ne!(r0, r1);

        // Failed mutations leave the revision alone.
        let _ = items.remove_at(5);
        assert!(!items.remove("missing"));
        assert_eq!(items.revision(), r1);

        items.clear();
        assert_ne!(items.revision(), r1);
    }
}
