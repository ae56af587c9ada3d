//! Promotion and eviction rules for the MRU list.

use mru_combo_core::logging::targets;

use crate::config::MruConfig;
use crate::items::ItemCollection;

/// Single-char uppercase mapping; chars whose uppercase form expands to
/// several chars (`ß` to `SS`) map to themselves.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// What [`MruPolicy::insert`] did to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Number of existing entries removed as duplicates.
    pub duplicates_removed: usize,
    /// Items evicted from the tail, in eviction order.
    pub evicted: Vec<String>,
}

/// Duplicate comparison and size cap for an MRU list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MruPolicy {
    /// Cap on the list length; `<= 0` disables eviction.
    pub max_items: i32,
    /// Ordinal comparison when `true`, ordinal ignore-case otherwise.
    pub case_sensitive: bool,
}

impl From<&MruConfig> for MruPolicy {
    fn from(config: &MruConfig) -> Self {
        Self {
            max_items: config.max_items,
            case_sensitive: config.case_sensitive,
        }
    }
}

impl MruPolicy {
    /// Whether two item texts count as the same entry.
    ///
    /// The ignore-case comparison maps each char to its simple uppercase
    /// form, one char to one char, so texts of different char lengths never
    /// match.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a.chars().map(simple_uppercase).eq(b.chars().map(simple_uppercase))
        }
    }

    /// Put `text` at the top of `items`.
    ///
    /// Every entry matching `text` is removed first, then `text` is inserted
    /// at index 0 and the tail is trimmed one item at a time until the cap
    /// holds.
    pub fn insert(&self, items: &mut ItemCollection, text: &str) -> InsertOutcome {
        let mut outcome = InsertOutcome::default();

        // Walk backwards so removals don't shift indices still to be visited.
        for index in (0..items.len()).rev() {
            let is_duplicate = items.get(index).is_some_and(|existing| self.matches(existing, text));
            if is_duplicate && items.remove_at(index).is_ok() {
                outcome.duplicates_removed += 1;
            }
        }

        // Index 0 is always in range.
        let _ = items.insert(0, text);

        outcome.evicted = self.evict(items);
        outcome
    }

    /// Remove least-recently-used items until the cap holds.
    pub fn evict(&self, items: &mut ItemCollection) -> Vec<String> {
        let mut evicted = Vec::new();
        if self.max_items <= 0 {
            return evicted;
        }

        let cap = self.max_items as usize;
        while items.len() > cap {
            match items.pop() {
                Some(item) => {
                    tracing::debug!(target: targets::LIST, item = %item, cap, "evicted item");
                    evicted.push(item);
                }
                None => break,
            }
        }
        evicted
    }

    /// Move the item at `index` to the top.
    ///
    /// Returns the promoted text, or `None` when `index` is 0 or out of range.
    pub fn promote(&self, items: &mut ItemCollection, index: usize) -> Option<String> {
        if index == 0 || index >= items.len() {
            return None;
        }
        let item = items.remove_at(index).ok()?;
        let _ = items.insert(0, item.clone());
        Some(item)
    }
}
