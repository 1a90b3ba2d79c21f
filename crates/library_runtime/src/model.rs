use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WebsiteId(pub u64);

/// A saved link inside one category. Immutable after creation; removal is the
/// only lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    pub id: WebsiteId,
    pub title: String,
    pub url: String,
    /// Optional in the product sense; an empty string means "no description".
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryState {
    pub next_website_id: u64,
    /// Category name -> ordered website list. Key set must stay a permutation
    /// of `categories`.
    pub library: BTreeMap<String, Vec<Website>>,
    /// Display/drag order for the cards, independent of the map.
    pub categories: Vec<String>,
    pub search_query: String,
    /// Target category while the add-website dialog is open.
    pub add_website_dialog: Option<String>,
    pub add_category_dialog_open: bool,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self {
            next_website_id: 1,
            library: BTreeMap::new(),
            categories: Vec::new(),
            search_query: String::new(),
            add_website_dialog: None,
            add_category_dialog_open: false,
        }
    }
}

impl LibraryState {
    pub fn contains_category(&self, name: &str) -> bool {
        self.library.contains_key(name)
    }

    /// Allocates a fresh website id and advances the counter.
    pub fn allocate_website_id(&mut self) -> WebsiteId {
        let id = WebsiteId(self.next_website_id);
        self.next_website_id = self.next_website_id.saturating_add(1);
        id
    }

    /// Position of a category in display order, if present.
    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|cat| cat == name)
    }

    pub fn websites_in(&self, category: &str) -> &[Website] {
        self.library
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Checks the permutation invariant between the map's key set and the
    /// ordered category list.
    pub fn categories_consistent(&self) -> bool {
        if self.categories.len() != self.library.len() {
            return false;
        }
        self.categories
            .iter()
            .all(|name| self.library.contains_key(name))
    }
}

/// The single active-drag slot. At most one drag is in flight at any time;
/// the payload carries everything a drop target needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Website {
        id: WebsiteId,
        /// Category the row was picked up from. Trash drops delete from here
        /// regardless of which card's target accepted the drop.
        source_category: String,
    },
    Category {
        name: String,
        /// Tracked display index, retagged on every hover crossing.
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub drag: DragState,
}

impl InteractionState {
    pub fn is_website_dragging(&self) -> bool {
        matches!(self.drag, DragState::Website { .. })
    }

    pub fn is_category_dragging(&self) -> bool {
        matches!(self.drag, DragState::Category { .. })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn website_id_allocation_is_monotonic() {
        let mut state = LibraryState::default();

        let first = state.allocate_website_id();
        let second = state.allocate_website_id();

        assert_eq!(first, WebsiteId(1));
        assert_eq!(second, WebsiteId(2));
        assert_eq!(state.next_website_id, 3);
    }
}
