//! Browser-only E2E scene configuration shared by the site entrypoint and the
//! provider boot flow. Scenes put the shell into deterministic states for the
//! UI validation workflow.

use serde::{Deserialize, Serialize};

use crate::model::{DragState, InteractionState, LibraryState};
use crate::seed;

/// Canonical browser E2E scenes supported by the deterministic UI validation
/// workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowserE2eScene {
    /// Seeded library with no transient overlays.
    LibraryDefault,
    /// Empty library showing the empty state.
    LibraryEmpty,
    /// Seeded library with an active search filter.
    SearchActive,
    /// Add-website dialog open for the first seeded category.
    DialogAddWebsite,
    /// Add-category dialog open.
    DialogAddCategory,
    /// Category drag in flight so the global trash zone renders.
    DragCategoryActive,
}

impl BrowserE2eScene {
    /// Stable query-string scene id.
    pub const fn id(self) -> &'static str {
        match self {
            Self::LibraryDefault => "library-default",
            Self::LibraryEmpty => "library-empty",
            Self::SearchActive => "search-active",
            Self::DialogAddWebsite => "dialog-add-website",
            Self::DialogAddCategory => "dialog-add-category",
            Self::DragCategoryActive => "drag-category-active",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "library-default" => Some(Self::LibraryDefault),
            "library-empty" => Some(Self::LibraryEmpty),
            "search-active" => Some(Self::SearchActive),
            "dialog-add-website" => Some(Self::DialogAddWebsite),
            "dialog-add-category" => Some(Self::DialogAddCategory),
            "drag-category-active" => Some(Self::DragCategoryActive),
            _ => None,
        }
    }

    /// Builds the deterministic boot state for this scene.
    pub fn boot_state(self) -> (LibraryState, InteractionState) {
        let mut state = seed::seeded();
        let mut interaction = InteractionState::default();
        match self {
            Self::LibraryDefault => {}
            Self::LibraryEmpty => {
                state = LibraryState::default();
            }
            Self::SearchActive => {
                state.search_query = "design".to_string();
            }
            Self::DialogAddWebsite => {
                state.add_website_dialog = state.categories.first().cloned();
            }
            Self::DialogAddCategory => {
                state.add_category_dialog_open = true;
            }
            Self::DragCategoryActive => {
                let name = state.categories[0].clone();
                interaction.drag = DragState::Category { name, index: 0 };
            }
        }
        (state, interaction)
    }
}

/// Extracts the requested scene from a raw query string (with or without the
/// leading `?`).
pub fn scene_from_query(query: &str) -> Option<BrowserE2eScene> {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("e2e-scene="))
        .and_then(BrowserE2eScene::parse)
}

/// Reads the scene requested by the current browser location, if any.
#[cfg(target_arch = "wasm32")]
pub fn boot_scene() -> Option<BrowserE2eScene> {
    let search = web_sys::window()?.location().search().ok()?;
    scene_from_query(&search)
}

#[cfg(not(target_arch = "wasm32"))]
/// Non-browser targets never request a scene.
pub fn boot_scene() -> Option<BrowserE2eScene> {
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scene_ids_round_trip_through_the_parser() {
        for scene in [
            BrowserE2eScene::LibraryDefault,
            BrowserE2eScene::LibraryEmpty,
            BrowserE2eScene::SearchActive,
            BrowserE2eScene::DialogAddWebsite,
            BrowserE2eScene::DialogAddCategory,
            BrowserE2eScene::DragCategoryActive,
        ] {
            assert_eq!(BrowserE2eScene::parse(scene.id()), Some(scene));
        }
    }

    #[test]
    fn scene_ids_match_their_serde_names() {
        let json = serde_json::to_string(&BrowserE2eScene::DragCategoryActive).expect("serialize");
        assert_eq!(json, "\"drag-category-active\"");
        let parsed: BrowserE2eScene = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, BrowserE2eScene::DragCategoryActive);
    }

    #[test]
    fn query_extraction_handles_other_pairs_and_garbage() {
        assert_eq!(
            scene_from_query("?foo=1&e2e-scene=search-active"),
            Some(BrowserE2eScene::SearchActive)
        );
        assert_eq!(scene_from_query("e2e-scene=library-empty").map(|s| s.id()), Some("library-empty"));
        assert_eq!(scene_from_query("?e2e-scene=bogus"), None);
        assert_eq!(scene_from_query(""), None);
    }

    #[test]
    fn drag_scene_boots_with_an_active_category_drag() {
        let (state, interaction) = BrowserE2eScene::DragCategoryActive.boot_state();
        assert!(interaction.is_category_dragging());
        assert!(state.categories_consistent());
    }

    #[test]
    fn empty_scene_boots_with_no_categories() {
        let (state, interaction) = BrowserE2eScene::LibraryEmpty.boot_state();
        assert!(state.categories.is_empty());
        assert_eq!(interaction, InteractionState::default());
    }
}
