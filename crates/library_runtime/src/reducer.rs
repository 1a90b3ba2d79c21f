//! Reducer actions, side-effect intents, and transition logic for the link
//! library runtime.

use thiserror::Error;

use crate::model::{DragState, InteractionState, LibraryState, Website, WebsiteId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_library`] to mutate [`LibraryState`] and
/// [`InteractionState`].
pub enum LibraryAction {
    /// Append a new website to an existing category.
    AddWebsite {
        /// Category to append into. Unknown names are ignored.
        category: String,
        /// Pre-validated non-empty title.
        title: String,
        /// Pre-validated non-empty absolute URL.
        url: String,
        /// Optional description; empty means none.
        description: String,
    },
    /// Remove a website by id from the named category.
    DeleteWebsite {
        /// Id of the website to remove.
        id: WebsiteId,
        /// Category whose list is searched.
        category: String,
    },
    /// Create an empty category at the end of the display order.
    AddCategory {
        /// Category name; trimmed, and ignored when empty or duplicate.
        name: String,
    },
    /// Remove a category and discard everything it held.
    DeleteCategory {
        /// Category to remove.
        name: String,
    },
    /// Splice a category from one display position to another.
    MoveCategory {
        /// Current position in display order.
        from: usize,
        /// Target position in display order.
        to: usize,
    },
    /// Replace the live search filter text.
    SetSearchQuery {
        /// New query; empty clears the filter.
        query: String,
    },
    /// Open the add-website dialog targeting a category.
    OpenAddWebsiteDialog {
        /// Category the dialog will submit into.
        category: String,
    },
    /// Close the add-website dialog without submitting.
    CloseAddWebsiteDialog,
    /// Open the add-category dialog.
    OpenAddCategoryDialog,
    /// Close the add-category dialog without submitting.
    CloseAddCategoryDialog,
    /// Pick up a website row.
    BeginWebsiteDrag {
        /// Id carried in the drag payload.
        id: WebsiteId,
        /// Category the row was picked up from.
        category: String,
    },
    /// Pick up a category card.
    BeginCategoryDrag {
        /// Category being dragged. Unknown names are ignored.
        name: String,
    },
    /// Pointer crossed into another card while a category drag is active.
    /// Reorders immediately — the list is live-updated on every crossing,
    /// not only on drop.
    HoverCategory {
        /// Display index of the hovered card.
        over_index: usize,
    },
    /// The dragged website was dropped on a card's trash target. Deletes from
    /// the payload's source category, whichever card accepted the drop.
    DropWebsiteOnTrash,
    /// The dragged category was dropped on the global trash zone.
    DropCategoryOnTrash,
    /// Drag ended without a matching drop, or a drop finished.
    EndDrag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs the shell focuses after a dialog opens.
pub enum DialogInput {
    /// Title field of the add-website dialog.
    WebsiteTitle,
    /// Name field of the add-category dialog.
    CategoryName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_library`] for the shell to execute.
pub enum RuntimeEffect {
    /// Move focus into the named dialog input once it is mounted.
    FocusDialogInput(DialogInput),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that violate controller invariants. Product-level
/// misses (unknown category, duplicate name, absent website id) are silent
/// no-ops instead.
pub enum ReducerError {
    /// A category move referenced a display index outside the current list.
    #[error("category index out of range")]
    CategoryIndexOutOfRange,
}

/// Applies a [`LibraryAction`] to the library state and collects resulting
/// side effects.
///
/// This function is the authoritative state transition engine for the store,
/// the search filter text, the dialog intents, and the drag state machine.
///
/// # Errors
///
/// Returns [`ReducerError::CategoryIndexOutOfRange`] when a
/// [`LibraryAction::MoveCategory`] index is out of range. The drag controller
/// never produces such an action; the error exists for direct callers.
pub fn reduce_library(
    state: &mut LibraryState,
    interaction: &mut InteractionState,
    action: LibraryAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        LibraryAction::AddWebsite {
            category,
            title,
            url,
            description,
        } => {
            if state.contains_category(&category) {
                let id = state.allocate_website_id();
                let websites = state.library.entry(category).or_default();
                websites.push(Website {
                    id,
                    title,
                    url,
                    description,
                });
            }
        }
        LibraryAction::DeleteWebsite { id, category } => {
            if let Some(websites) = state.library.get_mut(&category) {
                websites.retain(|site| site.id != id);
            }
        }
        LibraryAction::AddCategory { name } => {
            let name = name.trim().to_string();
            if !name.is_empty() && !state.contains_category(&name) {
                state.library.insert(name.clone(), Vec::new());
                state.categories.push(name);
            }
        }
        LibraryAction::DeleteCategory { name } => {
            state.library.remove(&name);
            state.categories.retain(|cat| cat != &name);
        }
        LibraryAction::MoveCategory { from, to } => {
            if from >= state.categories.len() || to >= state.categories.len() {
                return Err(ReducerError::CategoryIndexOutOfRange);
            }
            let moved = state.categories.remove(from);
            state.categories.insert(to, moved);
        }
        LibraryAction::SetSearchQuery { query } => {
            state.search_query = query;
        }
        LibraryAction::OpenAddWebsiteDialog { category } => {
            state.add_website_dialog = Some(category);
            effects.push(RuntimeEffect::FocusDialogInput(DialogInput::WebsiteTitle));
        }
        LibraryAction::CloseAddWebsiteDialog => {
            state.add_website_dialog = None;
        }
        LibraryAction::OpenAddCategoryDialog => {
            state.add_category_dialog_open = true;
            effects.push(RuntimeEffect::FocusDialogInput(DialogInput::CategoryName));
        }
        LibraryAction::CloseAddCategoryDialog => {
            state.add_category_dialog_open = false;
        }
        LibraryAction::BeginWebsiteDrag { id, category } => {
            interaction.drag = DragState::Website {
                id,
                source_category: category,
            };
        }
        LibraryAction::BeginCategoryDrag { name } => {
            if let Some(index) = state.category_index(&name) {
                interaction.drag = DragState::Category { name, index };
            }
        }
        LibraryAction::HoverCategory { over_index } => {
            if let DragState::Category { index, .. } = &mut interaction.drag {
                if *index != over_index
                    && *index < state.categories.len()
                    && over_index < state.categories.len()
                {
                    let moved = state.categories.remove(*index);
                    state.categories.insert(over_index, moved);
                    *index = over_index;
                }
            }
        }
        // Both drop arms check the drag kind by reference before clearing the
        // slot: a wrong-kind drop must leave the active drag in place.
        LibraryAction::DropWebsiteOnTrash => {
            if let DragState::Website {
                id,
                source_category,
            } = &interaction.drag
            {
                let id = *id;
                if let Some(websites) = state.library.get_mut(source_category) {
                    websites.retain(|site| site.id != id);
                }
                interaction.drag = DragState::Idle;
            }
        }
        LibraryAction::DropCategoryOnTrash => {
            if let DragState::Category { name, .. } = &interaction.drag {
                let name = name.clone();
                state.library.remove(&name);
                state.categories.retain(|cat| cat != &name);
                interaction.drag = DragState::Idle;
            }
        }
        LibraryAction::EndDrag => {
            interaction.drag = DragState::Idle;
        }
    }

    debug_assert!(state.categories_consistent());
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::seed;

    fn dispatch(state: &mut LibraryState, interaction: &mut InteractionState, action: LibraryAction) {
        reduce_library(state, interaction, action).expect("reduce");
    }

    fn titles(state: &LibraryState, category: &str) -> Vec<String> {
        state
            .websites_in(category)
            .iter()
            .map(|site| site.title.clone())
            .collect()
    }

    #[test]
    fn add_category_appends_and_duplicate_is_noop() {
        let mut state = LibraryState::default();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::AddCategory {
                name: "Development".into(),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::AddCategory {
                name: "Design".into(),
            },
        );
        let before = state.clone();

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::AddCategory {
                name: "Development".into(),
            },
        );

        assert_eq!(state, before);
        assert_eq!(state.categories, vec!["Development", "Design"]);
        assert!(state.categories_consistent());
    }

    #[test]
    fn add_category_ignores_empty_and_whitespace_names() {
        let mut state = LibraryState::default();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::AddCategory { name: "".into() },
        );
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::AddCategory { name: "   ".into() },
        );

        assert_eq!(state, LibraryState::default());
    }

    #[test]
    fn category_list_stays_a_permutation_of_the_map_keys() {
        let mut state = LibraryState::default();
        let mut interaction = InteractionState::default();

        for name in ["Development", "Design", "Productivity", "Learning"] {
            dispatch(
                &mut state,
                &mut interaction,
                LibraryAction::AddCategory { name: name.into() },
            );
        }
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::DeleteCategory {
                name: "Design".into(),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::AddCategory {
                name: "Reading".into(),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::DeleteCategory {
                name: "Missing".into(),
            },
        );

        assert!(state.categories_consistent());
        assert_eq!(
            state.categories,
            vec!["Development", "Productivity", "Learning", "Reading"]
        );
    }

    #[test]
    fn add_website_appends_with_fresh_id_and_unknown_category_is_noop() {
        let mut state = seed::seeded();
        let mut interaction = InteractionState::default();
        let existing_ids: Vec<WebsiteId> = state
            .library
            .values()
            .flatten()
            .map(|site| site.id)
            .collect();

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::AddWebsite {
                category: "Design".into(),
                title: "Figma2".into(),
                url: "https://figma2.com".into(),
                description: String::new(),
            },
        );

        let design = state.websites_in("Design");
        assert_eq!(design.len(), 3);
        let added = design.last().expect("appended website");
        assert_eq!(added.title, "Figma2");
        assert!(!existing_ids.contains(&added.id));

        let before = state.clone();
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::AddWebsite {
                category: "Nope".into(),
                title: "X".into(),
                url: "https://x.com".into(),
                description: String::new(),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn delete_website_is_idempotent() {
        let mut state = seed::seeded();
        let mut interaction = InteractionState::default();
        let id = state.websites_in("Development")[0].id;

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::DeleteWebsite {
                id,
                category: "Development".into(),
            },
        );
        let after_first = state.clone();
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::DeleteWebsite {
                id,
                category: "Development".into(),
            },
        );

        assert_eq!(state, after_first);
        assert_eq!(state.websites_in("Development").len(), 2);
    }

    #[test]
    fn delete_category_discards_contents_and_leaves_others_untouched() {
        let mut state = seed::seeded();
        let mut interaction = InteractionState::default();
        let development = state.websites_in("Development").to_vec();

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::DeleteCategory {
                name: "Design".into(),
            },
        );

        assert!(!state.contains_category("Design"));
        assert_eq!(state.category_index("Design"), None);
        assert_eq!(state.websites_in("Development"), development.as_slice());
        assert!(state.categories_consistent());
    }

    #[test]
    fn move_category_splices_and_same_index_is_noop() {
        let mut state = LibraryState::default();
        let mut interaction = InteractionState::default();
        for name in ["A", "B", "C", "D"] {
            dispatch(
                &mut state,
                &mut interaction,
                LibraryAction::AddCategory { name: name.into() },
            );
        }

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::MoveCategory { from: 0, to: 2 },
        );
        assert_eq!(state.categories, vec!["B", "C", "A", "D"]);

        let before = state.clone();
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::MoveCategory { from: 2, to: 2 },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn move_category_out_of_range_errors_without_touching_state() {
        let mut state = LibraryState::default();
        let mut interaction = InteractionState::default();
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::AddCategory { name: "A".into() },
        );
        let before = state.clone();

        let result = reduce_library(
            &mut state,
            &mut interaction,
            LibraryAction::MoveCategory { from: 0, to: 4 },
        );

        assert_eq!(result, Err(ReducerError::CategoryIndexOutOfRange));
        assert_eq!(state, before);
    }

    #[test]
    fn hover_crossing_live_reorders_and_retags_the_payload_index() {
        let mut state = LibraryState::default();
        let mut interaction = InteractionState::default();
        for name in ["A", "B", "C", "D"] {
            dispatch(
                &mut state,
                &mut interaction,
                LibraryAction::AddCategory { name: name.into() },
            );
        }

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::BeginCategoryDrag { name: "A".into() },
        );
        assert!(interaction.is_category_dragging());
        assert!(!interaction.is_website_dragging());

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::HoverCategory { over_index: 2 },
        );
        assert_eq!(state.categories, vec!["B", "C", "A", "D"]);
        assert_eq!(
            interaction.drag,
            DragState::Category {
                name: "A".into(),
                index: 2,
            }
        );

        // Crossing back over the same card is a no-op until the index differs.
        let before = state.clone();
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::HoverCategory { over_index: 2 },
        );
        assert_eq!(state, before);

        dispatch(&mut state, &mut interaction, LibraryAction::EndDrag);
        assert_eq!(interaction.drag, DragState::Idle);
    }

    #[test]
    fn hover_without_a_category_drag_is_ignored() {
        let mut state = seed::seeded();
        let mut interaction = InteractionState::default();
        let id = state.websites_in("Development")[0].id;
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::BeginWebsiteDrag {
                id,
                category: "Development".into(),
            },
        );
        let before = state.clone();

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::HoverCategory { over_index: 1 },
        );

        assert_eq!(state, before);
        assert!(interaction.is_website_dragging());
    }

    #[test]
    fn website_trash_drop_deletes_from_the_source_category_only() {
        let mut state = seed::seeded();
        let mut interaction = InteractionState::default();
        // Same title in two categories; only the dragged one may go.
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::AddWebsite {
                category: "Design".into(),
                title: "GitHub".into(),
                url: "https://github.com".into(),
                description: String::new(),
            },
        );
        let dragged = state
            .websites_in("Development")
            .iter()
            .find(|site| site.title == "GitHub")
            .expect("seeded GitHub entry")
            .id;

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::BeginWebsiteDrag {
                id: dragged,
                category: "Development".into(),
            },
        );
        // The drop may land on any card's trash target; the payload decides.
        dispatch(&mut state, &mut interaction, LibraryAction::DropWebsiteOnTrash);

        assert!(!titles(&state, "Development").contains(&"GitHub".to_string()));
        assert!(titles(&state, "Design").contains(&"GitHub".to_string()));
        assert_eq!(interaction.drag, DragState::Idle);
    }

    #[test]
    fn category_trash_drop_deletes_the_dragged_category() {
        let mut state = seed::seeded();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::BeginCategoryDrag {
                name: "Design".into(),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::DropCategoryOnTrash,
        );

        assert!(!state.contains_category("Design"));
        assert_eq!(interaction.drag, DragState::Idle);
        assert!(state.categories_consistent());
    }

    #[test]
    fn trash_drops_without_a_matching_drag_kind_are_noops() {
        let mut state = seed::seeded();
        let mut interaction = InteractionState::default();
        let before = state.clone();

        dispatch(&mut state, &mut interaction, LibraryAction::DropWebsiteOnTrash);
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::DropCategoryOnTrash,
        );

        assert_eq!(state, before);

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::BeginCategoryDrag {
                name: "Design".into(),
            },
        );
        dispatch(&mut state, &mut interaction, LibraryAction::DropWebsiteOnTrash);
        // Wrong-kind drop leaves both the store and the drag slot alone.
        assert_eq!(state, before);
        assert!(interaction.is_category_dragging());

        // Mirror case: a category drop while a website drag is active.
        dispatch(&mut state, &mut interaction, LibraryAction::EndDrag);
        let id = state.websites_in("Development")[0].id;
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::BeginWebsiteDrag {
                id,
                category: "Development".into(),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::DropCategoryOnTrash,
        );
        assert_eq!(state, before);
        assert!(interaction.is_website_dragging());
    }

    #[test]
    fn dialog_intents_track_state_and_emit_focus_effects() {
        let mut state = seed::seeded();
        let mut interaction = InteractionState::default();

        let effects = reduce_library(
            &mut state,
            &mut interaction,
            LibraryAction::OpenAddWebsiteDialog {
                category: "Design".into(),
            },
        )
        .expect("open dialog");
        assert_eq!(state.add_website_dialog.as_deref(), Some("Design"));
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusDialogInput(DialogInput::WebsiteTitle)]
        );

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::CloseAddWebsiteDialog,
        );
        assert_eq!(state.add_website_dialog, None);

        let effects = reduce_library(
            &mut state,
            &mut interaction,
            LibraryAction::OpenAddCategoryDialog,
        )
        .expect("open dialog");
        assert!(state.add_category_dialog_open);
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusDialogInput(DialogInput::CategoryName)]
        );
    }

    #[test]
    fn begin_category_drag_ignores_unknown_names() {
        let mut state = seed::seeded();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            LibraryAction::BeginCategoryDrag {
                name: "Missing".into(),
            },
        );

        assert_eq!(interaction.drag, DragState::Idle);
    }
}
