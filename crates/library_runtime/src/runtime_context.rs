//! Runtime provider and context wiring for the library shell.
//!
//! This module owns the long-lived reducer container and the runtime effect
//! queue. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    e2e, effect_executor,
    model::{InteractionState, LibraryState},
    reducer::{reduce_library, LibraryAction, RuntimeEffect},
    seed,
};

#[derive(Clone, Copy)]
/// Leptos context for reading library runtime state and dispatching
/// [`LibraryAction`] values.
pub struct LibraryRuntimeContext {
    /// Reactive library state signal.
    pub state: RwSignal<LibraryState>,
    /// Reactive drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the
    /// shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<LibraryAction>,
}

impl LibraryRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: LibraryAction) {
        self.dispatch.call(action);
    }

    /// True while a website row drag is in flight.
    pub fn is_website_dragging(&self) -> Signal<bool> {
        let interaction = self.interaction;
        Signal::derive(move || interaction.get().is_website_dragging())
    }

    /// True while a category card drag is in flight.
    pub fn is_category_dragging(&self) -> Signal<bool> {
        let interaction = self.interaction;
        Signal::derive(move || interaction.get().is_category_dragging())
    }
}

/// Reads the [`LibraryRuntimeContext`] provided by [`LibraryProvider`].
pub fn use_library_runtime() -> LibraryRuntimeContext {
    use_context::<LibraryRuntimeContext>().expect("LibraryProvider above this component")
}

#[component]
/// Provides [`LibraryRuntimeContext`] to descendant components and boots the
/// seeded (or scene-overridden) state.
pub fn LibraryProvider(children: Children) -> impl IntoView {
    let (boot_state, boot_interaction) = match e2e::boot_scene() {
        Some(scene) => scene.boot_state(),
        None => (seed::seeded(), InteractionState::default()),
    };
    let state = create_rw_signal(boot_state);
    let interaction = create_rw_signal(boot_interaction);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: LibraryAction| {
        let mut library = state.get_untracked();
        let mut drag = interaction.get_untracked();
        let previous_library = library.clone();
        let previous_drag = drag.clone();

        match reduce_library(&mut library, &mut drag, action) {
            Ok(new_effects) => {
                if library != previous_library {
                    state.set(library);
                }
                if drag != previous_drag {
                    interaction.set(drag);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => {
                logging::warn!("library action rejected: {err}");
            }
        }
    });

    let runtime = LibraryRuntimeContext {
        state,
        interaction,
        effects,
        dispatch,
    };
    provide_context(runtime);
    effect_executor::install(runtime);

    children()
}
