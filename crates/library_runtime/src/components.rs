//! Library shell UI composition and interaction surfaces.

mod category_card;
mod dialogs;
mod drop_zones;
mod toolbar;
mod website_item;

use leptos::*;

use self::{
    category_card::CategoryCard,
    dialogs::{AddCategoryDialog, AddWebsiteDialog},
    drop_zones::CategoryTrashZone,
    toolbar::LibraryToolbar,
};
use crate::{
    model::Website,
    reducer::LibraryAction,
    runtime_context::use_library_runtime,
    search,
};
use system_ui::prelude::*;

pub use crate::runtime_context::{LibraryProvider, LibraryRuntimeContext};

/// Marks a native drag with an opaque payload so the browser treats it as a
/// move. The real payload travels through the reducer's drag slot; the
/// DataTransfer text only exists because some engines refuse to start a drag
/// without one.
fn arm_native_drag(ev: &web_sys::DragEvent, label: &str) {
    if let Some(transfer) = ev.data_transfer() {
        transfer.set_effect_allowed("move");
        let _ = transfer.set_data("text/plain", label);
    }
}

/// Derives the favicon lookup URL for a website. Display-only; a failed load
/// never touches store state.
fn favicon_url(website_url: &str) -> Option<String> {
    let host = host_of(website_url)?;
    Some(format!(
        "https://www.google.com/s2/favicons?domain={host}&sz=64"
    ))
}

fn host_of(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit('@').next()?.split(':').next()?;
    (!host.is_empty()).then_some(host)
}

#[component]
/// Full library surface: toolbar, filtered category grid, dialogs, and the
/// global trash zone shown while a category drag is active.
pub fn LibraryShell() -> impl IntoView {
    let runtime = use_library_runtime();

    let filtered_categories = Signal::derive(move || {
        let state = runtime.state.get();
        search::filter_categories(&state.categories, &state.library, &state.search_query)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<String>>()
    });
    let website_dialog_category =
        Signal::derive(move || runtime.state.get().add_website_dialog.clone());
    let category_dialog_open = Signal::derive(move || runtime.state.get().add_category_dialog_open);
    let category_dragging = runtime.is_category_dragging();

    view! {
        <Surface layout_class="library-shell" ui_slot="library-shell">
            <LibraryToolbar />

            <main class="library-content">
                <Show
                    when=move || !filtered_categories.get().is_empty()
                    fallback=|| {
                        view! {
                            <EmptyState
                                icon=IconName::Search
                                headline="No categories or websites found."
                                description="Try a different search, or add a new category."
                            />
                        }
                    }
                >
                    <Grid gap=LayoutGap::Lg ui_slot="category-grid">
                        <For
                            each=move || filtered_categories.get()
                            key=|category| category.clone()
                            children=move |category: String| {
                                view! { <CategoryCard category=category /> }
                            }
                        />
                    </Grid>
                </Show>
            </main>

            <Show when=move || category_dragging.get() fallback=|| ()>
                <CategoryTrashZone />
            </Show>

            <Show when=move || website_dialog_category.get().is_some() fallback=|| ()>
                {move || {
                    website_dialog_category
                        .get()
                        .map(|category| view! { <AddWebsiteDialog category=category /> })
                }}
            </Show>

            <Show when=move || category_dialog_open.get() fallback=|| ()>
                <AddCategoryDialog />
            </Show>
        </Surface>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{favicon_url, host_of};

    #[test]
    fn host_extraction_handles_paths_ports_and_userinfo() {
        assert_eq!(host_of("https://github.com"), Some("github.com"));
        assert_eq!(
            host_of("https://developer.mozilla.org/en-US/docs"),
            Some("developer.mozilla.org")
        );
        assert_eq!(host_of("http://localhost:8080/x"), Some("localhost"));
        assert_eq!(host_of("https://user@notion.so"), Some("notion.so"));
        assert_eq!(host_of("not a url"), None);
        assert_eq!(host_of("https://"), None);
    }

    #[test]
    fn favicon_url_targets_the_host() {
        assert_eq!(
            favicon_url("https://figma.com/files").as_deref(),
            Some("https://www.google.com/s2/favicons?domain=figma.com&sz=64")
        );
        assert_eq!(favicon_url("garbage"), None);
    }
}
