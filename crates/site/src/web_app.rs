use leptos::*;
use leptos_meta::*;
use library_runtime::{LibraryProvider, LibraryShell};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Resources Database" />
        <Meta
            name="description"
            content="Organize websites into categories with drag-and-drop and live search."
        />

        <main class="site-root">
            <LibraryEntry />
        </main>
    }
}

#[component]
pub fn LibraryEntry() -> impl IntoView {
    view! {
        <LibraryProvider>
            <LibraryShell />
        </LibraryProvider>
    }
}
