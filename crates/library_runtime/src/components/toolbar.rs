use super::*;

#[component]
/// Header bar: brand mark, live search field, and the add-category button.
pub(super) fn LibraryToolbar() -> impl IntoView {
    let runtime = use_library_runtime();

    let query = Signal::derive(move || runtime.state.get().search_query.clone());
    let on_search_input = Callback::new(move |ev: web_sys::Event| {
        runtime.dispatch_action(LibraryAction::SetSearchQuery {
            query: event_target_value(&ev),
        });
    });
    let open_category_dialog = Callback::new(move |_| {
        runtime.dispatch_action(LibraryAction::OpenAddCategoryDialog);
    });

    view! {
        <header class="library-toolbar">
            <Cluster justify=LayoutJustify::Between layout_class="library-toolbar-row">
                <Cluster ui_slot="brand">
                    <Icon icon=IconName::Library size=IconSize::Lg />
                    <Heading level=1>"Resources Database"</Heading>
                </Cluster>
                <Cluster ui_slot="toolbar-actions">
                    <span class="library-search">
                        <Icon icon=IconName::Search size=IconSize::Sm />
                        <TextField
                            placeholder="Search..."
                            aria_label="Search categories and websites"
                            ui_slot="search-input"
                            value=query
                            on_input=on_search_input
                        />
                    </span>
                    <IconButton
                        icon=IconName::Plus
                        aria_label="Add category"
                        title="Add category"
                        ui_slot="add-category"
                        on_click=open_category_dialog
                    />
                </Cluster>
            </Cluster>
        </header>
    }
}
