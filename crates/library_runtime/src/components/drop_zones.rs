use super::*;

#[component]
/// Global trash overlay rendered only while a category drag is active.
/// Dropping the dragged card here deletes the category and everything in it.
pub(super) fn CategoryTrashZone() -> impl IntoView {
    let runtime = use_library_runtime();

    let on_dragover = {
        let interaction = runtime.interaction;
        move |ev: web_sys::DragEvent| {
            if interaction.get_untracked().is_category_dragging() {
                ev.prevent_default();
            }
        }
    };
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        runtime.dispatch_action(LibraryAction::DropCategoryOnTrash);
    };

    view! {
        <div
            class="category-trash-zone"
            role="region"
            aria-label="Drop here to delete category"
            on:dragover=on_dragover
            on:drop=on_drop
        >
            <Stack align=LayoutAlign::Center gap=LayoutGap::Sm>
                <Icon icon=IconName::Trash size=IconSize::Lg />
                <Text>"Drop here to delete category"</Text>
            </Stack>
        </div>
    }
}
