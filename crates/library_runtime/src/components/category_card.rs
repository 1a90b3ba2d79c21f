use super::*;
use super::website_item::WebsiteItem;

#[component]
/// One draggable category card: header with the add/trash action, and the
/// website rows.
///
/// The card is both a drag source (category drags) and a hover target for
/// live reordering. Hover dispatches the move with the card's index in the
/// *unfiltered* display order, looked up at event time, so reordering stays
/// correct while a search filter narrows the grid.
pub(super) fn CategoryCard(category: String) -> impl IntoView {
    let runtime = use_library_runtime();

    let websites = {
        let category = category.clone();
        Signal::derive(move || runtime.state.get().websites_in(&category).to_vec())
    };
    let website_dragging = runtime.is_website_dragging();
    let dragging_this = {
        let category = category.clone();
        let interaction = runtime.interaction;
        Signal::derive(move || {
            matches!(
                &interaction.get().drag,
                crate::model::DragState::Category { name, .. } if name == &category
            )
        })
    };

    let on_dragstart = {
        let category = category.clone();
        move |ev: web_sys::DragEvent| {
            arm_native_drag(&ev, &category);
            runtime.dispatch_action(LibraryAction::BeginCategoryDrag {
                name: category.clone(),
            });
        }
    };
    let on_dragover = {
        let category = category.clone();
        let interaction = runtime.interaction;
        move |ev: web_sys::DragEvent| {
            if !interaction.get_untracked().is_category_dragging() {
                return;
            }
            ev.prevent_default();
            let over_index = runtime.state.get_untracked().category_index(&category);
            if let Some(over_index) = over_index {
                runtime.dispatch_action(LibraryAction::HoverCategory { over_index });
            }
        }
    };
    let on_dragend = move |_: web_sys::DragEvent| {
        runtime.dispatch_action(LibraryAction::EndDrag);
    };

    // The header action doubles as the per-card trash target: a plus button
    // normally, a website drop target while a row drag is in flight. The drop
    // deletes from the drag payload's source category, not this card.
    let on_action_dragover = {
        let interaction = runtime.interaction;
        move |ev: web_sys::DragEvent| {
            if interaction.get_untracked().is_website_dragging() {
                ev.prevent_default();
            }
        }
    };
    let on_action_drop = {
        let interaction = runtime.interaction;
        move |ev: web_sys::DragEvent| {
            if interaction.get_untracked().is_website_dragging() {
                ev.prevent_default();
                runtime.dispatch_action(LibraryAction::DropWebsiteOnTrash);
            }
        }
    };
    let on_action_click = {
        let category = category.clone();
        let interaction = runtime.interaction;
        Callback::new(move |_| {
            if !interaction.get_untracked().is_website_dragging() {
                runtime.dispatch_action(LibraryAction::OpenAddWebsiteDialog {
                    category: category.clone(),
                });
            }
        })
    };

    let heading = category.clone();
    view! {
        <div
            class="category-card"
            draggable="true"
            data-dragging=move || if dragging_this.get() { "true" } else { "false" }
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:dragend=on_dragend
        >
            <Card ui_slot="category-card">
                <Cluster justify=LayoutJustify::Between ui_slot="category-header">
                    <Cluster ui_slot="category-title">
                        <span class="category-grip" aria-hidden="true">
                            <Icon icon=IconName::GripHandle size=IconSize::Sm />
                        </span>
                        <Icon icon=IconName::Folder size=IconSize::Md />
                        <Heading level=2>{heading}</Heading>
                        <Text role=TextRole::Caption tone=TextTone::Muted>
                            {move || format!("({})", websites.get().len())}
                        </Text>
                    </Cluster>
                    <span
                        class="category-action"
                        on:dragover=on_action_dragover
                        on:drop=on_action_drop
                    >
                        <IconButton
                            icon=IconName::Plus
                            aria_label="Add website"
                            title="Add website"
                            ui_slot="add-website"
                            layout_class="when-idle"
                            on_click=on_action_click
                        />
                        <Show when=move || website_dragging.get() fallback=|| ()>
                            <span class="category-trash-hint" aria-hidden="true">
                                <Icon icon=IconName::Trash size=IconSize::Sm />
                            </span>
                        </Show>
                    </span>
                </Cluster>

                <Stack gap=LayoutGap::Sm ui_slot="website-list">
                    <Show
                        when=move || !websites.get().is_empty()
                        fallback=|| {
                            view! {
                                <Text role=TextRole::Caption tone=TextTone::Muted>
                                    "No websites yet"
                                </Text>
                            }
                        }
                    >
                        <For
                            each=move || websites.get()
                            key=|site| site.id
                            children={
                                let category = category.clone();
                                move |site: Website| {
                                    view! {
                                        <WebsiteItem website=site category=category.clone() />
                                    }
                                }
                            }
                        />
                    </Show>
                </Stack>
            </Card>
        </div>
    }
}
