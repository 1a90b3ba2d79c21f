use super::*;
use crate::effect_executor::dialog_input_dom_id;
use crate::reducer::DialogInput;

#[component]
/// Validated form for adding a website to a fixed category. The reducer never
/// re-validates; this dialog is the required-field gate for title and url.
pub(super) fn AddWebsiteDialog(category: String) -> impl IntoView {
    let runtime = use_library_runtime();

    let title = create_rw_signal(String::new());
    let url = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());

    let close = Callback::new(move |_: ()| {
        runtime.dispatch_action(LibraryAction::CloseAddWebsiteDialog);
    });
    let submit = {
        let category = category.clone();
        move || {
            let title = title.get_untracked().trim().to_string();
            let url = url.get_untracked().trim().to_string();
            if title.is_empty() || url.is_empty() {
                return;
            }
            runtime.dispatch_action(LibraryAction::AddWebsite {
                category: category.clone(),
                title,
                url,
                description: description.get_untracked().trim().to_string(),
            });
            runtime.dispatch_action(LibraryAction::CloseAddWebsiteDialog);
        }
    };
    let submit_on_enter = {
        let submit = submit.clone();
        Callback::new(move |ev: ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                submit();
            }
        })
    };

    let heading = format!("Add Website to {category}");
    view! {
        <Modal aria_label=heading.clone() on_close=close>
            <Heading level=3>{heading}</Heading>
            <Stack gap=LayoutGap::Md>
                <FieldGroup title="Title *">
                    <TextField
                        id=dialog_input_dom_id(DialogInput::WebsiteTitle)
                        placeholder="e.g., GitHub"
                        value=title
                        on_input=Callback::new(move |ev: web_sys::Event| {
                            title.set(event_target_value(&ev));
                        })
                        on_keydown=submit_on_enter
                    />
                </FieldGroup>
                <FieldGroup title="URL *">
                    <TextField
                        input_type="url"
                        placeholder="https://example.com"
                        value=url
                        on_input=Callback::new(move |ev: web_sys::Event| {
                            url.set(event_target_value(&ev));
                        })
                        on_keydown=submit_on_enter
                    />
                </FieldGroup>
                <FieldGroup title="Description">
                    <TextArea
                        placeholder="Brief description of this website"
                        value=description
                        on_input=Callback::new(move |ev: web_sys::Event| {
                            description.set(event_target_value(&ev));
                        })
                    />
                </FieldGroup>
                <Cluster justify=LayoutJustify::End ui_slot="dialog-actions">
                    <Button on_click=Callback::new(move |_| close.call(()))>"Cancel"</Button>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| submit())
                    >
                        "Add Website"
                    </Button>
                </Cluster>
            </Stack>
        </Modal>
    }
}

#[component]
/// Validated form for creating a category.
pub(super) fn AddCategoryDialog() -> impl IntoView {
    let runtime = use_library_runtime();

    let name = create_rw_signal(String::new());

    let close = Callback::new(move |_: ()| {
        runtime.dispatch_action(LibraryAction::CloseAddCategoryDialog);
    });
    let submit = move || {
        let name = name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        runtime.dispatch_action(LibraryAction::AddCategory { name });
        runtime.dispatch_action(LibraryAction::CloseAddCategoryDialog);
    };

    view! {
        <Modal aria_label="Add New Category" on_close=close>
            <Heading level=3>"Add New Category"</Heading>
            <Stack gap=LayoutGap::Md>
                <FieldGroup title="Category Name *">
                    <TextField
                        id=dialog_input_dom_id(DialogInput::CategoryName)
                        placeholder="e.g., Development, Design, etc."
                        value=name
                        on_input=Callback::new(move |ev: web_sys::Event| {
                            name.set(event_target_value(&ev));
                        })
                        on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        })
                    />
                </FieldGroup>
                <Cluster justify=LayoutJustify::End ui_slot="dialog-actions">
                    <Button on_click=Callback::new(move |_| close.call(()))>"Cancel"</Button>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| submit())
                    >
                        "Add Category"
                    </Button>
                </Cluster>
            </Stack>
        </Modal>
    }
}
