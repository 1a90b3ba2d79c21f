use super::*;
use wasm_bindgen::JsCast;

#[component]
/// One draggable website row: favicon, title link opening in a new tab, and
/// the optional description.
pub(super) fn WebsiteItem(website: Website, category: String) -> impl IntoView {
    let runtime = use_library_runtime();
    let id = website.id;

    let on_dragstart = {
        let title = website.title.clone();
        move |ev: web_sys::DragEvent| {
            // Rows sit inside a draggable card; without this the card would
            // start a category drag from the same gesture.
            ev.stop_propagation();
            arm_native_drag(&ev, &title);
            runtime.dispatch_action(LibraryAction::BeginWebsiteDrag {
                id,
                category: category.clone(),
            });
        }
    };
    let on_dragend = move |_: web_sys::DragEvent| {
        runtime.dispatch_action(LibraryAction::EndDrag);
    };

    let favicon = favicon_url(&website.url);
    let description = (!website.description.is_empty()).then_some(website.description.clone());

    view! {
        <div
            class="website-item"
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
        >
            <a
                class="website-link"
                href=website.url.clone()
                target="_blank"
                rel="noopener noreferrer"
            >
                {match favicon {
                    Some(src) => view! {
                        <img
                            class="website-favicon"
                            src=src
                            alt=""
                            loading="lazy"
                            on:error=|ev: web_sys::ErrorEvent| {
                                // Broken favicon lookups only hide the image.
                                if let Some(target) = ev.target() {
                                    if let Ok(img) = target.dyn_into::<web_sys::HtmlElement>() {
                                        let _ = img.style().set_property("display", "none");
                                    }
                                }
                            }
                        />
                    }
                    .into_view(),
                    None => view! { <Icon icon=IconName::Globe size=IconSize::Sm /> }.into_view(),
                }}
                <span class="website-title">{website.title.clone()}</span>
                <Icon icon=IconName::ExternalLink size=IconSize::Xs />
            </a>
            {description.map(|description| {
                view! {
                    <Text role=TextRole::Caption tone=TextTone::Muted ui_slot="website-description">
                        {description}
                    </Text>
                }
            })}
        </div>
    }
}
