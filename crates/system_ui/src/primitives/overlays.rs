use super::*;

#[component]
/// Shared modal dialog overlay. Backdrop clicks and Escape invoke `on_close`;
/// the caller owns open/closed state and simply unmounts the modal.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let close = move || {
        if let Some(on_close) = on_close.as_ref() {
            on_close.call(());
        }
    };

    // Window-level so Escape still closes after focus moves outside the
    // dialog subtree.
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        ev.prevent_default();
        close();
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:mousedown=move |_| close()
        ></div>
        <div
            class=merge_layout_class("ui-modal", layout_class)
            role="dialog"
            aria-modal="true"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="modal"
        >
            {children()}
        </div>
    }
}
