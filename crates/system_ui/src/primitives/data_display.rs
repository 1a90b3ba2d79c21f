use super::*;

#[component]
/// Generic surface primitive.
pub fn Surface(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="surface"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-padding=padding.token()
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared card surface for grouped document-like regions.
pub fn Card(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    /// Heading level 1-4; anything else clamps to 4.
    #[prop(default = 2)]
    level: u8,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    match level {
        1 => view! {
            <h1 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot>
                {children()}
            </h1>
        }
        .into_view(),
        2 => view! {
            <h2 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot>
                {children()}
            </h2>
        }
        .into_view(),
        3 => view! {
            <h3 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot>
                {children()}
            </h3>
        }
        .into_view(),
        _ => view! {
            <h4 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot>
                {children()}
            </h4>
        }
        .into_view(),
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-role=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared empty-state surface with an icon, headline, and supporting copy.
pub fn EmptyState(
    icon: IconName,
    #[prop(into)] headline: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
            data-ui-slot=ui_slot
        >
            <Icon icon size=IconSize::Lg />
            <span data-ui-slot="headline">{headline}</span>
            {description
                .map(|description| view! { <span data-ui-slot="description">{description}</span> })}
        </div>
    }
}
