//! Centralized inline-SVG icon API.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named icons available to shell and primitive code.
pub enum IconName {
    /// Stacked-books library mark.
    Library,
    /// Plus sign for add actions.
    Plus,
    /// Magnifier for the search field.
    Search,
    /// Trash can for delete targets.
    Trash,
    /// Globe fallback for websites without a favicon.
    Globe,
    /// Outbound-arrow mark for external links.
    ExternalLink,
    /// Folder mark for category headers.
    Folder,
    /// Six-dot grip for draggable surfaces.
    GripHandle,
}

impl IconName {
    /// Stable token used for the `data-ui-icon` attribute.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Plus => "plus",
            Self::Search => "search",
            Self::Trash => "trash",
            Self::Globe => "globe",
            Self::ExternalLink => "external-link",
            Self::Folder => "folder",
            Self::GripHandle => "grip-handle",
        }
    }

    fn path_data(self) -> &'static str {
        match self {
            Self::Library => "M4 19V5a1 1 0 0 1 1-1h2v16H5a1 1 0 0 1-1-1Zm6 1V4h2v16h-2Zm5.2-15.6 4.4 14.9-1.9.6-4.4-14.9 1.9-.6Z",
            Self::Plus => "M11 5h2v6h6v2h-6v6h-2v-6H5v-2h6V5Z",
            Self::Search => "M10.5 4a6.5 6.5 0 1 0 4.06 11.58l4.43 4.42 1.41-1.41-4.42-4.43A6.5 6.5 0 0 0 10.5 4Zm0 2a4.5 4.5 0 1 1 0 9 4.5 4.5 0 0 1 0-9Z",
            Self::Trash => "M9 3h6l1 2h4v2H4V5h4l1-2Zm-3 6h12l-1 11a1 1 0 0 1-1 1H8a1 1 0 0 1-1-1L6 9Zm4 2v8h2v-8h-2Zm4 0v8h2v-8h-2Z",
            Self::Globe => "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18Zm6.9 8h-3a14.7 14.7 0 0 0-1.4-5.6A7 7 0 0 1 18.9 11ZM12 5.1c.9 1.2 1.7 3.3 1.9 5.9h-3.8c.2-2.6 1-4.7 1.9-5.9ZM9.5 5.4A14.7 14.7 0 0 0 8.1 11h-3a7 7 0 0 1 4.4-5.6ZM5.1 13h3c.2 2.1.7 4 1.4 5.6A7 7 0 0 1 5.1 13Zm5.1 0h3.8c-.2 2.6-1 4.7-1.9 5.9-.9-1.2-1.7-3.3-1.9-5.9Zm4.4 5.6c.7-1.6 1.2-3.5 1.4-5.6h3a7 7 0 0 1-4.4 5.6Z",
            Self::ExternalLink => "M14 4h6v6h-2V7.4l-7.3 7.3-1.4-1.4L16.6 6H14V4ZM5 6h6v2H7v9h9v-4h2v6H5V6Z",
            Self::Folder => "M4 5h6l2 2h8a1 1 0 0 1 1 1v10a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V6a1 1 0 0 1 1-1Z",
            Self::GripHandle => "M9 5a2 2 0 1 1 0 4 2 2 0 0 1 0-4Zm6 0a2 2 0 1 1 0 4 2 2 0 0 1 0-4ZM9 11a2 2 0 1 1 0 4 2 2 0 0 1 0-4Zm6 0a2 2 0 1 1 0 4 2 2 0 0 1 0-4ZM9 17a2 2 0 1 1 0 4 2 2 0 0 1 0-4Zm6 0a2 2 0 1 1 0 4 2 2 0 0 1 0-4Z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing steps mapped to the CSS size tokens.
pub enum IconSize {
    /// Extra small (12px box).
    Xs,
    /// Small (16px box).
    Sm,
    /// Medium (20px box).
    Md,
    /// Large (28px box).
    Lg,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a named icon as inline SVG with the shared `data-ui-*` hooks.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    view! {
        <svg
            class="ui-icon"
            viewBox="0 0 24 24"
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path fill="currentColor" d=icon.path_data()></path>
        </svg>
    }
}
