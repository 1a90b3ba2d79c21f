//! Shared UI primitive library for the library shell.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the shell CSS layers. Shell
//! components should compose these primitives instead of emitting ad hoc
//! control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster, EmptyState, FieldGroup,
    FieldVariant, Grid, Heading, IconButton, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding,
    Modal, Stack, Surface, SurfaceVariant, Text, TextArea, TextField, TextRole, TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster, EmptyState, FieldGroup,
        FieldVariant, Grid, Heading, Icon, IconButton, IconName, IconSize, LayoutAlign, LayoutGap,
        LayoutJustify, LayoutPadding, Modal, Stack, Surface, SurfaceVariant, Text, TextArea,
        TextField, TextRole, TextTone,
    };
}
