pub mod components;
pub mod e2e;
pub mod model;
pub mod reducer;
pub mod search;
pub mod seed;

mod effect_executor;
mod runtime_context;

pub use components::{LibraryProvider, LibraryRuntimeContext, LibraryShell};
pub use model::*;
pub use reducer::{reduce_library, LibraryAction, ReducerError, RuntimeEffect};
pub use runtime_context::use_library_runtime;
pub use search::filter_categories;
