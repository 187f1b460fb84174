//! Category dialog.
//!
//! Simplified MVVM split:
//! - draft.rs: string-typed form state and the parse/validate step
//! - view_model.rs: commands and async state
//! - view.rs: Leptos component (pure UI)

mod draft;
mod view;
mod view_model;

pub use draft::{CategoryDraft, NO_PARENT};
pub use view::CategoryDetails;
pub use view_model::CategoryFormVm;
