//! Product dialog.
//!
//! Same MVVM split as the category dialog: draft.rs holds the
//! string-typed form state, view_model.rs the commands, view.rs the UI.

mod draft;
mod view;
mod view_model;

pub use draft::ProductDraft;
pub use view::ProductDetails;
pub use view_model::ProductFormVm;
