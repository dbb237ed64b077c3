//! Municipio Details UI Module
//!
//! MVVM split:
//! - model.rs: field signals and their conversion to/from a form draft
//! - view_model.rs: submission and loading commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::MunicipioDetails;
pub use view_model::MunicipioDetailsVm;
