//! Ordenanza Details UI Module
//!
//! Same MVVM split as the municipio form; the municipio select is fed by
//! a municipio list fetched alongside the form.

mod model;
mod view;
mod view_model;

pub use view::OrdenanzaDetails;
pub use view_model::OrdenanzaDetailsVm;
