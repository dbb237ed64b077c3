pub mod aggregate;
pub mod filter;
pub mod form;

pub use aggregate::{MunicipioRef, Ordenanza, OrdenanzaDto, OrdenanzaId};
pub use filter::OrdenanzaFilter;
pub use form::OrdenanzaForm;
