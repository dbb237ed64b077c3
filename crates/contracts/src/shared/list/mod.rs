//! Generic list fetcher and client-side filter

mod controller;
mod filter;

pub use controller::{ListController, ListTicket, LoadState, PendingDelete};
pub use filter::ListFilter;
