pub mod cards;
pub mod details;
pub mod filter;
pub mod list;
