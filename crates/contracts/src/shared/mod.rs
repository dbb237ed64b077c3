pub mod api;
pub mod config;
pub mod dialog;
pub mod export;
pub mod form;
pub mod list;
