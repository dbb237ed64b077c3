//! Common types and traits for all record kinds

pub mod entity;
pub mod wire;

// Re-exports
pub use entity::Entity;
