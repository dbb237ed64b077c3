pub mod a001_municipio;
pub mod a002_ordenanza;
pub mod common;
