// src/extraction/mod.rs
//! Profile page → résumé mapping: selector lookups, text parsing and assembly

pub mod assembler;
pub mod lookup;
pub mod sections;
pub mod text;

pub use assembler::{assemble, resume_from_html};
