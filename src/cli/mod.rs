//! CLI operation handlers.
//!
//! - [`convert`]: Resolve, fetch, render, and write one conversation
//! - [`output`]: Output sink for the rendered document
//! - [`usage`]: Help and version handling ahead of configuration loading

pub mod convert;
pub mod output;
pub mod usage;
