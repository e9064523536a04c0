//! Tool links - Generate a markdown list of reference links
//!
//! Renders an ordered table of (label, url) pairs into a small markdown
//! document and writes it to a single output file.

pub mod cli;
pub mod config;
pub mod error;
pub mod links;
pub mod output;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use links::{LinkEntry, LinkTable};
pub use output::{render, GenerationReport, MarkdownConfig, MarkdownGenerator, RenderedDocument};
