// Markdown document generator
//
// Renders a link table to markdown and writes it to a single output file,
// overwriting whatever was there.

use crate::error::Result;
use crate::links::LinkEntry;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Document title line
pub const TITLE: &str = "# Tool Links (Source of Truth)";

/// One-line description under the title
pub const DESCRIPTION: &str = "Official / primary references used in this environment.";

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "TOOLS_LINKS.md";

/// Markdown text produced from a link table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    text: String,
}

impl RenderedDocument {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Overwrite `path` with the document as UTF-8.
    ///
    /// The parent directory is never created; a missing one is an I/O error
    /// and leaves the filesystem untouched.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.text.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// Render entries to markdown, one bullet per entry in order
pub fn render(entries: &[LinkEntry]) -> RenderedDocument {
    let mut text = format!("{TITLE}\n{DESCRIPTION}\n");

    // fmt::Write into a String cannot fail
    for entry in entries {
        let _ = writeln!(text, "- {entry}");
    }

    RenderedDocument { text }
}

/// Configuration for markdown generation
#[derive(Debug, Clone)]
pub struct MarkdownConfig {
    /// File the document is written to
    pub output_path: PathBuf,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Writes the links document to disk
pub struct MarkdownGenerator {
    config: MarkdownConfig,
}

impl MarkdownGenerator {
    pub fn new(config: MarkdownConfig) -> Self {
        Self { config }
    }

    /// Render `entries` and overwrite the configured output file
    pub fn generate(&self, entries: &[LinkEntry]) -> Result<GenerationReport> {
        let document = render(entries);
        document.write_to(&self.config.output_path)?;

        Ok(GenerationReport {
            path: self.config.output_path.clone(),
            entries: entries.len(),
            bytes: document.as_str().len(),
        })
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }
}

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Path as configured
    pub path: PathBuf,
    /// Bullets written
    pub entries: usize,
    /// Size of the file in bytes
    pub bytes: usize,
}

impl GenerationReport {
    /// Absolute path of the written file
    pub fn resolved_path(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    pub fn summary(&self) -> String {
        format!("Rendered {} links ({} bytes)", self.entries, self.bytes)
    }
}
