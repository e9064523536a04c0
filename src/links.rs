// Link table
//
// The ordered (label, url) pairs that end up as bullets in the generated
// document. Order is significant and duplicates are kept.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single external reference: display label plus URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub label: String,
    pub url: String,
}

impl LinkEntry {
    /// Create a new entry
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

impl<L: Into<String>, U: Into<String>> From<(L, U)> for LinkEntry {
    fn from((label, url): (L, U)) -> Self {
        Self::new(label, url)
    }
}

impl fmt::Display for LinkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.url)
    }
}

/// Ordered, immutable collection of entries for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkTable {
    entries: Vec<LinkEntry>,
}

impl LinkTable {
    pub fn new(entries: Vec<LinkEntry>) -> Self {
        Self { entries }
    }

    /// The table shipped with the binary
    pub fn builtin() -> Self {
        BUILTIN_LINKS.iter().copied().collect()
    }

    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }
}

impl<E: Into<LinkEntry>> FromIterator<E> for LinkTable {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Official / primary references for the tools in this environment
pub const BUILTIN_LINKS: &[(&str, &str)] = &[
    ("WezTerm Docs", "https://wezfurlong.org/wezterm/"),
    ("WezTerm Config (Lua)", "https://wezfurlong.org/wezterm/config/files.html"),
    ("WezTerm GitHub", "https://github.com/wez/wezterm"),
    ("Starship Docs", "https://starship.rs/config/"),
    ("Starship GitHub", "https://github.com/starship/starship"),
    ("Zellij Docs", "https://zellij.dev/documentation/"),
    ("Zellij GitHub", "https://github.com/zellij-org/zellij"),
    ("GlazeWM GitHub", "https://github.com/glzr-io/glazewm"),
    (
        "GlazeWM Cheatsheet",
        "https://github.com/glzr-io/glazewm/blob/main/resources/assets/cheatsheet.png",
    ),
    ("PowerToys Docs", "https://learn.microsoft.com/windows/powertoys/"),
    ("PowerToys GitHub", "https://github.com/microsoft/PowerToys"),
    (
        "WinGet Docs",
        "https://learn.microsoft.com/windows/package-manager/winget/",
    ),
    ("Conda Docs", "https://docs.conda.io/projects/conda/en/latest/"),
    ("Git for Windows", "https://gitforwindows.org/"),
];
