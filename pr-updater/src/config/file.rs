//! On-disk form of the PR options.

use serde::Deserialize;
use std::path::PathBuf;

/// Parsed contents of a PR options TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct OptionsFile {
    pub org: String,
    pub repo: String,
    pub title: String,

    /// Inline body. Mutually exclusive with `body_file`.
    pub body: Option<String>,

    /// Body read from a file, relative to the options file.
    pub body_file: Option<PathBuf>,

    pub source: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default)]
    pub match_title: String,
}

pub(crate) fn default_branch() -> String {
    "main".to_string()
}
