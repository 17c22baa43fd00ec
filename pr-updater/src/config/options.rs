//! Pull request options and their validation.

use super::file::OptionsFile;
use crate::config::ConfigError;
use bstr::ByteSlice;
use std::path::Path;
use tracing::debug;

/// Everything needed to ensure a pull request exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrOptions {
    /// Organization or user owning the target repository.
    pub org: String,

    /// Target repository name.
    pub repo: String,

    /// Desired PR title.
    pub title: String,

    /// Desired PR body.
    pub body: String,

    /// Head branch, optionally as `user:branch` for forks.
    pub source: String,

    /// Base branch the PR merges into.
    pub branch: String,

    /// Search fragment identifying a reusable PR. Empty disables reuse.
    pub match_title: String,
}

impl PrOptions {
    /// Loads and validates options from a TOML file.
    ///
    /// A `body-file` entry is resolved relative to the directory containing
    /// `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a file can't be read, the TOML is invalid,
    /// or the options fail [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading PR options");

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let file: OptionsFile = toml::from_str(&contents).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        let body = match (file.body, file.body_file) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::ValidationError {
                    field: "body".to_string(),
                    message: "set either body or body-file, not both".to_string(),
                })
            }
            (Some(body), None) => body,
            (None, Some(body_file)) => {
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                read_body_file(&base.join(body_file))?
            }
            (None, None) => String::new(),
        };

        let options = Self {
            org: file.org,
            repo: file.repo,
            title: file.title,
            body,
            source: file.source,
            branch: file.branch,
            match_title: file.match_title,
        };
        options.validate()?;
        Ok(options)
    }

    /// Checks that required options are present and branch names are valid
    /// git references.
    ///
    /// `match_title` may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("org", &self.org),
            ("repo", &self.repo),
            ("title", &self.title),
            ("source", &self.source),
            ("branch", &self.branch),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        // Forks are addressed as `user:branch`.
        let source_branch = self
            .source
            .split_once(':')
            .map_or(self.source.as_str(), |(_, branch)| branch);
        validate_branch_name("source", source_branch)?;
        validate_branch_name("branch", &self.branch)?;

        Ok(())
    }
}

/// Reads a PR body from disk.
///
/// # Errors
///
/// Returns [`ConfigError::IoError`] if the file can't be read.
pub fn read_body_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })
}

fn validate_branch_name(field: &str, name: &str) -> Result<(), ConfigError> {
    gix_validate::reference::name_partial(name.as_bytes().as_bstr())
        .map(|_| ())
        .map_err(|e| ConfigError::ValidationError {
            field: field.to_string(),
            message: format!("'{name}' is not a valid branch name: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_options() -> PrOptions {
        PrOptions {
            org: "kubernetes".to_string(),
            repo: "test-infra".to_string(),
            title: "Bump deps".to_string(),
            body: "auto".to_string(),
            source: "bump-branch".to_string(),
            branch: "main".to_string(),
            match_title: "Bump deps".to_string(),
        }
    }

    #[test]
    fn accepts_valid_options() {
        assert!(sample_options().validate().is_ok());
    }

    #[test]
    fn accepts_empty_match_title() {
        let options = PrOptions {
            match_title: String::new(),
            ..sample_options()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn accepts_fork_source() {
        let options = PrOptions {
            source: "k8s-ci-robot:autobump".to_string(),
            ..sample_options()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_empty_org() {
        let options = PrOptions {
            org: "  ".to_string(),
            ..sample_options()
        };
        let result = options.validate();
        assert!(matches!(result, Err(ConfigError::ValidationError { field, .. }) if field == "org"));
    }

    #[test]
    fn rejects_invalid_branch_name() {
        let options = PrOptions {
            branch: "bad..branch".to_string(),
            ..sample_options()
        };
        let result = options.validate();
        assert!(
            matches!(result, Err(ConfigError::ValidationError { field, .. }) if field == "branch")
        );
    }

    #[test]
    fn loads_body_from_relative_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("body.md"), "Generated body").unwrap();
        fs::write(
            temp_dir.path().join("pr.toml"),
            r#"
org = "kubernetes"
repo = "test-infra"
title = "Bump deps"
body-file = "body.md"
source = "bump-branch"
match-title = "Bump deps"
"#,
        )
        .unwrap();

        let options = PrOptions::load(&temp_dir.path().join("pr.toml")).unwrap();

        assert_eq!(options.body, "Generated body");
        assert_eq!(options.branch, "main");
        assert_eq!(options.match_title, "Bump deps");
    }

    #[test]
    fn rejects_body_and_body_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("pr.toml"),
            r#"
org = "kubernetes"
repo = "test-infra"
title = "Bump deps"
body = "inline"
body-file = "body.md"
source = "bump-branch"
"#,
        )
        .unwrap();

        let result = PrOptions::load(&temp_dir.path().join("pr.toml"));
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn reports_missing_body_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("pr.toml"),
            r#"
org = "kubernetes"
repo = "test-infra"
title = "Bump deps"
body-file = "missing.md"
source = "bump-branch"
"#,
        )
        .unwrap();

        let result = PrOptions::load(&temp_dir.path().join("pr.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("pr.toml"),
            r#"
org = "kubernetes"
repo = "test-infra"
title = "Bump deps"
source = "bump-branch"
confirm = true
"#,
        )
        .unwrap();

        let result = PrOptions::load(&temp_dir.path().join("pr.toml"));
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }
}
