//! Pull request options.
//!
//! Options can come from command-line flags or from a TOML file such as:
//!
//! ```toml
//! org = "kubernetes"
//! repo = "test-infra"
//! title = "Bump images"
//! body-file = "body.md"
//! source = "autobump"
//! branch = "main"
//! match-title = "Bump images"
//! ```

mod error;
mod file;
mod options;

pub use error::ConfigError;
pub use options::{read_body_file, PrOptions};
