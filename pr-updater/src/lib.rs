#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod config;
pub mod updater;

pub use client::{
    ClientError, CreateRequest, DryRunClient, EnsureClient, FoundIssue, GitHubClient, PrState,
    UpdateClient, UpdateRequest,
};
pub use config::{read_body_file, ConfigError, PrOptions};
pub use updater::{ensure_pr, search_query, update_pr, EnsureError, UpdateError};
