//! # GitHub Endpoints
//!
//! A declarative binding for the GitHub REST API: every supported endpoint is
//! a variant of [`GitHub`], which knows its path, method, parameters and
//! parameter encoding. [`GitHubProvider`] resolves a variant, decorates it with
//! credentials from the runtime [`Environment`], sends it with `reqwest` and
//! logs the exchange through `tracing`.
//!
//! ## Main Components
//!
//! - [`GitHub`]: The endpoint table
//! - [`endpoint_mapping`]: Turns a target into an authenticated [`Endpoint`]
//! - [`GitHubProvider`]: Sends targets and decodes responses
//! - [`Args`]: Command line argument structure for the bundled binary
//!
//! ## Example
//!
//! ```no_run
//! use github_endpoints::{Environment, GitHub, GitHubProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     // Picks up GITHUB_TOKEN (or `.env`) when present
//!     let provider = GitHubProvider::new(Environment::load())?;
//!
//!     let results = provider.search_repos("tokio", 1).await?;
//!     println!("{} repositories", results.total_count);
//!
//!     let readme = provider.request(&GitHub::RepoReadMe {
//!         full_name: "tokio-rs/tokio".to_string(),
//!     }).await?;
//!     println!("{}", readme.pretty());
//!
//!     Ok(())
//! }
//! ```

mod args;
pub mod endpoint;
pub mod environment;
pub mod error;
pub mod logger;
pub mod models;
pub mod provider;
pub mod target;

// Re-export main components for documentation and external use
pub use crate::args::{Args, Command};
pub use crate::endpoint::{endpoint_mapping, Endpoint};
pub use crate::environment::Environment;
pub use crate::error::{Error, Result};
pub use crate::logger::{json_response_data_formatter, NetworkLogger};
pub use crate::provider::{GitHubProvider, GitHubProviderBuilder, GitHubResponse};
pub use crate::target::{url, GitHub, ParameterEncoding};
