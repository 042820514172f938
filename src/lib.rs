//! # Kytos Config
//!
//! Local configuration store for the Kytos NApps command-line client.
//!
//! The store locates (or creates) `~/.kytosrc`, guarantees that the
//! `global`, `auth` and `napps` sections exist, and resolves effective
//! values with environment-over-file-over-default precedence. Credential
//! updates run a fresh read-modify-write cycle against the on-disk file,
//! preserving unrelated content such as custom sections and bare keys.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kytos_config::ConfigStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ConfigStore::open()?;
//!     let config = store.resolved();
//!
//!     println!("NApps registry: {}", config.uri);
//!     store.save_credential("alice", "tok123")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Tolerant loading**: a missing or empty file starts an empty store
//! - **First-run seeding**: the file is created with mode 0600 on open
//! - **Precedence resolution**: environment variables override stored
//!   values, which override built-in defaults
//! - **Round-trip preservation**: custom sections and bare keys survive
//!   credential updates untouched

// Re-export main public API types and functions
// This makes them available as kytos_config::TypeName
pub use document::{ConfigDocument, REQUIRED_SECTIONS};
pub use error::ConfigError;
pub use store::{ConfigStore, DEFAULT_CONFIG_PATH, DEFAULT_NAPPS_URI};
pub use types::{
    EnvOverrides, ResolvedConfig, ENV_API_URI, ENV_NAPPS_PATH, ENV_TOKEN, ENV_USER,
    ENV_VIRTUAL_ENV,
};

// Internal modules - these are not part of the public API
mod document;
mod error;
mod store;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, ConfigError>;

// Library version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
