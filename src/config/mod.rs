//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MONO_META_*)
//! 3. Config file given by `--file` (JSON, or TOML by extension)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    from_env, from_env_with, load_with_warnings, resolve, split_list, ConfigWarning, ENV_PREFIX,
};
pub use types::{Config, RepositorySource, Settings};
