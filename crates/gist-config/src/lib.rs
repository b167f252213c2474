//! Configuration system for gist.
//!
//! TOML configuration with per-section defaults, layered from the user
//! config directory and a project-local `gist.toml`. CLI flags are applied
//! on top by the binary.

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{
    ConfigSource, LoadedConfig, load_config, load_config_file, load_config_with_options,
    user_config_dir, user_config_path,
};
pub use error::{ConfigError, Result};
pub use types::*;
