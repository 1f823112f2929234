//! TOML configuration for the FileRef tools.
//!
//! ```toml
//! [codec]
//! verify_length = true
//! verify_redundant_fields = true
//!
//! [fileref]
//! variant = "disk_location"
//! keep_external = false
//! ```

mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Per-project file first, then the per-user file.
const SEARCH_PATHS: [&str; 2] = ["./alsref.toml", "~/.config/alsref/config.toml"];

/// Read and parse the config at `path`.
pub fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    tracing::debug!("Loaded config from {:?}", path);
    warn_on_relaxed_checks(&config.codec);
    Ok(config)
}

/// Load `custom_path` if given, otherwise the first config found on the
/// search path. Falls back to strict defaults when nothing is found.
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    match custom_path.map(Path::to_path_buf).or_else(find_config) {
        Some(path) => load_config(&path),
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn find_config() -> Option<PathBuf> {
    SEARCH_PATHS
        .iter()
        .map(|candidate| PathBuf::from(shellexpand::tilde(candidate).as_ref()))
        .find(|path| path.is_file())
}

fn warn_on_relaxed_checks(codec: &alsref_fileref::CodecOptions) {
    if !codec.verify_length {
        tracing::warn!("Total length check disabled; stale length fields will be accepted");
    }
    if !codec.verify_redundant_fields {
        tracing::warn!(
            "Redundant field checks disabled; decoded records may not re-encode byte for byte"
        );
    }
}
