//! Configuration loading with defaults

use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Load configuration for a working directory, falling back to defaults.
///
/// An explicit `config_path` wins. Otherwise the nearest `.trackline/config.json`
/// above `cwd` is read. With neither, the default configuration is returned.
pub fn load_config(cwd: &Path, config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        debug!(path = %path.display(), "loading explicit config");
        return fs::read_json(path);
    }

    match fs::find_project_root(cwd) {
        Some(root) => {
            debug!(root = %root.display(), "loading project config");
            fs::read_config(&root)
        }
        None => Ok(Config::default()),
    }
}
