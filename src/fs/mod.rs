//! File system utilities for trackline
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_json, read_record, write_json, write_record};
pub use paths::{
    find_project_root, get_config_path, get_trackline_dir, resolve_cwd, TRACKLINE_DIR,
};
