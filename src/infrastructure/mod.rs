//! Infrastructure layer for filesystem and environment interactions.

pub mod paths;

pub use paths::{catalog_path_in, config_path_in, default_data_dir, expand_tilde};
