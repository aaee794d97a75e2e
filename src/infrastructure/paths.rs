//! Filesystem locations for the catalogue, configuration, and traces.

use std::path::PathBuf;

/// Directory name under the platform data directory.
const APP_DIR_NAME: &str = "musiclist";

/// Used when the platform has no data directory.
const FALLBACK_DATA_DIR: &str = ".musiclist";

/// Returns the default data directory.
///
/// `<platform data dir>/musiclist` (for example `~/.local/share/musiclist`
/// on Linux), or `./.musiclist` when the platform reports none.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(FALLBACK_DATA_DIR),
        |dir| dir.join(APP_DIR_NAME),
    )
}

/// Default catalogue file inside `data_dir`.
#[must_use]
pub fn catalog_path_in(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("catalog.json")
}

/// Default configuration file inside `data_dir`.
#[must_use]
pub fn config_path_in(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a tilde, and every path when no home directory is known,
/// are returned unchanged.
///
/// ```
/// use musiclist::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/srv/catalog.json"), PathBuf::from("/srv/catalog.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match dirs::home_dir() {
        Some(home) if path == "~" => home,
        Some(home) => path
            .strip_prefix("~/")
            .map_or_else(|| PathBuf::from(path), |rest| home.join(rest)),
        None => PathBuf::from(path),
    }
}
