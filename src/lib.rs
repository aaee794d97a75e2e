//! musiclist: search, browse, and comment on performers and events.
//!
//! The crate is a client for a remote music catalogue. It provides:
//! - Paginated performer and event searches with a client-side category filter
//! - Performer detail with top recordings, comments, and average rating
//! - One comment and rating per user per performer
//! - A navigation seam and an injected session, so screens are testable
//!   without a rendering surface
//! - Gateway calls on a background worker thread
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Command loop (main.rs)                             │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event/action model
//! │  - Event handling, action execution                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Listing       │   │ Navigation    │   │ Worker        │
//! │ (listing/)    │   │ (navigation/) │   │ (worker/)     │
//! │ - Pagination  │   │ - Navigator   │   │ - Gateway I/O │
//! │ - Filter      │   │ - Targets     │   │ - Trace hops  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Session, Gateway (JSON catalogue)          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Event handler, actions, state, and the composition root
//! - [`domain`]: Performers, events, comments, errors
//! - [`gateway`]: Catalogue contract and the JSON file implementation
//! - [`listing`]: Pagination state machine, filter, controller, panel
//! - [`navigation`]: Navigator contract and navigation targets
//! - [`session`]: Current user and store handle
//! - [`worker`]: Background thread for gateway calls
//! - [`ui`]: View models and the plain-text renderer
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Defaults, then an optional TOML file, then environment variables:
//!
//! ```toml
//! # ~/.local/share/musiclist/config.toml
//! catalog_path = "~/music/catalog.json"
//! page_size = 10
//! trace_level = "debug"
//! ```
//!
//! `MUSICLIST_CATALOG_PATH`, `MUSICLIST_PROJECT_ID`, `MUSICLIST_PAGE_SIZE`,
//! `MUSICLIST_TRACE_LEVEL` and `MUSICLIST_DATA_DIR` override the file when
//! set to a non-blank value. `MUSICLIST_CONFIG` points at another file.
//!
//! # Example
//!
//! ```
//! use musiclist::gateway::{CatalogData, JsonGateway};
//! use musiclist::listing::{ListingController, ListingPanel, SearchCriteria};
//! use musiclist::Event;
//!
//! let gateway = JsonGateway::in_memory(CatalogData::default());
//! let mut events: ListingController<Event, ListingPanel<Event>> =
//!     ListingController::new(10, ListingPanel::new());
//!
//! events.search_with(&gateway, SearchCriteria::match_all());
//! assert!(events.sink().items().is_empty());
//! assert!(!events.has_more());
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod gateway;
pub mod infrastructure;
pub mod listing;
pub mod navigation;
pub mod session;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Application, UiEvent};
pub use domain::{
    Comment, CommentDraft, CommentThread, Event, GatewayError, MusicListError, Performer,
    PerformerCategory, PerformerDetail, Recording, Result,
};
pub use navigation::{NavigationTarget, Navigator};
pub use session::{Session, SessionStore};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "MUSICLIST_";

/// Environment variable naming an alternative configuration file.
pub const CONFIG_FILE_ENV: &str = "MUSICLIST_CONFIG";

/// Configuration keys understood by [`Config::from_map`].
pub const CONFIG_KEYS: [&str; 5] = [
    "catalog_path",
    "project_id",
    "page_size",
    "trace_level",
    "data_dir",
];

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON catalogue file. Default: `<data_dir>/catalog.json`
    pub catalog_path: PathBuf,

    /// Hosted datastore project identifier, recorded in logs when set.
    pub project_id: Option<String>,

    /// Items requested per page. Never below 1. Default: 10
    pub page_size: usize,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...). Default: `"info"`
    pub trace_level: String,

    /// Where traces, the default catalogue, and the default config file live.
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = infrastructure::default_data_dir();
        Self {
            catalog_path: infrastructure::catalog_path_in(&data_dir),
            project_id: None,
            page_size: listing::DEFAULT_PAGE_SIZE,
            trace_level: "info".to_string(),
            data_dir,
        }
    }
}

impl Config {
    /// Builds a configuration from string values, falling back to defaults.
    ///
    /// # Parsing Rules
    ///
    /// - Blank values count as unset
    /// - `page_size`: unparsable values fall back to 10, zero becomes 1
    /// - `catalog_path`, `data_dir`: a leading `~` is expanded
    /// - `catalog_path` defaults to `catalog.json` inside the effective `data_dir`
    ///
    /// # Example
    ///
    /// ```
    /// use musiclist::Config;
    /// use std::collections::BTreeMap;
    /// use std::path::PathBuf;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "/srv/musiclist".to_string());
    /// map.insert("page_size".to_string(), "25".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 25);
    /// assert_eq!(config.catalog_path, PathBuf::from("/srv/musiclist/catalog.json"));
    /// ```
    #[must_use]
    pub fn from_map(values: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            values
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let data_dir = get("data_dir")
            .map_or_else(infrastructure::default_data_dir, infrastructure::expand_tilde);

        let catalog_path = get("catalog_path").map_or_else(
            || infrastructure::catalog_path_in(&data_dir),
            infrastructure::expand_tilde,
        );

        let page_size = get("page_size")
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(listing::DEFAULT_PAGE_SIZE)
            .max(1);

        Self {
            catalog_path,
            project_id: get("project_id").map(String::from),
            page_size,
            trace_level: get("trace_level").unwrap_or("info").to_string(),
            data_dir,
        }
    }

    /// Reads flat keys from TOML text. Strings and integers are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`MusicListError::Config`] for invalid TOML or a value of
    /// another type.
    pub fn toml_values(contents: &str) -> Result<BTreeMap<String, String>> {
        let table: toml::Table = contents
            .parse()
            .map_err(|e| MusicListError::Config(format!("invalid TOML: {e}")))?;

        table
            .into_iter()
            .map(|(key, value)| match value {
                toml::Value::String(text) => Ok((key, text)),
                toml::Value::Integer(number) => Ok((key, number.to_string())),
                other => Err(MusicListError::Config(format!(
                    "{key}: expected a string or integer, found {}",
                    other.type_str()
                ))),
            })
            .collect()
    }

    /// Picks the `MUSICLIST_*` overrides out of `vars`, keyed by config key.
    ///
    /// Blank values are skipped.
    #[must_use]
    pub fn env_values<I>(vars: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        vars.into_iter()
            .filter_map(|(name, value)| {
                let key = name.strip_prefix(ENV_PREFIX)?.to_ascii_lowercase();
                (CONFIG_KEYS.contains(&key.as_str()) && !value.trim().is_empty())
                    .then_some((key, value))
            })
            .collect()
    }

    /// Loads defaults, then `toml_file` if it exists, then the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(toml_file: &Path) -> Result<Self> {
        let mut values = BTreeMap::new();

        if toml_file.exists() {
            let contents = std::fs::read_to_string(toml_file)?;
            values.extend(Self::toml_values(&contents)?);
        }
        values.extend(Self::env_values(std::env::vars()));

        Ok(Self::from_map(&values))
    }

    /// Loads the configuration from `MUSICLIST_CONFIG`, or `config.toml` in
    /// the default data directory, plus the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let toml_file = std::env::var(CONFIG_FILE_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(
                || infrastructure::config_path_in(&infrastructure::default_data_dir()),
                |value| infrastructure::expand_tilde(value.trim()),
            );
        Self::load_from(&toml_file)
    }
}
