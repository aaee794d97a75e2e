//! JSON file-backed catalogue gateway.
//!
//! Loads the whole catalogue into memory on open and answers searches from
//! it. Comment writes are persisted with an atomic write (write-to-temp +
//! rename) so a crash never leaves a half-written file.
//!
//! # Performance Characteristics
//!
//! - **Search**: O(n log n) per page - filters and orders the full list
//! - **Write**: O(n) - serializes and writes the entire catalogue
//! - **Best for**: local catalogues and demos, up to a few thousand entries

use crate::domain::error::{GatewayError, MusicListError, Result};
use crate::domain::{Comment, CommentThread, Event, Performer, PerformerExtras};
use crate::gateway::backend::{DataGateway, GatewayResult};
use crate::gateway::models::{CatalogData, CommentRecord};
use crate::gateway::search::{by_score_then_name, contains_or_blank, exact_or_blank, page_of, NameQuery};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// File-backed [`DataGateway`].
///
/// # Thread Safety
///
/// The in-memory catalogue sits behind a `Mutex`, so one instance can be
/// shared between the UI thread and the worker thread.
pub struct JsonGateway {
    /// Path to the JSON file on disk, `None` for a purely in-memory catalogue.
    file_path: Option<PathBuf>,

    /// In-memory catalogue, loaded on creation.
    data: Mutex<CatalogData>,
}

impl JsonGateway {
    /// Opens a catalogue file, creating an empty catalogue if it does not exist.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON catalogue");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("catalogue file missing, starting empty");
            CatalogData::default()
        };

        tracing::debug!(
            performers = data.performers.len(),
            events = data.events.len(),
            "catalogue opened"
        );

        Ok(Self {
            file_path: Some(file_path),
            data: Mutex::new(data),
        })
    }

    /// Wraps already-loaded catalogue data without a backing file.
    ///
    /// Comment writes are kept in memory only.
    #[must_use]
    pub fn in_memory(data: CatalogData) -> Self {
        Self {
            file_path: None,
            data: Mutex::new(data),
        }
    }

    fn load_from_file(path: &Path) -> Result<CatalogData> {
        let contents = std::fs::read_to_string(path)?;
        let data: CatalogData = serde_json::from_str(&contents)
            .map_err(|e| MusicListError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, "loaded catalogue data");
        Ok(data)
    }

    fn lock(&self) -> MutexGuard<'_, CatalogData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Persists the catalogue with an atomic rename.
    fn save(&self, data: &CatalogData) -> Result<()> {
        let Some(path) = &self.file_path else {
            return Ok(());
        };

        let json = serde_json::to_string_pretty(data)
            .map_err(|e| MusicListError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = path.with_extension("tmp");
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, path)?;

        tracing::debug!(path = ?path, "catalogue saved");
        Ok(())
    }
}

impl DataGateway for JsonGateway {
    fn search_performers(
        &self,
        name: &str,
        country: &str,
        limit: usize,
        offset: usize,
    ) -> GatewayResult<Vec<Performer>> {
        let _span = tracing::debug_span!("json_search_performers",
            name = %name,
            country = %country,
            limit = limit,
            offset = offset
        )
        .entered();

        let data = self.lock();
        let query = NameQuery::new(name);

        let mut matching: Vec<&Performer> = data
            .performers
            .iter()
            .filter(|p| query.matches(&p.name) && exact_or_blank(&p.country, country))
            .collect();
        matching.sort_by(|a, b| by_score_then_name((a.score, &a.name), (b.score, &b.name)));

        let page = page_of(&matching, limit, offset);
        tracing::debug!(matched = matching.len(), returned = page.len(), "performer search complete");
        Ok(page)
    }

    fn search_events(
        &self,
        name: &str,
        location: &str,
        limit: usize,
        offset: usize,
    ) -> GatewayResult<Vec<Event>> {
        let _span = tracing::debug_span!("json_search_events",
            name = %name,
            location = %location,
            limit = limit,
            offset = offset
        )
        .entered();

        let data = self.lock();
        let query = NameQuery::new(name);

        let mut matching: Vec<&Event> = data
            .events
            .iter()
            .filter(|e| query.matches(&e.name) && contains_or_blank(&e.venue_name, location))
            .collect();
        matching.sort_by(|a, b| by_score_then_name((a.score, &a.name), (b.score, &b.name)));

        let page = page_of(&matching, limit, offset);
        tracing::debug!(matched = matching.len(), returned = page.len(), "event search complete");
        Ok(page)
    }

    fn read_performer_detail(&self, id: &str) -> GatewayResult<PerformerExtras> {
        let _span = tracing::debug_span!("json_read_performer_detail", id = %id).entered();

        let data = self.lock();
        if !data.performers.iter().any(|p| p.id == id) {
            return Err(GatewayError::NotFound(format!("performer {id}")));
        }

        let top_recordings = data.recordings.get(id).cloned().unwrap_or_default();

        // Stored in arrival order; a replaced comment keeps its slot.
        let records = data.comments.get(id).cloned().unwrap_or_default();
        let comments: CommentThread = records.into_iter().map(Comment::from).collect();
        let average_rating = comments.average_rating();

        tracing::debug!(
            recordings = top_recordings.len(),
            comments = comments.len(),
            "performer detail read"
        );

        Ok(PerformerExtras {
            top_recordings,
            comments,
            average_rating,
        })
    }

    fn write_comment(
        &self,
        entity_id: &str,
        author: &str,
        text: &str,
        rating: u8,
    ) -> GatewayResult<()> {
        let _span = tracing::debug_span!("json_write_comment",
            entity_id = %entity_id,
            author = %author,
            rating = rating
        )
        .entered();

        let mut data = self.lock();
        let thread = data.comments.entry(entity_id.to_string()).or_default();
        let record = CommentRecord::new(author, text, rating);

        if let Some(existing) = thread.iter_mut().find(|r| r.author == author) {
            *existing = record;
        } else {
            thread.push(record);
        }

        self.save(&data)
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        tracing::debug!("comment stored");
        Ok(())
    }
}
