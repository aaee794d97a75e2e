//! Render target for a listing screen.
//!
//! [`ListingPanel`] is the application's [`RenderSink`]: it keeps the
//! rendered items, the inline indicator, and the state of the load-more
//! button, and nothing else. View models are computed from it.

use crate::domain::MusicListError;
use crate::listing::controller::RenderSink;

/// Load-more button label while further pages may exist.
pub const LOAD_MORE_LABEL: &str = "Load more";

/// Load-more button label once the listing is exhausted.
pub const NO_MORE_LABEL: &str = "No more results";

/// Inline message shown above the rendered items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indicator {
    /// The search matched nothing.
    NoResults,
    /// The last fetch failed.
    Error(String),
}

/// Load-more button model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreButton {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Progress {
    NotSearched,
    More,
    Exhausted,
}

/// Rendered state of one listing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPanel<T> {
    items: Vec<T>,
    indicator: Option<Indicator>,
    progress: Progress,
}

impl<T> Default for ListingPanel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListingPanel<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            indicator: None,
            progress: Progress::NotSearched,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub const fn indicator(&self) -> Option<&Indicator> {
        self.indicator.as_ref()
    }

    #[must_use]
    pub fn has_searched(&self) -> bool {
        self.progress != Progress::NotSearched
    }

    /// Button state: enabled only while more pages may exist.
    #[must_use]
    pub fn load_more_button(&self) -> LoadMoreButton {
        match self.progress {
            Progress::NotSearched => LoadMoreButton {
                label: LOAD_MORE_LABEL,
                enabled: false,
            },
            Progress::More => LoadMoreButton {
                label: LOAD_MORE_LABEL,
                enabled: true,
            },
            Progress::Exhausted => LoadMoreButton {
                label: NO_MORE_LABEL,
                enabled: false,
            },
        }
    }
}

impl<T: Clone> RenderSink<T> for ListingPanel<T> {
    fn render(&mut self, items: &[T], is_first_page: bool, has_more: bool) {
        if is_first_page {
            self.items.clear();
        }
        self.items.extend_from_slice(items);
        self.indicator = None;
        self.progress = if has_more {
            Progress::More
        } else {
            Progress::Exhausted
        };
    }

    fn render_no_results(&mut self) {
        self.items.clear();
        self.indicator = Some(Indicator::NoResults);
        self.progress = Progress::Exhausted;
    }

    fn render_error(&mut self, error: &MusicListError) {
        self.indicator = Some(Indicator::Error(error.to_string()));
    }
}
