//! View model types computed from application state.
//!
//! View models hold display-ready strings and nothing else. They are built
//! from the listing panels and the detail data in [`AppState`] and consumed
//! by the renderer.
//!
//! # Example
//!
//! ```
//! use musiclist::ui::viewmodel::Displayable;
//! use musiclist::{Performer, PerformerCategory};
//!
//! let item = Performer::new("p1", "Blur", "GB", PerformerCategory::Group, 80).display_item();
//! assert_eq!(item.title, "Blur");
//! assert_eq!(item.meta, vec!["Type: Group · Country: GB · Score: 80".to_string()]);
//! ```

use crate::app::AppState;
use crate::domain::{Event, Performer, PerformerDetail};
use crate::listing::{Indicator, ListingPanel, LoadMoreButton};

/// Shown on the account screen when nobody is signed in.
pub const SIGNED_OUT_PLACEHOLDER: &str = "—";

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,

    /// Secondary lines under the title.
    pub meta: Vec<String>,
}

/// A value the listing screens know how to show.
pub trait Displayable {
    /// Plural noun used in listing titles and the no-results message.
    const NOUN: &'static str;

    fn display_item(&self) -> DisplayItem;
}

impl Displayable for Performer {
    const NOUN: &'static str = "performers";

    fn display_item(&self) -> DisplayItem {
        DisplayItem {
            title: self.name.clone(),
            meta: vec![format!(
                "Type: {} · Country: {} · Score: {}",
                self.category,
                or_unknown(&self.country),
                self.score
            )],
        }
    }
}

impl Displayable for Event {
    const NOUN: &'static str = "events";

    fn display_item(&self) -> DisplayItem {
        DisplayItem {
            title: self.name.clone(),
            meta: vec![
                format!(
                    "{} · {} · {}",
                    or_unknown(&self.category),
                    or_unknown(&self.performer_name),
                    or_unknown(&self.venue_name)
                ),
                format!(
                    "Begin: {} · End: {} · Score: {}",
                    or_unknown(&self.begin_date),
                    or_unknown(&self.end_date),
                    self.score
                ),
            ],
        }
    }
}

fn or_unknown(value: &str) -> &str {
    if value.trim().is_empty() {
        "Unknown"
    } else {
        value
    }
}

/// Everything a listing screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingViewModel {
    pub title: String,
    pub items: Vec<DisplayItem>,

    /// Inline indicator text (no results or the last error).
    pub message: Option<String>,

    pub button: LoadMoreButton,

    /// A fetch for this listing is outstanding.
    pub loading: bool,
}

impl ListingViewModel {
    /// Builds the view model for one listing panel.
    ///
    /// ```
    /// use musiclist::listing::ListingPanel;
    /// use musiclist::ui::ListingViewModel;
    /// use musiclist::Performer;
    ///
    /// let panel: ListingPanel<Performer> = ListingPanel::new();
    /// let vm = ListingViewModel::from_panel(&panel, false);
    /// assert_eq!(vm.title, "Search performers");
    /// assert!(vm.items.is_empty());
    /// assert!(vm.message.is_none());
    /// ```
    #[must_use]
    pub fn from_panel<T: Displayable>(panel: &ListingPanel<T>, loading: bool) -> Self {
        let message = panel.indicator().map(|indicator| match indicator {
            Indicator::NoResults => {
                format!("No {} found. Try different search terms.", T::NOUN)
            }
            Indicator::Error(message) => format!("Search failed: {message}"),
        });

        Self {
            title: format!("Search {}", T::NOUN),
            items: panel.items().iter().map(Displayable::display_item).collect(),
            message,
            button: panel.load_more_button(),
            loading,
        }
    }
}

/// Label and value on a detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Everything a detail screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    pub title: String,
    pub rows: Vec<DetailRow>,

    /// `title  m:ss` per top recording. Empty for events.
    pub recordings: Vec<String>,

    /// `author (rating/10): text` in arrival order. Empty for events.
    pub comments: Vec<String>,
}

impl DetailViewModel {
    #[must_use]
    pub fn performer(detail: &PerformerDetail) -> Self {
        let performer = &detail.performer;
        let average = detail
            .average_rating
            .map_or_else(|| "No ratings yet".to_string(), |avg| format!("{avg:.1}"));

        Self {
            title: performer.name.clone(),
            rows: vec![
                DetailRow::new("Artist", performer.name.clone()),
                DetailRow::new("Country", or_unknown(&performer.country)),
                DetailRow::new("Type", performer.category.label()),
                DetailRow::new("Average rating", average),
            ],
            recordings: detail
                .top_recordings
                .iter()
                .map(|song| format!("{}  {}", song.title, song.formatted_length()))
                .collect(),
            comments: detail
                .comments
                .iter()
                .map(|c| format!("{} ({}/10): {}", c.author, c.rating, c.text))
                .collect(),
        }
    }

    #[must_use]
    pub fn event(event: &Event) -> Self {
        Self {
            title: event.name.clone(),
            rows: vec![
                DetailRow::new("Name", event.name.clone()),
                DetailRow::new("Artist", or_unknown(&event.performer_name)),
                DetailRow::new("Type", or_unknown(&event.category)),
                DetailRow::new("Begin date", or_unknown(&event.begin_date)),
                DetailRow::new("End date", or_unknown(&event.end_date)),
                DetailRow::new("Time", event.time.as_deref().map_or("Unknown", or_unknown)),
                DetailRow::new("Place", or_unknown(&event.venue_name)),
                DetailRow::new("Score", event.score.to_string()),
            ],
            recordings: Vec::new(),
            comments: Vec::new(),
        }
    }
}

/// Text for the account screen.
#[must_use]
pub fn account_line(state: &AppState) -> String {
    let session = state.session();
    if session.is_signed_in() {
        format!("Signed in as {}", session.username())
    } else {
        SIGNED_OUT_PLACEHOLDER.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comment, CommentThread, PerformerCategory, PerformerExtras, Recording};
    use crate::listing::RenderSink;

    fn event() -> Event {
        Event {
            id: "e1".into(),
            name: "Glastonbury".into(),
            category: "Festival".into(),
            performer_name: "Blur".into(),
            begin_date: "2024-06-26".into(),
            end_date: "2024-06-30".into(),
            time: None,
            venue_name: "Worthy Farm".into(),
            score: 90,
        }
    }

    #[test]
    fn event_meta_has_two_lines() {
        let item = event().display_item();
        assert_eq!(item.meta[0], "Festival · Blur · Worthy Farm");
        assert_eq!(item.meta[1], "Begin: 2024-06-26 · End: 2024-06-30 · Score: 90");
    }

    #[test]
    fn blank_performer_country_shows_unknown() {
        let item = Performer::new("p", "X", "", PerformerCategory::Other, 1).display_item();
        assert_eq!(item.meta[0], "Type: Other · Country: Unknown · Score: 1");
    }

    #[test]
    fn no_results_message_names_the_listing() {
        let mut panel: ListingPanel<Event> = ListingPanel::new();
        panel.render_no_results();
        let vm = ListingViewModel::from_panel(&panel, false);
        assert_eq!(
            vm.message.as_deref(),
            Some("No events found. Try different search terms.")
        );
        assert!(!vm.button.enabled);
    }

    #[test]
    fn performer_detail_lists_recordings_and_comments() {
        let comments: CommentThread = vec![Comment {
            author: "ana".into(),
            text: "Great".into(),
            rating: 8,
        }]
        .into_iter()
        .collect();
        let extras = PerformerExtras {
            top_recordings: vec![Recording {
                title: "Song 2".into(),
                length_ms: Some(122_000),
            }],
            average_rating: comments.average_rating(),
            comments,
        };
        let detail = PerformerDetail::new(
            Performer::new("p1", "Blur", "GB", PerformerCategory::Group, 80),
            extras,
        );

        let vm = DetailViewModel::performer(&detail);
        assert_eq!(vm.recordings, vec!["Song 2  2:02".to_string()]);
        assert_eq!(vm.comments, vec!["ana (8/10): Great".to_string()]);
        assert_eq!(vm.rows[3].value, "8.0");
    }

    #[test]
    fn event_detail_shows_unknown_time() {
        let vm = DetailViewModel::event(&event());
        let time = vm.rows.iter().find(|row| row.label == "Time").map(|row| row.value.as_str());
        assert_eq!(time, Some("Unknown"));
    }
}
