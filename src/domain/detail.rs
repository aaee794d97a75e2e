//! Performer detail data: top recordings, comments, and average rating.

use crate::domain::comment::CommentThread;
use crate::domain::performer::Performer;
use serde::{Deserialize, Serialize};

/// Milliseconds in one second.
const MILLIS_PER_SECOND: u64 = 1000;

/// Seconds in one minute.
const SECONDS_PER_MINUTE: u64 = 60;

/// A recording listed among a performer's top songs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub title: String,
    /// Track length in milliseconds, `None` when the store does not know it.
    #[serde(default)]
    pub length_ms: Option<u64>,
}

impl Recording {
    /// Returns the length formatted as `m:ss`, or `--:--` when unknown.
    ///
    /// ```
    /// use musiclist::domain::Recording;
    ///
    /// let song = Recording { title: "Intro".into(), length_ms: Some(185_000) };
    /// assert_eq!(song.formatted_length(), "3:05");
    /// ```
    #[must_use]
    pub fn formatted_length(&self) -> String {
        self.length_ms.map_or_else(
            || "--:--".to_string(),
            |ms| {
                let total_seconds = ms / MILLIS_PER_SECOND;
                let minutes = total_seconds / SECONDS_PER_MINUTE;
                let seconds = total_seconds % SECONDS_PER_MINUTE;
                format!("{minutes}:{seconds:02}")
            },
        )
    }
}

/// What `read_performer_detail` returns for a performer id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformerExtras {
    pub top_recordings: Vec<Recording>,
    pub comments: CommentThread,
    pub average_rating: Option<f64>,
}

/// Everything the performer detail screen needs, as value data.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformerDetail {
    pub performer: Performer,
    pub top_recordings: Vec<Recording>,
    pub comments: CommentThread,
    pub average_rating: Option<f64>,
}

impl PerformerDetail {
    #[must_use]
    pub fn new(performer: Performer, extras: PerformerExtras) -> Self {
        Self {
            performer,
            top_recordings: extras.top_recordings,
            comments: extras.comments,
            average_rating: extras.average_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_length_uses_placeholder() {
        let song = Recording {
            title: "Untitled".to_string(),
            length_ms: None,
        };
        assert_eq!(song.formatted_length(), "--:--");
    }

    #[test]
    fn sub_minute_length_pads_seconds() {
        let song = Recording {
            title: "Short".to_string(),
            length_ms: Some(7_400),
        };
        assert_eq!(song.formatted_length(), "0:07");
    }
}
