//! Comments and ratings attached to catalogue entries.
//!
//! Each author has at most one comment per entry. A [`CommentThread`] keeps
//! comments in arrival order; a later comment by the same author replaces
//! the earlier one in place.

use crate::domain::error::{MusicListError, Result};
use serde::{Deserialize, Serialize};

/// Highest rating a user can give.
pub const MAX_RATING: u8 = 10;

/// A user comment with its rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub rating: u8,
}

/// Unvalidated comment input collected from the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub author: String,
    pub text: String,
    pub rating: u8,
}

impl CommentDraft {
    #[must_use]
    pub fn new(author: impl Into<String>, text: impl Into<String>, rating: u8) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            rating,
        }
    }

    /// Validates the draft and returns the comment to submit.
    ///
    /// The text is trimmed. Runs before any gateway call, so a rejected
    /// draft never reaches the store.
    ///
    /// # Errors
    ///
    /// Returns [`MusicListError::Validation`] when the author is empty
    /// (signed out), the text is blank, or the rating exceeds [`MAX_RATING`].
    pub fn validate(self) -> Result<Comment> {
        if self.author.trim().is_empty() {
            return Err(MusicListError::Validation(
                "Sign in to add a comment.".to_string(),
            ));
        }
        let text = self.text.trim();
        if text.is_empty() {
            return Err(MusicListError::Validation(
                "Please enter a comment.".to_string(),
            ));
        }
        if self.rating > MAX_RATING {
            return Err(MusicListError::Validation(format!(
                "Rating must be between 0 and {MAX_RATING}."
            )));
        }
        Ok(Comment {
            author: self.author,
            text: text.to_string(),
            rating: self.rating,
        })
    }
}

/// Comments on one entry, one per author, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentThread {
    comments: Vec<Comment>,
}

impl CommentThread {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            comments: Vec::new(),
        }
    }

    /// Adds a comment, replacing any earlier comment by the same author.
    ///
    /// A replaced comment keeps its original position.
    pub fn upsert(&mut self, comment: Comment) {
        if let Some(existing) = self
            .comments
            .iter_mut()
            .find(|existing| existing.author == comment.author)
        {
            *existing = comment;
        } else {
            self.comments.push(comment);
        }
    }

    #[must_use]
    pub fn get(&self, author: &str) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.author == author)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.comments.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Mean rating across all comments, `None` when there are none.
    #[must_use]
    pub fn average_rating(&self) -> Option<f64> {
        if self.comments.is_empty() {
            return None;
        }
        let total: u32 = self.comments.iter().map(|c| u32::from(c.rating)).sum();
        #[allow(clippy::cast_precision_loss)]
        let count = self.comments.len() as f64;
        Some(f64::from(total) / count)
    }
}

impl FromIterator<Comment> for CommentThread {
    fn from_iter<I: IntoIterator<Item = Comment>>(iter: I) -> Self {
        let mut thread = Self::new();
        for comment in iter {
            thread.upsert(comment);
        }
        thread
    }
}

impl<'a> IntoIterator for &'a CommentThread {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.comments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(author: &str, text: &str, rating: u8) -> Comment {
        Comment {
            author: author.to_string(),
            text: text.to_string(),
            rating,
        }
    }

    #[test]
    fn upsert_replaces_same_author_in_place() {
        let mut thread = CommentThread::new();
        thread.upsert(comment("ana", "first", 4));
        thread.upsert(comment("ben", "second", 6));
        thread.upsert(comment("ana", "changed my mind", 9));

        let authors: Vec<&str> = thread.iter().map(|c| c.author.as_str()).collect();
        assert_eq!(authors, vec!["ana", "ben"]);
        assert_eq!(thread.get("ana").map(|c| c.text.as_str()), Some("changed my mind"));
    }

    #[test]
    fn average_rating_is_none_when_empty() {
        assert_eq!(CommentThread::new().average_rating(), None);

        let thread: CommentThread = vec![comment("a", "x", 3), comment("b", "y", 8)]
            .into_iter()
            .collect();
        assert_eq!(thread.average_rating(), Some(5.5));
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = CommentDraft::new("ana", "   ", 5).validate().unwrap_err();
        assert!(matches!(err, MusicListError::Validation(_)));
    }

    #[test]
    fn signed_out_author_is_rejected() {
        let err = CommentDraft::new("", "great gig", 5).validate().unwrap_err();
        assert!(matches!(err, MusicListError::Validation(_)));
    }

    #[test]
    fn rating_above_ten_is_rejected() {
        assert!(CommentDraft::new("ana", "ok", 11).validate().is_err());
        assert!(CommentDraft::new("ana", "ok", 10).validate().is_ok());
    }

    #[test]
    fn validate_trims_text() {
        let comment = CommentDraft::new("ana", "  loud  ", 0).validate().unwrap();
        assert_eq!(comment.text, "loud");
    }
}
