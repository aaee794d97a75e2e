//! Error types for the music list client.
//!
//! [`MusicListError`] is the crate-wide error and [`Result`] its alias.
//! [`GatewayError`] is the narrower failure reported by a
//! [`DataGateway`](crate::gateway::DataGateway); it is `Clone` so it can be
//! carried back from the worker thread inside a response message.

use thiserror::Error;

/// Failure reported by the remote catalogue.
///
/// Every variant is recoverable: the listing core turns it into an inline
/// error indicator and leaves the user free to retry the same request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never reached the store, or the connection dropped.
    #[error("transport error: {0}")]
    Transport(String),

    /// The store answered with an error.
    #[error("remote error: {0}")]
    Remote(String),

    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

/// The main error type for music list operations.
///
/// # Examples
///
/// ```
/// use musiclist::MusicListError;
///
/// fn check_text(text: &str) -> Result<(), MusicListError> {
///     if text.trim().is_empty() {
///         return Err(MusicListError::Validation("Please enter a comment.".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_text("  ").is_err());
/// ```
#[derive(Debug, Error)]
pub enum MusicListError {
    /// User input was rejected before any gateway call was made.
    ///
    /// The string is the message shown inline to the user.
    #[error("{0}")]
    Validation(String),

    /// The data gateway failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Local catalogue file could not be parsed or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for music list operations.
pub type Result<T> = std::result::Result<T, MusicListError>;
