//! Current identity and store connection.

use crate::gateway::StoreHandle;
use std::sync::{PoisonError, RwLock};

/// Who is signed in and which store connection is in use.
///
/// Getters never fail: a signed-out user is the empty string and a missing
/// connection is `None`. Setters overwrite unconditionally.
pub trait Session: Send + Sync {
    fn username(&self) -> String;

    /// Sets the current username. `None` signs out.
    fn set_username(&self, username: Option<&str>);

    fn store(&self) -> Option<StoreHandle>;

    fn set_store(&self, store: Option<StoreHandle>);

    fn is_signed_in(&self) -> bool {
        !self.username().is_empty()
    }
}

#[derive(Debug, Default)]
struct Identity {
    username: String,
    store: Option<StoreHandle>,
}

/// Thread-safe [`Session`] constructed once by the composition root and
/// handed to every component that needs it.
///
/// ```
/// use musiclist::session::{Session, SessionStore};
///
/// let session = SessionStore::new();
/// session.set_username(Some("ana"));
/// assert!(session.is_signed_in());
///
/// session.set_username(None);
/// assert_eq!(session.username(), "");
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    identity: RwLock<Identity>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a signed-out session bound to `store`.
    #[must_use]
    pub fn with_store(store: StoreHandle) -> Self {
        Self {
            identity: RwLock::new(Identity {
                username: String::new(),
                store: Some(store),
            }),
        }
    }
}

impl Session for SessionStore {
    fn username(&self) -> String {
        self.identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .username
            .clone()
    }

    fn set_username(&self, username: Option<&str>) {
        let username = username.map(str::trim).unwrap_or_default().to_string();
        tracing::debug!(username = %username, "session username set");
        self.identity
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .username = username;
    }

    fn store(&self) -> Option<StoreHandle> {
        self.identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .store
            .clone()
    }

    fn set_store(&self, store: Option<StoreHandle>) {
        tracing::debug!(present = store.is_some(), "session store set");
        self.identity
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .store = store;
    }
}
