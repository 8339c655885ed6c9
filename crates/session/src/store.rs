//! Observable session store.

use common::{Email, UserId, ValidationError};
use tokio::sync::watch;

/// The signed-in user's identity pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: UserId,
    pub email: Email,
}

/// Key-value session state exposed as a continuously observable pair.
///
/// Holds `None` while signed out and the validated identity pair while
/// signed in. Single-writer discipline: one owning task calls
/// [`sign_in`]/[`sign_out`]; additional writers must be serialized through
/// it. Readers subscribe with [`subscribe`] or poll [`current`] /
/// [`is_logged_in`].
///
/// [`sign_in`]: SessionStore::sign_in
/// [`sign_out`]: SessionStore::sign_out
/// [`subscribe`]: SessionStore::subscribe
/// [`current`]: SessionStore::current
/// [`is_logged_in`]: SessionStore::is_logged_in
pub struct SessionStore {
    tx: watch::Sender<Option<SessionUser>>,
}

impl SessionStore {
    /// Creates a signed-out session store.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    /// Validates and publishes the signed-in identity pair.
    ///
    /// Nothing is published when either value fails validation; the
    /// previous session state stays in place.
    pub fn sign_in(&self, user_id: &str, email: &str) -> Result<(), ValidationError> {
        let user = SessionUser {
            user_id: UserId::parse(user_id)?,
            email: Email::parse(email)?,
        };
        tracing::info!(user_id = %user.user_id, "session signed in");
        self.tx.send_replace(Some(user));
        Ok(())
    }

    /// Clears the session state.
    pub fn sign_out(&self) {
        if self.tx.send_replace(None).is_some() {
            tracing::info!("session signed out");
        }
    }

    /// Returns the current identity pair, if signed in.
    pub fn current(&self) -> Option<SessionUser> {
        self.tx.borrow().clone()
    }

    /// The boolean logged-in signal.
    pub fn is_logged_in(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Subscribes to session transitions.
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionUser>> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
