//! In-memory guard roster stand-in.

use chrono::{DateTime, Utc};
use common::{GuardId, GuestId};
use tokio::sync::watch;

use crate::guest::Guest;

/// Observable guest roster for guard-mode operation with no backing store.
///
/// Single-writer discipline: exactly one owning task calls [`replace`] or
/// [`check_in`]; callers with more than one writer must serialize them
/// through that task. Any number of readers subscribe through a watch
/// receiver and always observe a complete roster snapshot, because every
/// mutation is a full-list replacement.
///
/// [`replace`]: GuardRoster::replace
/// [`check_in`]: GuardRoster::check_in
pub struct GuardRoster {
    tx: watch::Sender<Vec<Guest>>,
}

impl GuardRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Vec::new());
        Self { tx }
    }

    /// Replaces the whole roster with a fresh snapshot.
    pub fn replace(&self, roster: Vec<Guest>) {
        self.tx.send_replace(roster);
    }

    /// Subscribes to roster snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Guest>> {
        self.tx.subscribe()
    }

    /// Returns a copy of the current roster.
    pub fn snapshot(&self) -> Vec<Guest> {
        self.tx.borrow().clone()
    }

    /// Marks one guest checked in, publishing a replaced list.
    ///
    /// Returns false and leaves the roster untouched when the identifier is
    /// unknown or the guest is already checked in.
    pub fn check_in(&self, guest_id: &GuestId, guard: GuardId, at: DateTime<Utc>) -> bool {
        let mut roster = self.tx.borrow().clone();
        let Some(guest) = roster.iter_mut().find(|g| g.id == *guest_id) else {
            return false;
        };
        if guest.is_checked_in() {
            return false;
        }
        guest.check_in(guard, at);
        self.tx.send_replace(roster);
        true
    }
}

impl Default for GuardRoster {
    fn default() -> Self {
        Self::new()
    }
}
