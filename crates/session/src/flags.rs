//! Remote flag service interface.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the remote flag backend.
#[derive(Debug, Error)]
pub enum FlagError {
    /// The flag backend could not be reached or answered garbage.
    #[error("flag service unavailable: {0}")]
    Unavailable(String),
}

/// Fetch-on-demand remote flags.
///
/// Each call fetches the current value with immediate-refresh semantics:
/// implementations must not serve a value staler than the backend's answer
/// at call time.
#[async_trait]
pub trait FlagService: Send + Sync {
    /// Whether the system is in maintenance mode.
    async fn maintenance(&self) -> Result<bool, FlagError>;
}

/// In-process flag service for wiring and tests.
///
/// The flag flips through [`StaticFlags::set_maintenance`]; reads always
/// see the latest write.
#[derive(Clone, Default)]
pub struct StaticFlags {
    maintenance: Arc<AtomicBool>,
}

impl StaticFlags {
    /// Creates a flag service with maintenance off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the maintenance flag.
    pub fn set_maintenance(&self, on: bool) {
        self.maintenance.store(on, Ordering::SeqCst);
    }
}

#[async_trait]
impl FlagService for StaticFlags {
    async fn maintenance(&self) -> Result<bool, FlagError> {
        Ok(self.maintenance.load(Ordering::SeqCst))
    }
}
