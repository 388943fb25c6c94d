//! Lock status and the observer contract.

use crate::slide_lock::SlideLock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Settled state of a [`SlideLock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Handle rests at the leading edge
    #[default]
    Locked,
    /// Handle rests flush with the trailing edge
    Unlocked,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "Locked"),
            Self::Unlocked => write!(f, "Unlocked"),
        }
    }
}

/// Message returned from [`SlideLock::tick`] when a transition completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdated {
    /// The status the control settled in
    pub status: Status,
}

/// Observer notified once per completed lock/unlock transition.
///
/// Called after the settle animation finishes, never while the handle is
/// being dragged.
pub trait SlideLockDelegate: Send + Sync {
    /// The control settled in `status`.
    fn status_updated(&mut self, status: Status, sender: &SlideLock);
}
