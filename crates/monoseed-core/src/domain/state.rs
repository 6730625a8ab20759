//! Run-level state machine of a setup.
//!
//! ```text
//! Init -> StructureReady -> VcsAttempted -> BackendReady -> FrontendReady -> Done
//!   \
//!    -> Cancelled
//! ```
//!
//! No state is revisited and nothing retries; a hard failure simply leaves
//! the machine where it was.

use std::fmt;

use super::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetupState {
    Init,
    StructureReady,
    VcsAttempted,
    BackendReady,
    FrontendReady,
    Done,
    Cancelled,
}

impl SetupState {
    /// The single forward successor, if any.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Init => Some(Self::StructureReady),
            Self::StructureReady => Some(Self::VcsAttempted),
            Self::VcsAttempted => Some(Self::BackendReady),
            Self::BackendReady => Some(Self::FrontendReady),
            Self::FrontendReady => Some(Self::Done),
            Self::Done | Self::Cancelled => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }

    /// Move to `to`, rejecting anything but the forward edge or
    /// `Init -> Cancelled`.
    pub fn transition(self, to: Self) -> Result<Self, DomainError> {
        let allowed = match (self, to) {
            (Self::Init, Self::Cancelled) => true,
            (from, to) => from.next() == Some(to),
        };

        if allowed {
            Ok(to)
        } else {
            Err(DomainError::IllegalTransition { from: self, to })
        }
    }
}

impl fmt::Display for SetupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Init => "init",
            Self::StructureReady => "structure-ready",
            Self::VcsAttempted => "vcs-attempted",
            Self::BackendReady => "backend-ready",
            Self::FrontendReady => "frontend-ready",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}
