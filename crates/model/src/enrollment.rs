use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Soft reason an enrollment was not committed. Recorded in the audit log,
/// never raised as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    SessionNotInFuture,
    SeniorsOnly,
    GenderMismatch,
    NoAvailableSpots,
    InsufficientBalance,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rejection::SessionNotInFuture => "Session is not in the future",
            Rejection::SeniorsOnly => {
                "Client doesn't meet the age requirements for this session (Seniors)"
            }
            Rejection::GenderMismatch => {
                "Client's gender doesn't match the session's gender requirements"
            }
            Rejection::NoAvailableSpots => "No available spots for session",
            Rejection::InsufficientBalance => "Client doesn't have enough balance",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrollment {
    Committed,
    Rejected(Vec<Rejection>),
}

impl Enrollment {
    pub fn is_committed(&self) -> bool {
        matches!(self, Enrollment::Committed)
    }

    pub fn rejections(&self) -> &[Rejection] {
        match self {
            Enrollment::Committed => &[],
            Enrollment::Rejected(reasons) => reasons,
        }
    }
}
