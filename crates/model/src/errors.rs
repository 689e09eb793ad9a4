use std::fmt::{self, Display};

use thiserror::Error;

use crate::{
    ids::{PersonId, SessionId},
    session::SessionKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateContext {
    Registration,
    Enrollment,
}

impl Display for DuplicateContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DuplicateContext::Registration => "The client is already registered",
            DuplicateContext::Enrollment => "The client is already registered for this lesson",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotRegisteredContext {
    Unregister,
    Enrollment,
}

impl Display for NotRegisteredContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotRegisteredContext::Unregister => {
                "Registration is required before attempting to unregister"
            }
            NotRegisteredContext::Enrollment => {
                "The client is not registered with the gym and cannot enroll in lessons"
            }
        })
    }
}

#[derive(Error, Debug)]
pub enum GymError {
    #[error("Access denied: secretary has been replaced")]
    AccessDenied,
    #[error("Client must be at least {min_age} years old to register (age {age})")]
    InvalidAge { age: u32, min_age: u32 },
    #[error("{context}: {client}")]
    DuplicateClient {
        client: PersonId,
        context: DuplicateContext,
    },
    #[error("{context}: {client}")]
    ClientNotRegistered {
        client: PersonId,
        context: NotRegisteredContext,
    },
    #[error("Instructor {instructor} is not qualified to conduct {kind}")]
    InstructorNotQualified {
        instructor: PersonId,
        kind: SessionKind,
    },
    #[error("Session kind is not offered: {0}")]
    SessionKindNotOffered(SessionKind),
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),
    #[error("Common error: {0}")]
    Common(#[from] eyre::Error),
}

impl From<std::io::Error> for GymError {
    fn from(err: std::io::Error) -> Self {
        GymError::Common(err.into())
    }
}
