use std::{
    fmt::{self, Display},
    sync::atomic::{AtomicU32, Ordering},
};

use serde::{Deserialize, Serialize};

const FIRST_PERSON_ID: u32 = 1111;
const FIRST_SESSION_ID: u32 = 1;

static NEXT_PERSON_ID: AtomicU32 = AtomicU32::new(FIRST_PERSON_ID);
static NEXT_SESSION_ID: AtomicU32 = AtomicU32::new(FIRST_SESSION_ID);

/// Process-wide person identity. Promoted records (client, instructor,
/// secretary) keep the id of the person they were made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(u32);

impl PersonId {
    pub fn next() -> Self {
        PersonId(NEXT_PERSON_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(u32);

impl SessionId {
    pub fn next() -> Self {
        SessionId(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
