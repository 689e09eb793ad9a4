use model::{ids::SessionId, session::Session};
use parking_lot::RwLock;

/// Scheduled sessions in the order they were opened.
#[derive(Default)]
pub struct CalendarStore {
    sessions: RwLock<Vec<Session>>,
}

impl CalendarStore {
    pub fn insert(&self, session: Session) {
        self.sessions.write().push(session);
    }

    pub fn get(&self, id: SessionId) -> Option<Session> {
        self.sessions
            .read()
            .iter()
            .find(|session| session.id() == id)
            .cloned()
    }

    /// Applies `f` to the stored session. Returns `None` if there is no such session.
    pub fn update<R>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut sessions = self.sessions.write();
        sessions.iter_mut().find(|session| session.id() == id).map(f)
    }

    /// Sessions whose stored time starts with `date` (`dd-MM-yyyy`).
    pub fn find_by_date(&self, date: &str) -> Vec<Session> {
        self.sessions
            .read()
            .iter()
            .filter(|session| session.date() == date)
            .cloned()
            .collect()
    }

    pub fn all(&self) -> Vec<Session> {
        self.sessions.read().clone()
    }

    pub fn count(&self) -> usize {
        self.sessions.read().len()
    }
}
