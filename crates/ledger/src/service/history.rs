use std::{ops::Deref, sync::Arc};

use log::{info, warn};
use model::{
    enrollment::Rejection,
    history::{Action, HistoryRow},
    ids::PersonId,
};
use storage::history::HistoryStore;

#[derive(Clone)]
pub struct History {
    store: Arc<HistoryStore>,
}

impl History {
    pub fn new(store: Arc<HistoryStore>) -> Self {
        History { store }
    }

    pub fn log(&self, actor: PersonId, action: Action) {
        let entry = HistoryRow::new(actor, action);
        info!("{}", entry);
        self.store.store(entry);
    }

    pub fn reject_enrollment(&self, actor: PersonId, client: PersonId, reason: Rejection) {
        let entry = HistoryRow::new(actor, Action::RejectEnrollment { client, reason });
        warn!("{} (client {})", entry, client);
        self.store.store(entry);
    }

    /// Audit lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.store.all().iter().map(|row| row.to_string()).collect()
    }
}

impl Deref for History {
    type Target = HistoryStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
