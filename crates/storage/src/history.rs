use eyre::{Context as _, Result};
use model::{history::HistoryRow, ids::PersonId};
use parking_lot::RwLock;

/// Append-only audit log.
#[derive(Default)]
pub struct HistoryStore {
    rows: RwLock<Vec<HistoryRow>>,
}

impl HistoryStore {
    pub fn store(&self, entry: HistoryRow) {
        self.rows.write().push(entry);
    }

    /// All rows, oldest first.
    pub fn all(&self) -> Vec<HistoryRow> {
        self.rows.read().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    pub fn actor_logs(&self, actor: PersonId) -> Vec<HistoryRow> {
        self.rows
            .read()
            .iter()
            .filter(|row| row.actor == actor)
            .cloned()
            .collect()
    }

    pub fn dump(&self) -> Result<String> {
        serde_json::to_string_pretty(&*self.rows.read()).context("Failed to dump history")
    }
}

#[cfg(test)]
mod tests {
    use model::history::Action;

    use super::*;

    #[test]
    fn test_rows_keep_insert_order() {
        let store = HistoryStore::default();
        let actor = PersonId::next();
        store.store(HistoryRow::new(
            actor,
            Action::NotifyAll {
                message: "one".to_owned(),
            },
        ));
        store.store(HistoryRow::new(
            PersonId::next(),
            Action::NotifyAll {
                message: "two".to_owned(),
            },
        ));
        let lines = store.all().iter().map(|row| row.to_string()).collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "A message was sent to all gym clients: one",
                "A message was sent to all gym clients: two"
            ]
        );
        assert_eq!(store.actor_logs(actor).len(), 1);
        assert!(store.dump().unwrap().contains("NotifyAll"));
    }
}
