use model::treasury::TreasuryEvent;
use parking_lot::RwLock;

/// Gym balance and the journal of movements that produced it.
#[derive(Default)]
pub struct TreasuryStore {
    inner: RwLock<TreasuryInner>,
}

#[derive(Default)]
struct TreasuryInner {
    balance: i64,
    events: Vec<TreasuryEvent>,
}

impl TreasuryStore {
    pub fn insert(&self, event: TreasuryEvent) {
        let mut inner = self.inner.write();
        inner.balance += event.delta();
        inner.events.push(event);
    }

    pub fn balance(&self) -> i64 {
        self.inner.read().balance
    }

    pub fn list(&self, limit: usize, offset: usize) -> Vec<TreasuryEvent> {
        self.inner
            .read()
            .events
            .iter()
            .rev()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }
}
