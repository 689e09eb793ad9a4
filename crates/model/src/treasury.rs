use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::ids::{PersonId, SessionId};

/// One movement of the gym balance. `debit` is money in, `credit` money out.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TreasuryEvent {
    pub date_time: DateTime<Utc>,
    pub event: Event,
    pub debit: i64,
    pub credit: i64,
}

impl TreasuryEvent {
    pub fn income(event: Event, amount: i64) -> Self {
        TreasuryEvent {
            date_time: Local::now().with_timezone(&Utc),
            event,
            debit: amount,
            credit: 0,
        }
    }

    pub fn outcome(event: Event, amount: i64) -> Self {
        TreasuryEvent {
            date_time: Local::now().with_timezone(&Utc),
            event,
            debit: 0,
            credit: amount,
        }
    }

    pub fn delta(&self) -> i64 {
        self.debit - self.credit
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SessionFee {
        client: PersonId,
        session: SessionId,
    },
    Salary {
        employee: PersonId,
    },
}
