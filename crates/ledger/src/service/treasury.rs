use std::{ops::Deref, sync::Arc};

use model::{
    client::Client,
    person::Person,
    session::Session,
    treasury::{Event, TreasuryEvent},
};
use storage::treasury::TreasuryStore;

#[derive(Clone)]
pub struct Treasury {
    store: Arc<TreasuryStore>,
}

impl Treasury {
    pub fn new(store: Arc<TreasuryStore>) -> Self {
        Treasury { store }
    }

    /// Moves the session price from the client to the gym.
    pub(crate) fn collect_fee(&self, client: &Client, session: &Session) {
        let price = session.price();
        client.reduce_balance(price);
        self.store.insert(TreasuryEvent::income(
            Event::SessionFee {
                client: client.id(),
                session: session.id(),
            },
            price,
        ));
    }

    /// Moves `amount` from the gym to the employee.
    pub(crate) fn pay(&self, employee: &Person, amount: i64) {
        employee.increase_balance(amount);
        self.store.insert(TreasuryEvent::outcome(
            Event::Salary {
                employee: employee.id(),
            },
            amount,
        ));
    }
}

impl Deref for Treasury {
    type Target = TreasuryStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
