use std::{
    fmt::{self, Display},
    sync::Arc,
};

use parking_lot::Mutex;

use crate::person::Person;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Active,
    Revoked,
}

/// Access state shared between a secretary handle and the gym's record of it.
/// Once revoked it never becomes active again.
#[derive(Debug, Clone)]
pub struct AccessFlag(Arc<Mutex<Access>>);

impl AccessFlag {
    pub fn active() -> Self {
        AccessFlag(Arc::new(Mutex::new(Access::Active)))
    }

    pub fn get(&self) -> Access {
        *self.0.lock()
    }

    pub fn is_active(&self) -> bool {
        self.get() == Access::Active
    }

    pub fn revoke(&self) {
        *self.0.lock() = Access::Revoked;
    }
}

/// The gym's record of its secretary.
#[derive(Debug, Clone)]
pub struct Appointment {
    pub person: Person,
    pub salary: i64,
    pub access: AccessFlag,
}

impl Appointment {
    pub fn new(person: &Person, salary: i64) -> Self {
        Appointment {
            person: person.clone(),
            salary,
            access: AccessFlag::active(),
        }
    }
}

impl Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Role: Secretary | Salary per Month: {}",
            self.person, self.salary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revocation_is_visible_through_clones() {
        let flag = AccessFlag::active();
        let copy = flag.clone();
        assert!(copy.is_active());
        flag.revoke();
        assert_eq!(copy.get(), Access::Revoked);
    }
}
