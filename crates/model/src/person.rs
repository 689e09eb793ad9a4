use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
    sync::Arc,
};

use chrono::NaiveDate;
use eyre::Result;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

use crate::ids::PersonId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, StrumDisplay, EnumString)]
pub enum Gender {
    Male,
    Female,
}

/// Balance cell shared by a person and every record promoted from it.
/// No lower bound is enforced: balances may go negative.
#[derive(Debug, Clone, Default)]
pub struct Wallet(Arc<Mutex<i64>>);

impl Wallet {
    pub fn new(balance: i64) -> Self {
        Wallet(Arc::new(Mutex::new(balance)))
    }

    pub fn balance(&self) -> i64 {
        *self.0.lock()
    }

    pub fn deposit(&self, amount: i64) {
        *self.0.lock() += amount;
    }

    pub fn withdraw(&self, amount: i64) {
        *self.0.lock() -= amount;
    }

    pub fn is_shared_with(&self, other: &Wallet) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    id: PersonId,
    name: String,
    gender: Gender,
    birthday: NaiveDate,
    wallet: Wallet,
}

impl Person {
    /// Birthday is expected as `dd-MM-yyyy`.
    pub fn new(name: impl Into<String>, balance: i64, gender: Gender, birthday: &str) -> Result<Person> {
        let birthday = time::parse_birthday(birthday)?;
        Ok(Person::with_birthday(name, balance, gender, birthday))
    }

    pub fn with_birthday(
        name: impl Into<String>,
        balance: i64,
        gender: Gender,
        birthday: NaiveDate,
    ) -> Person {
        Person {
            id: PersonId::next(),
            name: name.into(),
            gender,
            birthday,
            wallet: Wallet::new(balance),
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    pub fn age(&self) -> u32 {
        time::age(self.birthday)
    }

    pub fn balance(&self) -> i64 {
        self.wallet.balance()
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn increase_balance(&self, amount: i64) {
        self.wallet.deposit(amount);
    }

    pub fn reduce_balance(&self, amount: i64) {
        self.wallet.withdraw(amount);
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Gender: {} | Birthday: {} | Age: {} | Balance: {}",
            self.id,
            self.name,
            self.gender,
            time::format_birthday(self.birthday),
            self.age(),
            self.balance()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person_parses_birthday() {
        let person = Person::new("Nofar", 100, Gender::Female, "01-02-1990").unwrap();
        assert_eq!(person.birthday(), NaiveDate::from_ymd_opt(1990, 2, 1).unwrap());
        assert_eq!(person.balance(), 100);
        assert!(Person::new("Bad", 0, Gender::Male, "1990/02/01").is_err());
    }

    #[test]
    fn test_balance_may_go_negative() {
        let person = Person::new("Ari", 10, Gender::Male, "01-01-1990").unwrap();
        person.reduce_balance(25);
        assert_eq!(person.balance(), -15);
        person.increase_balance(20);
        assert_eq!(person.balance(), 5);
    }

    #[test]
    fn test_equality_by_id_only() {
        let a = Person::new("Same", 0, Gender::Male, "01-01-1990").unwrap();
        let b = Person::new("Same", 0, Gender::Male, "01-01-1990").unwrap();
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());

        let copy = a.clone();
        assert_eq!(a, copy);
        assert!(a.wallet().is_shared_with(copy.wallet()));
    }

    #[test]
    fn test_display() {
        let person = Person::new("Dana", 42, Gender::Female, "05-05-1985").unwrap();
        let line = person.to_string();
        assert!(line.starts_with(&format!("ID: {} | Name: Dana | Gender: Female", person.id())));
        assert!(line.contains("Birthday: 05-05-1985"));
        assert!(line.ends_with("Balance: 42"));
    }
}
