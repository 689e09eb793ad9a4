use std::{
    fmt::{self, Display},
    ops::Deref,
    sync::Arc,
};

use parking_lot::Mutex;

use crate::person::Person;

/// Append-only list of messages delivered to a client.
#[derive(Debug, Clone, Default)]
pub struct Inbox(Arc<Mutex<Vec<String>>>);

impl Inbox {
    pub fn push(&self, message: &str) {
        self.0.lock().push(message.to_owned());
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    person: Person,
    inbox: Inbox,
}

impl Client {
    /// Promotes a person to a client. The balance stays shared with `person`.
    pub fn new(person: &Person) -> Client {
        Client {
            person: person.clone(),
            inbox: Inbox::default(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn notify(&self, message: &str) {
        self.inbox.push(message);
    }

    pub fn notifications(&self) -> Vec<String> {
        self.inbox.messages()
    }

    pub fn inbox(&self) -> &Inbox {
        &self.inbox
    }

    /// Inbox rendered as `[first, second]`.
    pub fn notifications_summary(&self) -> String {
        format!("[{}]", self.inbox.messages().join(", "))
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
    }
}

impl Eq for Client {}

impl Deref for Client {
    type Target = Person;

    fn deref(&self) -> &Self::Target {
        &self.person
    }
}

impl Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.person.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::person::Gender;

    use super::*;

    #[test]
    fn test_promotion_shares_balance() {
        let person = Person::new("Yael", 200, Gender::Female, "10-10-1990").unwrap();
        let client = Client::new(&person);
        assert_eq!(client.id(), person.id());

        client.reduce_balance(60);
        assert_eq!(person.balance(), 140);
        person.increase_balance(10);
        assert_eq!(client.balance(), 150);
    }

    #[test]
    fn test_inbox_is_ordered_and_shared_between_handles() {
        let person = Person::new("Omer", 0, Gender::Male, "10-10-1990").unwrap();
        let client = Client::new(&person);
        let handle = client.clone();
        client.notify("first");
        handle.notify("second");
        assert_eq!(client.notifications(), vec!["first", "second"]);
        assert_eq!(client.notifications_summary(), "[first, second]");
    }

    #[test]
    fn test_empty_inbox_summary() {
        let person = Person::new("Omer", 0, Gender::Male, "10-10-1990").unwrap();
        assert_eq!(Client::new(&person).notifications_summary(), "[]");
    }
}
