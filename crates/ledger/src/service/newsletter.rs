use log::debug;
use model::client::Client;

/// Recipients collected for a single message. Built per call and dropped
/// after publishing.
#[derive(Default)]
pub struct Newsletter {
    subscribers: Vec<Client>,
}

impl Newsletter {
    pub fn new() -> Self {
        Newsletter::default()
    }

    pub fn register(&mut self, client: Client) {
        self.subscribers.push(client);
    }

    pub fn register_all(&mut self, clients: impl IntoIterator<Item = Client>) {
        self.subscribers.extend(clients);
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Delivers `message` to every subscriber in registration order.
    /// Returns the number of deliveries.
    pub fn publish(self, message: &str) -> usize {
        for client in &self.subscribers {
            client.notify(message);
        }
        debug!("Delivered newsletter to {} subscribers", self.subscribers.len());
        self.subscribers.len()
    }
}

/// Delivers `message` to each of `recipients`.
pub fn send(recipients: impl IntoIterator<Item = Client>, message: &str) -> usize {
    let mut newsletter = Newsletter::new();
    newsletter.register_all(recipients);
    newsletter.publish(message)
}

#[cfg(test)]
mod tests {
    use model::person::{Gender, Person};

    use super::*;

    fn client(name: &str) -> Client {
        Client::new(&Person::new(name, 0, Gender::Female, "01-01-1990").unwrap())
    }

    #[test]
    fn test_publish_reaches_every_subscriber_in_order() {
        let a = client("A");
        let b = client("B");
        let mut newsletter = Newsletter::new();
        newsletter.register(a.clone());
        newsletter.register(b.clone());
        assert_eq!(newsletter.publish("hello"), 2);
        assert_eq!(send(vec![a.clone()], "again"), 1);

        assert_eq!(a.notifications(), vec!["hello", "again"]);
        assert_eq!(b.notifications(), vec!["hello"]);
    }

    #[test]
    fn test_duplicate_registration_delivers_twice() {
        let a = client("A");
        assert_eq!(send(vec![a.clone(), a.clone()], "twice"), 2);
        assert_eq!(a.notifications().len(), 2);
    }

    #[test]
    fn test_empty_newsletter() {
        assert_eq!(send(Vec::new(), "nobody"), 0);
    }
}
