use model::{client::Client, ids::PersonId};
use parking_lot::RwLock;

/// Registered clients in registration order.
#[derive(Default)]
pub struct ClientStore {
    clients: RwLock<Vec<Client>>,
}

impl ClientStore {
    pub fn insert(&self, client: Client) {
        self.clients.write().push(client);
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.clients.read().iter().any(|client| client.id() == id)
    }

    pub fn get(&self, id: PersonId) -> Option<Client> {
        self.clients
            .read()
            .iter()
            .find(|client| client.id() == id)
            .cloned()
    }

    pub fn remove(&self, id: PersonId) -> Option<Client> {
        let mut clients = self.clients.write();
        let idx = clients.iter().position(|client| client.id() == id)?;
        Some(clients.remove(idx))
    }

    pub fn all(&self) -> Vec<Client> {
        self.clients.read().clone()
    }

    pub fn count(&self) -> usize {
        self.clients.read().len()
    }
}

#[cfg(test)]
mod tests {
    use model::person::{Gender, Person};

    use super::*;

    #[test]
    fn test_insert_remove() {
        let store = ClientStore::default();
        let a = Client::new(&Person::new("A", 0, Gender::Male, "01-01-1990").unwrap());
        let b = Client::new(&Person::new("B", 0, Gender::Female, "01-01-1990").unwrap());
        store.insert(a.clone());
        store.insert(b.clone());
        assert!(store.contains(a.id()));
        assert_eq!(store.remove(a.id()), Some(a.clone()));
        assert!(!store.contains(a.id()));
        assert_eq!(store.remove(a.id()), None);
        assert_eq!(store.all(), vec![b]);
    }
}
