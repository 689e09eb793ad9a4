use std::sync::Arc;

use model::{
    client::Client,
    errors::{DuplicateContext, GymError, NotRegisteredContext},
    history::Action,
    ids::PersonId,
    instructor::Instructor,
    person::Person,
    session::SessionKind,
};
use storage::{instructor::InstructorStore, user::ClientStore};

use super::history::History;

#[derive(Clone)]
pub struct Users {
    clients: Arc<ClientStore>,
    instructors: Arc<InstructorStore>,
    logs: History,
    min_client_age: u32,
}

impl Users {
    pub(crate) fn new(
        clients: Arc<ClientStore>,
        instructors: Arc<InstructorStore>,
        logs: History,
        min_client_age: u32,
    ) -> Self {
        Users {
            clients,
            instructors,
            logs,
            min_client_age,
        }
    }

    pub(crate) fn register_client(
        &self,
        actor: PersonId,
        person: &Person,
    ) -> Result<Client, GymError> {
        let client = Client::new(person);
        let age = client.age();
        if age < self.min_client_age {
            return Err(GymError::InvalidAge {
                age,
                min_age: self.min_client_age,
            });
        }
        if self.clients.contains(person.id()) {
            return Err(GymError::DuplicateClient {
                client: person.id(),
                context: DuplicateContext::Registration,
            });
        }
        self.clients.insert(client.clone());
        self.logs.log(
            actor,
            Action::RegisterClient {
                client: client.id(),
                name: client.name().to_owned(),
            },
        );
        Ok(client)
    }

    pub(crate) fn unregister_client(&self, actor: PersonId, client: &Client) -> Result<(), GymError> {
        let removed = self
            .clients
            .remove(client.id())
            .ok_or(GymError::ClientNotRegistered {
                client: client.id(),
                context: NotRegisteredContext::Unregister,
            })?;
        self.logs.log(
            actor,
            Action::UnregisterClient {
                client: removed.id(),
                name: removed.name().to_owned(),
            },
        );
        Ok(())
    }

    pub(crate) fn hire_instructor(
        &self,
        actor: PersonId,
        person: &Person,
        hourly_wage: i64,
        qualifications: Vec<SessionKind>,
    ) -> Instructor {
        let instructor = Instructor::new(person, hourly_wage, qualifications);
        self.instructors.insert(instructor.clone());
        self.logs.log(
            actor,
            Action::HireInstructor {
                instructor: instructor.id(),
                name: instructor.name().to_owned(),
                hourly_wage,
            },
        );
        instructor
    }

    pub fn is_registered(&self, id: PersonId) -> bool {
        self.clients.contains(id)
    }

    pub fn client(&self, id: PersonId) -> Option<Client> {
        self.clients.get(id)
    }

    pub fn clients(&self) -> Vec<Client> {
        self.clients.all()
    }

    pub fn instructor(&self, id: PersonId) -> Option<Instructor> {
        self.instructors.get(id)
    }

    pub fn instructors(&self) -> Vec<Instructor> {
        self.instructors.all()
    }
}
