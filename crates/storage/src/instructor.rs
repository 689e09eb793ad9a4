use model::{ids::PersonId, instructor::Instructor};
use parking_lot::RwLock;

#[derive(Default)]
pub struct InstructorStore {
    instructors: RwLock<Vec<Instructor>>,
}

impl InstructorStore {
    pub fn insert(&self, instructor: Instructor) {
        self.instructors.write().push(instructor);
    }

    pub fn get(&self, id: PersonId) -> Option<Instructor> {
        self.instructors
            .read()
            .iter()
            .find(|instructor| instructor.id() == id)
            .cloned()
    }

    pub fn all(&self) -> Vec<Instructor> {
        self.instructors.read().clone()
    }
}
