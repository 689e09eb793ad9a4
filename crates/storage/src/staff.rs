use model::staff::Appointment;
use parking_lot::RwLock;

/// Holds the current secretary appointment.
#[derive(Default)]
pub struct StaffStore {
    secretary: RwLock<Option<Appointment>>,
}

impl StaffStore {
    pub fn secretary(&self) -> Option<Appointment> {
        self.secretary.read().clone()
    }

    /// Stores `appointment` and returns the one it replaced.
    pub fn replace_secretary(&self, appointment: Appointment) -> Option<Appointment> {
        self.secretary.write().replace(appointment)
    }
}
