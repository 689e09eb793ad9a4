use std::{
    fmt::{self, Display},
    sync::Arc,
};

use log::info;
use model::{config::GymConfig, history::Action, person::Person, staff::Appointment};
use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use service::{calendar::Calendar, history::History, treasury::Treasury, users::Users};
use storage::{staff::StaffStore, Storage};
use tx_macro::tx;

pub mod secretary;
pub mod service;

pub use secretary::Secretary;

/// Gym-wide context: registries, balance and audit log.
#[derive(Clone)]
pub struct Gym {
    tx: Arc<ReentrantMutex<()>>,
    config: Arc<GymConfig>,
    staff: Arc<StaffStore>,
    pub users: Users,
    pub calendar: Calendar,
    pub treasury: Treasury,
    pub history: History,
}

impl Gym {
    pub fn new(storage: Storage, config: GymConfig) -> Self {
        let history = History::new(storage.history);
        let treasury = Treasury::new(storage.treasury);
        let users = Users::new(
            storage.clients,
            storage.instructors,
            history.clone(),
            config.min_client_age,
        );
        let calendar = Calendar::new(
            storage.calendar,
            config.catalog.clone(),
            config.senior_age,
            users.clone(),
            treasury.clone(),
            history.clone(),
        );
        Gym {
            tx: Arc::new(ReentrantMutex::new(())),
            config: Arc::new(config),
            staff: storage.staff,
            users,
            calendar,
            treasury,
            history,
        }
    }

    pub fn config(&self) -> &GymConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn balance(&self) -> i64 {
        self.treasury.balance()
    }

    pub(crate) fn tx_lock(&self) -> ReentrantMutexGuard<'_, ()> {
        self.tx.lock()
    }

    /// Appoints a new secretary. The previous one, if any, loses access for good.
    #[tx]
    pub fn appoint_secretary(&self, person: &Person, salary: i64) -> Secretary {
        let appointment = Appointment::new(person, salary);
        if let Some(previous) = self.staff.replace_secretary(appointment.clone()) {
            info!("Revoking access of secretary {}", previous.person.name());
            previous.access.revoke();
        }
        self.history.log(
            person.id(),
            Action::AppointSecretary {
                name: person.name().to_owned(),
            },
        );
        Secretary::new(appointment, self.clone())
    }

    pub fn secretary(&self) -> Option<Secretary> {
        self.staff
            .secretary()
            .map(|appointment| Secretary::new(appointment, self.clone()))
    }

    /// Gym summary: secretary, balance, clients, employees and sessions.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl Display for Gym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secretary = self.staff.secretary();
        writeln!(f, "Gym Name: {}", self.name())?;
        match &secretary {
            Some(secretary) => writeln!(f, "Gym Secretary: {}", secretary)?,
            None => writeln!(f, "Gym Secretary: -")?,
        }
        writeln!(f, "Gym Balance: {}", self.balance())?;

        writeln!(f)?;
        writeln!(f, "Clients Data:")?;
        for client in self.users.clients() {
            writeln!(f, "{}", client)?;
        }

        writeln!(f)?;
        writeln!(f, "Employees Data:")?;
        for instructor in self.users.instructors() {
            writeln!(f, "{}", instructor)?;
        }
        if let Some(secretary) = &secretary {
            writeln!(f, "{}", secretary)?;
        }

        writeln!(f)?;
        write!(f, "Sessions Data:")?;
        for session in self.calendar.sessions() {
            write!(f, "\n{}", session)?;
        }
        Ok(())
    }
}
