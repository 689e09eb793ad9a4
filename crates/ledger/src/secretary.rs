use std::{
    fmt::{self, Display},
    io::Write,
};

use log::{info, warn};
use model::{
    client::Client,
    enrollment::Enrollment,
    errors::GymError,
    forum::Forum,
    history::{Action, HistoryRow},
    ids::PersonId,
    instructor::Instructor,
    person::Person,
    session::{Session, SessionKind},
    staff::{Access, Appointment},
};
use parking_lot::ReentrantMutexGuard;
use tx_macro::tx;

use crate::{service::newsletter, Gym};

/// Administrative entry point of the gym. Every operation fails with
/// [`GymError::AccessDenied`] once another secretary has been appointed.
#[derive(Clone)]
pub struct Secretary {
    appointment: Appointment,
    gym: Gym,
}

impl Secretary {
    pub(crate) fn new(appointment: Appointment, gym: Gym) -> Self {
        Secretary { appointment, gym }
    }

    pub fn person(&self) -> &Person {
        &self.appointment.person
    }

    pub fn salary(&self) -> i64 {
        self.appointment.salary
    }

    pub fn access(&self) -> Access {
        self.appointment.access.get()
    }

    pub fn has_access(&self) -> bool {
        self.appointment.access.is_active()
    }

    fn tx_lock(&self) -> ReentrantMutexGuard<'_, ()> {
        self.gym.tx_lock()
    }

    fn actor(&self) -> PersonId {
        self.appointment.person.id()
    }

    fn ensure_access(&self) -> Result<(), GymError> {
        if self.has_access() {
            Ok(())
        } else {
            warn!(
                "Secretary {} has no access to the gym",
                self.appointment.person.name()
            );
            Err(GymError::AccessDenied)
        }
    }

    #[tx]
    pub fn register_client(&self, person: &Person) -> Result<Client, GymError> {
        self.ensure_access()?;
        self.gym.users.register_client(self.actor(), person)
    }

    #[tx]
    pub fn unregister_client(&self, client: &Client) -> Result<(), GymError> {
        self.ensure_access()?;
        self.gym.users.unregister_client(self.actor(), client)
    }

    #[tx]
    pub fn hire_instructor(
        &self,
        person: &Person,
        hourly_wage: i64,
        qualifications: Vec<SessionKind>,
    ) -> Result<Instructor, GymError> {
        self.ensure_access()?;
        Ok(self
            .gym
            .users
            .hire_instructor(self.actor(), person, hourly_wage, qualifications))
    }

    /// Opens a session of `kind` at `start_at` (`dd-MM-yyyy HH:mm`).
    #[tx]
    pub fn open_session(
        &self,
        kind: SessionKind,
        start_at: &str,
        forum: Forum,
        instructor: &Instructor,
    ) -> Result<Session, GymError> {
        self.ensure_access()?;
        self.gym
            .calendar
            .open_session(self.actor(), kind, start_at, forum, instructor)
    }

    /// Enrolls `client` into `session`.
    ///
    /// Soft failures (time, forum, capacity, balance) are written to the audit
    /// log and returned as [`Enrollment::Rejected`]; only a repeated enrollment
    /// is an error.
    #[tx]
    pub fn enroll(&self, client: &Client, session: &Session) -> Result<Enrollment, GymError> {
        self.ensure_access()?;
        self.gym.calendar.enroll(self.actor(), client, session)
    }

    /// Sends `message` to everyone enrolled in `session`.
    #[tx]
    pub fn notify_session(&self, session: &Session, message: &str) -> Result<usize, GymError> {
        self.ensure_access()?;
        let session = self
            .gym
            .calendar
            .get(session.id())
            .ok_or(GymError::SessionNotFound(session.id()))?;
        let delivered = newsletter::send(session.roster().to_vec(), message);
        self.gym.history.log(
            self.actor(),
            Action::NotifySession {
                kind: session.kind(),
                start_at: session.start_at().to_owned(),
                message: message.to_owned(),
            },
        );
        Ok(delivered)
    }

    /// Sends `message` to every registered client.
    #[tx]
    pub fn notify_all(&self, message: &str) -> Result<usize, GymError> {
        self.ensure_access()?;
        let delivered = newsletter::send(self.gym.users.clients(), message);
        self.gym.history.log(
            self.actor(),
            Action::NotifyAll {
                message: message.to_owned(),
            },
        );
        Ok(delivered)
    }

    /// Sends `message` to everyone enrolled in a session on `date` (`dd-MM-yyyy`).
    #[tx]
    pub fn notify_date(&self, date: &str, message: &str) -> Result<usize, GymError> {
        self.ensure_access()?;
        let recipients = self
            .gym
            .calendar
            .sessions_on(date)
            .into_iter()
            .flat_map(|session| session.roster().to_vec());
        let delivered = newsletter::send(recipients, message);
        self.gym.history.log(
            self.actor(),
            Action::NotifyDate {
                date: date.to_owned(),
                message: message.to_owned(),
            },
        );
        Ok(delivered)
    }

    /// Pays the secretary's salary and every session's instructor wage.
    /// An instructor teaching several sessions is paid once per session.
    #[tx]
    pub fn pay_salaries(&self) -> Result<(), GymError> {
        self.ensure_access()?;
        let mut total = self.appointment.salary;
        self.gym
            .treasury
            .pay(&self.appointment.person, self.appointment.salary);
        for session in self.gym.calendar.sessions() {
            let instructor = session.instructor();
            self.gym
                .treasury
                .pay(instructor.person(), instructor.hourly_wage());
            total += instructor.hourly_wage();
        }
        info!("Paid {} in salaries", total);
        self.gym
            .history
            .log(self.actor(), Action::PaySalaries { total });
        Ok(())
    }

    #[tx]
    pub fn actions(&self) -> Result<Vec<HistoryRow>, GymError> {
        self.ensure_access()?;
        Ok(self.gym.history.all())
    }

    /// Writes the audit log, one action per line.
    #[tx]
    pub fn print_actions(&self, out: &mut impl Write) -> Result<(), GymError> {
        self.ensure_access()?;
        for line in self.gym.history.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

impl Display for Secretary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.appointment.fmt(f)
    }
}
