use std::fmt::{self, Display};

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::{enrollment::Rejection, ids::PersonId, session::SessionKind};

#[derive(Serialize, Debug, Clone)]
pub struct HistoryRow {
    pub actor: PersonId,
    pub date_time: DateTime<Utc>,
    pub action: Action,
}

impl HistoryRow {
    pub fn new(actor: PersonId, action: Action) -> Self {
        HistoryRow {
            actor,
            date_time: Local::now().with_timezone(&Utc),
            action,
        }
    }
}

impl Display for HistoryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.action.fmt(f)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AppointSecretary {
        name: String,
    },
    RegisterClient {
        client: PersonId,
        name: String,
    },
    UnregisterClient {
        client: PersonId,
        name: String,
    },
    HireInstructor {
        instructor: PersonId,
        name: String,
        hourly_wage: i64,
    },
    OpenSession {
        kind: SessionKind,
        start_at: String,
        instructor: String,
    },
    RejectEnrollment {
        client: PersonId,
        reason: Rejection,
    },
    Enroll {
        client: PersonId,
        name: String,
        kind: SessionKind,
        start_at: String,
        price: i64,
    },
    NotifySession {
        kind: SessionKind,
        start_at: String,
        message: String,
    },
    NotifyAll {
        message: String,
    },
    NotifyDate {
        date: String,
        message: String,
    },
    PaySalaries {
        total: i64,
    },
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AppointSecretary { name } => {
                write!(f, "A new secretary has started working at the gym: {}", name)
            }
            Action::RegisterClient { name, .. } => write!(f, "Registered new client: {}", name),
            Action::UnregisterClient { name, .. } => write!(f, "Unregistered client: {}", name),
            Action::HireInstructor {
                name, hourly_wage, ..
            } => write!(
                f,
                "Hired new instructor: {} with salary per hour: {}",
                name, hourly_wage
            ),
            Action::OpenSession {
                kind,
                start_at,
                instructor,
            } => write!(
                f,
                "Created new session: {} on {} with instructor: {}",
                kind,
                time::display_time(start_at),
                instructor
            ),
            Action::RejectEnrollment { reason, .. } => {
                write!(f, "Failed registration: {}", reason)
            }
            Action::Enroll {
                name,
                kind,
                start_at,
                price,
                ..
            } => write!(
                f,
                "Registered client: {} to session: {} on {} for price: {}",
                name,
                kind,
                time::display_time(start_at),
                price
            ),
            Action::NotifySession {
                kind,
                start_at,
                message,
            } => write!(
                f,
                "A message was sent to everyone registered for session {} on {} : {}",
                kind,
                time::display_time(start_at),
                message
            ),
            Action::NotifyAll { message } => {
                write!(f, "A message was sent to all gym clients: {}", message)
            }
            Action::NotifyDate { date, message } => write!(
                f,
                "A message was sent to everyone registered for a session on {} : {}",
                time::display_date(date),
                message
            ),
            Action::PaySalaries { .. } => f.write_str("Salaries have been paid to all employees"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lines_use_iso_time() {
        let action = Action::OpenSession {
            kind: SessionKind::Pilates,
            start_at: "23-01-2025 10:00".to_owned(),
            instructor: "Yuval".to_owned(),
        };
        assert_eq!(
            action.to_string(),
            "Created new session: Pilates on 2025-01-23T10:00 with instructor: Yuval"
        );
    }

    #[test]
    fn test_rejection_line() {
        let action = Action::RejectEnrollment {
            client: PersonId::next(),
            reason: Rejection::NoAvailableSpots,
        };
        assert_eq!(
            action.to_string(),
            "Failed registration: No available spots for session"
        );
    }

    #[test]
    fn test_notify_date_line() {
        let action = Action::NotifyDate {
            date: "14-01-2025".to_owned(),
            message: "Heavy traffic".to_owned(),
        };
        assert_eq!(
            action.to_string(),
            "A message was sent to everyone registered for a session on 2025-01-14 : Heavy traffic"
        );
    }
}
