use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::{client::Client, forum::Forum, ids::SessionId, instructor::Instructor};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum SessionKind {
    Pilates,
    MachinePilates,
    ThaiBoxing,
    Ninja,
}

/// Fixed price and capacity of a session kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    pub price: i64,
    pub capacity: u32,
}

const DEFAULT_TARIFFS: [(SessionKind, Tariff); 4] = [
    (SessionKind::Pilates, Tariff { price: 60, capacity: 30 }),
    (SessionKind::ThaiBoxing, Tariff { price: 100, capacity: 20 }),
    (SessionKind::MachinePilates, Tariff { price: 80, capacity: 10 }),
    (SessionKind::Ninja, Tariff { price: 150, capacity: 5 }),
];

/// Kinds of sessions the gym offers. Acts as the session factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tariffs: Vec<(SessionKind, Tariff)>,
}

impl Catalog {
    pub fn new(tariffs: Vec<(SessionKind, Tariff)>) -> Self {
        Catalog { tariffs }
    }

    pub fn tariff(&self, kind: SessionKind) -> Option<Tariff> {
        self.tariffs
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, tariff)| *tariff)
    }

    pub fn kinds(&self) -> impl Iterator<Item = SessionKind> + '_ {
        self.tariffs.iter().map(|(kind, _)| *kind)
    }

    pub fn without(mut self, kind: SessionKind) -> Self {
        self.tariffs.retain(|(k, _)| *k != kind);
        self
    }

    /// A fresh session of `kind` waiting for time, forum and instructor,
    /// or `None` when the kind is not offered.
    pub fn blank(&self, kind: SessionKind) -> Option<BlankSession> {
        self.tariff(kind).map(|tariff| BlankSession { kind, tariff })
    }

    /// Same as [`Catalog::blank`] for a kind given by name.
    pub fn blank_by_name(&self, kind: &str) -> Option<BlankSession> {
        kind.parse::<SessionKind>()
            .ok()
            .and_then(|kind| self.blank(kind))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(DEFAULT_TARIFFS.to_vec())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankSession {
    kind: SessionKind,
    tariff: Tariff,
}

impl BlankSession {
    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn tariff(&self) -> Tariff {
        self.tariff
    }

    pub fn open(self, start_at: impl Into<String>, forum: Forum, instructor: Instructor) -> Session {
        Session {
            id: SessionId::next(),
            kind: self.kind,
            tariff: self.tariff,
            start_at: start_at.into(),
            forum,
            instructor,
            enrolled: 0,
            roster: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    kind: SessionKind,
    tariff: Tariff,
    start_at: String,
    forum: Forum,
    instructor: Instructor,
    enrolled: u32,
    roster: Vec<Client>,
}

impl Session {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn price(&self) -> i64 {
        self.tariff.price
    }

    pub fn capacity(&self) -> u32 {
        self.tariff.capacity
    }

    pub fn enrolled(&self) -> u32 {
        self.enrolled
    }

    /// Remaining capacity.
    pub fn places(&self) -> u32 {
        self.tariff.capacity.saturating_sub(self.enrolled)
    }

    pub fn is_full(&self) -> bool {
        self.places() == 0
    }

    /// Scheduled time as given when the session was opened (`dd-MM-yyyy HH:mm`).
    pub fn start_at(&self) -> &str {
        &self.start_at
    }

    pub fn date(&self) -> &str {
        time::date_part(&self.start_at)
    }

    pub fn forum(&self) -> Forum {
        self.forum
    }

    pub fn instructor(&self) -> &Instructor {
        &self.instructor
    }

    pub fn roster(&self) -> &[Client] {
        &self.roster
    }

    pub fn is_registered(&self, client: &Client) -> bool {
        self.roster.contains(client)
    }

    /// Adds `client` to the roster unless already present.
    pub fn add_client(&mut self, client: Client) -> bool {
        if self.is_registered(&client) {
            return false;
        }
        self.roster.push(client);
        true
    }

    /// Counts one more participant. Saturates at capacity.
    pub fn take_place(&mut self) {
        if self.enrolled < self.tariff.capacity {
            self.enrolled += 1;
        }
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Session {}

impl Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Session Type: {} | Date: {} | Forum: {} | Instructor: {} | Participants: {}/{}",
            self.kind,
            self.start_at,
            self.forum,
            self.instructor.name(),
            self.enrolled,
            self.tariff.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator as _;

    use crate::person::{Gender, Person};

    use super::*;

    fn instructor() -> Instructor {
        let person = Person::new("Coach", 0, Gender::Female, "01-01-1985").unwrap();
        Instructor::new(&person, 50, SessionKind::iter().collect())
    }

    fn client(name: &str) -> Client {
        Client::new(&Person::new(name, 0, Gender::Male, "01-01-1995").unwrap())
    }

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.tariff(SessionKind::Pilates),
            Some(Tariff { price: 60, capacity: 30 })
        );
        assert_eq!(
            catalog.tariff(SessionKind::ThaiBoxing),
            Some(Tariff { price: 100, capacity: 20 })
        );
        assert_eq!(
            catalog.tariff(SessionKind::MachinePilates),
            Some(Tariff { price: 80, capacity: 10 })
        );
        assert_eq!(catalog.kinds().count(), SessionKind::iter().count());
    }

    #[test]
    fn test_factory_returns_none_for_unknown_kind() {
        let catalog = Catalog::default().without(SessionKind::Ninja);
        assert!(catalog.blank(SessionKind::Ninja).is_none());
        assert!(catalog.blank(SessionKind::Pilates).is_some());
        assert!(catalog.blank_by_name("Yoga").is_none());
        assert_eq!(
            catalog.blank_by_name("ThaiBoxing").map(|blank| blank.kind()),
            Some(SessionKind::ThaiBoxing)
        );
    }

    #[test]
    fn test_take_place_saturates() {
        let mut session = Catalog::default()
            .blank(SessionKind::MachinePilates)
            .unwrap()
            .open("01-01-2100 10:00", Forum::All, instructor());
        for _ in 0..25 {
            session.take_place();
        }
        assert_eq!(session.enrolled(), 10);
        assert_eq!(session.places(), 0);
        assert!(session.is_full());
    }

    #[test]
    fn test_roster_holds_client_once() {
        let mut session = Catalog::default()
            .blank(SessionKind::Pilates)
            .unwrap()
            .open("01-01-2100 10:00", Forum::All, instructor());
        let dana = client("Dana");
        assert!(session.add_client(dana.clone()));
        assert!(!session.add_client(dana.clone()));
        assert_eq!(session.roster().len(), 1);
        assert!(session.is_registered(&dana));
        assert!(!session.is_registered(&client("Other")));
    }

    #[test]
    fn test_display() {
        let mut session = Catalog::default()
            .blank(SessionKind::ThaiBoxing)
            .unwrap()
            .open("23-01-2100 10:00", Forum::Male, instructor());
        session.take_place();
        assert_eq!(
            session.to_string(),
            "Session Type: ThaiBoxing | Date: 23-01-2100 10:00 | Forum: Male | Instructor: Coach | Participants: 1/20"
        );
        assert_eq!(session.date(), "23-01-2100");
    }
}
