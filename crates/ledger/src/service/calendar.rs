use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use model::{
    client::Client,
    enrollment::{Enrollment, Rejection},
    errors::{DuplicateContext, GymError, NotRegisteredContext},
    forum::Forum,
    history::Action,
    ids::{PersonId, SessionId},
    instructor::Instructor,
    session::{Catalog, Session, SessionKind},
};
use storage::calendar::CalendarStore;

use super::{history::History, treasury::Treasury, users::Users};

#[derive(Clone)]
pub struct Calendar {
    store: Arc<CalendarStore>,
    catalog: Catalog,
    senior_age: u32,
    users: Users,
    treasury: Treasury,
    logs: History,
}

impl Calendar {
    pub(crate) fn new(
        store: Arc<CalendarStore>,
        catalog: Catalog,
        senior_age: u32,
        users: Users,
        treasury: Treasury,
        logs: History,
    ) -> Self {
        Calendar {
            store,
            catalog,
            senior_age,
            users,
            treasury,
            logs,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn open_session(
        &self,
        actor: PersonId,
        kind: SessionKind,
        start_at: &str,
        forum: Forum,
        instructor: &Instructor,
    ) -> Result<Session, GymError> {
        if !instructor.is_qualified(kind) {
            return Err(GymError::InstructorNotQualified {
                instructor: instructor.id(),
                kind,
            });
        }
        let blank = self
            .catalog
            .blank(kind)
            .ok_or(GymError::SessionKindNotOffered(kind))?;
        let session = blank.open(start_at, forum, instructor.clone());
        self.store.insert(session.clone());
        self.logs.log(
            actor,
            Action::OpenSession {
                kind,
                start_at: start_at.to_owned(),
                instructor: instructor.name().to_owned(),
            },
        );
        Ok(session)
    }

    pub(crate) fn enroll(
        &self,
        actor: PersonId,
        client: &Client,
        session: &Session,
    ) -> Result<Enrollment, GymError> {
        self.enroll_at(actor, client, session, Local::now().naive_local())
    }

    /// Every soft check runs and is logged. Only a duplicate enrollment
    /// aborts with an error; nothing is mutated unless all checks pass.
    pub(crate) fn enroll_at(
        &self,
        actor: PersonId,
        client: &Client,
        session: &Session,
        now: NaiveDateTime,
    ) -> Result<Enrollment, GymError> {
        if !self.users.is_registered(client.id()) {
            return Err(GymError::ClientNotRegistered {
                client: client.id(),
                context: NotRegisteredContext::Enrollment,
            });
        }
        let session = self
            .store
            .get(session.id())
            .ok_or(GymError::SessionNotFound(session.id()))?;

        let mut rejections = Vec::new();
        let mut reject = |reason: Rejection| {
            self.logs.reject_enrollment(actor, client.id(), reason);
            rejections.push(reason);
        };

        if time::is_in_past_at(session.start_at(), now) {
            reject(Rejection::SessionNotInFuture);
        }

        if !session.forum().admits(client, self.senior_age) {
            if let Some(reason) = session.forum().rejection() {
                reject(reason);
            }
        }

        if session.is_registered(client) {
            return Err(GymError::DuplicateClient {
                client: client.id(),
                context: DuplicateContext::Enrollment,
            });
        }

        if session.is_full() {
            reject(Rejection::NoAvailableSpots);
        }

        if client.balance() < session.price() {
            reject(Rejection::InsufficientBalance);
        }

        if !rejections.is_empty() {
            return Ok(Enrollment::Rejected(rejections));
        }

        self.store
            .update(session.id(), |session| {
                session.add_client(client.clone());
                session.take_place();
            })
            .ok_or(GymError::SessionNotFound(session.id()))?;
        self.treasury.collect_fee(client, &session);
        self.logs.log(
            actor,
            Action::Enroll {
                client: client.id(),
                name: client.name().to_owned(),
                kind: session.kind(),
                start_at: session.start_at().to_owned(),
                price: session.price(),
            },
        );
        Ok(Enrollment::Committed)
    }

    pub fn get(&self, id: SessionId) -> Option<Session> {
        self.store.get(id)
    }

    pub fn sessions(&self) -> Vec<Session> {
        self.store.all()
    }

    /// Sessions held on `date` (`dd-MM-yyyy`).
    pub fn sessions_on(&self, date: &str) -> Vec<Session> {
        self.store.find_by_date(date)
    }
}
