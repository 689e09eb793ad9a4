use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{
    enrollment::Rejection,
    person::{Gender, Person},
};

/// Who may join a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum Forum {
    All,
    Male,
    Female,
    Seniors,
}

impl Forum {
    pub fn admits(&self, person: &Person, senior_age: u32) -> bool {
        match self {
            Forum::All => true,
            Forum::Seniors => person.age() >= senior_age,
            Forum::Male => person.gender() == Gender::Male,
            Forum::Female => person.gender() == Gender::Female,
        }
    }

    /// Reason recorded when `admits` is false.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Forum::All => None,
            Forum::Seniors => Some(Rejection::SeniorsOnly),
            Forum::Male | Forum::Female => Some(Rejection::GenderMismatch),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike as _, Local, NaiveDate};

    use super::*;

    fn person_aged(age: i32, gender: Gender) -> Person {
        let today = Local::now().date_naive();
        let birthday = NaiveDate::from_ymd_opt(today.year() - age, 1, 1).unwrap();
        Person::with_birthday("Test", 0, gender, birthday)
    }

    #[test]
    fn test_all_admits_everyone() {
        assert!(Forum::All.admits(&person_aged(20, Gender::Male), 65));
        assert!(Forum::All.admits(&person_aged(80, Gender::Female), 65));
        assert_eq!(Forum::All.rejection(), None);
    }

    #[test]
    fn test_seniors_by_age() {
        assert!(Forum::Seniors.admits(&person_aged(65, Gender::Male), 65));
        assert!(!Forum::Seniors.admits(&person_aged(64, Gender::Female), 65));
        assert_eq!(Forum::Seniors.rejection(), Some(Rejection::SeniorsOnly));
    }

    #[test]
    fn test_gender_forums() {
        let man = person_aged(30, Gender::Male);
        let woman = person_aged(30, Gender::Female);
        assert!(Forum::Male.admits(&man, 65));
        assert!(!Forum::Male.admits(&woman, 65));
        assert!(Forum::Female.admits(&woman, 65));
        assert!(!Forum::Female.admits(&man, 65));
        assert_eq!(Forum::Male.rejection(), Some(Rejection::GenderMismatch));
    }
}
