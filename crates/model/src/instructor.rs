use std::{
    fmt::{self, Display},
    ops::Deref,
};

use crate::{person::Person, session::SessionKind};

#[derive(Debug, Clone)]
pub struct Instructor {
    person: Person,
    hourly_wage: i64,
    qualifications: Vec<SessionKind>,
}

impl Instructor {
    /// Promotes a person to an instructor. The balance stays shared with `person`.
    pub fn new(person: &Person, hourly_wage: i64, qualifications: Vec<SessionKind>) -> Instructor {
        Instructor {
            person: person.clone(),
            hourly_wage,
            qualifications,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn hourly_wage(&self) -> i64 {
        self.hourly_wage
    }

    pub fn qualifications(&self) -> &[SessionKind] {
        &self.qualifications
    }

    pub fn is_qualified(&self, kind: SessionKind) -> bool {
        self.qualifications.contains(&kind)
    }
}

impl PartialEq for Instructor {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
    }
}

impl Eq for Instructor {}

impl Deref for Instructor {
    type Target = Person;

    fn deref(&self) -> &Self::Target {
        &self.person
    }
}

impl Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classes = self
            .qualifications
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{} | Role: Instructor | Salary per Hour: {} | Certified Classes: {}",
            self.person, self.hourly_wage, classes
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::person::Gender;

    use super::*;

    #[test]
    fn test_qualifications() {
        let person = Person::new("Tal", 0, Gender::Male, "01-01-1980").unwrap();
        let instructor = Instructor::new(
            &person,
            70,
            vec![SessionKind::Pilates, SessionKind::MachinePilates],
        );
        assert!(instructor.is_qualified(SessionKind::Pilates));
        assert!(!instructor.is_qualified(SessionKind::ThaiBoxing));
        assert!(instructor
            .to_string()
            .ends_with("Role: Instructor | Salary per Hour: 70 | Certified Classes: Pilates, MachinePilates"));
    }

    #[test]
    fn test_wage_payment_reaches_original_person() {
        let person = Person::new("Tal", 0, Gender::Male, "01-01-1980").unwrap();
        let instructor = Instructor::new(&person, 70, vec![]);
        instructor.increase_balance(70);
        assert_eq!(person.balance(), 70);
    }
}
