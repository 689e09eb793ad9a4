pub mod calendar;
pub mod history;
pub mod newsletter;
pub mod treasury;
pub mod users;
