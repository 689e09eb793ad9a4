pub mod client;
pub mod config;
pub mod enrollment;
pub mod errors;
pub mod forum;
pub mod history;
pub mod ids;
pub mod instructor;
pub mod person;
pub mod session;
pub mod staff;
pub mod treasury;
