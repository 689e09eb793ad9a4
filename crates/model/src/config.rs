use crate::session::Catalog;

pub const DEFAULT_MIN_CLIENT_AGE: u32 = 18;
pub const DEFAULT_SENIOR_AGE: u32 = 65;

#[derive(Debug, Clone)]
pub struct GymConfig {
    pub name: String,
    pub min_client_age: u32,
    pub senior_age: u32,
    pub catalog: Catalog,
}

impl GymConfig {
    pub fn new(name: impl Into<String>) -> Self {
        GymConfig {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Default for GymConfig {
    fn default() -> Self {
        GymConfig {
            name: "Gym".to_owned(),
            min_client_age: DEFAULT_MIN_CLIENT_AGE,
            senior_age: DEFAULT_SENIOR_AGE,
            catalog: Catalog::default(),
        }
    }
}
