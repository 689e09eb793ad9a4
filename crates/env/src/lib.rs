use std::{env::var, sync::Arc};

use dotenv::dotenv;
use eyre::{Context, Error};
use log::info;
use model::config::{GymConfig, DEFAULT_MIN_CLIENT_AGE, DEFAULT_SENIOR_AGE};

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone)]
pub struct EnvInner {
    gym_name: String,
    min_client_age: u32,
    senior_age: u32,
}

impl Env {
    pub fn gym_name(&self) -> &str {
        &self.0.gym_name
    }

    pub fn min_client_age(&self) -> u32 {
        self.0.min_client_age
    }

    pub fn senior_age(&self) -> u32 {
        self.0.senior_age
    }

    pub fn gym_config(&self) -> GymConfig {
        GymConfig {
            min_client_age: self.0.min_client_age,
            senior_age: self.0.senior_age,
            ..GymConfig::new(self.0.gym_name.clone())
        }
    }

    pub fn load() -> Result<Env, Error> {
        if let Err(err) = dotenv() {
            info!("Failed to load .env file: {}", err);
        }

        Ok(Env(Arc::new(EnvInner {
            gym_name: var("GYM_NAME").context("GYM_NAME is not set")?,
            min_client_age: age_var("MIN_CLIENT_AGE", DEFAULT_MIN_CLIENT_AGE)?,
            senior_age: age_var("SENIOR_AGE", DEFAULT_SENIOR_AGE)?,
        })))
    }
}

fn age_var(name: &str, default: u32) -> Result<u32, Error> {
    match var(name) {
        Ok(value) => parse_age(name, &value),
        Err(_) => Ok(default),
    }
}

fn parse_age(name: &str, value: &str) -> Result<u32, Error> {
    value
        .trim()
        .parse()
        .with_context(|| format!("{} must be a number of years, got {:?}", name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("SENIOR_AGE", " 70 ").unwrap(), 70);
        assert!(parse_age("SENIOR_AGE", "old").is_err());
        assert!(parse_age("SENIOR_AGE", "-1").is_err());
    }

    #[test]
    fn test_gym_config_from_env_values() {
        let env = Env(Arc::new(EnvInner {
            gym_name: "Downtown".to_owned(),
            min_client_age: 16,
            senior_age: 60,
        }));
        let config = env.gym_config();
        assert_eq!(config.name, "Downtown");
        assert_eq!(config.min_client_age, 16);
        assert_eq!(config.senior_age, 60);
    }
}
