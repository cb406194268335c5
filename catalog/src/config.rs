use dotenv::dotenv;
use log::{info, warn};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a boolean, got '{value}'")]
    InvalidBool { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub environment: Environment,
    /// Start the game catalog with the sample games
    pub seed_sample_games: bool,
    /// Pretty-print the fixture dump
    pub pretty_json: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            seed_sample_games: true,
            pretty_json: true,
        }
    }
}

impl CatalogConfig {
    /// Loads `.env` files and reads the configuration from the process environment.
    ///
    /// `ENV_FILE_PATH` names a single file to load instead of `.env`. When it is
    /// unset, `.env` is loaded first and `.env.<environment>` on top of it for
    /// anything other than development.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var("ENV_FILE_PATH") {
            Ok(env_file_path) if !env_file_path.is_empty() => {
                info!("Loading environment from ENV_FILE_PATH: {}", env_file_path);
                dotenv::from_filename(&env_file_path).ok();
            }
            _ => {
                dotenv().ok();
                let environment_hint = Self::environment_from(env::var("RUST_ENV").ok());
                let env_file = format!(".env.{:?}", environment_hint).to_lowercase();
                if env_file != ".env.development" {
                    dotenv::from_filename(&env_file).ok();
                }
            }
        }

        let config = Self::from_lookup(|key| env::var(key).ok())?;
        config.log_configuration();
        Ok(config)
    }

    /// Builds the configuration from any key lookup, the process environment
    /// in production and a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Self::environment_from(lookup("RUST_ENV"));
        Ok(Self {
            environment,
            seed_sample_games: Self::bool_var(&lookup, "CATALOG_SEED_SAMPLE_GAMES", true)?,
            pretty_json: Self::bool_var(
                &lookup,
                "CATALOG_PRETTY_JSON",
                environment == Environment::Development,
            )?,
        })
    }

    fn environment_from(value: Option<String>) -> Environment {
        match value {
            Some(value) => value.parse().unwrap_or_else(|e| {
                warn!("{}, falling back to development", e);
                Environment::Development
            }),
            None => Environment::Development,
        }
    }

    fn bool_var<F>(lookup: &F, key: &str, default: bool) -> Result<bool, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(value) = lookup(key) else {
            return Ok(default);
        };
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                key: key.to_string(),
                value,
            }),
        }
    }

    fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("Environment: {:?}", self.environment);
        info!("Seed sample games: {}", self.seed_sample_games);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use test_case::test_case;

    fn config_from(pairs: &[(&str, &str)]) -> Result<CatalogConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CatalogConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), CatalogConfig::default());
    }

    #[test_case("dev", Environment::Development ; "short dev")]
    #[test_case("Production", Environment::Production ; "mixed case")]
    #[test_case("test", Environment::Test ; "test")]
    #[test_case("staging", Environment::Development ; "unknown falls back")]
    fn test_environment(value: &str, expected: Environment) {
        assert_eq!(config_from(&[("RUST_ENV", value)]).unwrap().environment, expected);
    }

    #[test]
    fn test_pretty_json_defaults_off_outside_development() {
        let config = config_from(&[("RUST_ENV", "production")]).unwrap();
        assert!(!config.pretty_json);
        assert!(config.seed_sample_games);
    }

    #[test_case("false", false ; "false")]
    #[test_case("0", false ; "zero")]
    #[test_case(" YES ", true ; "padded yes")]
    fn test_seed_flag(value: &str, expected: bool) {
        let config = config_from(&[("CATALOG_SEED_SAMPLE_GAMES", value)]).unwrap();
        assert_eq!(config.seed_sample_games, expected);
    }

    #[test]
    fn test_invalid_bool() {
        let err = config_from(&[("CATALOG_PRETTY_JSON", "maybe")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                key: "CATALOG_PRETTY_JSON".to_string(),
                value: "maybe".to_string(),
            }
        );
    }
}
