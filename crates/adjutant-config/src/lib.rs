//! Runtime settings for the adjutant gateway.
//!
//! Everything is read from environment variables with sensible defaults, so
//! the server starts with no configuration at all. The binary is expected to
//! call `dotenvy::dotenv()` before [`Settings::from_env`].
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ADJUTANT_HOST` | `0.0.0.0` |
//! | `ADJUTANT_PORT` | `8000` |
//! | `PLANNER_OWNER` | `chief-of-staff` |
//! | `PLANNER_FOCUS_MIN` | `90` |
//! | `GMAIL_DEFAULT_QUERY` | `in:inbox newer_than:7d -category:promotions` |
//! | `GMAIL_MAX_THREADS` | `10` |

use std::num::ParseIntError;

/// Settings parsing errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("Invalid value '{value}' for {key}: {source}")]
    Invalid {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Where the HTTP listener binds.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// Returns the bind address as `host:port`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Defaults applied to generated week plans.
#[derive(Debug, Clone)]
pub struct PlannerSettings {
    /// Owner stamped onto every plan item.
    pub owner: String,
    /// Focus block length in minutes, used when a request carries no
    /// `focus_blocks_min` preference.
    pub focus_block_min: u32,
}

/// Defaults applied by the Gmail mock.
#[derive(Debug, Clone)]
pub struct GmailSettings {
    /// Search query assumed when a request carries none.
    pub default_query: String,
    /// Thread cap assumed when a request carries none.
    pub default_max_threads: usize,
}

/// All gateway settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub planner: PlannerSettings,
    pub gmail: GmailSettings,
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerSettings {
                host: get("ADJUTANT_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_var(&get, "ADJUTANT_PORT", 8000)?,
            },
            planner: PlannerSettings {
                owner: get("PLANNER_OWNER").unwrap_or_else(|| "chief-of-staff".to_string()),
                focus_block_min: parse_var(&get, "PLANNER_FOCUS_MIN", 90)?,
            },
            gmail: GmailSettings {
                default_query: get("GMAIL_DEFAULT_QUERY")
                    .unwrap_or_else(|| "in:inbox newer_than:7d -category:promotions".to_string()),
                default_max_threads: parse_var(&get, "GMAIL_MAX_THREADS", 10)?,
            },
        })
    }
}

fn parse_var<T: std::str::FromStr<Err = ParseIntError>>(
    get: impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(key) {
        Some(value) => value
            .parse()
            .map_err(|source| ConfigError::Invalid { key, value, source }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_with_empty_environment() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings.server.addr(), "0.0.0.0:8000");
        assert_eq!(settings.planner.owner, "chief-of-staff");
        assert_eq!(settings.planner.focus_block_min, 90);
        assert_eq!(settings.gmail.default_max_threads, 10);
        assert!(settings.gmail.default_query.starts_with("in:inbox"));
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::from_lookup(lookup(&[
            ("ADJUTANT_HOST", "127.0.0.1"),
            ("ADJUTANT_PORT", "9099"),
            ("PLANNER_OWNER", "antonio"),
            ("PLANNER_FOCUS_MIN", "60"),
        ]))
        .unwrap();
        assert_eq!(settings.server.addr(), "127.0.0.1:9099");
        assert_eq!(settings.planner.owner, "antonio");
        assert_eq!(settings.planner.focus_block_min, 60);
    }

    #[test]
    fn bad_numbers_name_the_offending_key() {
        let err = Settings::from_lookup(lookup(&[("ADJUTANT_PORT", "not-a-port")])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("ADJUTANT_PORT"));
        assert!(message.contains("not-a-port"));
    }
}
