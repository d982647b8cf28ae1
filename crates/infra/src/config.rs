use chrono_tz::Tz;
use std::{fmt::Display, ops::RangeInclusive, str::FromStr};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required configuration value: {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Whether the minutely notification job should run inside of this process.
    /// Turn this off when an external scheduler calls the dispatch endpoint.
    pub run_job_scheduler: bool,
    pub dispatcher: DispatcherConfig,
    /// Base url of the Mailgun compatible email API, e.g. `https://api.eu.mailgun.net`
    pub mail_api_base_url: String,
    pub credentials: Credentials,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatcherConfig {
    /// How far into the future event boundaries are looked for
    pub lookahead_minutes: i64,
    /// Widens the lookahead target in both directions to absorb scheduler jitter
    pub buffer_seconds: i64,
    /// Timezone the event times are presented in within the reminder emails
    pub timezone: Tz,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            lookahead_minutes: 2,
            buffer_seconds: 30,
            timezone: Tz::UTC,
        }
    }
}

/// Secrets and addresses needed to reach the event store and the email provider.
///
/// They have no defaults. They are read at startup but only validated when a
/// notification run begins, so that a misconfigured deployment reports the
/// problem on every run instead of failing to boot.
#[derive(Clone, Default, PartialEq)]
pub struct Credentials {
    pub event_store_url: Option<String>,
    pub event_store_service_key: Option<String>,
    pub mail_api_key: Option<String>,
    pub mail_domain: Option<String>,
    pub mail_from: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("event_store_url", &redact(&self.event_store_url))
            .field(
                "event_store_service_key",
                &redact(&self.event_store_service_key),
            )
            .field("mail_api_key", &redact(&self.mail_api_key))
            .field("mail_domain", &self.mail_domain)
            .field("mail_from", &self.mail_from)
            .finish()
    }
}

#[derive(Clone, PartialEq)]
pub struct ValidCredentials {
    pub event_store_url: String,
    pub event_store_service_key: String,
    pub mail_api_key: String,
    pub mail_domain: String,
    pub mail_from: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<ValidCredentials, ConfigError> {
        fn required(value: &Option<String>, name: &'static str) -> Result<String, ConfigError> {
            match value.as_deref().map(str::trim) {
                Some(v) if !v.is_empty() => Ok(v.to_string()),
                _ => Err(ConfigError::Missing(name)),
            }
        }

        Ok(ValidCredentials {
            event_store_url: required(&self.event_store_url, EVENT_STORE_URL)?,
            event_store_service_key: required(
                &self.event_store_service_key,
                EVENT_STORE_SERVICE_KEY,
            )?,
            mail_api_key: required(&self.mail_api_key, MAIL_API_KEY)?,
            mail_domain: required(&self.mail_domain, MAIL_DOMAIN)?,
            mail_from: required(&self.mail_from, MAIL_FROM)?,
        })
    }
}

const EVENT_STORE_URL: &str = "EVENT_STORE_URL";
const EVENT_STORE_SERVICE_KEY: &str = "EVENT_STORE_SERVICE_KEY";
const MAIL_API_KEY: &str = "MAIL_API_KEY";
const MAIL_DOMAIN: &str = "MAIL_DOMAIN";
const MAIL_FROM: &str = "MAIL_FROM";

const DEFAULT_PORT: usize = 5000;
const DEFAULT_MAIL_API_BASE_URL: &str = "https://api.mailgun.net";
// At most a day ahead and an hour of buffer
const LOOKAHEAD_MINUTES_RANGE: RangeInclusive<i64> = 0..=24 * 60;
const BUFFER_SECONDS_RANGE: RangeInclusive<i64> = 0..=60 * 60;

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the `Config` from any key value source, e.g. the environment
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let defaults = DispatcherConfig::default();
        let dispatcher = DispatcherConfig {
            lookahead_minutes: parse_in_range_or_default(
                &lookup,
                "NOTIFIER_LOOKAHEAD_MINUTES",
                defaults.lookahead_minutes,
                LOOKAHEAD_MINUTES_RANGE,
            ),
            buffer_seconds: parse_in_range_or_default(
                &lookup,
                "NOTIFIER_BUFFER_SECONDS",
                defaults.buffer_seconds,
                BUFFER_SECONDS_RANGE,
            ),
            timezone: parse_or_default(&lookup, "NOTIFIER_TIMEZONE", defaults.timezone),
        };

        Self {
            port: parse_or_default(&lookup, "PORT", DEFAULT_PORT),
            run_job_scheduler: parse_or_default(&lookup, "NOTIFIER_JOB_SCHEDULER", true),
            dispatcher,
            mail_api_base_url: lookup("MAIL_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_MAIL_API_BASE_URL.into()),
            credentials: Credentials {
                event_store_url: lookup(EVENT_STORE_URL),
                event_store_service_key: lookup(EVENT_STORE_SERVICE_KEY),
                mail_api_key: lookup(MAIL_API_KEY),
                mail_domain: lookup(MAIL_DOMAIN),
                mail_from: lookup(MAIL_FROM),
            },
        }
    }
}

impl Default for Config {
    /// `Config` with every default applied and no credentials
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or_default<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, raw, default
                );
                default
            }
        },
    }
}

fn parse_in_range_or_default<F>(
    lookup: &F,
    key: &str,
    default: i64,
    range: RangeInclusive<i64>,
) -> i64
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or_default(lookup, key, default);
    if range.contains(&value) {
        value
    } else {
        warn!(
            "The given {}: {} is outside of {}..={}, falling back to the default: {}.",
            key,
            value,
            range.start(),
            range.end(),
            default
        );
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    fn full_credentials() -> Vec<(&'static str, &'static str)> {
        vec![
            ("EVENT_STORE_URL", "postgres://localhost:5432/notifier"),
            ("EVENT_STORE_SERVICE_KEY", "service-key"),
            ("MAIL_API_KEY", "key-123"),
            ("MAIL_DOMAIN", "mg.example.com"),
            ("MAIL_FROM", "Reminders <reminders@mg.example.com>"),
        ]
    }

    #[test]
    fn it_applies_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert!(config.run_job_scheduler);
        assert_eq!(config.dispatcher, DispatcherConfig::default());
        assert_eq!(config.dispatcher.lookahead_minutes, 2);
        assert_eq!(config.dispatcher.buffer_seconds, 30);
        assert_eq!(config.mail_api_base_url, "https://api.mailgun.net");
        assert_eq!(config.credentials, Credentials::default());
    }

    #[test]
    fn it_reads_dispatcher_settings() {
        let config = config_from(&[
            ("NOTIFIER_LOOKAHEAD_MINUTES", "5"),
            ("NOTIFIER_BUFFER_SECONDS", "45"),
            ("NOTIFIER_TIMEZONE", "Europe/Oslo"),
            ("NOTIFIER_JOB_SCHEDULER", "false"),
            ("PORT", "8080"),
        ]);
        assert_eq!(config.dispatcher.lookahead_minutes, 5);
        assert_eq!(config.dispatcher.buffer_seconds, 45);
        assert_eq!(config.dispatcher.timezone, chrono_tz::Europe::Oslo);
        assert!(!config.run_job_scheduler);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn it_falls_back_on_invalid_values() {
        let config = config_from(&[
            ("NOTIFIER_LOOKAHEAD_MINUTES", "soon"),
            ("NOTIFIER_TIMEZONE", "Mars/Olympus"),
            ("PORT", "-1"),
        ]);
        assert_eq!(config.dispatcher, DispatcherConfig::default());
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn it_falls_back_on_out_of_range_window_settings() {
        for (lookahead, buffer) in [
            ("200000000000000", "30"),
            ("-1", "-30"),
            ("1441", "3601"),
            ("2", "-9223372036854775808"),
        ] {
            let config = config_from(&[
                ("NOTIFIER_LOOKAHEAD_MINUTES", lookahead),
                ("NOTIFIER_BUFFER_SECONDS", buffer),
            ]);
            assert_eq!(config.dispatcher, DispatcherConfig::default());
        }

        let config = config_from(&[
            ("NOTIFIER_LOOKAHEAD_MINUTES", "1440"),
            ("NOTIFIER_BUFFER_SECONDS", "0"),
        ]);
        assert_eq!(config.dispatcher.lookahead_minutes, 1440);
        assert_eq!(config.dispatcher.buffer_seconds, 0);
    }

    #[test]
    fn it_validates_complete_credentials() {
        let config = config_from(&full_credentials());
        let valid = config.credentials.validate().expect("To be valid");
        assert_eq!(valid.mail_domain, "mg.example.com");
        assert_eq!(valid.mail_from, "Reminders <reminders@mg.example.com>");
    }

    #[test]
    fn each_missing_credential_is_reported() {
        for (missing, _) in full_credentials() {
            let vars = full_credentials()
                .into_iter()
                .filter(|(k, _)| *k != missing)
                .collect::<Vec<_>>();
            let config = config_from(&vars);
            assert_eq!(
                config.credentials.validate().err(),
                Some(ConfigError::Missing(missing))
            );
        }
    }

    #[test]
    fn blank_credentials_count_as_missing() {
        let mut vars = full_credentials();
        vars[2] = ("MAIL_API_KEY", "   ");
        let config = config_from(&vars);
        assert_eq!(
            config.credentials.validate().err(),
            Some(ConfigError::Missing("MAIL_API_KEY"))
        );
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = config_from(&full_credentials());
        let debug = format!("{:?}", config.credentials);
        assert!(!debug.contains("service-key"));
        assert!(!debug.contains("key-123"));
        assert!(debug.contains("mg.example.com"));
    }
}
