//! Runtime configuration read from the environment.
//!
//! The binary loads a `.env` file first, so every variable may also live there.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

pub const QA_DELAY_VAR: &str = "EARTHSCIENCE_QA_DELAY_MS";
pub const PREDICTION_DELAY_VAR: &str = "EARTHSCIENCE_PREDICTION_DELAY_MS";
pub const REQUEST_TIMEOUT_VAR: &str = "EARTHSCIENCE_REQUEST_TIMEOUT_SECS";
pub const MAX_QUERY_LEN_VAR: &str = "EARTHSCIENCE_MAX_QUERY_LEN";
pub const LOG_FORMAT_VAR: &str = "EARTHSCIENCE_LOG_FORMAT";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulated latency before a Q&A answer is delivered
    pub qa_delay: Duration,
    /// Simulated latency of the mock predictor and analysis
    pub prediction_delay: Duration,
    /// How long callers wait for an actor reply
    pub request_timeout: Duration,
    /// Longest accepted query, in characters
    pub max_query_len: usize,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            qa_delay: Duration::from_millis(1000),
            prediction_delay: Duration::from_millis(1500),
            request_timeout: Duration::from_secs(30),
            max_query_len: 2000,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            qa_delay: Duration::from_millis(parse_var(
                QA_DELAY_VAR,
                defaults.qa_delay.as_millis() as u64,
            )?),
            prediction_delay: Duration::from_millis(parse_var(
                PREDICTION_DELAY_VAR,
                defaults.prediction_delay.as_millis() as u64,
            )?),
            request_timeout: Duration::from_secs(parse_var(
                REQUEST_TIMEOUT_VAR,
                defaults.request_timeout.as_secs(),
            )?),
            max_query_len: parse_var(MAX_QUERY_LEN_VAR, defaults.max_query_len)?,
            log_format: parse_var(LOG_FORMAT_VAR, defaults.log_format)?,
        };

        config.check()?;
        Ok(config)
    }

    /// Configuration with no simulated latency.
    pub fn immediate() -> Self {
        Self {
            qa_delay: Duration::ZERO,
            prediction_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.request_timeout.is_zero() {
            return Err(AppError::Config(format!("{} must be greater than 0", REQUEST_TIMEOUT_VAR)));
        }
        if self.max_query_len == 0 {
            return Err(AppError::Config(format!("{} must be greater than 0", MAX_QUERY_LEN_VAR)));
        }
        Ok(())
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}
