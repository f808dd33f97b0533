use crate::service::date_validator::PayloadKind;
use crate::util::env::{get_bool_from_env_or, get_env_or, load_dotenv};
use anyhow::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    // Fail a payload on the first malformed date instead of only recording it
    pub strict_mode: bool,
    // Root of the field paths and the label used in log lines
    pub payload_kind: PayloadKind,

    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub log_results: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            strict_mode: true,
            payload_kind: PayloadKind::Response,
            log: LogConfig { log_results: false },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        let defaults = AppConfig::default();

        let strict_mode = get_bool_from_env_or("DATECHECK_STRICT_MODE", defaults.strict_mode)?;
        let payload_kind = get_env_or("DATECHECK_PAYLOAD_KIND", defaults.payload_kind)?;

        Ok(AppConfig {
            strict_mode,
            payload_kind,
            log: LogConfig::from_env()?,
        })
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        let log_results = get_bool_from_env_or("DATECHECK_LOG_RESULTS", false)?;

        Ok(LogConfig { log_results })
    }
}
