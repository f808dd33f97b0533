use crate::config::AppConfig;
use crate::errors::{invalid_dates, CheckResult};
use crate::model::report::{ValidationOutcome, ValidationReport};
use crate::util::field_path;
use chrono::{Datelike, NaiveDate};
use derive_more::Display;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::{error, info, warn};

lazy_static! {
    static ref VALID_DATE_PATTERN: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();

    // Matched against the lowercased field name, anchored at the start.
    static ref DATE_FIELD_PATTERNS: Vec<Regex> = [
        r"^.*date.*",
        r"^.*_at$",
        r"^.*_on$",
        r"^created.*",
        r"^updated.*",
        r"^modified.*",
        r"^timestamp.*",
        r"^time.*",
        r"^start.*",
        r"^end.*",
        r"^expir.*",
        r"^due.*",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

// Names that describe date formats rather than hold dates.
const EXCLUDED_FIELD_MARKERS: [&str; 3] = ["format", "schema", "template"];

/// True iff `date` is `YYYY-MM-DD` and names a real day of the proleptic Gregorian calendar.
pub fn is_valid_date_format(date: &str) -> bool {
    if !VALID_DATE_PATTERN.is_match(date) {
        return false;
    }

    // year 0000 matches the pattern but is not a calendar year
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok_and(|d| d.year() >= 1)
}

/// True iff the field name suggests date content.
pub fn is_likely_date_field(field_name: &str) -> bool {
    let field_lower = field_name.to_lowercase();

    if EXCLUDED_FIELD_MARKERS
        .iter()
        .any(|marker| field_lower.contains(marker))
    {
        return false;
    }

    DATE_FIELD_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(&field_lower))
}

/// Which side of an API exchange a payload belongs to. Also the root of every field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Default)]
pub enum PayloadKind {
    #[display("request")]
    Request,
    #[default]
    #[display("response")]
    Response,
}

impl FromStr for PayloadKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "request" => Ok(PayloadKind::Request),
            "response" => Ok(PayloadKind::Response),
            other => Err(anyhow::anyhow!("unknown payload kind: {:?}", other)),
        }
    }
}

/// Checks that every date-like field of a JSON payload holds a `YYYY-MM-DD` date.
///
/// The validator holds no per-call state: each top-level call builds its own
/// [`ValidationReport`], so one instance can be shared freely.
///
/// In strict mode a malformed date fails the call. In non-strict mode it is
/// still recorded as an error but the call reports success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatValidator {
    strict_mode: bool,
}

impl Default for DateFormatValidator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DateFormatValidator {
    pub fn new(strict_mode: bool) -> Self {
        Self { strict_mode }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.strict_mode)
    }

    pub fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    pub fn is_valid_date_format(&self, date: &str) -> bool {
        is_valid_date_format(date)
    }

    /// Same check for an arbitrary JSON value; anything but a string is rejected.
    pub fn is_valid_date_value(&self, value: &Value) -> bool {
        value.as_str().is_some_and(is_valid_date_format)
    }

    pub fn is_likely_date_field(&self, field_name: &str) -> bool {
        is_likely_date_field(field_name)
    }

    /// Validates the value found in a date-like field.
    ///
    /// `null` is accepted silently, other non-strings only produce a warning.
    /// A malformed string is always recorded as an error; only strict mode
    /// turns it into a `false` return.
    pub fn validate_date_value(
        &self,
        field_path: &str,
        value: &Value,
        report: &mut ValidationReport,
    ) -> bool {
        let date = match value {
            Value::String(s) => s,
            Value::Null => return true,
            other => {
                let warning = format!(
                    "Non-string value in potential date field '{}': {}",
                    field_path,
                    json_type_name(other)
                );
                warn!("{}", warning);
                report.add_warning(warning);
                return true;
            }
        };

        if is_valid_date_format(date) {
            return true;
        }

        let message = format!(
            "Invalid date format in field '{}': '{}' (expected YYYY-MM-DD)",
            field_path, date
        );
        if self.strict_mode {
            error!("{}", message);
        } else {
            warn!("{}", message);
        }
        report.add_error(message);

        !self.strict_mode
    }

    /// Walks `payload` and checks every date-like member.
    ///
    /// Objects and arrays are always descended into, whatever their key looks
    /// like. Scalars outside date-like fields are ignored. Returns `false` iff
    /// some check below returned `false`.
    pub fn validate_json_payload(
        &self,
        payload: &Value,
        path_prefix: &str,
        report: &mut ValidationReport,
    ) -> bool {
        match payload {
            Value::Object(map) => self.validate_object(map, path_prefix, report),
            Value::Array(items) => self.validate_array(items, path_prefix, report),
            _ => true,
        }
    }

    fn validate_object(
        &self,
        map: &Map<String, Value>,
        path_prefix: &str,
        report: &mut ValidationReport,
    ) -> bool {
        let mut all_valid = true;

        for (key, value) in map {
            let current_path = field_path::member(path_prefix, key);

            if is_likely_date_field(key) && !self.validate_date_value(&current_path, value, report) {
                all_valid = false;
            }

            if (value.is_object() || value.is_array())
                && !self.validate_json_payload(value, &current_path, report)
            {
                all_valid = false;
            }
        }

        all_valid
    }

    fn validate_array(&self, items: &[Value], path_prefix: &str, report: &mut ValidationReport) -> bool {
        let mut all_valid = true;

        for (index, item) in items.iter().enumerate() {
            let current_path = field_path::element(path_prefix, index);
            if !self.validate_json_payload(item, &current_path, report) {
                all_valid = false;
            }
        }

        all_valid
    }

    pub fn validate_request_payload(&self, payload: &Value) -> ValidationOutcome {
        self.validate_payload(PayloadKind::Request, payload)
    }

    pub fn validate_response_payload(&self, payload: &Value) -> ValidationOutcome {
        self.validate_payload(PayloadKind::Response, payload)
    }

    /// Validates a whole payload with a fresh report, rooting paths at `request` or `response`.
    pub fn validate_payload(&self, kind: PayloadKind, payload: &Value) -> ValidationOutcome {
        info!("Validating {} payload for date formats", kind);

        let mut report = ValidationReport::new();
        let passed = self.validate_json_payload(payload, &kind.to_string(), &mut report);

        ValidationOutcome { passed, report }
    }

    /// Hard check for test code: fails with every collected error when the payload does not pass.
    ///
    /// Paths are unprefixed (`entry_date`, `lines[0].due_date`).
    pub fn assert_valid_dates(&self, payload: &Value, payload_type: &str) -> CheckResult<()> {
        let mut report = ValidationReport::new();

        if self.validate_json_payload(payload, "", &mut report) {
            Ok(())
        } else {
            Err(invalid_dates(payload_type, report.into_errors()))
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
