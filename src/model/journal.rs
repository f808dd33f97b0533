use crate::errors::CheckResult;
use crate::model::validator::validate_date_format;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

// Field order is the order members appear in the serialized request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct JournalEntry {
    #[validate(custom(function = "validate_date_format"))]
    pub entry_date: String,
    #[validate(length(min = 1, message = "can not be empty"))]
    pub reference: String,
    pub description: String,
    pub total_amount: f64,
    #[validate(length(equal = 3, message = "must be a 3-letter currency code"))]
    pub currency: String,
    #[validate(length(min = 1, message = "needs at least one line"), nested)]
    pub lines: Vec<JournalLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct JournalLine {
    #[validate(length(min = 1, message = "can not be empty"))]
    pub account_id: String,
    pub description: String,
    #[validate(range(min = 0.0, message = "can not be negative"))]
    pub debit_amount: f64,
    #[validate(range(min = 0.0, message = "can not be negative"))]
    pub credit_amount: f64,
}

impl JournalEntry {
    /// The entry as the JSON request body sent to the ledger API.
    pub fn to_payload(&self) -> CheckResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Query window used by the list endpoints (`start_date`..=`end_date`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[validate(schema(function = "validate_date_range"))]
pub struct DateRange {
    #[validate(custom(function = "validate_date_format"))]
    pub start_date: String,
    #[validate(custom(function = "validate_date_format"))]
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: &str, end_date: &str) -> Self {
        Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        }
    }
}

fn validate_date_range(range: &DateRange) -> Result<(), ValidationError> {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();

    // malformed bounds are reported by the field rules
    let (Some(start), Some(end)) = (parse(&range.start_date), parse(&range.end_date)) else {
        return Ok(());
    };

    if start > end {
        let mut error = ValidationError::new("invalid_range");
        error.message = Some("start_date must not be after end_date".into());
        return Err(error);
    }
    Ok(())
}
