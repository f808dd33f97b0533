use crate::model::report::ValidationResults;
use crate::service::data_generator::{strings, today};
use crate::service::date_validator::DateFormatValidator;
use serde::Serialize;
use serde_json::{json, Value};

/// Canned date lists used to exercise the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestDates {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

/// Builds sample payloads and runs the validator in advisory (non-strict) mode.
pub struct DateFormatTestHelper {
    validator: DateFormatValidator,
}

impl Default for DateFormatTestHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl DateFormatTestHelper {
    pub fn new() -> Self {
        Self {
            validator: DateFormatValidator::new(false),
        }
    }

    pub fn validator(&self) -> &DateFormatValidator {
        &self.validator
    }

    pub fn get_test_dates(&self) -> TestDates {
        let mut valid = strings(&["2024-01-01", "2024-12-31", "2023-06-15", "2025-03-10", "2020-02-29"]);
        valid.push(today());

        let invalid = strings(&[
            "01/01/2024",
            "01-01-2024",
            "2024/01/01",
            "2024.01.01",
            "Jan 1, 2024",
            "1/1/24",
            "2024-1-1",
            "24-01-01",
            "2024-13-01",
            "2024-12-32",
            "2021-02-29",
            "invalid-date",
            "",
            "null",
            "undefined",
        ]);

        TestDates { valid, invalid }
    }

    /// A payload with date fields at the top level, in a nested object and in
    /// an object inside a list, plus control fields that are never date-like.
    pub fn create_test_payload_with_dates(&self, valid_dates: bool) -> Value {
        let test_dates = self.get_test_dates();
        let dates = if valid_dates { test_dates.valid } else { test_dates.invalid };

        let pick = |index: usize, fallback: &str| {
            dates.get(index).cloned().unwrap_or_else(|| fallback.to_string())
        };

        json!({
            "entry_date": pick(0, "2024-01-01"),
            "created_at": pick(1, "2024-01-02"),
            "updated_on": pick(2, "2024-01-03"),
            "start_date": pick(3, "2024-01-04"),
            "end_date": pick(4, "2024-01-05"),
            "metadata": {
                "transaction_date": pick(0, "2024-01-06"),
                "due_date": pick(1, "2024-01-07")
            },
            "items": [
                {
                    "item_date": pick(2, "2024-01-08"),
                    "expiry_date": pick(3, "2024-01-09")
                }
            ],
            "description": "This should not be validated",
            "amount": 1000.50,
            "count": 5
        })
    }

    pub fn validate_api_response_dates(&self, response_data: &Value) -> (bool, ValidationResults) {
        let outcome = self.validator.validate_response_payload(response_data);
        let results = outcome.results();
        (outcome.passed, results)
    }
}
