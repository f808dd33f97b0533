//! Date format checks for JSON API payloads.
//!
//! Every member whose name looks like a date (`entry_date`, `created_at`,
//! `dueDate`, ...) must hold a strict `YYYY-MM-DD` calendar date. Members that
//! describe formats (`date_format`, `date_schema`, ...) are skipped.
//!
//! ```rust
//! use datecheck::DateFormatValidator;
//! use serde_json::json;
//!
//! let validator = DateFormatValidator::default();
//! let outcome = validator.validate_request_payload(&json!({"entry_date": "2024-13-01"}));
//! assert!(!outcome.passed);
//! assert_eq!(outcome.results().error_count, 1);
//! ```

pub mod config;
pub mod errors;
pub mod model;
pub mod service;
pub mod util;

pub use config::AppConfig;
pub use errors::{CheckResult, DateCheckError};
pub use model::report::{ValidationOutcome, ValidationReport, ValidationResults};
pub use service::data_generator::TestDataGenerator;
pub use service::date_validator::{DateFormatValidator, PayloadKind};
pub use service::test_helper::{DateFormatTestHelper, TestDates};
