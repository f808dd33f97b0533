use std::error::Error;
use std::fmt;
use validator::ValidationErrors;

pub type CheckResult<T> = Result<T, DateCheckError>;

#[derive(Debug)]
pub enum DateCheckError {
    // Raised by `assert_valid_dates` with every error recorded during the traversal.
    InvalidDates {
        payload_type: String,
        errors: Vec<String>,
    },

    Io(std::io::Error),
    Json(serde_json::Error),

    Validation(ValidationErrors),

    Anyhow(anyhow::Error),
}

impl DateCheckError {
    /// Process exit status used by the command line front end.
    pub fn exit_code(&self) -> i32 {
        use DateCheckError::*;

        match self {
            InvalidDates { .. } | Validation(_) => 1,
            Io(_) | Json(_) | Anyhow(_) => 2,
        }
    }

    /// Messages carried by the error, one per offending field.
    pub fn messages(&self) -> Vec<String> {
        use DateCheckError::*;

        match self {
            InvalidDates { errors, .. } => errors.clone(),
            Validation(err) => err
                .to_string()
                .lines()
                .map(String::from)
                .collect(),
            other => vec![other.to_string()],
        }
    }
}

impl fmt::Display for DateCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DateCheckError::*;

        match self {
            InvalidDates { payload_type, errors } => {
                write!(f, "Date format validation failed for {}:", payload_type)?;
                for error in errors {
                    write!(f, "\n  - {}", error)?;
                }
                Ok(())
            }
            Io(err) => write!(f, "io error: {}", err),
            Json(err) => write!(f, "invalid json: {}", err),
            Validation(err) => write!(f, "{}", err.to_string().replace('\n', "; ")),
            Anyhow(err) => write!(f, "{}", err),
        }
    }
}

impl Error for DateCheckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use DateCheckError::*;

        match self {
            Io(err) => Some(err),
            Json(err) => Some(err),
            Validation(err) => Some(err),
            Anyhow(err) => err.source(),
            InvalidDates { .. } => None,
        }
    }
}

impl From<std::io::Error> for DateCheckError {
    fn from(err: std::io::Error) -> Self {
        DateCheckError::Io(err)
    }
}

impl From<serde_json::Error> for DateCheckError {
    fn from(err: serde_json::Error) -> Self {
        DateCheckError::Json(err)
    }
}

impl From<ValidationErrors> for DateCheckError {
    fn from(err: ValidationErrors) -> Self {
        DateCheckError::Validation(err)
    }
}

impl From<anyhow::Error> for DateCheckError {
    fn from(err: anyhow::Error) -> Self {
        DateCheckError::Anyhow(err)
    }
}

pub fn invalid_dates(payload_type: &str, errors: Vec<String>) -> DateCheckError {
    DateCheckError::InvalidDates {
        payload_type: payload_type.to_string(),
        errors,
    }
}
