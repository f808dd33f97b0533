use crate::service::date_validator::is_valid_date_format;
use validator::ValidationError;

/// Validate date string in strict "yyyy-MM-dd" format
pub fn validate_date_format(date: &str) -> Result<(), ValidationError> {
    if is_valid_date_format(date) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_date");
        error.message = Some("must be in 'yyyy-MM-dd' format".into());
        error.add_param("value".into(), &date);
        Err(error)
    }
}
