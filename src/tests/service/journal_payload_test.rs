#[cfg(test)]
mod tests {
    use datecheck::model::journal::DateRange;
    use datecheck::{DateCheckError, DateFormatValidator, TestDataGenerator};
    use validator::Validate;

    #[test]
    fn test_sample_entry_request_body() {
        let validator = DateFormatValidator::default();
        let dates = TestDataGenerator::valid_date_formats();
        let entry = TestDataGenerator::sample_journal_entry(&dates[0]);

        let payload = entry.to_payload().unwrap();
        assert_eq!(payload["entry_date"], "2024-01-01");
        assert_eq!(payload["lines"][1]["account_id"], "2001");

        let outcome = validator.validate_request_payload(&payload);
        assert!(outcome.passed, "{:?}", outcome.results().errors);
        assert_eq!(outcome.results().warning_count, 0);
    }

    #[test]
    fn test_invalid_entry_dates_are_caught_twice() {
        let validator = DateFormatValidator::default();

        for date in TestDataGenerator::invalid_date_formats() {
            let entry = TestDataGenerator::sample_journal_entry(&date);

            // typed rule on the model
            let errors = entry.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("entry_date"), "{date:?}");

            // heuristic walk over the serialized body
            let outcome = validator.validate_request_payload(&entry.to_payload().unwrap());
            assert!(!outcome.passed, "{date:?}");
            assert_eq!(outcome.results().error_count, 1);
        }
    }

    #[test]
    fn test_validation_errors_convert() {
        let entry = TestDataGenerator::sample_journal_entry("2024-12-32");
        let err: DateCheckError = entry.validate().unwrap_err().into();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("entry_date"));
    }

    #[test]
    fn test_query_window() {
        let dates = TestDataGenerator::valid_date_formats();
        assert!(DateRange::new(&dates[0], &dates[1]).validate().is_ok());

        let invalid = TestDataGenerator::invalid_date_formats();
        for date in invalid.iter().take(3) {
            assert!(DateRange::new(date, "2024-01-31").validate().is_err(), "{date}");
        }
    }
}
