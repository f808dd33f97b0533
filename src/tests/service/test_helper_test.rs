#[cfg(test)]
mod tests {
    use datecheck::DateFormatTestHelper;
    use serde_json::json;

    #[test]
    fn test_date_lists() {
        let helper = DateFormatTestHelper::new();
        let dates = helper.get_test_dates();
        let validator = helper.validator();

        assert_eq!(dates.valid.len(), 6);
        assert_eq!(dates.invalid.len(), 15);
        assert!(dates.valid.contains(&"2020-02-29".to_string()));
        assert!(dates.invalid.contains(&"2021-02-29".to_string()));

        for date in &dates.valid {
            assert!(validator.is_valid_date_format(date), "{date} should be valid");
        }
        for date in &dates.invalid {
            assert!(!validator.is_valid_date_format(date), "{date:?} should be invalid");
        }
    }

    #[test]
    fn test_helper_is_lenient() {
        assert!(!DateFormatTestHelper::new().validator().strict_mode());
    }

    #[test]
    fn test_valid_payload() {
        let helper = DateFormatTestHelper::new();
        let payload = helper.create_test_payload_with_dates(true);

        assert_eq!(payload["metadata"]["due_date"], json!("2024-12-31"));
        assert_eq!(payload["items"][0]["expiry_date"], json!("2025-03-10"));

        let (passed, results) = helper.validate_api_response_dates(&payload);
        assert!(passed);
        assert!(results.valid);
        assert_eq!(results.error_count, 0);
        assert_eq!(results.warning_count, 0);
    }

    #[test]
    fn test_invalid_payload() {
        let helper = DateFormatTestHelper::new();
        let payload = helper.create_test_payload_with_dates(false);

        let (passed, results) = helper.validate_api_response_dates(&payload);

        // advisory mode: every bad date is recorded, the call still passes
        assert!(passed);
        assert!(!results.valid);
        assert_eq!(results.error_count, 9);
        assert_eq!(results.warning_count, 0);

        let paths: Vec<&str> = results
            .errors
            .iter()
            .map(|e| e.split('\'').nth(1).unwrap())
            .collect();
        assert_eq!(
            paths,
            vec![
                "response.entry_date",
                "response.created_at",
                "response.updated_on",
                "response.start_date",
                "response.end_date",
                "response.metadata.transaction_date",
                "response.metadata.due_date",
                "response.items[0].item_date",
                "response.items[0].expiry_date",
            ]
        );
        assert!(results
            .errors
            .iter()
            .all(|e| !e.contains("description") && !e.contains("amount") && !e.contains("count")));
    }

    #[test]
    fn test_control_fields_are_not_date_like() {
        let helper = DateFormatTestHelper::new();
        let validator = helper.validator();
        let payload = helper.create_test_payload_with_dates(true);

        for field in ["description", "amount", "count", "metadata", "items"] {
            assert!(payload.get(field).is_some());
            assert!(!validator.is_likely_date_field(field), "{field}");
        }
    }
}
