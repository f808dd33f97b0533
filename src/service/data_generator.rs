use crate::model::journal::{JournalEntry, JournalLine};
use chrono::Local;

/// Request-side fixtures for date format tests against the accounting API.
pub struct TestDataGenerator;

impl TestDataGenerator {
    /// Well-formed dates, ending with today's local date.
    pub fn valid_date_formats() -> Vec<String> {
        let mut dates = strings(&["2024-01-01", "2024-12-31", "2023-06-15", "2025-03-10"]);
        dates.push(today());
        dates
    }

    /// Dates an endpoint must reject: foreign layouts, missing padding, impossible days.
    pub fn invalid_date_formats() -> Vec<String> {
        strings(&[
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
            "invalid-date",
            "",
        ])
    }

    /// A balanced two-line journal entry dated `entry_date`.
    pub fn sample_journal_entry(entry_date: &str) -> JournalEntry {
        JournalEntry {
            entry_date: entry_date.to_string(),
            reference: "TEST-001".to_string(),
            description: "Test journal entry for date format validation".to_string(),
            total_amount: 1000.00,
            currency: "USD".to_string(),
            lines: vec![
                JournalLine {
                    account_id: "1001".to_string(),
                    description: "Test debit line".to_string(),
                    debit_amount: 1000.00,
                    credit_amount: 0.00,
                },
                JournalLine {
                    account_id: "2001".to_string(),
                    description: "Test credit line".to_string(),
                    debit_amount: 0.00,
                    credit_amount: 1000.00,
                },
            ],
        }
    }
}

pub(crate) fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
