use serde::Serialize;

/// Errors and warnings collected while walking one payload.
///
/// A fresh report is created by every top-level validation call and threaded
/// through the traversal by `&mut`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: String) {
        self.errors.push(message);
    }

    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Snapshot of the collected messages.
    pub fn results(&self) -> ValidationResults {
        ValidationResults {
            valid: self.is_valid(),
            error_count: self.errors.len(),
            warning_count: self.warnings.len(),
            errors: self.errors.clone(),
            warnings: self.warnings.clone(),
        }
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Result record handed to callers, usually for assertions or a JSON dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResults {
    pub valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// What a top-level validation call returns.
///
/// `passed` is the traversal verdict. It equals `report.is_valid()` in strict
/// mode; in non-strict mode it stays `true` even when errors were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub passed: bool,
    pub report: ValidationReport,
}

impl ValidationOutcome {
    pub fn results(&self) -> ValidationResults {
        self.report.results()
    }
}
