use serde::Serialize;

/// Outcome of one case, recorded in run order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    pub name: &'static str,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TestResult {
    #[must_use]
    pub const fn pass(name: &'static str) -> Self {
        Self {
            name,
            passed: true,
            error: None,
        }
    }

    #[must_use]
    pub const fn fail(name: &'static str, error: String) -> Self {
        Self {
            name,
            passed: false,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub base_url: String,
    pub results: Vec<TestResult>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub success: bool,
}

impl SuiteReport {
    #[must_use]
    pub fn new(base_url: String, results: Vec<TestResult>) -> Self {
        let passed = results.iter().filter(|result| result.passed).count();
        let total = results.len();
        let failed = total.saturating_sub(passed);
        Self {
            base_url,
            results,
            total,
            passed,
            failed,
            success: failed == 0,
        }
    }

    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.results.len().saturating_add(4));
        for result in &self.results {
            if result.passed {
                lines.push(format!("✓ {}", result.name));
            } else {
                lines.push(format!("✗ {}", result.name));
                if let Some(error) = result.error.as_deref() {
                    lines.push(format!("  Error: {}", error));
                }
            }
        }
        lines.push(String::new());
        lines.push(format!("Total: {} test(s)", self.total));
        lines.push(format!("Passed: {}", self.passed));
        lines.push(format!("Failed: {}", self.failed));
        lines
    }

    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.success { 0 } else { 1 }
    }
}
