use serde::{Deserialize, Serialize};

/// Result of evaluating one candidate type.
///
/// At most one warning is ever recorded: a silent rejection carries none, a
/// diagnosable rejection carries exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub warnings: Vec<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            warnings: Vec::new(),
        }
    }

    /// Not a candidate, or a candidate that is expected not to run
    pub fn skipped() -> Self {
        Self::default()
    }

    pub fn rejected(warning: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            warnings: vec![warning.into()],
        }
    }

    pub fn is_silent_rejection(&self) -> bool {
        !self.is_valid && self.warnings.is_empty()
    }
}
