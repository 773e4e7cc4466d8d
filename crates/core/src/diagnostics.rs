//! Process-wide switch for extended data source diagnostics
//!
//! The environment is read once, on first use, and the answer is kept for
//! the lifetime of the process. The switch only adds trace output; it never
//! changes a resolution result.

use std::sync::OnceLock;

pub const DIAGNOSTICS_ENV_VAR: &str = "VSTS_DIAGNOSTICS";
pub const DIAGNOSTICS_COMPONENT: &str = "TestDataConnection";

static EXTENDED_DIAGNOSTICS: OnceLock<bool> = OnceLock::new();

/// Whether extended diagnostics were requested through [`DIAGNOSTICS_ENV_VAR`]
pub fn extended_diagnostics_enabled() -> bool {
    *EXTENDED_DIAGNOSTICS.get_or_init(|| {
        let value = std::env::var(DIAGNOSTICS_ENV_VAR).ok();
        let enabled = is_component_enabled(value.as_deref(), DIAGNOSTICS_COMPONENT);
        tracing::trace!("Extended data source diagnostics enabled: {}", enabled);
        enabled
    })
}

/// A component is enabled when the variable's value mentions it (case-sensitive)
pub fn is_component_enabled(value: Option<&str>, component: &str) -> bool {
    value.is_some_and(|v| v.contains(component))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_matching() {
        assert!(!is_component_enabled(None, DIAGNOSTICS_COMPONENT));
        assert!(!is_component_enabled(Some(""), DIAGNOSTICS_COMPONENT));
        assert!(is_component_enabled(Some("TestDataConnection"), DIAGNOSTICS_COMPONENT));
        assert!(is_component_enabled(
            Some("Execution;TestDataConnection;Deployment"),
            DIAGNOSTICS_COMPONENT
        ));
        assert!(!is_component_enabled(Some("testdataconnection"), DIAGNOSTICS_COMPONENT));
    }

    #[test]
    fn test_cached_value_is_stable() {
        let first = extended_diagnostics_enabled();
        assert_eq!(extended_diagnostics_enabled(), first);
    }
}
