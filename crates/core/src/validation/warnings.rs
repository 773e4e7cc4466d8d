use thiserror::Error;

/// Diagnostics raised for types that look like test classes but cannot run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassWarning {
    /// Raised for non-public classes and for concrete open generic classes alike
    #[error("UTA001: TestClass attribute defined on non-public class {0}")]
    NonPublicOrOpenGenericClass(String),

    #[error(
        "UTA031: class {0} does not have valid TestContext property. TestContext must be of type TestContext, must be non-static, public and must not be read-only. For example: public TestContext TestContext."
    )]
    InvalidTestContextSignature(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_text() {
        insta::assert_snapshot!(
            ClassWarning::NonPublicOrOpenGenericClass("Tests.Hidden".to_string()),
            @"UTA001: TestClass attribute defined on non-public class Tests.Hidden"
        );
        insta::assert_snapshot!(
            ClassWarning::InvalidTestContextSignature("Tests.Broken".to_string()),
            @"UTA031: class Tests.Broken does not have valid TestContext property. TestContext must be of type TestContext, must be non-static, public and must not be read-only. For example: public TestContext TestContext."
        );
    }
}
