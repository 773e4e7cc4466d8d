//! Integration test for discovering test classes from a metadata dump

use testgate::{ClassEligibilityFilter, Config, TypeDescriptor, ValidationOutcome};

const MARKER: &str = "Microsoft.VisualStudio.TestTools.UnitTesting.TestClassAttribute";
const CONTEXT: &str = "Microsoft.VisualStudio.TestTools.UnitTesting.TestContext";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn metadata_dump() -> serde_json::Value {
    serde_json::json!([
        {
            "full_name": "Calc.Tests.AdditionTests",
            "is_class": true,
            "is_public": true,
            "attributes": [{ "full_name": MARKER }],
            "declared_properties": [
                { "name": "TestContext", "type_full_name": CONTEXT, "setter": {} }
            ]
        },
        {
            "full_name": "Calc.Tests.InternalTests",
            "is_class": true,
            "attributes": [{ "full_name": MARKER }]
        },
        {
            "full_name": "Calc.Tests.TypedTests`1",
            "is_class": true,
            "is_public": true,
            "is_generic_definition": true,
            "attributes": [{ "full_name": MARKER }]
        },
        {
            "full_name": "Calc.Tests.ReadOnlyContextTests",
            "is_class": true,
            "is_public": true,
            "attributes": [{ "full_name": MARKER }],
            "declared_properties": [
                { "name": "TestContext", "type_full_name": CONTEXT }
            ]
        },
        {
            "full_name": "Calc.Tests.TestBase",
            "is_class": true,
            "is_public": true,
            "is_abstract": true,
            "attributes": [{ "full_name": MARKER }]
        },
        {
            "full_name": "Calc.Tests.Outer+NestedTests",
            "is_class": true,
            "is_nested": true,
            "is_nested_public": true,
            "attributes": [{
                "full_name": "Calc.Testing.DataTestClassAttribute",
                "base_types": [MARKER]
            }]
        },
        {
            "full_name": "Calc.Tests.InheritedTests",
            "is_class": true,
            "is_public": true,
            "inherited_attributes": [{ "full_name": MARKER }]
        },
        {
            "full_name": "Calc.Point",
            "is_public": true,
            "attributes": [{ "full_name": MARKER }]
        },
        {
            "full_name": "Calc.Helpers",
            "is_class": true,
            "is_public": true
        }
    ])
}

#[test]
fn test_discovery_over_metadata_dump() -> anyhow::Result<()> {
    init_tracing();
    let types: Vec<TypeDescriptor> = serde_json::from_value(metadata_dump())?;
    let filter = Config::default().class_filter();

    let report = filter.filter_candidates(&types);

    assert_eq!(
        report.valid,
        vec![
            "Calc.Tests.AdditionTests",
            "Calc.Tests.Outer+NestedTests",
            "Calc.Tests.InheritedTests",
        ]
    );
    assert_eq!(
        report.warnings,
        vec![
            "UTA001: TestClass attribute defined on non-public class Calc.Tests.InternalTests",
            "UTA001: TestClass attribute defined on non-public class Calc.Tests.TypedTests`1",
            "UTA031: class Calc.Tests.ReadOnlyContextTests does not have valid TestContext \
             property. TestContext must be of type TestContext, must be non-static, public and \
             must not be read-only. For example: public TestContext TestContext.",
        ]
    );
    Ok(())
}

#[test]
fn test_every_outcome_has_at_most_one_warning() -> anyhow::Result<()> {
    let types: Vec<TypeDescriptor> = serde_json::from_value(metadata_dump())?;
    let filter = ClassEligibilityFilter::new();

    for ty in &types {
        let outcome = filter.evaluate(ty);
        assert!(outcome.warnings.len() <= 1, "{} produced {:?}", ty.full_name, outcome);
        if outcome.is_valid {
            assert!(outcome.warnings.is_empty());
        }
    }
    Ok(())
}

#[test]
fn test_non_class_never_warns() {
    let filter = ClassEligibilityFilter::new();
    for (is_public, is_generic_definition, is_abstract) in
        [(true, false, false), (false, true, false), (false, true, true)]
    {
        let ty = TypeDescriptor {
            full_name: "Calc.Value".to_string(),
            is_class: false,
            is_public,
            is_generic_definition,
            is_abstract,
            ..Default::default()
        };
        assert_eq!(filter.evaluate(&ty), ValidationOutcome::skipped());
    }
}
