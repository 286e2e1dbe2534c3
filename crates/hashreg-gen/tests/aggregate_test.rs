//! Registry aggregation tests.

use std::path::Path;

use hashreg_core::errors::{ExtractError, MarkerField};
use hashreg_core::types::HashTypeEntry;
use hashreg_gen::{FieldExtractor, RegistryAggregator, SourceUnit, VariantExpander, VariantTable};

fn module(name: &str, kernel_type: u64, example: Option<&str>) -> String {
    let mut src = format!(
        "static const char *HASH_NAME      = \"{name}\";\nstatic const u64   KERN_TYPE      = {kernel_type};\n"
    );
    if let Some(ex) = example {
        src.push_str(&format!("static const char *ST_HASH        = \"{ex}\";\n"));
    }
    src
}

fn unit(path: &str, content: String) -> SourceUnit {
    SourceUnit::new(path, content.into_bytes())
}

#[test]
fn test_md5_module_yields_single_entry() {
    let registry = RegistryAggregator::default()
        .build(vec![unit("module_00000.c", module("MD5", 0, None))])
        .unwrap();
    assert_eq!(registry.entries(), &[HashTypeEntry::new("MD5", 0, None)]);
}

#[test]
fn test_direct_entries_follow_traversal_order() {
    let units = vec![
        unit("a.c", module("MD5", 0, None)),
        unit("b.c", module("SHA1", 100, Some("b89eaac7e61417341b710b727768294d0e6a277b"))),
        unit("c.c", module("bcrypt $2*$, Blowfish (Unix)", 3200, Some("$2a$05$abc"))),
    ];
    let registry = RegistryAggregator::default().build(units).unwrap();

    assert_eq!(registry.len(), 3);
    let types: Vec<u64> = registry.iter().map(|e| e.kernel_type).collect();
    assert_eq!(types, [0, 100, 3200]);
    assert_eq!(registry.get(2).unwrap().name, "bcrypt $2*$, Blowfish (Unix)");
    assert_eq!(registry.get(2).unwrap().example.as_deref(), Some("$2a$05$abc"));
}

#[test]
fn test_variant_family_replaces_direct_entry() {
    let registry = RegistryAggregator::default()
        .build(vec![unit(
            "module_16511.c",
            module("JWT (JSON Web Token)", 16511, Some("abc")),
        )])
        .unwrap();

    assert_eq!(registry.len(), 3);
    assert!(registry.iter().all(|e| e.example.as_deref() == Some("abc")));
    assert!(registry.iter().all(|e| e.name != "JWT (JSON Web Token)"));
    let types: Vec<u64> = registry.iter().map(|e| e.kernel_type).collect();
    assert_eq!(types, [16511, 16512, 16513]);
}

#[test]
fn test_variant_entries_are_spliced_in_place() {
    let units = vec![
        unit("a.c", module("MD5", 0, None)),
        unit("b.c", module("JWT", 16511, None)),
        unit("c.c", module("SHA1", 100, None)),
    ];
    let registry = RegistryAggregator::default().build(units).unwrap();
    let types: Vec<u64> = registry.iter().map(|e| e.kernel_type).collect();
    assert_eq!(types, [0, 16511, 16512, 16513, 100]);
}

#[test]
fn test_missing_name_aborts_the_build() {
    let units = vec![
        unit("module_00000.c", module("MD5", 0, None)),
        unit("module_00005.c", "static const u64 KERN_TYPE = 5;".to_string()),
        unit("module_00100.c", module("SHA1", 100, None)),
    ];
    let err = RegistryAggregator::default().build(units).unwrap_err();
    match err {
        ExtractError::MissingField { field, path } => {
            assert_eq!(field, MarkerField::HashName);
            assert_eq!(path, Path::new("module_00005.c"));
        }
        other => panic!("Expected MissingField, got: {:?}", other),
    }
}

#[test]
fn test_stream_errors_abort_before_later_units() {
    #[derive(Debug, PartialEq)]
    enum TestError {
        Io,
        Extract,
    }
    impl From<ExtractError> for TestError {
        fn from(_: ExtractError) -> Self {
            TestError::Extract
        }
    }

    let units: Vec<Result<SourceUnit, TestError>> = vec![
        Ok(unit("a.c", module("MD5", 0, None))),
        Err(TestError::Io),
        Ok(unit("broken.c", String::new())),
    ];
    let err = RegistryAggregator::default().try_build(units).unwrap_err();
    assert_eq!(err, TestError::Io);
}

#[test]
fn test_empty_input_builds_empty_registry() {
    let registry = RegistryAggregator::default()
        .build(Vec::<SourceUnit>::new())
        .unwrap();
    assert!(registry.is_empty());
}

#[test]
fn test_custom_table_controls_expansion() {
    let aggregator = RegistryAggregator::new(
        FieldExtractor::new(),
        VariantExpander::new(VariantTable::empty()),
    );
    let registry = aggregator
        .build(vec![unit("jwt.c", module("JWT (JSON Web Token)", 16511, None))])
        .unwrap();
    assert_eq!(
        registry.entries(),
        &[HashTypeEntry::new("JWT (JSON Web Token)", 16511, None)]
    );
}
