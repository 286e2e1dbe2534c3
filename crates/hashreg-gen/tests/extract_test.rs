//! Field extraction tests.

use std::path::Path;

use hashreg_core::errors::{ExtractError, MarkerField};
use hashreg_gen::{FieldExtractor, MarkerPatterns, SourceUnit};
use proptest::prelude::*;

const MD5_MODULE: &str = r#"
#include "common.h"
#include "types.h"
#include "modules.h"

static const u32   ATTACK_EXEC    = ATTACK_EXEC_INSIDE_KERNEL;
static const u32   DGST_POS0      = 0;
static const char *HASH_NAME      = "MD5";
static const u64   KERN_TYPE      = 0;
static const u32   OPTI_TYPE      = OPTI_TYPE_ZERO_BYTE;
"#;

const SHA1_MODULE: &str = r#"
static const char *HASH_NAME      = "SHA1";
static const u64   KERN_TYPE      = 100;
static const char *ST_PASS        = "hashcat";
static const char *ST_HASH        = "b89eaac7e61417341b710b727768294d0e6a277b";
"#;

fn unit(name: &str, content: &str) -> SourceUnit {
    SourceUnit::new(name, content.as_bytes().to_vec())
}

#[test]
fn test_extracts_name_and_type_without_example() {
    let fields = FieldExtractor::new()
        .extract(&unit("module_00000.c", MD5_MODULE))
        .unwrap();
    assert_eq!(fields.name, "MD5");
    assert_eq!(fields.kernel_type, 0);
    assert_eq!(fields.example, None);
}

#[test]
fn test_extracts_example_hash_when_present() {
    let fields = FieldExtractor::new()
        .extract(&unit("module_00100.c", SHA1_MODULE))
        .unwrap();
    assert_eq!(fields.name, "SHA1");
    assert_eq!(fields.kernel_type, 100);
    assert_eq!(
        fields.example.as_deref(),
        Some("b89eaac7e61417341b710b727768294d0e6a277b")
    );
}

#[test]
fn test_marker_order_does_not_matter() {
    let src = r#"
static const char *ST_HASH = "abc";
static const u64 KERN_TYPE = 42;
static const char *HASH_NAME = "Reordered";
"#;
    let fields = FieldExtractor::new().extract(&unit("m.c", src)).unwrap();
    assert_eq!(fields.name, "Reordered");
    assert_eq!(fields.kernel_type, 42);
    assert_eq!(fields.example.as_deref(), Some("abc"));
}

#[test]
fn test_missing_name_fails_naming_the_file() {
    let src = "static const u64 KERN_TYPE = 5;";
    let err = FieldExtractor::new()
        .extract(&unit("modules/module_00005.c", src))
        .unwrap_err();
    match err {
        ExtractError::MissingField { field, path } => {
            assert_eq!(field, MarkerField::HashName);
            assert_eq!(path, Path::new("modules/module_00005.c"));
        }
        other => panic!("Expected MissingField, got: {:?}", other),
    }
}

#[test]
fn test_empty_name_counts_as_missing() {
    let src = "static const char *HASH_NAME = \"\";\nstatic const u64 KERN_TYPE = 5;";
    let err = FieldExtractor::new().extract(&unit("m.c", src)).unwrap_err();
    assert_eq!(err.missing_field(), Some(MarkerField::HashName));
}

#[test]
fn test_missing_kernel_type_fails() {
    let src = r#"static const char *HASH_NAME = "MD5";"#;
    let err = FieldExtractor::new().extract(&unit("m.c", src)).unwrap_err();
    assert_eq!(err.missing_field(), Some(MarkerField::KernelType));
}

#[test]
fn test_non_integer_kernel_type_fails() {
    let src = "static const char *HASH_NAME = \"MD5\";\nstatic const u64 KERN_TYPE = KERN_TYPE_MD5;";
    let err = FieldExtractor::new().extract(&unit("m.c", src)).unwrap_err();
    assert_eq!(err.missing_field(), Some(MarkerField::KernelType));
}

#[test]
fn test_name_is_checked_before_kernel_type() {
    let err = FieldExtractor::new()
        .extract(&unit("empty.c", ""))
        .unwrap_err();
    assert_eq!(err.missing_field(), Some(MarkerField::HashName));
}

#[test]
fn test_empty_example_is_absent() {
    let src = "static const char *HASH_NAME = \"X\";\nstatic const u64 KERN_TYPE = 1;\nstatic const char *ST_HASH = \"\";";
    let fields = FieldExtractor::new().extract(&unit("m.c", src)).unwrap();
    assert_eq!(fields.example, None);
}

#[test]
fn test_first_occurrence_wins() {
    let src = r#"
static const char *HASH_NAME = "First";
static const char *HASH_NAME = "Second";
static const u64 KERN_TYPE = 1;
static const u64 KERN_TYPE = 2;
"#;
    let fields = FieldExtractor::new().extract(&unit("m.c", src)).unwrap();
    assert_eq!(fields.name, "First");
    assert_eq!(fields.kernel_type, 1);
}

#[test]
fn test_non_utf8_content_is_tolerated() {
    let mut content = b"static const char *HASH_NAME = \"Latin\";\n".to_vec();
    content.extend_from_slice(&[0xff, 0xfe, b'\n']);
    content.extend_from_slice(b"static const u64 KERN_TYPE = 9;\n");
    let fields = FieldExtractor::new()
        .extract(&SourceUnit::new("m.c", content))
        .unwrap();
    assert_eq!(fields.name, "Latin");
    assert_eq!(fields.kernel_type, 9);
}

#[test]
fn test_custom_patterns_replace_markers() {
    let patterns = MarkerPatterns::new(
        r#"NAME\s*:\s*"(.*?)""#,
        r"TYPE\s*:\s*(\d+)",
        r#"EXAMPLE\s*:\s*"(.*?)""#,
    )
    .unwrap();
    let extractor = FieldExtractor::with_patterns(patterns);
    let fields = extractor
        .extract_bytes(b"NAME: \"Custom\"\nTYPE: 77\n", Path::new("custom.txt"))
        .unwrap();
    assert_eq!(fields.name, "Custom");
    assert_eq!(fields.kernel_type, 77);
    assert_eq!(fields.example, None);
}

proptest! {
    #[test]
    fn test_extraction_returns_captured_literals(
        name in "[A-Za-z0-9 ()$.,:_-]{1,40}",
        kernel_type in any::<u64>(),
        example in proptest::option::of("[a-f0-9$*:]{1,64}"),
    ) {
        let mut src = format!(
            "static const char *HASH_NAME      = \"{name}\";\nstatic const u64   KERN_TYPE      = {kernel_type};\n"
        );
        if let Some(ref ex) = example {
            src.push_str(&format!("static const char *ST_HASH        = \"{ex}\";\n"));
        }

        let fields = FieldExtractor::new().extract(&unit("p.c", &src)).unwrap();
        prop_assert_eq!(fields.name, name);
        prop_assert_eq!(fields.kernel_type, kernel_type);
        prop_assert_eq!(fields.example, example);
    }
}
