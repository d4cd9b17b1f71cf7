//! Dependency import resolution and deduplication.

use tsguard::codegen::{Resolution, SymbolTable, generate, guard_import, guard_specifier};
use tsguard::syntax::parse;

fn generate_source(file_name: &str, source: &str) -> String {
    let items = parse(source).expect("parse failed");
    generate(file_name, &items).expect("generate failed")
}

#[test]
fn specifier_rewrite_points_at_sibling_guard() {
    assert_eq!(guard_specifier("./base.interface"), "./base.guard");
    assert_eq!(
        guard_specifier("../common/ids.interface"),
        "../common/ids.guard"
    );
}

#[test]
fn import_line_form() {
    assert_eq!(
        guard_import("Unit", "./unit.interface"),
        "import { isUnit } from './unit.guard';"
    );
}

#[test]
fn dependency_used_by_field_and_extends_imports_once() {
    let out = generate_source(
        "named.interface.ts",
        "import { Base } from './base.interface';\n\
         interface Named extends Base { fallback: Base; }",
    );
    assert_eq!(out.matches("import { isBase } from './base.guard';").count(), 1);
}

#[test]
fn distinct_dependencies_import_separately() {
    let out = generate_source(
        "pair.interface.ts",
        "import { Left, Right } from './sides.interface';\n\
         interface Pair { left: Left; right: Right; }",
    );
    assert!(out.contains("import { isLeft } from './sides.guard';"));
    assert!(out.contains("import { isRight } from './sides.guard';"));
}

#[test]
fn same_file_dependency_never_imported() {
    let out = generate_source(
        "tree.interface.ts",
        "interface Leaf { v: number; }\ninterface Node { left: Leaf; right: Leaf; }",
    );
    assert!(!out.contains("import { isLeaf } from"));
    assert!(out.contains("isLeaf(value.left) && isLeaf(value.right) && true;"));
}

#[test]
fn unresolved_dependency_fails_generation() {
    let items = parse("interface T extends Ghost {}").unwrap();
    let err = generate("t.interface.ts", &items).unwrap_err();
    assert!(matches!(
        err.kind,
        tsguard::syntax::ErrorKind::UnresolvedReference { .. }
    ));
}

#[test]
fn symbol_table_prefers_same_file_declarations() {
    let items = parse(
        "import { Inner } from './inner.interface';\ninterface Inner {}\ninterface Outer { v: Inner; }",
    )
    .unwrap();
    let table = SymbolTable::from_items(&items);
    assert_eq!(table.resolve("Inner"), Some(Resolution::SameFile));

    // And generation therefore emits no dependency import for Inner.
    let out = generate("x.interface.ts", &items).unwrap();
    assert!(!out.contains("inner.guard"));
}
