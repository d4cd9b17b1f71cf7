//! Integration tests for the parser.
//!
//! Tests parsing of whole declaration files into items.

use tsguard::syntax::{Item, TypeExpr, parse};

#[test]
fn parse_full_declaration_file() {
    let source = r"
import { Unit } from './unit.interface';
import { Label } from './label.interface';

export interface Measurement extends Label {
    value: number;
    unit: Unit;
    note: string;
}
";
    let items = parse(source).unwrap();
    assert_eq!(items.len(), 3);

    let iface = items[2].as_interface().unwrap();
    assert_eq!(iface.name, "Measurement");
    assert_eq!(iface.extends, vec!["Label"]);
    assert_eq!(iface.fields.len(), 3);
    assert_eq!(iface.fields[0].ty, TypeExpr::Number);
    assert_eq!(iface.fields[1].ty, TypeExpr::Named("Unit".into()));
    assert_eq!(iface.fields[2].ty, TypeExpr::String);
}

#[test]
fn parse_preserves_source_order_of_items() {
    let source = "interface A {}\nimport { B } from './b.interface';\ninterface C {}";
    let items = parse(source).unwrap();
    let kinds: Vec<bool> = items.iter().map(|i| matches!(i, Item::Import(_))).collect();
    assert_eq!(kinds, vec![false, true, false]);

    let starts: Vec<usize> = items.iter().map(|i| i.span().start).collect();
    assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn parse_tolerates_surrounding_statements() {
    let source = r"
const VERSION = 3;
export interface Config { name: string; }
export function helper() { return VERSION; }
";
    let items = parse(source).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].as_interface().unwrap().name, "Config");
}

#[test]
fn parse_error_carries_source_line() {
    let err = parse("interface Broken {\n  name string;\n}").unwrap_err();
    match err.kind {
        tsguard::syntax::ErrorKind::Parse { line, context, .. } => {
            assert_eq!(line, 2);
            assert!(context.contains("name string"));
        }
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn parse_unsupported_shapes_classified_not_rejected() {
    let source = r"
interface Grab {
    tags: string[];
    choice: number | string;
    maybe?: number;
    pair: Map<string, number>;
}
";
    let items = parse(source).unwrap();
    let iface = items[0].as_interface().unwrap();
    assert_eq!(iface.fields.len(), 4);
    assert!(
        iface
            .fields
            .iter()
            .all(|f| matches!(f.ty, TypeExpr::Unsupported(_)))
    );
}
