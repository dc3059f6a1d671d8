//! Statements described as JSON.
#![cfg(feature = "serde")]

use sqlgen_core::builder::{Select, Statement, StatementNode};

#[test]
fn select_from_json() {
    let json = r#"{
        "kind": "select",
        "columns": ["id", "name"],
        "from": ["users"],
        "where": ["active = 1"]
    }"#;
    let statement: Statement = serde_json::from_str(json).unwrap();
    assert_eq!(
        statement.to_sql(0),
        "SELECT id, name\nFROM users\nWHERE active = 1\n"
    );
}

#[test]
fn nested_fragment_from_json() {
    let json = r#"{
        "kind": "exists",
        "query": { "kind": "select", "columns": ["1"], "from": ["t"] }
    }"#;
    let statement: Statement = serde_json::from_str(json).unwrap();
    assert_eq!(statement.to_sql(0), "EXISTS (SELECT 1\nFROM t\n)");
}

#[test]
fn set_operation_and_join_from_json() {
    let json = r#"[
        { "kind": "set_operation", "operator": "natural_join", "operands": ["a", "b"] },
        { "kind": "inner_join", "left": "A", "joins": [{ "right": "B", "on": ["A.id = B.id"] }] },
        { "kind": "drop", "table": "old" }
    ]"#;
    let statements: Vec<Statement> = serde_json::from_str(json).unwrap();
    assert_eq!(statements[0].to_sql(0), "a\n\nNATURAL JOIN\n\nb");
    assert_eq!(statements[1].to_sql(0), "A\n\nINNER JOIN\nB\nON A.id = B.id");
    assert_eq!(statements[2].to_sql(0), "DROP TABLE old;\n");
}

#[test]
fn serialized_statement_reads_back() {
    let original: Statement = Select::aliased("x").select(["id"]).from(["t"]).into();
    let json = serde_json::to_string(&original).unwrap();
    let parsed: Statement = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn diagnostics_serialize_with_delimiter_chars() {
    let diagnostics = sqlgen_core::validate("(");
    let json = serde_json::to_value(&diagnostics).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "kind": "unclosed_delimiter", "delimiter": "(", "line": 0, "column": 0 }])
    );
}
