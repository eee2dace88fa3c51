//! Integration tests for the operation catalogue.

use std::collections::HashMap;

use jsonnode_utils::document::node::{JsonNode, JsonNumber, JsonValue};
use jsonnode_utils::document::parser::parse_json;
use jsonnode_utils::document::tree::JsonTree;
use jsonnode_utils::file::saver::serialize_node_compact;
use jsonnode_utils::ops;
use jsonnode_utils::path::{resolve, ROOT};

fn tree(json: &str) -> JsonTree {
    parse_json(json).unwrap()
}

fn element<'a>(node: &'a JsonNode, index: usize) -> &'a JsonNode {
    &node.value().as_array().expect("array")[index]
}

// ============================================================================
// Root-level fields
// ============================================================================

#[test]
fn test_add_string_field_root_level() {
    let mut doc = tree(r#"{"name":"Aviv"}"#);
    ops::set_field(doc.root_mut(), "employed", "false").unwrap();
    assert_eq!(
        serialize_node_compact(doc.root()),
        r#"{"name":"Aviv","employed":"false"}"#
    );
}

#[test]
fn test_add_int_field_root_level() {
    let mut doc = tree(r#"{"name":"Aviv"}"#);
    ops::set_field(doc.root_mut(), "age", 29).unwrap();
    assert_eq!(doc, tree(r#"{"name":"Aviv","age":29}"#));
}

#[test]
fn test_add_boolean_field_root_level() {
    let mut doc = tree(r#"{"name":"Aviv"}"#);
    ops::set_field(doc.root_mut(), "male", true).unwrap();
    assert_eq!(doc, tree(r#"{"name":"Aviv","male":true}"#));
}

#[test]
fn test_remove_field_root_level() {
    let mut doc = tree(r#"{"name":"Aviv", "age":29}"#);
    let expected = tree(r#"{"name":"Aviv"}"#);

    ops::remove_field(doc.root_mut(), "age").unwrap();
    assert_eq!(doc, expected);

    ops::remove_field(doc.root_mut(), "height").unwrap();
    assert_eq!(doc, expected);
    assert!(doc.root().get("age").is_none());
}

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn test_missing_path_reads() {
    let doc = tree(r#"{"a":{"b":[1,2]}}"#);
    for path in [&["x"][..], &["a", "x"][..], &["a", "b", "c"][..]] {
        assert!(resolve(doc.root(), path).is_none());
        assert_eq!(ops::get_string(doc.root(), path), None);
        assert!(ops::get_string_list(doc.root(), path).is_empty());
    }
}

#[test]
fn test_get_string_field_value_by_path() {
    let doc = tree(r#"{"name":{"first":"Aviv", "last":"Doron"}, "age":29}"#);
    assert_eq!(
        ops::get_string(doc.root(), &["name", "first"]).as_deref(),
        Some("Aviv")
    );
}

#[test]
fn test_get_list_field_value_by_path() {
    let doc = tree(r#"{"names":["alice","bob","charlie"]}"#);
    assert_eq!(
        ops::get_string_list(doc.root(), &["names"]),
        vec!["alice", "bob", "charlie"]
    );
    assert!(ops::get_string_list(doc.root(), &["last names"]).is_empty());
}

// ============================================================================
// Fields by path
// ============================================================================

#[test]
fn test_add_field_by_path() {
    let mut doc = tree(r#"{"person": {"name": "Aviv"}}"#);
    ops::add_field_by_path(doc.root_mut(), &["person"], "age", "29");
    assert_eq!(doc, tree(r#"{"person": {"name": "Aviv", "age": "29"}}"#));
}

#[test]
fn test_add_field_by_path_round_trips() {
    let mut doc = tree(r#"{"a":{"b":{}}}"#);
    ops::add_field_by_path(doc.root_mut(), &["a", "b"], "n", 1.5);

    let node = ops::get_node_by_path(doc.root(), &["a", "b", "n"]).unwrap();
    assert_eq!(node.value(), &JsonValue::Number(JsonNumber::Float(1.5)));
}

#[test]
fn test_remove_field_by_path_and_name() {
    let mut doc = tree(r#"{"name":"Aviv", "age":29}"#);
    ops::remove_field_by_path_and_name(doc.root_mut(), ROOT, "age");
    assert_eq!(doc, tree(r#"{"name":"Aviv"}"#));
}

#[test]
fn test_remove_field_by_nested_path() {
    let mut doc = tree(r#"{"a":{"b":{"x":1,"y":2}}}"#);
    ops::remove_field_by_path_and_name(doc.root_mut(), &["a", "b"], "x");
    ops::remove_field_by_path_and_name(doc.root_mut(), &["a", "missing"], "y");
    assert_eq!(doc, tree(r#"{"a":{"b":{"y":2}}}"#));
}

#[test]
fn test_get_node_by_path() {
    let doc = tree(r#"{"a":{"b":{"c":"value"}}}"#);
    let node = ops::get_node_by_path(doc.root(), &["a", "b", "c"]).unwrap();
    assert_eq!(node.value().as_text().as_deref(), Some("value"));
}

// ============================================================================
// Array broadcasts
// ============================================================================

#[test]
fn test_remove_field_of_list_by_path_and_name() {
    let mut doc = tree(r#"[{"name":"Alice","age":30},{"name":"Bob","age":25}]"#);
    ops::remove_field_of_list_by_path_and_name(doc.root_mut(), ROOT, "age");
    assert_eq!(doc, tree(r#"[{"name":"Alice"},{"name":"Bob"}]"#));
}

#[test]
fn test_remove_field_two_level_array() {
    let mut doc = tree(
        r#"{ "foo": { "bar": [ { "name": "Alice", "age": 25 }, { "name": "Bob", "age": 30 } ] } }"#,
    );
    ops::remove_field_two_level_array(doc.root_mut(), &["foo", "bar"], "age");
    assert_eq!(
        doc,
        tree(r#"{"foo":{"bar":[{"name":"Alice"},{"name":"Bob"}]}}"#)
    );
}

#[test]
fn test_removals_are_idempotent() {
    let mut once = tree(r#"{"l":[{"a":1,"b":2}],"a":0}"#);
    ops::remove_field_of_list_by_path_and_name(once.root_mut(), &["l"], "a");
    ops::remove_field(once.root_mut(), "a").unwrap();

    let mut twice = once.clone();
    ops::remove_field_of_list_by_path_and_name(twice.root_mut(), &["l"], "a");
    ops::remove_field(twice.root_mut(), "a").unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_add_position_by_path() {
    let mut doc = tree(r#"{"array":[{"id":"1"},{"id":"2"},{"id":"3"}]}"#);
    ops::add_position_by_path(doc.root_mut(), &["array"], "position");

    let array = doc.root().get("array").unwrap();
    for index in 0..3 {
        let position = element(array, index).get("position").unwrap();
        assert_eq!(
            position.value(),
            &JsonValue::Number(JsonNumber::Integer(index as i64))
        );
    }
}

#[test]
fn test_add_field_by_rules() {
    let mut doc = tree(
        r#"{"items": [{"name": "item1", "category": "cat1"}, {"name": "item2", "category": "cat2"}]}"#,
    );
    let rules = HashMap::from([("cat1".to_string(), true), ("cat2".to_string(), false)]);

    ops::add_field_to_array_by_rules(doc.root_mut(), &["items"], "readOnly", "category", &rules);

    assert_eq!(
        doc,
        tree(
            r#"{"items": [
                {"name": "item1", "category": "cat1", "readOnly": true},
                {"name": "item2", "category": "cat2", "readOnly": false}
            ]}"#
        )
    );
}

#[test]
fn test_add_field_by_rules_at_root_array() {
    let mut doc = tree(r#"[{"category":"cat1"},{"category":"cat2"}]"#);
    let rules = HashMap::from([("cat1".to_string(), true), ("cat2".to_string(), false)]);

    ops::add_field_to_array_by_rules(doc.root_mut(), ROOT, "readOnly", "category", &rules);

    assert_eq!(
        doc,
        tree(r#"[{"category":"cat1","readOnly":true},{"category":"cat2","readOnly":false}]"#)
    );
}

#[test]
fn test_add_boolean_field_to_array() {
    let mut doc = tree(r#"{"items": [{"name": "item1", "value": 10}, {"name": "item2", "value": 20}]}"#);
    ops::add_field_to_array(doc.root_mut(), &["items"], "readOnly", true);
    assert_eq!(
        doc,
        tree(
            r#"{"items": [
                {"name": "item1", "value": 10, "readOnly": true},
                {"name": "item2", "value": 20, "readOnly": true}
            ]}"#
        )
    );
}

#[test]
fn test_add_string_field_to_array() {
    let mut doc = tree(r#"{"items": [{"name": "item1", "value": 10}, {"name": "item2", "value": 20}]}"#);
    ops::add_field_to_array(doc.root_mut(), &["items"], "status", "OK");

    let items = doc.root().get("items").unwrap();
    for index in 0..2 {
        assert_eq!(
            ops::get_string(element(items, index), &["status"]).as_deref(),
            Some("OK")
        );
    }
}

// ============================================================================
// Pruning
// ============================================================================

#[test]
fn test_clean_field_of_two_empty_fields() {
    let mut doc = tree(
        r#"{"books": [
            {"id": 1, "name": "book1", "details": {"author": "author1", "publisher": "publisher1"}},
            {"id": 2, "name": "book2", "details": {"author": "", "publisher": ""}}
        ]}"#,
    );

    ops::clean_field_of_two_empty_fields(doc.root_mut(), &["books"], "details", "author", "publisher");

    let books = doc.root().get("books").unwrap();
    assert_eq!(books.value().as_array().unwrap().len(), 2);
    assert!(element(books, 0).has("details"));
    assert!(!element(books, 1).has("details"));
}

#[test]
fn test_clean_array_field_if_array_is_empty() {
    let mut doc = tree(
        r#"{ "users": [{ "id": 1, "name": "Alice", "hobbies": ["reading", "swimming"] }, { "id": 2, "name": "Bob", "hobbies": [] }]}"#,
    );
    let expected = tree(
        r#"{ "users": [{ "id": 1, "name": "Alice", "hobbies": ["reading", "swimming"] }, { "id": 2, "name": "Bob" }]}"#,
    );

    ops::clean_array_field_if_array_is_empty(doc.root_mut(), &["users"], ROOT, "hobbies");

    assert_eq!(doc, expected);
}

#[test]
fn test_convert_empty_string_field_to_empty_map() {
    let mut doc = tree(r#"{"results":[{"id":1,"data":""},{"id":2,"data":"bar"}]}"#);
    ops::convert_empty_string_field_to_empty_map(doc.root_mut(), &["results"], &["data"]);

    let results = doc.root().get("results").unwrap();
    assert!(element(results, 0).get("data").unwrap().value().is_object());
    assert!(!element(results, 1).get("data").unwrap().value().is_object());
}

// ============================================================================
// Permissive no-op policy
// ============================================================================

#[test]
fn test_wrong_shapes_leave_document_untouched() {
    let source = r#"{"obj":{"a":""},"list":[1,"x",null],"s":"text"}"#;
    let mut doc = tree(source);
    let rules = HashMap::from([("x".to_string(), true)]);

    ops::add_field_by_path(doc.root_mut(), &["list"], "k", 1);
    ops::remove_field_of_list_by_path_and_name(doc.root_mut(), &["obj"], "a");
    ops::add_position_by_path(doc.root_mut(), &["list"], "pos");
    ops::add_field_to_array(doc.root_mut(), &["s"], "k", "v");
    ops::add_field_to_array_by_rules(doc.root_mut(), &["nope"], "k", "v", &rules);
    ops::clean_field_of_two_empty_fields(doc.root_mut(), &["obj"], "a", "b", "c");
    ops::clean_array_field_if_array_is_empty(doc.root_mut(), &["s"], ROOT, "a");
    ops::remove_field_two_level_array(doc.root_mut(), &["obj", "a"], "x");

    assert_eq!(doc, tree(source));
    assert!(!doc.is_modified());
}
