//! Integration tests for TOML batch scripts.

use jsonnode_utils::config::Config;
use jsonnode_utils::document::parser::parse_json;
use jsonnode_utils::file::saver::serialize_node_compact;
use jsonnode_utils::ops::UnmatchedRule;
use jsonnode_utils::script::{Operation, Script};
use std::fs;
use tempfile::tempdir;

const CLEANUP_SCRIPT: &str = r#"
[[op]]
op = "set_field"
key = "version"
value = 2

[[op]]
op = "remove_field"
key = "legacy"

[[op]]
op = "add_position"
path = ["users"]
field = "position"

[[op]]
op = "set_by_rules"
path = ["users"]
field = "readOnly"
lookup = "role"
rules = { admin = false, guest = true }

[[op]]
op = "set_on_each"
path = ["users"]
field = "status"
value = "OK"

[[op]]
op = "remove_field_of_list"
path = ["users"]
field = "password"

[[op]]
op = "clean_empty_array_field"
path = ["users"]
field = "hobbies"

[[op]]
op = "clean_two_empty_fields"
path = ["users"]
group = "address"
first = "city"
second = "street"

[[op]]
op = "empty_string_to_map"
path = ["users"]
fields = ["extra"]

[[op]]
op = "add_field"
path = ["meta"]
key = "cleaned"
value = true

[[op]]
op = "remove_field_at"
path = ["meta"]
field = "draft"

[[op]]
op = "remove_field_two_level"
path = ["meta", "history"]
field = "by"
"#;

const INPUT: &str = r#"{
  "legacy": true,
  "users": [
    {"name": "ann", "role": "admin", "password": "x", "hobbies": [], "address": {"city": "", "street": ""}, "extra": ""},
    {"name": "bo", "role": "guest", "password": "y", "hobbies": ["chess"], "address": {"city": "Oslo", "street": ""}, "extra": "z"},
    {"name": "cy", "role": "other"}
  ],
  "meta": {"draft": true, "history": [{"at": 1, "by": "ann"}]}
}"#;

const EXPECTED: &str = r#"{
  "users": [
    {"name": "ann", "role": "admin", "extra": {}, "position": 0, "readOnly": false, "status": "OK"},
    {"name": "bo", "role": "guest", "hobbies": ["chess"], "address": {"city": "Oslo", "street": ""}, "extra": "z", "position": 1, "readOnly": true, "status": "OK"},
    {"name": "cy", "role": "other", "position": 2, "status": "OK"}
  ],
  "meta": {"history": [{"at": 1}], "cleaned": true},
  "version": 2
}"#;

#[test]
fn test_full_script() {
    let mut tree = parse_json(INPUT).unwrap();
    let script = Script::from_toml(CLEANUP_SCRIPT).unwrap();

    let applied = script.apply(&mut tree, &Config::default()).unwrap();

    assert_eq!(applied, 12);
    // Tree equality ignores key order, the compact text does not.
    assert_eq!(
        serialize_node_compact(tree.root()),
        serialize_node_compact(parse_json(EXPECTED).unwrap().root())
    );
}

#[test]
fn test_unmatched_rule_from_config() {
    let mut tree = parse_json(r#"[{"role":"admin"},{"role":"other"}]"#).unwrap();
    let script = Script::from_toml(
        r#"
        [[op]]
        op = "set_by_rules"
        path = []
        field = "readOnly"
        lookup = "role"
        rules = { admin = true }
        "#,
    )
    .unwrap();
    let config = Config {
        unmatched_rule: UnmatchedRule::SetFalse,
        ..Config::default()
    };

    script.apply(&mut tree, &config).unwrap();

    assert_eq!(
        tree,
        parse_json(r#"[{"role":"admin","readOnly":true},{"role":"other","readOnly":false}]"#)
            .unwrap()
    );
}

#[test]
fn test_load_script_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ops.toml");
    fs::write(&path, "[[op]]\nop = \"remove_field\"\nkey = \"a\"\n").unwrap();

    let script = Script::load(&path).unwrap();
    assert_eq!(
        script.op,
        vec![Operation::RemoveField {
            key: "a".to_string()
        }]
    );
}

#[test]
fn test_empty_script_is_noop() {
    let mut tree = parse_json(r#"{"a":1}"#).unwrap();
    let script = Script::from_toml("").unwrap();
    assert_eq!(script.apply(&mut tree, &Config::default()).unwrap(), 0);
    assert!(!tree.is_modified());
}
