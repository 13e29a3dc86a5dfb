use json_pointer_deep::{resolve, set, JsonPointer, JsonPointerError, LenientExt};
use serde_json::{json, Value};

fn widget() -> Value {
    json!({
        "widget": {
            "debug": "on",
            "window": {"title": "Sample Konfabulator Widget", "name": "main_window", "width": 500, "height": 500},
            "image": {"src": "Images/Sun.png", "name": "sun1", "hOffset": 250, "vOffset": 250, "alignment": "center"},
            "text": {"data": "Click Here", "size": 36, "style": "bold", "name": "text1"}
        }
    })
}

#[test]
fn set_new_branch_in_existing_document() {
    let mut doc = widget();
    set(&mut doc, "/this/is/a/new/thing", json!("hello world")).unwrap();

    assert_eq!(
        resolve(&doc, "/this/is/a/new/thing"),
        Some(&json!("hello world"))
    );
    assert_eq!(resolve(&doc, "/widget/window/width"), Some(&json!(500)));
}

#[test]
fn get_then_set() {
    let mut doc = json!({});
    let pointer = "/data/extensions/currentVisit/reason";

    assert_eq!(resolve(&doc, pointer), None);
    set(&mut doc, pointer, json!("a reason")).unwrap();
    assert_eq!(resolve(&doc, pointer), Some(&json!("a reason")));
    assert_eq!(
        doc,
        json!({"data": {"extensions": {"currentVisit": {"reason": "a reason"}}}})
    );
}

#[test]
fn set_twice_with_arrays_in_empty_array() {
    let mut doc = json!([]);
    let pointer = "/4/this/is/a/0/new/thing";

    set(&mut doc, pointer, json!("hello earth")).unwrap();
    assert_eq!(resolve(&doc, pointer), Some(&json!("hello earth")));
    set(&mut doc, pointer, json!("hello world")).unwrap();
    assert_eq!(resolve(&doc, pointer), Some(&json!("hello world")));

    assert_eq!(doc.as_array().map(Vec::len), Some(5));
    assert_eq!(
        doc[4],
        json!({"this": {"is": {"a": [{"new": {"thing": "hello world"}}]}}})
    );
}

#[test]
fn set_changes_value_type() {
    let mut doc = json!({});
    let pointer = "/this/is/a/0/new/thing";

    set(&mut doc, pointer, json!(false)).unwrap();
    assert!(!resolve(&doc, pointer).safe_bool());
    set(&mut doc, pointer, json!(true)).unwrap();
    assert!(resolve(&doc, pointer).safe_bool());
    set(&mut doc, pointer, json!(1)).unwrap();
    assert_eq!(resolve(&doc, pointer).safe_number().as_i64(), Some(1));

    let thing_parent = resolve(&doc, "/this/is/a/0/new").unwrap();
    assert_eq!(thing_parent.as_object().map(|m| m.len()), Some(1));
}

#[test]
fn handle_example() {
    let mut doc = json!({});
    {
        let mut pointer = JsonPointer::new(&mut doc);
        assert_eq!(pointer.at("/foo/bar"), None);
        pointer.set("/foo/bar", json!("baz")).unwrap();
        assert_eq!(pointer.at("/foo/bar").safe_string(), "baz");
    }
    assert_eq!(doc.to_string(), r#"{"foo":{"bar":"baz"}}"#);
}

#[test]
fn set_preserves_sibling_order_for_new_keys() {
    let mut doc = json!({"z": 1, "a": 2});
    set(&mut doc, "/m", json!(3)).unwrap();
    assert_eq!(doc.to_string(), r#"{"z":1,"a":2,"m":3}"#);
}

#[test]
fn failed_set_reports_the_offending_prefix() {
    let mut doc = widget();
    let err = set(&mut doc, "/widget/debug/level", json!(2)).unwrap_err();
    match err {
        JsonPointerError::TypeMismatch { pointer, .. } => {
            assert_eq!(pointer, "/widget/debug/level");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(resolve(&doc, "/widget/debug"), Some(&json!("on")));
}
