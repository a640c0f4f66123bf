use kv_double_core::{EnqueueOptions, Key, KeyPart, KvValue, ListSelector, ReadOptions};
use serde_json::json;

use super::*;

fn check<T>(arg: Arg<T>, candidate: Option<&T>) -> bool
where
    T: PartialEq + Render + Send + Sync + 'static,
{
    arg.into_matcher().matches(candidate)
}

// ==================== Exact ====================

#[test]
fn test_literal_is_structural_equality() {
    let key = Key::from(["users", "ada"]);
    assert!(check(Arg::from(key.clone()), Some(&Key::from(["users", "ada"]))));
    assert!(!check(Arg::from(key.clone()), Some(&Key::from(["users", "bob"]))));
    assert!(!check(Arg::from(key), None));

    let value = json!({"name": "Ada", "tags": [1, 2]});
    assert!(check(Arg::from(value.clone()), Some(&json!({"tags": [1, 2], "name": "Ada"}))));
    assert!(!check(Arg::from(value), Some(&json!({"name": "Ada"}))));
}

#[test]
fn test_int_and_number_parts_differ() {
    let int = Key::from([KeyPart::Int(1)]);
    let number = Key::from([KeyPart::Number(1.0)]);
    assert!(!check(Arg::from(int), Some(&number)));
}

#[test]
fn test_number_part_literal_uses_total_order() {
    let zero = Key::from([KeyPart::Number(0.0)]);
    let neg_zero = Key::from([KeyPart::Number(-0.0)]);
    let nan = Key::from([KeyPart::Number(f64::NAN)]);
    assert!(!check(Arg::from(zero.clone()), Some(&neg_zero)));
    assert!(check(Arg::from(zero.clone()), Some(&zero)));
    assert!(check(Arg::from(nan.clone()), Some(&nan)));
}

// ==================== AnyOfType / Anything / Absent ====================

#[test]
fn test_any_of_type_requires_present_value_of_shape() {
    assert!(check(any_string(), Some(&json!("x"))));
    assert!(!check(any_string(), Some(&json!(1))));
    assert!(!check(any_string(), None));
    assert!(check(any_object(), Some(&json!({}))));
    assert!(!check(any_object(), Some(&json!([]))));
    assert!(check(any_int_part(), Some(&KeyPart::Int(3))));
    assert!(!check(any_int_part(), Some(&KeyPart::from("3"))));
    assert!(!check(any_key(), None));
}

#[test]
fn test_anything_and_absent() {
    let opts = ReadOptions::default();
    assert!(check(anything::<ReadOptions>(), None));
    assert!(check(anything::<ReadOptions>(), Some(&opts)));
    assert!(check(absent::<ReadOptions>(), None));
    assert!(!check(absent::<ReadOptions>(), Some(&opts)));
    assert!(absent::<ReadOptions>().into_matcher().accepts_only_absent());
    assert!(!anything::<ReadOptions>().into_matcher().accepts_only_absent());
}

// ==================== Key shapes ====================

#[test]
fn test_key_of_len_guards_arity() {
    let two = key_of_len(2).into_matcher();
    assert!(two.matches(Some(&Key::from(["a", "b"]))));
    assert!(!two.matches(Some(&Key::from(["a"]))));
    assert!(!two.matches(Some(&Key::from(["a", "b", "c"]))));
    assert_eq!(two.to_string(), "[<any key part>, <any key part>]");
}

#[test]
fn test_key_shape_mixes_literals_and_matchers() {
    let m = key_shape([Arg::from(KeyPart::from("users")), any_string_part()]).into_matcher();
    assert!(m.matches(Some(&Key::from(["users", "ada"]))));
    assert!(!m.matches(Some(&Key::from(["orders", "ada"]))));
    assert!(!m.matches(Some(&Key::from([KeyPart::from("users"), KeyPart::Int(7)]))));
    assert_eq!(m.to_string(), r#"["users", <any string part>]"#);
}

#[test]
fn test_multi_key_is_positional_and_sized() {
    let m = multi_key([Arg::from(Key::from(["a"])), any_key()]).into_matcher();
    assert!(m.matches(Some(&vec![Key::from(["a"]), Key::from(["z", "z"])])));
    assert!(!m.matches(Some(&vec![Key::from(["z"]), Key::from(["a"])])));
    assert!(!m.matches(Some(&vec![Key::from(["a"])])));
    assert!(!m.matches(Some(&vec![Key::from(["a"]), Key::from(["b"]), Key::from(["c"])])));
}

// ==================== Selector / object shapes ====================

#[test]
fn test_selector_shape_requires_same_field_set() {
    let m = selector_shape(SelectorShape::new().prefix(Key::from(["users"]))).into_matcher();
    assert!(m.matches(Some(&ListSelector::prefix(Key::from(["users"])))));

    let with_start = ListSelector::prefix(Key::from(["users"])).with_start(Key::from(["users", "m"]));
    assert!(!m.matches(Some(&with_start)));

    let range = ListSelector::range(Key::from(["a"]), Key::from(["b"]));
    assert!(!m.matches(Some(&range)));
    assert_eq!(m.to_string(), r#"{prefix: ["users"]}"#);
}

#[test]
fn test_selector_shape_with_key_matchers() {
    let m = selector_shape(SelectorShape::new().start(key_of_len(1)).end(any_key())).into_matcher();
    assert!(m.matches(Some(&ListSelector::range(Key::from(["a"]), Key::from(["b", "c"])))));
    assert!(!m.matches(Some(&ListSelector::range(Key::from(["a", "x"]), Key::from(["b"])))));
}

#[test]
fn test_object_shape_counts_fields() {
    let m = object_shape::<EnqueueOptions>([("delay", any_number())]).into_matcher();
    let delayed = EnqueueOptions {
        delay: Some(500),
        ..Default::default()
    };
    assert!(m.matches(Some(&delayed)));

    let extra = EnqueueOptions {
        delay: Some(500),
        keys_if_undelivered: Some(vec![Key::from(["dlq"])]),
    };
    assert!(!m.matches(Some(&extra)));
    assert!(!m.matches(Some(&EnqueueOptions::default())));
    assert!(!m.matches(None));
}

#[test]
fn test_object_shape_missing_field_is_no_match() {
    let m = object_shape::<ReadOptions>([("limit", any_value())]).into_matcher();
    let strong = ReadOptions::with_consistency(kv_double_core::Consistency::Strong);
    assert!(!m.matches(Some(&strong)));

    let exact = object_shape::<ReadOptions>([("consistency", Arg::from(KvValue::from("strong")))])
        .into_matcher();
    assert!(exact.matches(Some(&strong)));
}
