//! Crate-level integration tests: worked decode/get examples plus
//! quickcheck property tests.
mod arbitrary;

use alloc::{format, string::String, vec};

use quickcheck_macros::quickcheck;

use crate::{decode, get, path, Value};

fn to_serde(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_serde).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_serde(v)))
                .collect(),
        ),
    }
}

#[test]
fn decode_and_get_worked_examples_from_the_overview() {
    let doc = br#"{"test":[1,2,3,4,5]}"#;

    let Value::Object(map) = decode(doc).unwrap() else {
        panic!("expected object");
    };
    assert_eq!(
        map.get("test"),
        Some(&Value::Array(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3),
            Value::Integer(4),
            Value::Integer(5),
        ]))
    );

    assert_eq!(get(&path!["test"], doc).unwrap(), map["test"].clone());
    assert_eq!(get(&path!["test", 4], doc).unwrap(), Value::Integer(4));

    let nested = br#"{"a":1,"b":{"c":"x"}}"#;
    assert_eq!(
        get(&path!["b", "c"], nested).unwrap(),
        Value::String("x".into())
    );

    let short = br#"{"a":1}"#;
    assert!(get(&path!["b"], short).is_err());
}

#[test]
fn number_edge_cases_from_the_overview() {
    assert_eq!(decode(b"-0.5e+2").unwrap(), Value::Float(-50.0));
    assert!(decode(b"0123").is_err());
}

#[quickcheck]
fn get_with_empty_path_agrees_with_decode(value: Value) -> bool {
    let text = serde_json::to_vec(&to_serde(&value)).unwrap();
    match (decode(&text), get(&[], &text)) {
        (Ok(decoded), Ok(got)) => decoded == got,
        (Err(_), Err(_)) => true,
        _ => false,
    }
}

#[quickcheck]
fn decode_round_trips_through_serde_json_encoding(value: Value) -> bool {
    let text = serde_json::to_vec(&to_serde(&value)).unwrap();
    decode(&text).as_ref() == Ok(&value)
}

#[quickcheck]
fn last_key_wins_for_any_duplicated_key(key: String, first: Value, second: Value) -> bool {
    // `serde_json::Map` is itself last-key-wins on insertion, so the
    // duplicate-key text is built by hand instead of through a map.
    let quoted_key = serde_json::to_string(&key).unwrap();
    let duplicated = format!(
        "{{{quoted_key}:{},{quoted_key}:{}}}",
        serde_json::to_string(&to_serde(&first)).unwrap(),
        serde_json::to_string(&to_serde(&second)).unwrap(),
    );
    decode(duplicated.as_bytes()).as_ref() == Ok(&Value::Object(
        [(key, second)].into_iter().collect(),
    ))
}

#[test]
fn whitespace_between_tokens_never_changes_the_result() {
    let compact = br#"{"a":[1,2,{"b":true}],"c":null}"#;
    let spaced = b" { \"a\" : [ 1 , 2 , { \"b\" : true } ] , \"c\" : null } ";
    assert_eq!(decode(compact).unwrap(), decode(spaced).unwrap());
}

#[quickcheck]
fn skip_and_decode_always_reach_the_same_end_position(value: Value) -> bool {
    let text = serde_json::to_vec(&to_serde(&value)).unwrap();
    let materialized_end = crate::decoder::parse_value(&text, 0).map(|(_, end)| end);
    let skipped_end = crate::skip::skip_value(&text, 0);
    match (materialized_end, skipped_end) {
        (Ok(a), Ok(b)) => a == b,
        (Err(a), Err(b)) => a.position() == b.position(),
        _ => false,
    }
}
