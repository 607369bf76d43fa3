#![no_main]
use arbitrary::Arbitrary;
use jsonslice::{decode, get, PathComponent, Value};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzComponent {
    Key(String),
    Index(u8),
}

#[derive(Arbitrary, Debug)]
struct Input {
    path: Vec<FuzzComponent>,
    document: Vec<u8>,
}

fn to_value_at<'a>(mut value: &'a Value, path: &[PathComponent]) -> Option<&'a Value> {
    for component in path {
        value = match (component, value) {
            (PathComponent::Key(key), Value::Object(map)) => map.get(key)?,
            (PathComponent::Index(index), Value::Array(items)) => items.get(index.checked_sub(1)?)?,
            _ => return None,
        };
    }
    Some(value)
}

/// `get` must never panic, and whenever it resolves a value, walking the
/// same path by hand through [`jsonslice::decode`]'s own tree must land on
/// an identical value.
fn run(input: Input) {
    let path: Vec<PathComponent> = input
        .path
        .into_iter()
        .map(|c| match c {
            FuzzComponent::Key(k) => PathComponent::Key(k),
            FuzzComponent::Index(i) => PathComponent::Index(usize::from(i)),
        })
        .collect();

    let Ok(got) = get(&path, &input.document) else {
        return;
    };
    let Ok(decoded) = decode(&input.document) else {
        panic!("get succeeded on input decode rejects: {:?}", input.document);
    };
    match to_value_at(&decoded, &path) {
        Some(expected) => assert_eq!(*expected, got, "get/decode disagreement"),
        None => panic!("get succeeded but decode's own tree has no such path"),
    }
}

fuzz_target!(|bytes: &[u8]| {
    let mut unstructured = arbitrary::Unstructured::new(bytes);
    if let Ok(input) = Input::arbitrary(&mut unstructured) {
        run(input);
    }
});
