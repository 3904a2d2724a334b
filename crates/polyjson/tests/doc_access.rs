use polyjson::{Error, doc};
use serde_json::json;

fn sample() -> serde_json::Value {
    json!({
        "polynomial": {"a": 2, "b": -7, "c": null, "form": "ax^2 + bx + c = 0"},
        "roots_base64": {"alpha": "Mg==", "beta": "NQ=="},
        "list": [10, "x"]
    })
}

#[test]
fn get_navigates_nested_keys() -> Result<(), Box<dyn std::error::Error>> {
    let value = sample();
    assert_eq!(doc::get(&value, &["polynomial", "a"])?, &json!(2));
    assert_eq!(doc::get(&value, &["roots_base64", "beta"])?, &json!("NQ=="));
    assert_eq!(doc::get(&value, &["list", "1"])?, &json!("x"));
    Ok(())
}

#[test]
fn get_reports_missing_field_with_path() {
    let value = sample();
    match doc::get(&value, &["polynomial", "d"]) {
        Err(Error::MissingField { path }) => assert_eq!(path, "/polynomial/d"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn get_rejects_indexing_a_scalar() {
    let value = sample();
    let err = doc::get(&value, &["polynomial", "form", "x"]).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

#[test]
fn get_mut_updates_in_place() -> Result<(), Box<dyn std::error::Error>> {
    let mut value = sample();
    *doc::get_mut(&mut value, &["polynomial", "c"])? = json!(20.0);
    assert_eq!(doc::get(&value, &["polynomial", "c"])?, &json!(20.0));
    Ok(())
}

#[test]
fn coercions_succeed_on_matching_types() -> Result<(), Box<dyn std::error::Error>> {
    let value = sample();
    assert_eq!(
        doc::as_integer(doc::get(&value, &["polynomial", "b"])?, "/polynomial/b")?,
        -7
    );
    // An integer number is representable as a float.
    assert_eq!(
        doc::as_float(doc::get(&value, &["polynomial", "a"])?, "/polynomial/a")?,
        2.0
    );
    assert_eq!(
        doc::as_string(doc::get(&value, &["polynomial", "form"])?, "/polynomial/form")?,
        "ax^2 + bx + c = 0"
    );
    Ok(())
}

#[test]
fn coercions_fail_loudly_on_wrong_types() {
    let value = sample();
    let c = doc::get(&value, &["polynomial", "c"]).unwrap();
    assert!(matches!(
        doc::as_integer(c, "/polynomial/c"),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        doc::as_float(c, "/polynomial/c"),
        Err(Error::TypeMismatch { .. })
    ));
    let a = doc::get(&value, &["polynomial", "a"]).unwrap();
    assert!(matches!(
        doc::as_string(a, "/polynomial/a"),
        Err(Error::TypeMismatch { .. })
    ));
}
