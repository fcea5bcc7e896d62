// Integration tests for route parameter recovery

use pathql::{reverse_lookup_params, QueryError};
use serde_json::json;

#[test]
fn test_single_depth_items() {
    let params =
        reverse_lookup_params(&json!({"id": "foo", "otherProp": "bar"}), "/{id}.js").unwrap();

    assert_eq!(params.len(), 1);
    assert_eq!(params["id"], json!("foo"));
}

#[test]
fn test_multiple_depth_items() {
    let params =
        reverse_lookup_params(&json!({"fields": {"name": "foo"}}), "/{fields__name}.js").unwrap();

    assert_eq!(params.len(), 1);
    assert_eq!(params["fields__name"], json!("foo"));
}

#[test]
fn test_one_entry_per_token() {
    let record = json!({
        "id": "123",
        "fields": {"name": "foo", "thing": {"deep": true}},
        "unused": 1
    });
    let params =
        reverse_lookup_params(&record, "/a/{id}/{fields__name}/{fields__thing__deep}.js").unwrap();

    assert_eq!(params.len(), 3);
    assert_eq!(params["id"], json!("123"));
    assert_eq!(params["fields__name"], json!("foo"));
    assert_eq!(params["fields__thing__deep"], json!(true));
}

#[test]
fn test_missing_field_is_an_error() {
    let result = reverse_lookup_params(&json!({"id": "foo"}), "/{id}/{fields__name}.js");
    assert_eq!(
        result.unwrap_err(),
        QueryError::MissingField {
            token: "fields__name".to_string(),
            field: "fields".to_string(),
        }
    );
}

#[test]
fn test_params_serialize_as_flat_object() {
    let params =
        reverse_lookup_params(&json!({"fields": {"name": "foo"}, "id": 7}), "/{id}/{fields__name}.js")
            .unwrap();
    let serialized = serde_json::to_string(&params).unwrap();
    assert_eq!(serialized, r#"{"id":7,"fields__name":"foo"}"#);
}
