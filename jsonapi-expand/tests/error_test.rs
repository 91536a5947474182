use jsonapi_expand::error::Error;
use serde_json::{json, Value};
use std::error::Error as StdError;

fn assert_malformed(doc: Value) {
    match jsonapi_expand::deserialize(&doc) {
        Err(Error::MalformedDocument(err)) => assert!(!err.to_string().is_empty()),
        Ok(res) => unreachable!("expected an error for {}, get {:?}", doc, res),
    }
}

#[test]
fn invalid_document_test() {
    let _ = env_logger::try_init();

    assert_malformed(json!(null));
    assert_malformed(json!("data"));
    assert_malformed(json!([ { "id": "123", "type": "mice" } ]));
}

#[test]
fn invalid_primary_data_test() {
    let _ = env_logger::try_init();

    assert_malformed(json!({ "data": 5 }));
    assert_malformed(json!({ "data": "mice" }));
    assert_malformed(json!({ "data": [ "mice" ] }));
    assert_malformed(json!({ "data": { "id": 123, "type": "mice" } }));
    assert_malformed(json!({ "data": { "id": "123", "type": ["mice"] } }));
    assert_malformed(json!({ "data": { "attributes": "Vinnie" } }));
}

#[test]
fn invalid_included_test() {
    let _ = env_logger::try_init();

    assert_malformed(json!({
        "data": { "relationships": { "test": {} } },
        "included": 5
    }));
    assert_malformed(json!({ "data": {}, "included": { "id": "5", "type": "bikes" } }));
    assert_malformed(json!({ "data": {}, "included": [ 5 ] }));
}

#[test]
fn invalid_relationship_test() {
    let _ = env_logger::try_init();

    assert_malformed(json!({ "data": { "relationships": { "bike": { "data": 5 } } } }));
    assert_malformed(json!({ "data": { "relationships": { "bike": { "data": "5" } } } }));
    assert_malformed(json!({ "data": { "relationships": { "bike": { "data": [ true ] } } } }));
    assert_malformed(json!({ "data": { "relationships": { "bike": 5 } } }));
    assert_malformed(json!({ "data": { "relationships": [ { "data": null } ] } }));
}

#[test]
fn invalid_nested_include_test() {
    let _ = env_logger::try_init();

    // the broken relationship is never reached from `data`, the document is still rejected
    assert_malformed(json!({
        "data": { "id": "123", "type": "mice" },
        "included": [ { "id": "5", "type": "bikes", "relationships": { "rider": { "data": 1 } } } ]
    }));
}

#[test]
fn nested_too_deep_test() {
    let _ = env_logger::try_init();

    // a linear chain of five thousand included resources, each pointing to the next
    let len = 5000;
    let link = |i: usize| {
        json!({
            "id": i.to_string(), "type": "links",
            "relationships": { "next": { "data": { "id": (i + 1).to_string(), "type": "links" } } }
        })
    };
    let included: Vec<_> = (1..len).map(link).collect();
    let doc = json!({ "data": link(0), "included": included });
    assert_malformed(doc.clone());

    let err = jsonapi_expand::deserialize(&doc).unwrap_err();
    assert!(err.to_string().contains("nested deeper than 128 levels"));
}

#[test]
fn invalid_json_text_test() {
    let _ = env_logger::try_init();

    let err = jsonapi_expand::from_str(r#"{ "data": "#).unwrap_err();
    assert!(matches!(err, Error::MalformedDocument(_)));
    assert!(jsonapi_expand::from_slice(b"null").is_err());
}

#[test]
fn error_message_test() {
    let _ = env_logger::try_init();

    let err = jsonapi_expand::deserialize(&json!({ "data": 5 })).unwrap_err();
    assert!(err.to_string().starts_with("Malformed JSON:API document: "));
    assert!(err.source().is_some());
}
