//! Integration tests for document validation against a schema.

use cms_schema::prelude::*;
use serde_json::json;

fn blog() -> Schema {
    schema(shape! {
        "post" => field("post", "Post").object(shape! {
            "title" => field("title", "Title")
                .string()
                .required(None)
                .unwrap()
                .max_length(10, None)
                .unwrap(),
            "author" => field("author", "Author").relates_to(["author"]).unwrap(),
            "categories" => field("category", "Category")
                .array()
                .string()
                .unwrap()
                .unique(None)
                .unwrap(),
            "meta" => field("meta", "Meta").object(shape! {
                "slug" => field("slug", "Slug").string().required(None).unwrap(),
                "views" => field("views", "Views").number().positive(None).unwrap(),
            }),
        }),
    })
    .unwrap()
}

fn pointers(err: Error) -> Vec<String> {
    match err {
        Error::Validation(errors) => errors.errors().iter().map(|e| e.pointer()).collect(),
        Error::Configuration(e) => panic!("unexpected configuration error: {e}"),
    }
}

#[test]
fn valid_document() {
    let doc = Value::from(json!({
        "title": "Hello",
        "author": "ada",
        "categories": ["rust", "cms"],
        "meta": {"slug": "hello", "views": 3}
    }));
    assert!(blog().validate_document("post", &doc, &ValidateOptions::default()).is_ok());
}

#[test]
fn fail_fast_stops_at_first_error() {
    let doc = Value::from(json!({"title": "A very long title", "meta": {"views": -1}}));
    let err = blog()
        .validate_document("post", &doc, &ValidateOptions::fail_fast())
        .unwrap_err();
    assert_eq!(pointers(err), ["/title"]);
}

#[test]
fn collect_reports_nested_paths() {
    let doc = Value::from(json!({
        "title": "A very long title",
        "categories": ["a", "a", 3],
        "meta": {"views": -1}
    }));
    let err = blog()
        .validate_document("post", &doc, &ValidateOptions::collect())
        .unwrap_err();
    assert_eq!(
        pointers(err),
        ["/title", "/categories", "/meta/slug", "/meta/views"]
    );
}

#[test]
fn error_messages_and_display() {
    let doc = Value::from(json!({"title": ""}));
    let Err(Error::Validation(errors)) =
        blog().validate_document("post", &doc, &ValidateOptions::collect())
    else {
        panic!("expected validation errors");
    };
    let first = errors.first();
    assert_eq!(first.label, "Title");
    assert_eq!(first.validator, "required");
    assert_eq!(first.to_string(), "/title: Title is required.");
}

#[test]
fn unknown_type_is_a_configuration_error() {
    let err = blog()
        .validate_document("page", &Value::Null, &ValidateOptions::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "Schema has no type named 'page'.");
}

#[test]
fn standalone_validate_entry_point() {
    let node = FieldNode::from(
        field("scores", "Scores")
            .array()
            .element(field("score", "Score").number().max(10.0, None).unwrap())
            .unwrap(),
    );
    let errors = cms_schema::validate(
        &Value::from(json!([1, 11, 12])),
        &node,
        &ValidateOptions::collect(),
    )
    .unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.first().message, "Score must be at most 10.");
    assert_eq!(errors.first().pointer(), "/1");
}
