use crate::ast::Document;
use crate::encode::Literal;
use crate::ops::FieldOpts;
use crate::parse::parse;
use crate::path::field_path;

#[test]
fn appends_an_encoded_argument() {
    let doc = parse("{ user { id } }")
        .unwrap()
        .add_argument("id", &field_path(["user"]), 19);

    assert_eq!(
        doc.to_graphql_string(),
        "{\n  user(id: 19) {\n    id\n  }\n}",
    );
}

#[test]
fn dollar_strings_encode_as_variable_references() {
    let doc = parse("{ user }")
        .unwrap()
        .add_argument("id", &field_path(["user"]), "$id");

    assert_eq!(doc.to_graphql_string(), "{\n  user(id: $id)\n}");
}

#[test]
fn adding_an_argument_vivifies_the_target_field() {
    let doc = Document::new().add_argument("first", &field_path(["posts"]), 10);

    assert_eq!(doc.to_graphql_string(), "{\n  posts(first: 10)\n}");
}

#[test]
fn removes_every_argument_with_the_name() {
    let doc = parse("{ user(active: true) }")
        .unwrap()
        .add_argument("id", &field_path(["user"]), 1)
        .add_argument("id", &field_path(["user"]), 2)
        .remove_argument("id", &field_path(["user"]));

    assert_eq!(doc.to_graphql_string(), "{\n  user(active: true)\n}");
}

#[test]
fn removal_is_idempotent() {
    let once = parse("{ user(id: 1) }")
        .unwrap()
        .remove_argument("id", &field_path(["user"]));
    let twice = once.clone().remove_argument("id", &field_path(["user"]));

    assert_eq!(once, twice);
}

#[test]
fn replacement_lands_at_the_tail_of_the_argument_list() {
    let doc = parse("{ user(id: 1, active: true) }")
        .unwrap()
        .replace_argument("id", &field_path(["user"]), 2);

    assert_eq!(doc.to_graphql_string(), "{\n  user(active: true, id: 2)\n}");
}

#[test]
fn list_and_object_literals_encode_recursively() {
    let doc = parse("{ user }").unwrap().add_argument(
        "where",
        &field_path(["user"]),
        Literal::Object(vec![
            ("ids".to_string(), Literal::from(vec![Literal::from(1)])),
            ("tag".to_string(), Literal::from("rust")),
        ]),
    );

    assert_eq!(
        doc.to_graphql_string(),
        "{\n  user(where: {ids: [1], tag: \"rust\"})\n}",
    );
}

#[test]
fn arguments_added_through_the_opts_builder_match() {
    let via_opts = Document::new()
        .add_field("user", FieldOpts::new().argument("id", 19))
        .unwrap();
    let via_op = Document::new()
        .add_field("user", FieldOpts::new())
        .unwrap()
        .add_argument("id", &field_path(["user"]), 19);

    assert_eq!(via_opts, via_op);
}
