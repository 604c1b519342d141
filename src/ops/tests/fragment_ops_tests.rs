use crate::ast::Document;
use crate::ops::FieldOpts;
use crate::ops::FragmentOpts;
use crate::parse::parse;
use crate::path::field_path;

// =============================================================================
// define_fragment / remove_fragment
// =============================================================================

#[test]
fn defines_a_fragment_with_fields() {
    let doc = Document::new()
        .define_fragment(
            "userFields",
            "User",
            FragmentOpts::new()
                .field("id")
                .field(("posts", FieldOpts::new().field("title"))),
        )
        .unwrap();

    assert_eq!(
        doc.to_graphql_string(),
        "{\n}\n\nfragment userFields on User {\n  id\n  posts {\n    title\n  }\n}",
    );
}

#[test]
fn removal_drops_the_definition_and_is_idempotent() {
    let once = parse("{ ...userFields }\nfragment userFields on User { id }")
        .unwrap()
        .remove_fragment("userFields");

    assert_eq!(once.to_graphql_string(), "{\n  ...userFields\n}");

    let twice = once.clone().remove_fragment("userFields");
    assert_eq!(once, twice);
}

// =============================================================================
// spread_fragment
// =============================================================================

#[test]
fn spreads_a_fragment_at_a_path() {
    let doc = parse("{ user { id } }")
        .unwrap()
        .spread_fragment("userFields", &field_path(["user"]));

    assert_eq!(
        doc.to_graphql_string(),
        "{\n  user {\n    id\n    ...userFields\n  }\n}",
    );
}

#[test]
fn spreading_honors_the_fragment_first_rule() {
    let doc = parse(
        "{ ...postFields }\nfragment postFields on Post { author { id } }",
    )
    .unwrap()
    .spread_fragment("authorFields", &field_path(["postFields", "author"]));

    assert_eq!(
        doc.to_graphql_string(),
        "{\n  ...postFields\n}\n\nfragment postFields on Post {\n  author {\n    id\n    ...authorFields\n  }\n}",
    );
}

// =============================================================================
// add_inline_fragment
// =============================================================================

#[test]
fn adds_an_inline_fragment_with_fields() {
    let doc = parse("{ search }")
        .unwrap()
        .add_inline_fragment(
            Some("User".to_string()),
            &field_path(["search"]),
            FragmentOpts::new().field("email"),
        )
        .unwrap();

    assert_eq!(
        doc.to_graphql_string(),
        "{\n  search {\n    ... on User {\n      email\n    }\n  }\n}",
    );
}

#[test]
fn adds_an_anonymous_inline_fragment() {
    let doc = parse("{ search }")
        .unwrap()
        .add_inline_fragment(
            None,
            &field_path(["search"]),
            FragmentOpts::new().field("id"),
        )
        .unwrap();

    assert_eq!(
        doc.to_graphql_string(),
        "{\n  search {\n    ... {\n      id\n    }\n  }\n}",
    );
}
