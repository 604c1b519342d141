use crate::parse::parse;
use crate::path::field_path;

#[test]
fn an_empty_path_annotates_every_operation() {
    let doc = parse("query { a } mutation { b }")
        .unwrap()
        .add_directive("cached", &[], vec![]);

    assert_eq!(
        doc.to_graphql_string(),
        "query @cached {\n  a\n}\n\nmutation @cached {\n  b\n}",
    );
}

#[test]
fn a_field_path_annotates_the_field() {
    let doc = parse("{ user { id } }").unwrap().add_directive(
        "log",
        &field_path(["user"]),
        vec![("level".to_string(), "info".into())],
    );

    assert_eq!(
        doc.to_graphql_string(),
        "{\n  user @log(level: \"info\") {\n    id\n  }\n}",
    );
}

#[test]
fn directives_stack_in_order() {
    let doc = parse("{ user }")
        .unwrap()
        .add_directive("a", &field_path(["user"]), vec![])
        .add_directive("b", &field_path(["user"]), vec![]);

    assert_eq!(doc.to_graphql_string(), "{\n  user @a @b\n}");
}
