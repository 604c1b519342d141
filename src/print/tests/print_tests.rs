use crate::ast::Value;
use crate::parse::parse;

fn reprint(source: &str) -> String {
    parse(source).unwrap().to_graphql_string()
}

// =============================================================================
// Operations
// =============================================================================

#[test]
fn anonymous_queries_print_in_shorthand() {
    assert_eq!(reprint("query { hello }"), "{\n  hello\n}");
    assert_eq!(reprint("{ hello }"), "{\n  hello\n}");
}

#[test]
fn named_operations_print_their_keyword() {
    assert_eq!(
        reprint("query GetUser { user }"),
        "query GetUser {\n  user\n}",
    );
    assert_eq!(
        reprint("mutation { createUser }"),
        "mutation {\n  createUser\n}",
    );
    assert_eq!(
        reprint("subscription OnUser { userCreated }"),
        "subscription OnUser {\n  userCreated\n}",
    );
}

#[test]
fn variable_definitions_print_in_declaration_order() {
    assert_eq!(
        reprint("query Q($id: ID!, $limit: Int = 10) { get }"),
        "query Q($id: ID!, $limit: Int = 10) {\n  get\n}",
    );
}

#[test]
fn unnamed_operations_with_variables_keep_a_space() {
    assert_eq!(
        reprint("query ($id: ID!) { get(id: $id) }"),
        "query ($id: ID!) {\n  get(id: $id)\n}",
    );
}

#[test]
fn operation_directives_print_on_the_keyword_line() {
    assert_eq!(
        reprint("query @cached { user }"),
        "query @cached {\n  user\n}",
    );
}

#[test]
fn multiple_definitions_print_blank_line_separated() {
    assert_eq!(
        reprint("query A { a } mutation B { b }"),
        "query A {\n  a\n}\n\nmutation B {\n  b\n}",
    );
}

// =============================================================================
// Selections
// =============================================================================

#[test]
fn nested_selection_sets_indent_two_spaces() {
    assert_eq!(
        reprint("{ user { posts { title } } }"),
        "{\n  user {\n    posts {\n      title\n    }\n  }\n}",
    );
}

#[test]
fn aliases_and_arguments_print_inline() {
    assert_eq!(
        reprint(r#"{ me: user(id: 19, active: true) { id } }"#),
        "{\n  me: user(id: 19, active: true) {\n    id\n  }\n}",
    );
}

#[test]
fn field_directives_print_after_arguments() {
    assert_eq!(
        reprint(r#"{ user(id: 1) @include(if: $yes) }"#),
        "{\n  user(id: 1) @include(if: $yes)\n}",
    );
}

#[test]
fn fragment_spreads_and_inline_fragments_print() {
    assert_eq!(
        reprint("{ search { ...resultFields ... on User { email } ... { id } } }"),
        "{\n  search {\n    ...resultFields\n    ... on User {\n      email\n    }\n    ... {\n      id\n    }\n  }\n}",
    );
}

#[test]
fn fragment_definitions_print_their_type_condition() {
    assert_eq!(
        reprint("fragment userFields on User { id }"),
        "fragment userFields on User {\n  id\n}",
    );
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn scalar_values_print_canonically() {
    assert_eq!(Value::Int(19).to_graphql_string(), "19");
    assert_eq!(Value::Boolean(false).to_graphql_string(), "false");
    assert_eq!(Value::Null.to_graphql_string(), "null");
    assert_eq!(Value::Enum("RED".to_string()).to_graphql_string(), "RED");
    assert_eq!(Value::Variable("id".to_string()).to_graphql_string(), "$id");
}

#[test]
fn whole_floats_keep_a_fractional_part() {
    assert_eq!(Value::Float(1.5).to_graphql_string(), "1.5");
    assert_eq!(Value::Float(42.0).to_graphql_string(), "42.0");
}

#[test]
fn strings_escape_quotes_and_control_characters() {
    let value = Value::String("he said \"hi\"\nbye".to_string());
    assert_eq!(value.to_graphql_string(), r#""he said \"hi\"\nbye""#);
}

#[test]
fn lists_and_objects_print_inline() {
    assert_eq!(
        reprint(r#"{ thing(list: [1, 2], object: {a: 1, b: "x"}) }"#),
        "{\n  thing(list: [1, 2], object: {a: 1, b: \"x\"})\n}",
    );
}
