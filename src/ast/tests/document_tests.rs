use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::OperationKind;

#[test]
fn new_document_holds_a_single_unnamed_query() {
    let doc = Document::new();

    assert_eq!(doc.definitions.len(), 1);
    let op = doc.operations().next().unwrap();
    assert_eq!(op.kind, OperationKind::Query);
    assert_eq!(op.name, None);
    assert!(op.variable_definitions.is_empty());
    assert!(op.directives.is_empty());
    assert!(op.selection_set.is_empty());
}

#[test]
fn response_key_prefers_the_alias() {
    let mut field = Field::new("user");
    assert_eq!(field.response_key(), "user");

    field.alias = Some("me".to_string());
    assert_eq!(field.response_key(), "me");
}

#[test]
fn fragment_lookup_by_name() {
    let mut doc = Document::new();
    doc.definitions.push(Definition::Fragment(FragmentDefinition::new(
        "userFields",
        "User",
    )));

    assert!(doc.fragment("userFields").is_some());
    assert!(doc.fragment("missing").is_none());
    assert_eq!(doc.fragments().count(), 1);
}

#[test]
fn operation_kind_keywords() {
    assert_eq!(OperationKind::Query.keyword(), "query");
    assert_eq!(OperationKind::Mutation.keyword(), "mutation");
    assert_eq!(OperationKind::Subscription.keyword(), "subscription");
    assert_eq!(OperationKind::Query.capitalized(), "Query");
    assert_eq!(OperationKind::Subscription.capitalized(), "Subscription");
}
