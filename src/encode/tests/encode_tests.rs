use crate::ast::ObjectField;
use crate::ast::Value;
use crate::encode::encode;
use crate::encode::Literal;

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn null_encodes_with_its_sentinel_type() {
    let encoded = encode(&Literal::Null);
    assert_eq!(encoded.inferred_type.as_deref(), Some("NullValue"));
    assert_eq!(encoded.value, Value::Null);
}

#[test]
fn integers_infer_integer() {
    let encoded = encode(&Literal::from(19));
    assert_eq!(encoded.inferred_type.as_deref(), Some("Integer"));
    assert_eq!(encoded.value, Value::Int(19));
}

#[test]
fn floats_infer_float() {
    let encoded = encode(&Literal::from(1.5));
    assert_eq!(encoded.inferred_type.as_deref(), Some("Float"));
    assert_eq!(encoded.value, Value::Float(1.5));
}

#[test]
fn booleans_infer_boolean() {
    let encoded = encode(&Literal::from(true));
    assert_eq!(encoded.inferred_type.as_deref(), Some("Boolean"));
    assert_eq!(encoded.value, Value::Boolean(true));
}

#[test]
fn plain_strings_infer_string() {
    let encoded = encode(&Literal::from("hello"));
    assert_eq!(encoded.inferred_type.as_deref(), Some("String"));
    assert_eq!(encoded.value, Value::String("hello".to_string()));
}

#[test]
fn dollar_prefixed_strings_become_variable_references() {
    let encoded = encode(&Literal::from("$userId"));
    assert_eq!(encoded.inferred_type, None);
    assert_eq!(encoded.value, Value::Variable("userId".to_string()));
}

#[test]
fn enum_literals_carry_no_inferred_type() {
    let encoded = encode(&Literal::Enum("RED".to_string()));
    assert_eq!(encoded.inferred_type, None);
    assert_eq!(encoded.value, Value::Enum("RED".to_string()));
}

// =============================================================================
// Containers
// =============================================================================

#[test]
fn uniform_lists_infer_a_list_type() {
    let encoded = encode(&Literal::from(vec![
        Literal::from(1),
        Literal::from(2),
        Literal::from(3),
    ]));
    assert_eq!(encoded.inferred_type.as_deref(), Some("[Integer!]"));
    assert_eq!(
        encoded.value,
        Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
    );
}

#[test]
fn mixed_lists_infer_nothing() {
    let encoded = encode(&Literal::from(vec![
        Literal::from(1),
        Literal::from("two"),
    ]));
    assert_eq!(encoded.inferred_type, None);
}

#[test]
fn empty_lists_infer_nothing() {
    let encoded = encode(&Literal::List(vec![]));
    assert_eq!(encoded.inferred_type, None);
    assert_eq!(encoded.value, Value::List(vec![]));
}

#[test]
fn lists_of_variables_infer_nothing() {
    let encoded = encode(&Literal::from(vec![Literal::from("$a")]));
    assert_eq!(encoded.inferred_type, None);
    assert_eq!(
        encoded.value,
        Value::List(vec![Value::Variable("a".to_string())]),
    );
}

#[test]
fn objects_preserve_field_order() {
    let encoded = encode(&Literal::Object(vec![
        ("zebra".to_string(), Literal::from(1)),
        ("apple".to_string(), Literal::from(2)),
    ]));
    assert_eq!(encoded.inferred_type, None);
    assert_eq!(
        encoded.value,
        Value::Object(vec![
            ObjectField::new("zebra", Value::Int(1)),
            ObjectField::new("apple", Value::Int(2)),
        ]),
    );
}

#[test]
fn nested_containers_encode_recursively() {
    let encoded = encode(&Literal::Object(vec![(
        "ids".to_string(),
        Literal::from(vec![Literal::from("$id"), Literal::from(7)]),
    )]));
    assert_eq!(
        encoded.value,
        Value::Object(vec![ObjectField::new(
            "ids",
            Value::List(vec![Value::Variable("id".to_string()), Value::Int(7)]),
        )]),
    );
}
