//! Lifting host values into GraphQL value nodes.

use crate::ast::Argument;
use crate::ast::ObjectField;
use crate::ast::Value;

/// A host-side literal to be encoded into a GraphQL [`Value`].
///
/// `From` conversions cover the native scalars; [`Literal::Enum`] is the
/// explicit constructor for enum values, and a string starting with `$`
/// encodes as a variable reference.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Enum(String),
    List(Vec<Literal>),
    Object(Vec<(String, Literal)>),
}
impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value.into())
    }
}
impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}
impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}
impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}
impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}
impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}
impl From<Vec<Literal>> for Literal {
    fn from(values: Vec<Literal>) -> Self {
        Literal::List(values)
    }
}

/// The result of encoding a [`Literal`]: the value node plus the GraphQL
/// type name inferred from the literal's shape, when one exists.
///
/// The inferred type is consulted only when declaring a variable whose type
/// the caller omitted.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedValue {
    pub inferred_type: Option<String>,
    pub value: Value,
}

/// Encode a host literal into a GraphQL value node.
pub fn encode(literal: &Literal) -> EncodedValue {
    match literal {
        Literal::Null => EncodedValue {
            inferred_type: Some("NullValue".to_string()),
            value: Value::Null,
        },

        Literal::Int(int) => EncodedValue {
            inferred_type: Some("Integer".to_string()),
            value: Value::Int(*int),
        },

        Literal::Float(float) => EncodedValue {
            inferred_type: Some("Float".to_string()),
            value: Value::Float(*float),
        },

        Literal::Bool(boolean) => EncodedValue {
            inferred_type: Some("Boolean".to_string()),
            value: Value::Boolean(*boolean),
        },

        Literal::Enum(name) => EncodedValue {
            inferred_type: None,
            value: Value::Enum(name.clone()),
        },

        Literal::Str(string) => match string.strip_prefix('$') {
            Some(var_name) => EncodedValue {
                inferred_type: None,
                value: Value::Variable(var_name.to_string()),
            },
            None => EncodedValue {
                inferred_type: Some("String".to_string()),
                value: Value::String(string.clone()),
            },
        },

        Literal::List(items) => {
            let encoded: Vec<EncodedValue> = items.iter().map(encode).collect();
            EncodedValue {
                inferred_type: unique_element_type(&encoded)
                    .map(|elem_type| format!("[{elem_type}!]")),
                value: Value::List(
                    encoded.into_iter().map(|item| item.value).collect(),
                ),
            }
        },

        Literal::Object(fields) => EncodedValue {
            inferred_type: None,
            value: Value::Object(
                fields
                    .iter()
                    .map(|(name, field_literal)| {
                        ObjectField::new(name.clone(), encode(field_literal).value)
                    })
                    .collect(),
            ),
        },
    }
}

/// Encode a list of `(name, literal)` pairs into argument value nodes,
/// preserving order.
pub(crate) fn encode_arguments(arguments: &[(String, Literal)]) -> Vec<Argument> {
    arguments
        .iter()
        .map(|(name, literal)| Argument::new(name.clone(), encode(literal).value))
        .collect()
}

// A list infers `[T!]` only when every element infers the same type.
fn unique_element_type(encoded: &[EncodedValue]) -> Option<String> {
    let first = encoded.first()?.inferred_type.as_ref()?;
    encoded
        .iter()
        .all(|item| item.inferred_type.as_deref() == Some(first.as_str()))
        .then(|| first.clone())
}

#[cfg(test)]
mod tests;
