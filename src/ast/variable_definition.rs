use crate::ast::TypeAnnotation;
use crate::ast::Value;

/// A variable declared by an operation (`$name: Type = default`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub name: String,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
}
impl VariableDefinition {
    pub fn new(name: impl Into<String>, var_type: TypeAnnotation) -> Self {
        VariableDefinition {
            name: name.into(),
            var_type,
            default_value: None,
        }
    }
}
