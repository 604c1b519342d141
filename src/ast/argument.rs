use crate::ast::Value;

/// A named argument on a field or directive.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}
impl Argument {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Argument {
            name: name.into(),
            value,
        }
    }
}
