use crate::ast::Argument;

/// A directive annotation (`@name(args)`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
}
impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Directive {
            name: name.into(),
            arguments: vec![],
        }
    }
}
