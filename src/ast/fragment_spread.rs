use crate::ast::Directive;

/// A spread of a named fragment (`...Name`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<Directive>,
}
impl FragmentSpread {
    pub fn new(name: impl Into<String>) -> Self {
        FragmentSpread {
            name: name.into(),
            directives: vec![],
        }
    }
}
