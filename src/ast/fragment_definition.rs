use crate::ast::Directive;
use crate::ast::SelectionSet;

/// A named fragment definition (`fragment Name on Type { ... }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
impl FragmentDefinition {
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> Self {
        FragmentDefinition {
            name: name.into(),
            type_condition: type_condition.into(),
            directives: vec![],
            selection_set: SelectionSet::default(),
        }
    }
}
