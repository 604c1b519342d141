use crate::ast::Directive;
use crate::ast::SelectionSet;

/// An inline fragment (`... on Type { ... }`), optionally without a type
/// condition (`... { ... }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
impl InlineFragment {
    pub fn new(type_condition: Option<String>) -> Self {
        InlineFragment {
            type_condition,
            directives: vec![],
            selection_set: SelectionSet::default(),
        }
    }
}
