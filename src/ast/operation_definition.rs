use crate::ast::Directive;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;

/// One executable operation: a query, mutation, or subscription.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
impl OperationDefinition {
    /// An unnamed operation of the given kind with an empty selection set.
    pub fn new(kind: OperationKind) -> Self {
        OperationDefinition {
            kind,
            name: None,
            variable_definitions: vec![],
            directives: vec![],
            selection_set: SelectionSet::default(),
        }
    }
}
