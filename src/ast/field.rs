use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::SelectionSet;

/// A field selection, optionally aliased and parameterized.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
impl Field {
    /// A leaf field with the given name and nothing else.
    pub fn new(name: impl Into<String>) -> Self {
        Field {
            alias: None,
            name: name.into(),
            arguments: vec![],
            directives: vec![],
            selection_set: SelectionSet::default(),
        }
    }

    /// The field's identity within its selection set: the alias when one is
    /// present, the name otherwise.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }
}
