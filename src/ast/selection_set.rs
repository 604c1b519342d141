use crate::ast::Selection;

/// An ordered list of selections.
///
/// An empty set models the absent selection set of a leaf field; the
/// serializer renders no braces for it.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}
impl SelectionSet {
    pub fn new(selections: Vec<Selection>) -> Self {
        SelectionSet { selections }
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}
