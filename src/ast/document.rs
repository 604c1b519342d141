use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;

/// Root node of a GraphQL executable document: an ordered list of operation
/// and fragment definitions.
///
/// Documents are plain owned values. Every operation on a [`Document`]
/// consumes it and returns the rebuilt document, so callers can share a
/// document freely by cloning and never observe aliasing effects.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}
impl Document {
    /// A fresh document holding a single unnamed query operation with an
    /// empty selection set. This is the starting point of the builder
    /// facade.
    pub fn new() -> Self {
        Document {
            definitions: vec![
                Definition::Operation(OperationDefinition::new(OperationKind::Query)),
            ],
        }
    }

    /// Iterate the operation definitions in document order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(Definition::operation)
    }

    pub(crate) fn operations_mut(
        &mut self,
    ) -> impl Iterator<Item = &mut OperationDefinition> {
        self.definitions.iter_mut().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    /// Iterate the fragment definitions in document order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(Definition::fragment)
    }

    /// Look up a fragment definition by name.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments().find(|frag| frag.name == name)
    }

    pub(crate) fn fragment_mut(
        &mut self,
        name: &str,
    ) -> Option<&mut FragmentDefinition> {
        self.definitions.iter_mut().find_map(|def| match def {
            Definition::Fragment(frag) if frag.name == name => Some(frag),
            _ => None,
        })
    }
}
impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A single definition within a [`Document`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}
impl Definition {
    /// The contained [`OperationDefinition`], if this definition is one.
    pub fn operation(&self) -> Option<&OperationDefinition> {
        match self {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        }
    }

    /// The contained [`FragmentDefinition`], if this definition is one.
    pub fn fragment(&self) -> Option<&FragmentDefinition> {
        match self {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        }
    }
}
