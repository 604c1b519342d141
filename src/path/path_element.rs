use crate::ast::Field;
use crate::ast::InlineFragment;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::encode;
use crate::encode::Literal;

/// One level of nesting into a selection set.
///
/// A `Field` element targets the field whose identity (alias if present,
/// name otherwise) equals the element's name; on write, a missing field is
/// created from the element's name, alias, and arguments. An
/// `InlineFragment` element targets an existing inline fragment by type
/// condition and is never created implicitly.
#[derive(Clone, Debug, PartialEq)]
pub enum PathElement {
    Field {
        name: String,
        alias: Option<String>,
        arguments: Vec<(String, Literal)>,
    },
    InlineFragment {
        type_condition: Option<String>,
    },
}
impl PathElement {
    pub fn field(name: impl Into<String>) -> Self {
        PathElement::Field {
            name: name.into(),
            alias: None,
            arguments: vec![],
        }
    }

    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        PathElement::Field {
            name: name.into(),
            alias: Some(alias.into()),
            arguments: vec![],
        }
    }

    pub fn with_arguments(
        name: impl Into<String>,
        arguments: Vec<(String, Literal)>,
    ) -> Self {
        PathElement::Field {
            name: name.into(),
            alias: None,
            arguments,
        }
    }

    pub fn inline_fragment(type_condition: Option<String>) -> Self {
        PathElement::InlineFragment { type_condition }
    }

    pub(crate) fn matches(&self, selection: &Selection) -> bool {
        match (self, selection) {
            (PathElement::Field { name, .. }, Selection::Field(field)) => {
                field.response_key() == name
            },

            (
                PathElement::InlineFragment { type_condition },
                Selection::InlineFragment(InlineFragment {
                    type_condition: candidate,
                    ..
                }),
            ) => type_condition == candidate,

            _ => false,
        }
    }

    // The field this element creates when navigation writes past a missing
    // step. Inline-fragment elements never auto-vivify.
    pub(crate) fn vivified_field(&self) -> Option<Field> {
        match self {
            PathElement::Field {
                name,
                alias,
                arguments,
            } => Some(Field {
                alias: alias.clone(),
                name: name.clone(),
                arguments: encode::encode_arguments(arguments),
                directives: vec![],
                selection_set: SelectionSet::default(),
            }),

            PathElement::InlineFragment { .. } => None,
        }
    }
}
impl From<&str> for PathElement {
    fn from(name: &str) -> Self {
        PathElement::field(name)
    }
}
impl From<String> for PathElement {
    fn from(name: String) -> Self {
        PathElement::field(name)
    }
}
