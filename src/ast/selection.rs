use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;

/// A single member of a selection set.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    /// The contained [`Field`], if this selection is one.
    pub fn field(&self) -> Option<&Field> {
        match self {
            Selection::Field(field) => Some(field),
            _ => None,
        }
    }

    pub(crate) fn field_mut(&mut self) -> Option<&mut Field> {
        match self {
            Selection::Field(field) => Some(field),
            _ => None,
        }
    }
}
