use thiserror::Error;

/// A programming error raised while editing a document.
///
/// Missing targets never error: writes auto-vivify fields, and removes or
/// replaces against an absent name are silent no-ops.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EditError {
    #[error("subfield spec for {field:?} must not carry a path of its own")]
    PathInSubfield { field: String },
}
