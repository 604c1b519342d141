use crate::ops::EditError;
use crate::parse::ParseError;
use thiserror::Error;

/// Failure while applying a sequence of build steps.
#[derive(Clone, Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
