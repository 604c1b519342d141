mod convert;

use crate::ast::Document;
use thiserror::Error;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Parse GraphQL source text into a [`Document`].
///
/// The heavy lifting is delegated to the external `graphql_parser` crate;
/// its AST is converted into the owned document model. The operation
/// shorthand (`{ a }`) normalizes to an unnamed query operation.
pub fn parse(text: &str) -> Result<Document, ParseError> {
    let ast_doc = graphql_parser::parse_query::<String>(text)?;
    Ok(convert::document(ast_doc))
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text)
    }
}

impl Document {
    /// Read and parse a document from a file on disk.
    ///
    /// Documents on disk are always UTF-8 GraphQL text, so reading reduces
    /// to a single [`std::fs::read_to_string`]; the underlying I/O error is
    /// surfaced unchanged.
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path).map_err(|err| {
            LoadError::Read {
                file_path: file_path.to_path_buf(),
                err,
            }
        })?;
        Ok(parse(content.as_str())?)
    }
}

/// Failure to parse GraphQL source text.
///
/// The parser's own error is carried behind an [`Arc`] so this error stays
/// cheap to clone; its message is propagated verbatim.
#[derive(Clone, Debug, Error)]
#[error("{0}")]
pub struct ParseError(Arc<graphql_parser::query::ParseError>);

impl From<graphql_parser::query::ParseError> for ParseError {
    fn from(err: graphql_parser::query::ParseError) -> Self {
        ParseError(Arc::new(err))
    }
}

/// Failure to load a document from disk: either the read or the parse went
/// wrong.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failure while trying to read {file_path:?} from disk")]
    Read {
        file_path: PathBuf,
        #[source]
        err: std::io::Error,
    },
}

/// Accepts either an already-built [`Document`] or GraphQL source text,
/// parsing the latter on demand.
///
/// Operations that may receive text instead of a pre-built document (merge
/// sources, builder inputs) take `impl IntoDocument`.
pub trait IntoDocument {
    fn into_document(self) -> Result<Document, ParseError>;
}
impl IntoDocument for Document {
    fn into_document(self) -> Result<Document, ParseError> {
        Ok(self)
    }
}
impl IntoDocument for &str {
    fn into_document(self) -> Result<Document, ParseError> {
        parse(self)
    }
}
impl IntoDocument for String {
    fn into_document(self) -> Result<Document, ParseError> {
        parse(self.as_str())
    }
}

/// A document input that can be stored in a build step: either a pre-built
/// tree or source text left to be parsed when the step runs.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentSource {
    Document(Document),
    Text(String),
}
impl IntoDocument for DocumentSource {
    fn into_document(self) -> Result<Document, ParseError> {
        match self {
            DocumentSource::Document(doc) => Ok(doc),
            DocumentSource::Text(text) => parse(text.as_str()),
        }
    }
}
impl From<Document> for DocumentSource {
    fn from(doc: Document) -> Self {
        DocumentSource::Document(doc)
    }
}
impl From<&str> for DocumentSource {
    fn from(text: &str) -> Self {
        DocumentSource::Text(text.to_string())
    }
}
