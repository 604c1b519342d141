/// The declared type of a variable: a named type, optionally wrapped
/// non-null. NonNull never wraps NonNull.
///
/// List types that arrive from parsed text or from list-type inference ride
/// along as rendered text inside the name (e.g. `"[Int!]"`) and reprint
/// verbatim.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    Named(String),
    NonNull(String),
}
impl TypeAnnotation {
    pub fn named(name: impl Into<String>) -> Self {
        TypeAnnotation::Named(name.into())
    }

    pub fn non_null(name: impl Into<String>) -> Self {
        TypeAnnotation::NonNull(name.into())
    }

    /// The inner type name, without any non-null wrapper.
    pub fn name(&self) -> &str {
        match self {
            TypeAnnotation::Named(name) => name,
            TypeAnnotation::NonNull(name) => name,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }
}
