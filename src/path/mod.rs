mod path_element;

pub(crate) mod navigator;

pub use path_element::PathElement;

/// Builds a path of plain field elements from a list of names.
pub fn field_path<I, S>(names: I) -> Vec<PathElement>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(|name| PathElement::field(name)).collect()
}
