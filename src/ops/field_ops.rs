use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::encode;
use crate::encode::Literal;
use crate::ops::EditError;
use crate::path::navigator;
use crate::path::PathElement;

type Result<T> = std::result::Result<T, EditError>;

/// Options for [`Document::add_field`] and [`Document::replace_field`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldOpts {
    pub alias: Option<String>,
    pub arguments: Vec<(String, Literal)>,
    pub path: Vec<PathElement>,
    pub fields: Vec<FieldSpec>,
    pub spread: Vec<String>,
    pub spread_on: Vec<InlineSpec>,
}
impl FieldOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<Literal>,
    ) -> Self {
        self.arguments.push((name.into(), value.into()));
        self
    }

    pub fn path(mut self, path: Vec<PathElement>) -> Self {
        self.path = path;
        self
    }

    /// Add a subfield spec under the field being added.
    pub fn field(mut self, spec: impl Into<FieldSpec>) -> Self {
        self.fields.push(spec.into());
        self
    }

    /// Spread a named fragment under the field being added.
    pub fn spread(mut self, name: impl Into<String>) -> Self {
        self.spread.push(name.into());
        self
    }

    /// Add an inline fragment under the field being added.
    pub fn spread_on(mut self, spec: InlineSpec) -> Self {
        self.spread_on.push(spec);
        self
    }
}

/// A subfield of a field being added: a bare name or a name with its own
/// options. Subfield specs must not carry a `path`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub opts: FieldOpts,
}
impl FieldSpec {
    pub fn new(name: impl Into<String>, opts: FieldOpts) -> Self {
        FieldSpec {
            name: name.into(),
            opts,
        }
    }
}
impl From<&str> for FieldSpec {
    fn from(name: &str) -> Self {
        FieldSpec::new(name, FieldOpts::default())
    }
}
impl From<(&str, FieldOpts)> for FieldSpec {
    fn from((name, opts): (&str, FieldOpts)) -> Self {
        FieldSpec::new(name, opts)
    }
}

/// An inline fragment spec used by `spread_on` and
/// [`Document::add_inline_fragment`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineSpec {
    pub type_condition: Option<String>,
    pub fields: Vec<FieldSpec>,
}
impl InlineSpec {
    /// A spec with a type condition (`... on Type`).
    pub fn on(type_condition: impl Into<String>) -> Self {
        InlineSpec {
            type_condition: Some(type_condition.into()),
            fields: vec![],
        }
    }

    pub fn field(mut self, spec: impl Into<FieldSpec>) -> Self {
        self.fields.push(spec.into());
        self
    }
}

impl Document {
    /// Append a field to the selection set at `opts.path`, creating missing
    /// intermediate fields along the way.
    pub fn add_field(mut self, name: &str, opts: FieldOpts) -> Result<Document> {
        let field = build_field(name, &opts, false)?;
        navigator::update_selection_set(&mut self, &opts.path, |selections| {
            selections.push(Selection::Field(field.clone()));
        });
        Ok(self)
    }

    /// Delete the first field whose identity matches `name` from the
    /// selection set at `path`. A silent no-op when nothing matches.
    pub fn remove_field(mut self, name: &str, path: &[PathElement]) -> Document {
        navigator::update_selection_set(&mut self, path, |selections| {
            let matched = selections.iter().position(|sel| {
                sel.field().is_some_and(|field| field.response_key() == name)
            });
            if let Some(idx) = matched {
                selections.remove(idx);
            }
        });
        self
    }

    /// Substitute the alias and arguments of the field whose identity
    /// matches `name` at `opts.path`, preserving its selection set. A
    /// silent no-op when nothing matches.
    pub fn replace_field(mut self, name: &str, opts: FieldOpts) -> Document {
        let arguments = encode::encode_arguments(&opts.arguments);
        navigator::update_selection_set(&mut self, &opts.path, |selections| {
            let matched = selections
                .iter_mut()
                .filter_map(Selection::field_mut)
                .find(|field| field.response_key() == name);
            if let Some(field) = matched {
                field.alias = opts.alias.clone();
                field.arguments = arguments.clone();
            }
        });
        self
    }
}

// Builds the field node an add/define operation appends. `nested` marks a
// subfield spec, where a path of its own is a programming error.
pub(crate) fn build_field(
    name: &str,
    opts: &FieldOpts,
    nested: bool,
) -> Result<Field> {
    if nested && !opts.path.is_empty() {
        return Err(EditError::PathInSubfield {
            field: name.to_string(),
        });
    }

    let mut selections = vec![];
    for spec in &opts.fields {
        selections.push(Selection::Field(build_field(
            spec.name.as_str(),
            &spec.opts,
            true,
        )?));
    }
    for fragment_name in &opts.spread {
        selections.push(Selection::FragmentSpread(FragmentSpread::new(
            fragment_name.clone(),
        )));
    }
    for inline_spec in &opts.spread_on {
        selections.push(Selection::InlineFragment(build_inline_fragment(
            inline_spec,
        )?));
    }

    Ok(Field {
        alias: opts.alias.clone(),
        name: name.to_string(),
        arguments: encode::encode_arguments(&opts.arguments),
        directives: vec![],
        selection_set: SelectionSet::new(selections),
    })
}

pub(crate) fn build_inline_fragment(spec: &InlineSpec) -> Result<InlineFragment> {
    let mut inline = InlineFragment::new(spec.type_condition.clone());
    for field_spec in &spec.fields {
        inline.selection_set.selections.push(Selection::Field(build_field(
            field_spec.name.as_str(),
            &field_spec.opts,
            true,
        )?));
    }
    Ok(inline)
}
