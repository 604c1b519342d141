use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::Selection;
use crate::ops::build_field;
use crate::ops::build_inline_fragment;
use crate::ops::EditError;
use crate::ops::FieldSpec;
use crate::ops::InlineSpec;
use crate::path::navigator;
use crate::path::PathElement;

type Result<T> = std::result::Result<T, EditError>;

/// Options for [`Document::define_fragment`] and
/// [`Document::add_inline_fragment`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentOpts {
    pub fields: Vec<FieldSpec>,
}
impl FragmentOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, spec: impl Into<FieldSpec>) -> Self {
        self.fields.push(spec.into());
        self
    }
}

impl Document {
    /// Append a named fragment definition. `opts.fields` populates its
    /// selection set under the same subfield rules as
    /// [`Document::add_field`].
    pub fn define_fragment(
        mut self,
        name: &str,
        type_condition: &str,
        opts: FragmentOpts,
    ) -> Result<Document> {
        let mut frag = FragmentDefinition::new(name, type_condition);
        for spec in &opts.fields {
            frag.selection_set.selections.push(Selection::Field(build_field(
                spec.name.as_str(),
                &spec.opts,
                true,
            )?));
        }
        self.definitions.push(Definition::Fragment(frag));
        Ok(self)
    }

    /// Drop the fragment definition named `name`.
    pub fn remove_fragment(mut self, name: &str) -> Document {
        self.definitions.retain(|def| {
            !matches!(def, Definition::Fragment(frag) if frag.name == name)
        });
        self
    }

    /// Append an inline fragment at the selection set at `path`. Fields
    /// added later address it through a trailing
    /// [`PathElement::inline_fragment`] element.
    pub fn add_inline_fragment(
        mut self,
        type_condition: Option<String>,
        path: &[PathElement],
        opts: FragmentOpts,
    ) -> Result<Document> {
        let inline = build_inline_fragment(&InlineSpec {
            type_condition,
            fields: opts.fields,
        })?;
        navigator::update_selection_set(&mut self, path, |selections| {
            selections.push(Selection::InlineFragment(inline.clone()));
        });
        Ok(self)
    }

    /// Append a spread of the named fragment at the selection set at
    /// `path`, honoring the fragment-first rule.
    pub fn spread_fragment(mut self, name: &str, path: &[PathElement]) -> Document {
        let spread = FragmentSpread::new(name);
        navigator::update_selection_set(&mut self, path, |selections| {
            selections.push(Selection::FragmentSpread(spread.clone()));
        });
        self
    }
}
