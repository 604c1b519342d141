use crate::ast::Document;
use crate::ast::OperationKind;
use crate::builder::BuildError;
use crate::builder::BuildStep;
use crate::encode::Literal;
use crate::ops::FieldOpts;
use crate::ops::FragmentOpts;
use crate::ops::VariableOpts;
use crate::parse::DocumentSource;
use crate::path::PathElement;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, BuildError>;

/// Apply a sequence of build steps, in order, to a fresh document holding
/// a single unnamed query operation.
pub fn build(steps: impl IntoIterator<Item = BuildStep>) -> Result<Document> {
    let mut doc = Document::new();
    for step in steps {
        doc = step.apply(doc)?;
    }
    Ok(doc)
}

/// A fluent queue of [`BuildStep`]s.
///
/// Steps accumulate without touching a document; [`DocumentBuilder::build`]
/// applies them in order and surfaces the first error.
#[derive(Clone, Debug, Default)]
pub struct DocumentBuilder {
    steps: Vec<BuildStep>,
}
impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an arbitrary step.
    pub fn step(mut self, step: BuildStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn field(self, name: impl Into<String>, opts: FieldOpts) -> Self {
        self.step(BuildStep::Field {
            name: name.into(),
            opts,
        })
    }

    pub fn remove_field(
        self,
        name: impl Into<String>,
        path: Vec<PathElement>,
    ) -> Self {
        self.step(BuildStep::RemoveField {
            name: name.into(),
            path,
        })
    }

    pub fn replace_field(self, name: impl Into<String>, opts: FieldOpts) -> Self {
        self.step(BuildStep::ReplaceField {
            name: name.into(),
            opts,
        })
    }

    pub fn argument(
        self,
        name: impl Into<String>,
        path: Vec<PathElement>,
        value: impl Into<Literal>,
    ) -> Self {
        self.step(BuildStep::Argument {
            name: name.into(),
            path,
            value: value.into(),
        })
    }

    pub fn remove_argument(
        self,
        name: impl Into<String>,
        path: Vec<PathElement>,
    ) -> Self {
        self.step(BuildStep::RemoveArgument {
            name: name.into(),
            path,
        })
    }

    pub fn replace_argument(
        self,
        name: impl Into<String>,
        path: Vec<PathElement>,
        value: impl Into<Literal>,
    ) -> Self {
        self.step(BuildStep::ReplaceArgument {
            name: name.into(),
            path,
            value: value.into(),
        })
    }

    pub fn directive(
        self,
        name: impl Into<String>,
        path: Vec<PathElement>,
        arguments: Vec<(String, Literal)>,
    ) -> Self {
        self.step(BuildStep::Directive {
            name: name.into(),
            path,
            arguments,
        })
    }

    pub fn variable(self, name: impl Into<String>, opts: VariableOpts) -> Self {
        self.step(BuildStep::Variable {
            name: name.into(),
            opts,
        })
    }

    pub fn remove_variable(self, name: impl Into<String>) -> Self {
        self.step(BuildStep::RemoveVariable { name: name.into() })
    }

    pub fn operation_kind(self, kind: OperationKind) -> Self {
        self.step(BuildStep::OperationKind(kind))
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.step(BuildStep::OperationName(name.into()))
    }

    pub fn fragment(
        self,
        name: impl Into<String>,
        type_condition: impl Into<String>,
        opts: FragmentOpts,
    ) -> Self {
        self.step(BuildStep::Fragment {
            name: name.into(),
            type_condition: type_condition.into(),
            opts,
        })
    }

    pub fn remove_fragment(self, name: impl Into<String>) -> Self {
        self.step(BuildStep::RemoveFragment { name: name.into() })
    }

    pub fn inline_fragment(
        self,
        type_condition: Option<String>,
        path: Vec<PathElement>,
        opts: FragmentOpts,
    ) -> Self {
        self.step(BuildStep::InlineFragment {
            type_condition,
            path,
            opts,
        })
    }

    pub fn spread_fragment(
        self,
        name: impl Into<String>,
        path: Vec<PathElement>,
    ) -> Self {
        self.step(BuildStep::SpreadFragment {
            name: name.into(),
            path,
        })
    }

    pub fn inline_all_fragments(self) -> Self {
        self.step(BuildStep::InlineAllFragments)
    }

    pub fn merge(self, source: impl Into<DocumentSource>) -> Self {
        self.step(BuildStep::Merge(source.into()))
    }

    pub fn inject_typenames(self) -> Self {
        self.step(BuildStep::InjectTypenames)
    }

    pub fn inline_variables(self, mapping: IndexMap<String, Literal>) -> Self {
        self.step(BuildStep::InlineVariables(mapping))
    }

    /// Apply the queued steps to a fresh document.
    pub fn build(self) -> Result<Document> {
        build(self.steps)
    }
}
