use crate::ast::Document;
use crate::ast::OperationKind;
use crate::builder::BuildError;
use crate::encode::Literal;
use crate::ops::FieldOpts;
use crate::ops::FragmentOpts;
use crate::ops::VariableOpts;
use crate::parse::DocumentSource;
use crate::path::PathElement;
use indexmap::IndexMap;

/// One operation in a build sequence.
///
/// The step set is the closed registry of everything [`build`] can apply;
/// operations resolve at the type level, so an unknown operation is
/// unrepresentable.
///
/// [`build`]: crate::builder::build
#[derive(Clone, Debug, PartialEq)]
pub enum BuildStep {
    Field {
        name: String,
        opts: FieldOpts,
    },
    RemoveField {
        name: String,
        path: Vec<PathElement>,
    },
    ReplaceField {
        name: String,
        opts: FieldOpts,
    },
    Argument {
        name: String,
        path: Vec<PathElement>,
        value: Literal,
    },
    RemoveArgument {
        name: String,
        path: Vec<PathElement>,
    },
    ReplaceArgument {
        name: String,
        path: Vec<PathElement>,
        value: Literal,
    },
    Directive {
        name: String,
        path: Vec<PathElement>,
        arguments: Vec<(String, Literal)>,
    },
    Variable {
        name: String,
        opts: VariableOpts,
    },
    RemoveVariable {
        name: String,
    },
    OperationKind(OperationKind),
    OperationName(String),
    Fragment {
        name: String,
        type_condition: String,
        opts: FragmentOpts,
    },
    RemoveFragment {
        name: String,
    },
    InlineFragment {
        type_condition: Option<String>,
        path: Vec<PathElement>,
        opts: FragmentOpts,
    },
    SpreadFragment {
        name: String,
        path: Vec<PathElement>,
    },
    InlineAllFragments,
    Merge(DocumentSource),
    InjectTypenames,
    InlineVariables(IndexMap<String, Literal>),
}
impl BuildStep {
    pub(crate) fn apply(self, doc: Document) -> Result<Document, BuildError> {
        Ok(match self {
            BuildStep::Field { name, opts } => doc.add_field(name.as_str(), opts)?,

            BuildStep::RemoveField { name, path } => {
                doc.remove_field(name.as_str(), &path)
            },

            BuildStep::ReplaceField { name, opts } => {
                doc.replace_field(name.as_str(), opts)
            },

            BuildStep::Argument { name, path, value } => {
                doc.add_argument(name.as_str(), &path, value)
            },

            BuildStep::RemoveArgument { name, path } => {
                doc.remove_argument(name.as_str(), &path)
            },

            BuildStep::ReplaceArgument { name, path, value } => {
                doc.replace_argument(name.as_str(), &path, value)
            },

            BuildStep::Directive {
                name,
                path,
                arguments,
            } => doc.add_directive(name.as_str(), &path, arguments),

            BuildStep::Variable { name, opts } => {
                doc.add_variable(name.as_str(), opts)
            },

            BuildStep::RemoveVariable { name } => doc.remove_variable(name.as_str()),

            BuildStep::OperationKind(kind) => doc.set_operation_kind(kind),

            BuildStep::OperationName(name) => doc.set_operation_name(name.as_str()),

            BuildStep::Fragment {
                name,
                type_condition,
                opts,
            } => doc.define_fragment(name.as_str(), type_condition.as_str(), opts)?,

            BuildStep::RemoveFragment { name } => doc.remove_fragment(name.as_str()),

            BuildStep::InlineFragment {
                type_condition,
                path,
                opts,
            } => doc.add_inline_fragment(type_condition, &path, opts)?,

            BuildStep::SpreadFragment { name, path } => {
                doc.spread_fragment(name.as_str(), &path)
            },

            BuildStep::InlineAllFragments => doc.inline_fragments(),

            BuildStep::Merge(source) => doc.merge(source)?,

            BuildStep::InjectTypenames => doc.inject_typenames(),

            BuildStep::InlineVariables(mapping) => doc.inline_variables(mapping),
        })
    }
}
