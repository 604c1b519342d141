use crate::ast::Document;
use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::VariableDefinition;
use crate::encode;
use crate::encode::Literal;
use lazy_static::lazy_static;

lazy_static! {
    // Type given to a variable declared with neither a type nor a default
    // to infer one from.
    static ref NONNULL_STRING_TYPE: TypeAnnotation =
        TypeAnnotation::non_null("String");
}

/// Options for [`Document::add_variable`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableOpts {
    pub var_type: Option<String>,
    pub default: Option<Literal>,
    pub optional: bool,
}
impl VariableOpts {
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    pub fn var_type(mut self, var_type: impl Into<String>) -> Self {
        self.var_type = Some(var_type.into());
        self
    }

    pub fn default(mut self, default: impl Into<Literal>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Leave the declared type nullable instead of wrapping it non-null.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl Document {
    /// Append a variable definition to every operation definition.
    ///
    /// The GraphQL type comes from `opts.var_type`, else is inferred from
    /// `opts.default`, else falls back to `String`; it is wrapped non-null
    /// unless `opts.optional` is set. Operations without a name are named
    /// by capitalizing their kind.
    pub fn add_variable(mut self, name: &str, opts: VariableOpts) -> Document {
        let encoded_default = opts.default.as_ref().map(encode::encode);
        let type_name = opts.var_type.clone().or_else(|| {
            encoded_default
                .as_ref()
                .and_then(|encoded| encoded.inferred_type.clone())
        });

        let var_type = match type_name {
            Some(name) if opts.optional => TypeAnnotation::named(name),
            Some(name) => TypeAnnotation::non_null(name),
            None if opts.optional => TypeAnnotation::named("String"),
            None => NONNULL_STRING_TYPE.clone(),
        };

        let var_def = VariableDefinition {
            name: name.to_string(),
            var_type,
            default_value: encoded_default.map(|encoded| encoded.value),
        };

        for op in self.operations_mut() {
            if op.name.is_none() {
                op.name = Some(op.kind.capitalized().to_string());
            }
            op.variable_definitions.push(var_def.clone());
        }
        self
    }

    /// Drop variable definitions named `name` from every operation
    /// definition.
    pub fn remove_variable(mut self, name: &str) -> Document {
        for op in self.operations_mut() {
            op.variable_definitions.retain(|var_def| var_def.name != name);
        }
        self
    }

    /// Set the operation kind of every operation definition.
    pub fn set_operation_kind(mut self, kind: OperationKind) -> Document {
        for op in self.operations_mut() {
            op.kind = kind;
        }
        self
    }

    /// Set the name of every operation definition.
    pub fn set_operation_name(mut self, name: &str) -> Document {
        for op in self.operations_mut() {
            op.name = Some(name.to_string());
        }
        self
    }
}
