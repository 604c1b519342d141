use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Value;
use crate::encode;
use crate::encode::Literal;
use indexmap::IndexMap;

impl Document {
    /// Substitute literals for variable references.
    ///
    /// For each `name -> literal` entry, the matching variable definition
    /// is dropped from every operation and every `$name` reference in the
    /// document (field arguments, directive arguments, list elements, and
    /// object field values, recursively) is replaced by the encoded
    /// literal.
    pub fn inline_variables(
        mut self,
        mapping: IndexMap<String, Literal>,
    ) -> Document {
        let values: IndexMap<String, Value> = mapping
            .into_iter()
            .map(|(name, literal)| (name, encode::encode(&literal).value))
            .collect();

        for def in &mut self.definitions {
            match def {
                Definition::Operation(op) => {
                    op.variable_definitions
                        .retain(|var_def| !values.contains_key(&var_def.name));
                    rewrite_directives(&mut op.directives, &values);
                    rewrite_selection_set(&mut op.selection_set, &values);
                },
                Definition::Fragment(frag) => {
                    rewrite_directives(&mut frag.directives, &values);
                    rewrite_selection_set(&mut frag.selection_set, &values);
                },
            }
        }
        self
    }
}

fn rewrite_selection_set(set: &mut SelectionSet, values: &IndexMap<String, Value>) {
    for selection in &mut set.selections {
        match selection {
            Selection::Field(field) => {
                rewrite_arguments(&mut field.arguments, values);
                rewrite_directives(&mut field.directives, values);
                rewrite_selection_set(&mut field.selection_set, values);
            },
            Selection::FragmentSpread(spread) => {
                rewrite_directives(&mut spread.directives, values);
            },
            Selection::InlineFragment(inline) => {
                rewrite_directives(&mut inline.directives, values);
                rewrite_selection_set(&mut inline.selection_set, values);
            },
        }
    }
}

fn rewrite_directives(directives: &mut [Directive], values: &IndexMap<String, Value>) {
    for directive in directives {
        rewrite_arguments(&mut directive.arguments, values);
    }
}

fn rewrite_arguments(arguments: &mut [Argument], values: &IndexMap<String, Value>) {
    for argument in arguments {
        rewrite_value(&mut argument.value, values);
    }
}

fn rewrite_value(value: &mut Value, values: &IndexMap<String, Value>) {
    match value {
        Value::Variable(name) => {
            if let Some(replacement) = values.get(name.as_str()) {
                *value = replacement.clone();
            }
        },

        Value::List(items) => {
            for item in items {
                rewrite_value(item, values);
            }
        },

        Value::Object(fields) => {
            for field in fields {
                rewrite_value(&mut field.value, values);
            }
        },

        _ => {},
    }
}
