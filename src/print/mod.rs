//! Canonical GraphQL text rendering.
//!
//! Every node exposes `to_graphql_string()`, with [`std::fmt::Display`]
//! delegating to it. The output is stable: definitions render in document
//! order, selections in list order, variable definitions in declaration
//! order, with two-space indentation. An anonymous query with no variables
//! and no directives renders in the `{ ... }` shorthand.

use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use std::fmt;

impl Document {
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::new();
        for (idx, def) in self.definitions.iter().enumerate() {
            if idx > 0 {
                out.push_str("\n\n");
            }
            match def {
                Definition::Operation(op) => write_operation(&mut out, op),
                Definition::Fragment(frag) => write_fragment(&mut out, frag),
            }
        }
        out
    }
}

impl OperationDefinition {
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::new();
        write_operation(&mut out, self);
        out
    }
}

impl FragmentDefinition {
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::new();
        write_fragment(&mut out, self);
        out
    }
}

impl Selection {
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::new();
        write_selection(&mut out, self, 0);
        out
    }
}

impl Field {
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::new();
        write_field(&mut out, self, 0);
        out
    }
}

impl Directive {
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::new();
        write_directive(&mut out, self);
        out
    }
}

impl VariableDefinition {
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::new();
        write_variable_definition(&mut out, self);
        out
    }
}

impl TypeAnnotation {
    pub fn to_graphql_string(&self) -> String {
        match self {
            TypeAnnotation::Named(name) => name.clone(),
            TypeAnnotation::NonNull(name) => format!("{name}!"),
        }
    }
}

impl Value {
    pub fn to_graphql_string(&self) -> String {
        let mut out = String::new();
        write_value(&mut out, self);
        out
    }
}

fn write_operation(out: &mut String, op: &OperationDefinition) {
    let shorthand = op.kind == OperationKind::Query
        && op.name.is_none()
        && op.variable_definitions.is_empty()
        && op.directives.is_empty();

    if !shorthand {
        out.push_str(op.kind.keyword());
        if let Some(name) = &op.name {
            out.push(' ');
            out.push_str(name);
        }
        if !op.variable_definitions.is_empty() {
            if op.name.is_none() {
                out.push(' ');
            }
            out.push('(');
            for (idx, var_def) in op.variable_definitions.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_variable_definition(out, var_def);
            }
            out.push(')');
        }
        write_directives(out, &op.directives);
        out.push(' ');
    }
    write_selection_set(out, &op.selection_set, 0);
}

fn write_fragment(out: &mut String, frag: &FragmentDefinition) {
    out.push_str("fragment ");
    out.push_str(frag.name.as_str());
    out.push_str(" on ");
    out.push_str(frag.type_condition.as_str());
    write_directives(out, &frag.directives);
    out.push(' ');
    write_selection_set(out, &frag.selection_set, 0);
}

fn write_selection_set(out: &mut String, set: &SelectionSet, indent: usize) {
    out.push_str("{\n");
    for selection in &set.selections {
        push_indent(out, indent + 1);
        write_selection(out, selection, indent + 1);
        out.push('\n');
    }
    push_indent(out, indent);
    out.push('}');
}

fn write_selection(out: &mut String, selection: &Selection, indent: usize) {
    match selection {
        Selection::Field(field) => write_field(out, field, indent),

        Selection::FragmentSpread(spread) => write_fragment_spread(out, spread),

        Selection::InlineFragment(inline) => {
            write_inline_fragment(out, inline, indent)
        },
    }
}

fn write_field(out: &mut String, field: &Field, indent: usize) {
    if let Some(alias) = &field.alias {
        out.push_str(alias);
        out.push_str(": ");
    }
    out.push_str(field.name.as_str());
    write_arguments(out, &field.arguments);
    write_directives(out, &field.directives);
    if !field.selection_set.is_empty() {
        out.push(' ');
        write_selection_set(out, &field.selection_set, indent);
    }
}

fn write_fragment_spread(out: &mut String, spread: &FragmentSpread) {
    out.push_str("...");
    out.push_str(spread.name.as_str());
    write_directives(out, &spread.directives);
}

fn write_inline_fragment(out: &mut String, inline: &InlineFragment, indent: usize) {
    out.push_str("...");
    if let Some(type_condition) = &inline.type_condition {
        out.push_str(" on ");
        out.push_str(type_condition.as_str());
    }
    write_directives(out, &inline.directives);
    out.push(' ');
    write_selection_set(out, &inline.selection_set, indent);
}

fn write_variable_definition(out: &mut String, var_def: &VariableDefinition) {
    out.push('$');
    out.push_str(var_def.name.as_str());
    out.push_str(": ");
    out.push_str(var_def.var_type.to_graphql_string().as_str());
    if let Some(default_value) = &var_def.default_value {
        out.push_str(" = ");
        write_value(out, default_value);
    }
}

fn write_arguments(out: &mut String, arguments: &[Argument]) {
    if arguments.is_empty() {
        return;
    }
    out.push('(');
    for (idx, argument) in arguments.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(argument.name.as_str());
        out.push_str(": ");
        write_value(out, &argument.value);
    }
    out.push(')');
}

fn write_directives(out: &mut String, directives: &[Directive]) {
    for directive in directives {
        out.push(' ');
        write_directive(out, directive);
    }
}

fn write_directive(out: &mut String, directive: &Directive) {
    out.push('@');
    out.push_str(directive.name.as_str());
    write_arguments(out, &directive.arguments);
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Variable(name) => {
            out.push('$');
            out.push_str(name.as_str());
        },

        Value::Int(int) => out.push_str(int.to_string().as_str()),

        Value::Float(float) => write_float(out, *float),

        Value::String(string) => write_string(out, string.as_str()),

        Value::Boolean(boolean) => {
            out.push_str(if *boolean { "true" } else { "false" })
        },

        Value::Null => out.push_str("null"),

        Value::Enum(name) => out.push_str(name.as_str()),

        Value::List(values) => {
            out.push('[');
            for (idx, item) in values.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        },

        Value::Object(fields) => {
            out.push('{');
            for (idx, object_field) in fields.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                out.push_str(object_field.name.as_str());
                out.push_str(": ");
                write_value(out, &object_field.value);
            }
            out.push('}');
        },
    }
}

// Whole floats still need a fractional part so they reparse as floats.
fn write_float(out: &mut String, float: f64) {
    if float.is_finite() && float.fract() == 0.0 {
        out.push_str(format!("{float:.1}").as_str());
    } else {
        out.push_str(float.to_string().as_str());
    }
}

fn write_string(out: &mut String, string: &str) {
    out.push('"');
    for c in string.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(format!("\\u{:04x}", c as u32).as_str())
            },
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
impl fmt::Display for OperationDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
impl fmt::Display for FragmentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
impl fmt::Display for VariableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}

#[cfg(test)]
mod tests;
