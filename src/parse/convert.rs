//! Conversion from the `graphql_parser` query AST into the owned document
//! model.

use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::ObjectField;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use graphql_parser::query as gql;

pub(super) fn document<'a>(ast: gql::Document<'a, String>) -> Document {
    Document {
        definitions: ast.definitions.into_iter().map(definition).collect(),
    }
}

fn definition<'a>(ast: gql::Definition<'a, String>) -> Definition {
    match ast {
        gql::Definition::Operation(op) => {
            Definition::Operation(operation_definition(op))
        },
        gql::Definition::Fragment(frag) => {
            Definition::Fragment(fragment_definition(frag))
        },
    }
}

fn operation_definition<'a>(
    ast: gql::OperationDefinition<'a, String>,
) -> OperationDefinition {
    match ast {
        // The no-keyword shorthand normalizes to an unnamed query.
        gql::OperationDefinition::SelectionSet(sel_set) => OperationDefinition {
            kind: OperationKind::Query,
            name: None,
            variable_definitions: vec![],
            directives: vec![],
            selection_set: selection_set(sel_set),
        },

        gql::OperationDefinition::Query(query) => OperationDefinition {
            kind: OperationKind::Query,
            name: query.name,
            variable_definitions: variable_definitions(query.variable_definitions),
            directives: directives(query.directives),
            selection_set: selection_set(query.selection_set),
        },

        gql::OperationDefinition::Mutation(mutation) => OperationDefinition {
            kind: OperationKind::Mutation,
            name: mutation.name,
            variable_definitions: variable_definitions(mutation.variable_definitions),
            directives: directives(mutation.directives),
            selection_set: selection_set(mutation.selection_set),
        },

        gql::OperationDefinition::Subscription(subscription) => OperationDefinition {
            kind: OperationKind::Subscription,
            name: subscription.name,
            variable_definitions: variable_definitions(subscription.variable_definitions),
            directives: directives(subscription.directives),
            selection_set: selection_set(subscription.selection_set),
        },
    }
}

fn fragment_definition<'a>(
    ast: gql::FragmentDefinition<'a, String>,
) -> FragmentDefinition {
    let gql::TypeCondition::On(type_condition) = ast.type_condition;
    FragmentDefinition {
        name: ast.name,
        type_condition,
        directives: directives(ast.directives),
        selection_set: selection_set(ast.selection_set),
    }
}

fn selection_set<'a>(ast: gql::SelectionSet<'a, String>) -> SelectionSet {
    SelectionSet {
        selections: ast.items.into_iter().map(selection).collect(),
    }
}

fn selection<'a>(ast: gql::Selection<'a, String>) -> Selection {
    match ast {
        gql::Selection::Field(field) => Selection::Field(Field {
            alias: field.alias,
            name: field.name,
            arguments: arguments(field.arguments),
            directives: directives(field.directives),
            selection_set: selection_set(field.selection_set),
        }),

        gql::Selection::FragmentSpread(spread) => {
            Selection::FragmentSpread(FragmentSpread {
                name: spread.fragment_name,
                directives: directives(spread.directives),
            })
        },

        gql::Selection::InlineFragment(inline) => {
            Selection::InlineFragment(InlineFragment {
                type_condition: inline.type_condition.map(|cond| {
                    let gql::TypeCondition::On(name) = cond;
                    name
                }),
                directives: directives(inline.directives),
                selection_set: selection_set(inline.selection_set),
            })
        },
    }
}

fn variable_definitions<'a>(
    ast: Vec<gql::VariableDefinition<'a, String>>,
) -> Vec<VariableDefinition> {
    ast.into_iter()
        .map(|var_def| VariableDefinition {
            name: var_def.name,
            var_type: type_annotation(&var_def.var_type),
            default_value: var_def.default_value.map(value),
        })
        .collect()
}

fn type_annotation<'a>(ast: &gql::Type<'a, String>) -> TypeAnnotation {
    match ast {
        gql::Type::NonNullType(inner) => TypeAnnotation::NonNull(type_text(inner)),
        other => TypeAnnotation::Named(type_text(other)),
    }
}

// Renders a parser type back to GraphQL type syntax. List types are carried
// as text inside the annotation's name.
fn type_text<'a>(ast: &gql::Type<'a, String>) -> String {
    match ast {
        gql::Type::NamedType(name) => name.clone(),
        gql::Type::ListType(inner) => format!("[{}]", type_text(inner)),
        gql::Type::NonNullType(inner) => format!("{}!", type_text(inner)),
    }
}

fn directives<'a>(ast: Vec<gql::Directive<'a, String>>) -> Vec<Directive> {
    ast.into_iter()
        .map(|directive| Directive {
            name: directive.name,
            arguments: arguments(directive.arguments),
        })
        .collect()
}

fn arguments<'a>(ast: Vec<(String, gql::Value<'a, String>)>) -> Vec<Argument> {
    ast.into_iter()
        .map(|(name, ast_value)| Argument::new(name, value(ast_value)))
        .collect()
}

fn value<'a>(ast: gql::Value<'a, String>) -> Value {
    match ast {
        gql::Value::Variable(name) => Value::Variable(name),
        gql::Value::Int(number) => Value::Int(number.as_i64().unwrap_or_default()),
        gql::Value::Float(float) => Value::Float(float),
        gql::Value::String(string) => Value::String(string),
        gql::Value::Boolean(boolean) => Value::Boolean(boolean),
        gql::Value::Null => Value::Null,
        gql::Value::Enum(name) => Value::Enum(name),
        gql::Value::List(values) => {
            Value::List(values.into_iter().map(value).collect())
        },
        gql::Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(name, ast_value)| ObjectField::new(name, value(ast_value)))
                .collect(),
        ),
    }
}
