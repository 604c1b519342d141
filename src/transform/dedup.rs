//! Recursive selection deduplication used by document merging.

use crate::ast::Argument;
use crate::ast::ObjectField;
use crate::ast::Selection;
use crate::ast::Value;
use indexmap::IndexMap;

/// Merge fields that share an identity tuple of
/// `(response key, canonical argument signature)`.
///
/// The earlier occurrence keeps its position; its selection set becomes the
/// recursive deduplication of the union of both selection sets. Fragment
/// spreads and inline fragments pass through untouched.
pub(crate) fn dedup_selections(selections: &mut Vec<Selection>) {
    let mut seen: IndexMap<(String, String), usize> = IndexMap::new();
    let mut result: Vec<Selection> = Vec::with_capacity(selections.len());

    for selection in selections.drain(..) {
        let field = match selection {
            Selection::Field(field) => field,
            other => {
                result.push(other);
                continue;
            },
        };

        let identity = (
            field.response_key().to_string(),
            argument_signature(&field.arguments),
        );

        match seen.get(&identity).copied() {
            Some(idx) => {
                if let Some(base) = result[idx].field_mut() {
                    base.selection_set
                        .selections
                        .extend(field.selection_set.selections);
                    dedup_selections(&mut base.selection_set.selections);
                }
            },
            None => {
                seen.insert(identity, result.len());
                result.push(Selection::Field(field));
            },
        }
    }

    *selections = result;
}

/// The canonical argument signature: arguments sorted by name, each value
/// reduced to a stable textual form with object fields sorted by name
/// recursively.
pub(crate) fn argument_signature(arguments: &[Argument]) -> String {
    let mut sorted: Vec<&Argument> = arguments.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
        .iter()
        .map(|argument| {
            format!("{}:{}", argument.name, canonical_value(&argument.value))
        })
        .collect::<Vec<String>>()
        .join(",")
}

fn canonical_value(value: &Value) -> String {
    match value {
        Value::List(items) => {
            let rendered: Vec<String> = items.iter().map(canonical_value).collect();
            format!("[{}]", rendered.join(","))
        },

        Value::Object(fields) => {
            let mut sorted: Vec<&ObjectField> = fields.iter().collect();
            sorted.sort_by(|a, b| a.name.cmp(&b.name));
            let rendered: Vec<String> = sorted
                .iter()
                .map(|field| {
                    format!("{}:{}", field.name, canonical_value(&field.value))
                })
                .collect();
            format!("{{{}}}", rendered.join(","))
        },

        scalar => scalar.to_graphql_string(),
    }
}
