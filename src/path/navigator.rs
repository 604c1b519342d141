//! The traversal engine behind every edit operation.
//!
//! A path folds into a recursive descent over selection sets. The first
//! path element is resolved against the document's fragment definitions
//! first: when it names one, the edit applies inside that fragment;
//! otherwise it applies inside every operation definition. Missing `Field`
//! steps are created on the way down (auto-vivification); missing
//! inline-fragment steps make the traversal a silent no-op.

use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::path::PathElement;

/// Apply `f` to the selection list at the path endpoint.
pub(crate) fn update_selection_set<F>(
    doc: &mut Document,
    path: &[PathElement],
    mut f: F,
) where
    F: FnMut(&mut Vec<Selection>),
{
    if let Some((name, rest)) = fragment_first(doc, path) {
        if let Some(frag) = doc.fragment_mut(name.as_str()) {
            descend(&mut frag.selection_set, rest, &mut f);
        }
        return;
    }

    for op in doc.operations_mut() {
        descend(&mut op.selection_set, path, &mut f);
    }
}

/// Apply `f` to the field at the endpoint of a non-empty path.
pub(crate) fn update_field<F>(doc: &mut Document, path: &[PathElement], mut f: F)
where
    F: FnMut(&mut Field),
{
    if path.is_empty() {
        return;
    }

    if let Some((name, rest)) = fragment_first(doc, path) {
        if let Some(frag) = doc.fragment_mut(name.as_str()) {
            descend_to_field(&mut frag.selection_set, rest, &mut f);
        }
        return;
    }

    for op in doc.operations_mut() {
        descend_to_field(&mut op.selection_set, path, &mut f);
    }
}

/// Apply `f` to the argument list of the field at the path endpoint.
pub(crate) fn update_arguments<F>(doc: &mut Document, path: &[PathElement], mut f: F)
where
    F: FnMut(&mut Vec<Argument>),
{
    update_field(doc, path, |field| f(&mut field.arguments));
}

/// Apply `f` to the directive list of the field at the path endpoint.
pub(crate) fn update_directives<F>(doc: &mut Document, path: &[PathElement], mut f: F)
where
    F: FnMut(&mut Vec<Directive>),
{
    update_field(doc, path, |field| f(&mut field.directives));
}

// The fragment-first rule: a non-empty path whose first element is a field
// element naming an existing fragment definition navigates inside that
// fragment, consuming the element.
fn fragment_first<'a>(
    doc: &Document,
    path: &'a [PathElement],
) -> Option<(String, &'a [PathElement])> {
    match path.first() {
        Some(PathElement::Field { name, .. }) if doc.fragment(name).is_some() => {
            Some((name.clone(), &path[1..]))
        },
        _ => None,
    }
}

fn descend<F>(set: &mut SelectionSet, path: &[PathElement], f: &mut F)
where
    F: FnMut(&mut Vec<Selection>),
{
    let Some((head, rest)) = path.split_first() else {
        f(&mut set.selections);
        return;
    };

    let Some(idx) = resolve_step(set, head) else {
        return;
    };

    match &mut set.selections[idx] {
        Selection::Field(field) => descend(&mut field.selection_set, rest, f),
        Selection::InlineFragment(inline) => {
            descend(&mut inline.selection_set, rest, f)
        },
        Selection::FragmentSpread(_) => {},
    }
}

fn descend_to_field<F>(set: &mut SelectionSet, path: &[PathElement], f: &mut F)
where
    F: FnMut(&mut Field),
{
    let Some((head, rest)) = path.split_first() else {
        return;
    };

    let Some(idx) = resolve_step(set, head) else {
        return;
    };

    if rest.is_empty() {
        if let Some(field) = set.selections[idx].field_mut() {
            f(field);
        }
        return;
    }

    match &mut set.selections[idx] {
        Selection::Field(field) => {
            descend_to_field(&mut field.selection_set, rest, f)
        },
        Selection::InlineFragment(inline) => {
            descend_to_field(&mut inline.selection_set, rest, f)
        },
        Selection::FragmentSpread(_) => {},
    }
}

// Locates the selection a path element steps into, creating it when the
// element is a field element with no match. Returns None only for an
// unmatched inline-fragment element.
fn resolve_step(set: &mut SelectionSet, head: &PathElement) -> Option<usize> {
    if let Some(idx) = set.selections.iter().position(|sel| head.matches(sel)) {
        return Some(idx);
    }

    let field = head.vivified_field()?;
    set.selections.push(Selection::Field(field));
    Some(set.selections.len() - 1)
}
