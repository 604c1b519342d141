use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::Selection;
use crate::ast::SelectionSet;

impl Document {
    /// Append a `__typename` field to every selection set: the root set of
    /// each operation and fragment definition, and every non-empty field or
    /// inline-fragment set below them. Leaf fields stay leaves. A set that
    /// already carries an unaliased `__typename` is left alone, so the
    /// operation is idempotent.
    pub fn inject_typenames(mut self) -> Document {
        for def in &mut self.definitions {
            match def {
                Definition::Operation(op) => inject(&mut op.selection_set),
                Definition::Fragment(frag) => inject(&mut frag.selection_set),
            }
        }
        self
    }
}

fn inject(set: &mut SelectionSet) {
    for selection in &mut set.selections {
        match selection {
            Selection::Field(field) if !field.selection_set.is_empty() => {
                inject(&mut field.selection_set)
            },
            Selection::InlineFragment(inline) if !inline.selection_set.is_empty() => {
                inject(&mut inline.selection_set)
            },
            _ => {},
        }
    }

    let already_present = set.selections.iter().any(|selection| {
        matches!(
            selection,
            Selection::Field(field)
                if field.alias.is_none() && field.name == "__typename"
        )
    });
    if !already_present {
        set.selections.push(Selection::Field(Field::new("__typename")));
    }
}
