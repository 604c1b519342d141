use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::VariableDefinition;
use crate::parse::IntoDocument;
use crate::parse::ParseError;
use crate::transform::dedup_selections;
use indexmap::IndexMap;

impl Document {
    /// Structural union of two documents.
    ///
    /// Definition lists are concatenated; operations group by kind onto the
    /// first definition of that kind, and fragment definitions group by
    /// name the same way. Within a group, variable definitions union
    /// first-wins by name and selection sets concatenate then deduplicate
    /// recursively.
    pub fn merge(self, other: impl IntoDocument) -> Result<Document, ParseError> {
        let other = other.into_document()?;
        let mut merged = Document { definitions: vec![] };

        for def in self.definitions.into_iter().chain(other.definitions) {
            match def {
                Definition::Operation(op) => {
                    let base_idx = merged.definitions.iter().position(|existing| {
                        matches!(
                            existing,
                            Definition::Operation(base) if base.kind == op.kind,
                        )
                    });
                    match base_idx {
                        Some(idx) => {
                            if let Definition::Operation(base) =
                                &mut merged.definitions[idx]
                            {
                                merge_operation(base, op);
                            }
                        },
                        None => merged.definitions.push(Definition::Operation(op)),
                    }
                },

                Definition::Fragment(frag) => {
                    let base_idx = merged.definitions.iter().position(|existing| {
                        matches!(
                            existing,
                            Definition::Fragment(base) if base.name == frag.name,
                        )
                    });
                    match base_idx {
                        Some(idx) => {
                            if let Definition::Fragment(base) =
                                &mut merged.definitions[idx]
                            {
                                merge_fragment(base, frag);
                            }
                        },
                        None => merged.definitions.push(Definition::Fragment(frag)),
                    }
                },
            }
        }

        Ok(merged)
    }
}

fn merge_operation(base: &mut OperationDefinition, other: OperationDefinition) {
    if base.name.is_none() {
        base.name = other.name;
    }

    let mut vars: IndexMap<String, VariableDefinition> = base
        .variable_definitions
        .drain(..)
        .map(|var_def| (var_def.name.clone(), var_def))
        .collect();
    for var_def in other.variable_definitions {
        vars.entry(var_def.name.clone()).or_insert(var_def);
    }
    base.variable_definitions = vars.into_values().collect();

    for directive in other.directives {
        if !base.directives.contains(&directive) {
            base.directives.push(directive);
        }
    }

    base.selection_set
        .selections
        .extend(other.selection_set.selections);
    dedup_selections(&mut base.selection_set.selections);
}

fn merge_fragment(base: &mut FragmentDefinition, other: FragmentDefinition) {
    for directive in other.directives {
        if !base.directives.contains(&directive) {
            base.directives.push(directive);
        }
    }

    base.selection_set
        .selections
        .extend(other.selection_set.selections);
    dedup_selections(&mut base.selection_set.selections);
}
