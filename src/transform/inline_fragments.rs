use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::FragmentDefinition;
use crate::ast::Selection;
use indexmap::IndexMap;

impl Document {
    /// Replace every resolvable fragment spread by the named fragment's
    /// selections, flattening chained fragments, then drop all fragment
    /// definitions.
    ///
    /// Spreads whose name resolves to no fragment definition are left in
    /// place, as is a spread whose expansion would re-enter a fragment
    /// already being expanded.
    pub fn inline_fragments(self) -> Document {
        let mut registry: IndexMap<String, FragmentDefinition> = IndexMap::new();
        let mut operations = vec![];

        for def in self.definitions {
            match def {
                Definition::Fragment(frag) => {
                    registry.entry(frag.name.clone()).or_insert(frag);
                },
                Definition::Operation(op) => operations.push(op),
            }
        }

        let definitions = operations
            .into_iter()
            .map(|mut op| {
                let mut expanding = vec![];
                op.selection_set.selections = expand(
                    op.selection_set.selections,
                    &registry,
                    &mut expanding,
                );
                Definition::Operation(op)
            })
            .collect();

        Document { definitions }
    }
}

fn expand(
    selections: Vec<Selection>,
    registry: &IndexMap<String, FragmentDefinition>,
    expanding: &mut Vec<String>,
) -> Vec<Selection> {
    let mut result = Vec::with_capacity(selections.len());

    for selection in selections {
        match selection {
            Selection::FragmentSpread(spread) => {
                match registry.get(spread.name.as_str()) {
                    Some(frag) if !expanding.contains(&spread.name) => {
                        expanding.push(spread.name.clone());
                        result.extend(expand(
                            frag.selection_set.selections.clone(),
                            registry,
                            expanding,
                        ));
                        expanding.pop();
                    },
                    _ => result.push(Selection::FragmentSpread(spread)),
                }
            },

            Selection::Field(mut field) => {
                field.selection_set.selections = expand(
                    std::mem::take(&mut field.selection_set.selections),
                    registry,
                    expanding,
                );
                result.push(Selection::Field(field));
            },

            Selection::InlineFragment(mut inline) => {
                inline.selection_set.selections = expand(
                    std::mem::take(&mut inline.selection_set.selections),
                    registry,
                    expanding,
                );
                result.push(Selection::InlineFragment(inline));
            },
        }
    }

    result
}
