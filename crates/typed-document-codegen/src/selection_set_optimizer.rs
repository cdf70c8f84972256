use crate::ast;
use crate::operation_kind;
use crate::DocumentFile;
use std::collections::HashMap;

/// Rewrites documents before declarations are generated for them. Invoked
/// when `flattenGeneratedTypes` is enabled.
pub trait SelectionSetOptimizer: std::fmt::Debug + Send + Sync {
    fn optimize(&self, documents: &[DocumentFile]) -> Vec<DocumentFile>;
}

/// Replaces every fragment spread with an inline fragment carrying the
/// spread fragment's type condition and selections, then drops the fragment
/// definitions.
///
/// Spreads of fragments that are not defined in any input document are left
/// untouched, as are spreads that would recurse into a fragment already being
/// inlined.
#[derive(Clone, Copy, Debug, Default)]
pub struct FragmentInliner;

impl SelectionSetOptimizer for FragmentInliner {
    fn optimize(&self, documents: &[DocumentFile]) -> Vec<DocumentFile> {
        let mut fragments = HashMap::new();
        for doc in documents {
            for def in &doc.document().definitions {
                if let ast::operation::Definition::Fragment(frag) = def {
                    fragments.entry(frag.name.as_str()).or_insert(frag);
                }
            }
        }

        documents.iter()
            .map(|doc| {
                let definitions =
                    doc.document()
                        .definitions
                        .iter()
                        .filter_map(|def| match def {
                            ast::operation::Definition::Operation(op) => {
                                let mut op = op.clone();
                                inline_spreads(
                                    operation_kind::selection_set_mut(&mut op),
                                    &fragments,
                                    &mut vec![],
                                );
                                Some(ast::operation::Definition::Operation(op))
                            },
                            ast::operation::Definition::Fragment(_) => None,
                        })
                        .collect();

                DocumentFile::new(
                    doc.location().map(|l| l.to_string()),
                    ast::operation::Document { definitions },
                )
            })
            .collect()
    }
}

fn inline_spreads(
    selection_set: &mut ast::operation::SelectionSet,
    fragments: &HashMap<&str, &ast::operation::FragmentDefinition>,
    inlining: &mut Vec<String>,
) {
    use ast::operation::Selection;
    for selection in selection_set.items.iter_mut() {
        let replacement = match selection {
            Selection::Field(field) => {
                inline_spreads(&mut field.selection_set, fragments, inlining);
                continue;
            },

            Selection::InlineFragment(inline) => {
                inline_spreads(&mut inline.selection_set, fragments, inlining);
                continue;
            },

            Selection::FragmentSpread(spread) => {
                let Some(frag) = fragments.get(spread.fragment_name.as_str()) else {
                    continue;
                };
                if inlining.contains(&spread.fragment_name) {
                    continue;
                }

                let mut inlined = frag.selection_set.clone();
                inlining.push(spread.fragment_name.clone());
                inline_spreads(&mut inlined, fragments, inlining);
                inlining.pop();

                Selection::InlineFragment(ast::operation::InlineFragment {
                    position: spread.position,
                    type_condition: Some(frag.type_condition.clone()),
                    directives: spread.directives.clone(),
                    selection_set: inlined,
                })
            },
        };
        *selection = replacement;
    }
}
