use crate::ast;
use crate::operation_kind;

const TYPENAME_FIELD: &str = "__typename";

/// Appends a `__typename` field to every non-empty selection set below an
/// operation's root (and to fragment selection sets), unless the set already
/// selects a `__`-prefixed meta field.
pub fn add_typename_to_document(document: &mut ast::operation::Document) {
    use ast::operation::Definition as Def;
    for def in document.definitions.iter_mut() {
        match def {
            Def::Operation(op) => {
                add_typename_to_children(operation_kind::selection_set_mut(op));
            },

            Def::Fragment(frag) => {
                add_typename_to_selection_set(&mut frag.selection_set);
            },
        }
    }
}

fn add_typename_to_selection_set(selection_set: &mut ast::operation::SelectionSet) {
    if selection_set.items.is_empty() {
        return;
    }

    let has_meta_field = selection_set.items.iter().any(|selection| matches!(
        selection,
        ast::operation::Selection::Field(field) if field.name.starts_with("__"),
    ));
    if !has_meta_field {
        let pos = selection_set.span.1;
        selection_set.items.push(ast::operation::Selection::Field(
            ast::operation::Field {
                position: pos,
                alias: None,
                name: TYPENAME_FIELD.to_string(),
                arguments: vec![],
                directives: vec![],
                selection_set: ast::operation::SelectionSet {
                    span: (pos, pos),
                    items: vec![],
                },
            },
        ));
    }

    add_typename_to_children(selection_set);
}

fn add_typename_to_children(selection_set: &mut ast::operation::SelectionSet) {
    use ast::operation::Selection;
    for selection in selection_set.items.iter_mut() {
        match selection {
            Selection::Field(field) => {
                add_typename_to_selection_set(&mut field.selection_set);
            },
            Selection::InlineFragment(inline) => {
                add_typename_to_selection_set(&mut inline.selection_set);
            },
            Selection::FragmentSpread(_) => (),
        }
    }
}
