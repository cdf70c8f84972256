//! A generic, read-only walk over executable document ASTs.
//!
//! Implementors of [`AstVisitor`] override only the handlers for the node
//! kinds they care about; the `walk_*` functions drive the traversal in
//! document order. Every handler may abort the walk by returning an error.

use crate::ast;

pub trait AstVisitor {
    type Error;

    fn enter_operation(
        &mut self,
        _op: &ast::operation::OperationDefinition,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_operation(
        &mut self,
        _op: &ast::operation::OperationDefinition,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_fragment_definition(
        &mut self,
        _frag: &ast::operation::FragmentDefinition,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_fragment_definition(
        &mut self,
        _frag: &ast::operation::FragmentDefinition,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_field(
        &mut self,
        _field: &ast::operation::Field,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_inline_fragment(
        &mut self,
        _inline: &ast::operation::InlineFragment,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_fragment_spread(
        &mut self,
        _spread: &ast::operation::FragmentSpread,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub fn walk_document<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    document: &ast::operation::Document,
) -> Result<(), V::Error> {
    for def in &document.definitions {
        walk_definition(visitor, def)?;
    }
    Ok(())
}

pub fn walk_definition<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    def: &ast::operation::Definition,
) -> Result<(), V::Error> {
    use ast::operation::Definition as Def;
    match def {
        Def::Operation(op) => walk_operation(visitor, op),
        Def::Fragment(frag) => walk_fragment_definition(visitor, frag),
    }
}

pub fn walk_operation<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    op: &ast::operation::OperationDefinition,
) -> Result<(), V::Error> {
    use ast::operation::OperationDefinition as Op;
    visitor.enter_operation(op)?;
    let selection_set = match op {
        Op::SelectionSet(selection_set) => selection_set,
        Op::Query(query) => &query.selection_set,
        Op::Mutation(mutation) => &mutation.selection_set,
        Op::Subscription(subscription) => &subscription.selection_set,
    };
    walk_selection_set(visitor, selection_set)?;
    visitor.leave_operation(op)
}

pub fn walk_fragment_definition<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    frag: &ast::operation::FragmentDefinition,
) -> Result<(), V::Error> {
    visitor.enter_fragment_definition(frag)?;
    walk_selection_set(visitor, &frag.selection_set)?;
    visitor.leave_fragment_definition(frag)
}

pub fn walk_selection_set<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    selection_set: &ast::operation::SelectionSet,
) -> Result<(), V::Error> {
    use ast::operation::Selection;
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => {
                visitor.visit_field(field)?;
                walk_selection_set(visitor, &field.selection_set)?;
            },

            Selection::InlineFragment(inline) => {
                visitor.visit_inline_fragment(inline)?;
                walk_selection_set(visitor, &inline.selection_set)?;
            },

            Selection::FragmentSpread(spread) => {
                visitor.visit_fragment_spread(spread)?;
            },
        }
    }
    Ok(())
}
