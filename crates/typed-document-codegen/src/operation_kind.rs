use crate::ast;

/// The kind of a GraphQL operation definition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

impl OperationKind {
    /// The keyword as written in a GraphQL document (e.g. `query`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// The capitalized kind word used as the default operation suffix (e.g.
    /// `Query`).
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A uniform view over the four shapes of
/// [`OperationDefinition`](ast::operation::OperationDefinition).
///
/// The shorthand `{ ... }` form is an anonymous query without variables.
#[derive(Clone, Copy, Debug)]
pub struct OperationInfo<'ast> {
    pub kind: OperationKind,
    pub name: Option<&'ast str>,
    pub position: ast::AstPos,
    pub selection_set: &'ast ast::operation::SelectionSet,
    pub variable_definitions: &'ast [ast::operation::VariableDefinition],
}

impl<'ast> OperationInfo<'ast> {
    pub fn from_ast(def: &'ast ast::operation::OperationDefinition) -> Self {
        use ast::operation::OperationDefinition as Op;
        match def {
            Op::SelectionSet(selection_set) => Self {
                kind: OperationKind::Query,
                name: None,
                position: selection_set.span.0,
                selection_set,
                variable_definitions: &[],
            },

            Op::Query(query) => Self {
                kind: OperationKind::Query,
                name: query.name.as_deref(),
                position: query.position,
                selection_set: &query.selection_set,
                variable_definitions: &query.variable_definitions,
            },

            Op::Mutation(mutation) => Self {
                kind: OperationKind::Mutation,
                name: mutation.name.as_deref(),
                position: mutation.position,
                selection_set: &mutation.selection_set,
                variable_definitions: &mutation.variable_definitions,
            },

            Op::Subscription(subscription) => Self {
                kind: OperationKind::Subscription,
                name: subscription.name.as_deref(),
                position: subscription.position,
                selection_set: &subscription.selection_set,
                variable_definitions: &subscription.variable_definitions,
            },
        }
    }

    pub fn has_variables(&self) -> bool {
        !self.variable_definitions.is_empty()
    }
}

pub(crate) fn selection_set_mut(
    op: &mut ast::operation::OperationDefinition,
) -> &mut ast::operation::SelectionSet {
    use ast::operation::OperationDefinition as Op;
    match op {
        Op::SelectionSet(selection_set) => selection_set,
        Op::Query(query) => &mut query.selection_set,
        Op::Mutation(mutation) => &mut mutation.selection_set,
        Op::Subscription(subscription) => &mut subscription.selection_set,
    }
}
