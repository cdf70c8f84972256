use crate::ast;
use crate::ast_visitor;
use crate::ast_visitor::AstVisitor;
use crate::AggregatedDefinition;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::convert::Infallible;

type FragmentDefs<'a> = IndexMap<&'a str, &'a ast::operation::FragmentDefinition>;

/// Collects the names of the fragments spread by operations and fragments.
///
/// Without a registry only direct spreads are reported. With one, spreads
/// inside spread fragments are followed as well; cycles terminate because
/// each name is visited once.
#[derive(Clone, Copy, Debug, Default)]
pub struct FragmentUsageAnalyzer<'a> {
    registry: Option<&'a FragmentDefs<'a>>,
}

impl<'a> FragmentUsageAnalyzer<'a> {
    pub fn new() -> Self {
        Self { registry: None }
    }

    pub fn with_registry(registry: &'a FragmentDefs<'a>) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    /// Fragment names spread anywhere in `definitions`, in first-encountered
    /// order and without duplicates.
    pub fn collect_in_definitions(
        &self,
        definitions: &[AggregatedDefinition<'_>],
    ) -> Vec<String> {
        let mut collector = SpreadCollector::default();
        for def in definitions {
            let Ok(()) = ast_visitor::walk_definition(
                &mut collector,
                def.definition(),
            );
        }
        self.expand(collector)
    }

    /// Fragment names spread by a single operation.
    pub fn collect_in_operation(
        &self,
        op: &ast::operation::OperationDefinition,
    ) -> Vec<String> {
        let mut collector = SpreadCollector::default();
        let Ok(()) = ast_visitor::walk_operation(&mut collector, op);
        self.expand(collector)
    }

    fn expand(&self, mut collector: SpreadCollector) -> Vec<String> {
        if let Some(registry) = self.registry {
            let mut idx = 0;
            while idx < collector.names.len() {
                let name = collector.names[idx].as_str();
                if let Some(frag) = registry.get(name).copied() {
                    let Ok(()) = ast_visitor::walk_selection_set(
                        &mut collector,
                        &frag.selection_set,
                    );
                }
                idx += 1;
            }
        }
        collector.names.into_iter().collect()
    }
}

#[derive(Debug, Default)]
struct SpreadCollector {
    names: IndexSet<String>,
}

impl AstVisitor for SpreadCollector {
    type Error = Infallible;

    fn visit_fragment_spread(
        &mut self,
        spread: &ast::operation::FragmentSpread,
    ) -> Result<(), Infallible> {
        if !self.names.contains(spread.fragment_name.as_str()) {
            self.names.insert(spread.fragment_name.clone());
        }
        Ok(())
    }
}
