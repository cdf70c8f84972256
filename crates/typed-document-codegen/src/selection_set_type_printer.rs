use crate::ast;
use crate::OperationInfo;
use crate::OperationNames;

/// Everything a [`SelectionSetTypePrinter`] gets to know about the operation
/// whose types it prints.
#[derive(Clone, Copy, Debug)]
pub struct OperationTypeContext<'a> {
    pub names: &'a OperationNames,
    pub operation: OperationInfo<'a>,
}

/// Prints the TypeScript declarations of result and variables types.
///
/// The generator only references result/variables types by name. When those
/// types are declared elsewhere (typically by a sibling plugin writing into
/// the same file), use [`ExternalTypesPrinter`]. Otherwise a printer returns
/// the declaration text, which is emitted right before the declaration that
/// references it.
pub trait SelectionSetTypePrinter: std::fmt::Debug + Send + Sync {
    fn print_result_type(
        &self,
        _ctx: &OperationTypeContext<'_>,
    ) -> Option<String> {
        None
    }

    /// Only called for operations that declare at least one variable.
    fn print_variables_type(
        &self,
        _ctx: &OperationTypeContext<'_>,
    ) -> Option<String> {
        None
    }

    fn print_fragment_type(
        &self,
        _fragment: &ast::operation::FragmentDefinition,
        _type_name: &str,
    ) -> Option<String> {
        None
    }
}

/// A printer for result and variables types that are declared outside of the
/// generated output. Prints nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExternalTypesPrinter;

impl SelectionSetTypePrinter for ExternalTypesPrinter {}
