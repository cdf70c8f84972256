use crate::ast;
use crate::ast_visitor;
use crate::ast_visitor::AstVisitor;
use crate::loc::FilePosition;
use crate::AggregatedDefinition;
use crate::AnonymousOperationPolicy;
use crate::DocumentId;
use crate::DocumentLocations;
use crate::DOCUMENT_NODE_LOCAL_NAME;
use crate::GenerateError;
use crate::NameResolver;
use crate::OperationInfo;
use crate::OperationName;
use crate::OperationTypeContext;
use crate::SelectionSetTypePrinter;
use crate::TypedDocumentConfig;
use std::collections::HashMap;

/// Declaration blocks produced by a [`TypeEmitter`], in traversal order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EmittedDeclarations {
    /// One ambient `export const` declaration per fragment definition.
    pub fragments: Vec<String>,
    /// One block per operation: its handle alias and/or module augmentation.
    pub operations: Vec<String>,
}

/// Renders the declarations of every definition of an aggregated document.
#[derive(Debug)]
pub struct TypeEmitter<'a> {
    anonymous_count: usize,
    anonymous_policy: AnonymousOperationPolicy,
    current_document: Option<DocumentId>,
    declared_handles: HashMap<String, FilePosition>,
    emitted: EmittedDeclarations,
    locations: &'a DocumentLocations,
    module_augmentation: bool,
    names: &'a NameResolver,
    printer: &'a dyn SelectionSetTypePrinter,
}

impl<'a> TypeEmitter<'a> {
    pub fn new(
        config: &TypedDocumentConfig,
        names: &'a NameResolver,
        printer: &'a dyn SelectionSetTypePrinter,
        locations: &'a DocumentLocations,
    ) -> Self {
        Self {
            anonymous_count: 0,
            anonymous_policy: config.anonymous_operations,
            current_document: None,
            declared_handles: HashMap::new(),
            emitted: EmittedDeclarations::default(),
            locations,
            module_augmentation: config.module_augmentation,
            names,
            printer,
        }
    }

    pub fn emit(
        mut self,
        definitions: &[AggregatedDefinition<'_>],
    ) -> Result<EmittedDeclarations, GenerateError> {
        for def in definitions {
            self.current_document = Some(def.document_id());
            ast_visitor::walk_definition(&mut self, def.definition())?;
        }

        log::debug!(
            "Emitted {} fragment and {} operation declarations.",
            self.emitted.fragments.len(),
            self.emitted.operations.len(),
        );
        Ok(self.emitted)
    }

    fn current_location(&self) -> Option<&'a str> {
        self.current_document.and_then(|id| self.locations.get(id))
    }
}

impl AstVisitor for TypeEmitter<'_> {
    type Error = GenerateError;

    fn leave_fragment_definition(
        &mut self,
        frag: &ast::operation::FragmentDefinition,
    ) -> Result<(), GenerateError> {
        let type_name = self.names.fragment_type_name(&frag.name);
        let mut block = vec![];
        if let Some(printed) = self.printer.print_fragment_type(frag, &type_name) {
            block.push(printed);
        }
        block.push(format!("export const {}: {type_name};", frag.name));
        self.emitted.fragments.push(block.join("\n"));
        Ok(())
    }

    fn leave_operation(
        &mut self,
        op: &ast::operation::OperationDefinition,
    ) -> Result<(), GenerateError> {
        let info = OperationInfo::from_ast(op);
        let location = self.current_location();
        let position = FilePosition::from_pos(location, info.position);

        let name = match info.name {
            Some(name) => OperationName::Declared(name),
            None => {
                let supported = match self.anonymous_policy {
                    AnonymousOperationPolicy::Reject => false,
                    AnonymousOperationPolicy::ModuleAugmentation => location.is_some(),
                };
                if !supported {
                    return Err(GenerateError::UnsupportedOperation {
                        location: position,
                        policy: self.anonymous_policy,
                    });
                }
                self.anonymous_count += 1;
                OperationName::Anonymous(self.anonymous_count)
            },
        };

        let names = self.names.resolve(info.kind, name);
        log::trace!("Resolved {} {name:?} to {names:?}.", info.kind);

        let ctx = OperationTypeContext {
            names: &names,
            operation: info,
        };
        let mut block = vec![];
        if let Some(printed) = self.printer.print_result_type(&ctx) {
            block.push(printed);
        }
        if info.has_variables()
            && let Some(printed) = self.printer.print_variables_type(&ctx) {
            block.push(printed);
        }

        let handle_type = render_handle_type(
            &names.result_type,
            info.has_variables().then_some(names.variables_type.as_str()),
        );

        match name {
            OperationName::Declared(_) => {
                if let Some(first_location) = self.declared_handles.get(&names.handle) {
                    return Err(GenerateError::DuplicateDocumentName {
                        first_location: first_location.clone(),
                        handle_name: names.handle,
                        second_location: position,
                    });
                }

                block.push(format!("export type {} = {handle_type};", names.handle));
                if self.module_augmentation
                    && let Some(location) = location {
                    block.push(render_module_augmentation(location, &names.handle));
                }
                self.declared_handles.insert(names.handle, position);
            },

            OperationName::Anonymous(_) => {
                if let Some(location) = location {
                    block.push(render_module_augmentation(location, &handle_type));
                }
            },
        }

        self.emitted.operations.push(block.join("\n"));
        Ok(())
    }
}

/// `DocumentNode<Result>` or, when the operation declares variables,
/// `DocumentNode<Result, Variables>`.
pub(crate) fn render_handle_type(
    result_type: &str,
    variables_type: Option<&str>,
) -> String {
    match variables_type {
        Some(variables_type) => {
            format!("{DOCUMENT_NODE_LOCAL_NAME}<{result_type}, {variables_type}>")
        },
        None => format!("{DOCUMENT_NODE_LOCAL_NAME}<{result_type}>"),
    }
}

/// Declares `handle_type` as the default export of the module at `location`.
pub(crate) fn render_module_augmentation(
    location: &str,
    handle_type: &str,
) -> String {
    let specifier = location.replace('\\', "\\\\").replace('\'', "\\'");
    [
        format!("declare module '{specifier}' {{"),
        format!("  const document: {handle_type};"),
        "  export default document;".to_string(),
        "}".to_string(),
    ].join("\n")
}
