//! Generates TypeScript declarations that bind GraphQL operations to
//! strongly-typed document handles (`TypedDocumentNode<Result, Variables>`).
//!
//! The generated output contains only type-level constructs (`export type`
//! aliases, ambient `export const` declarations and `declare module` blocks),
//! so it is erased entirely at compile time.
//!
//! ```
//! use typed_document_codegen::DocumentFile;
//! use typed_document_codegen::TypedDocumentConfig;
//! use typed_document_codegen::TypedDocumentGenerator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let documents = vec![
//!     DocumentFile::from_str(None, "query GetJobs { jobs { title } }")?,
//! ];
//! let output =
//!     TypedDocumentGenerator::new(TypedDocumentConfig::default())
//!         .generate(&documents)?;
//! assert_eq!(
//!     output.content,
//!     "export type GetJobsDocument = DocumentNode<GetJobsQuery>;",
//! );
//! # Ok(())
//! # }
//! ```

pub mod ast;
pub mod ast_visitor;
mod config;
mod document_aggregator;
mod document_file;
mod document_handle_import;
mod fragment_import_resolver;
mod fragment_usage;
pub mod loc;
mod name_resolver;
mod operation_kind;
mod output_assembler;
mod selection_set_optimizer;
mod selection_set_type_printer;
mod type_emitter;
mod typed_document_generator;
mod typename_injector;
pub mod validation;

pub use config::AnonymousOperationPolicy;
pub use config::DocumentMode;
pub use config::DocumentPolicy;
pub use config::FragmentImportNames;
pub use config::OperationSuffixes;
pub use config::TypedDocumentConfig;
pub use config::UnresolvedFragmentPolicy;
pub use document_aggregator::AggregatedDefinition;
pub use document_aggregator::AggregatedDocuments;
pub use document_aggregator::DocumentId;
pub use document_aggregator::DocumentLocations;
pub use document_aggregator::LoadedFragment;
pub use document_file::DocumentFile;
pub use document_file::DocumentLoadError;
pub use document_handle_import::DEFAULT_DOCUMENT_TYPE_IMPORT;
pub use document_handle_import::DOCUMENT_NODE_LOCAL_NAME;
pub use document_handle_import::DocumentHandleImport;
pub use fragment_import_resolver::FragmentImport;
pub use fragment_import_resolver::FragmentImportResolver;
pub use fragment_usage::FragmentUsageAnalyzer;
pub use name_resolver::NameResolver;
pub use name_resolver::NamingConvention;
pub use name_resolver::OperationName;
pub use name_resolver::OperationNames;
pub use operation_kind::OperationInfo;
pub use operation_kind::OperationKind;
pub use output_assembler::GeneratedOutput;
pub use selection_set_optimizer::FragmentInliner;
pub use selection_set_optimizer::SelectionSetOptimizer;
pub use selection_set_type_printer::ExternalTypesPrinter;
pub use selection_set_type_printer::OperationTypeContext;
pub use selection_set_type_printer::SelectionSetTypePrinter;
pub use type_emitter::EmittedDeclarations;
pub use type_emitter::TypeEmitter;
pub use typed_document_generator::GenerateError;
pub use typed_document_generator::TypedDocumentGenerator;
pub use typed_document_generator::generate;
pub use typename_injector::add_typename_to_document;
pub use validation::ConfigurationError;
pub use validation::validate;

#[cfg(test)]
mod tests;
