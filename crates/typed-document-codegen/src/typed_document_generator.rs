use crate::add_typename_to_document;
use crate::loc::FilePosition;
use crate::validation;
use crate::AggregatedDocuments;
use crate::AnonymousOperationPolicy;
use crate::ConfigurationError;
use crate::DocumentFile;
use crate::DocumentHandleImport;
use crate::ExternalTypesPrinter;
use crate::FragmentImportNames;
use crate::FragmentImportResolver;
use crate::FragmentInliner;
use crate::FragmentUsageAnalyzer;
use crate::GeneratedOutput;
use crate::NameResolver;
use crate::SelectionSetOptimizer;
use crate::SelectionSetTypePrinter;
use crate::TypeEmitter;
use crate::TypedDocumentConfig;
use crate::UnresolvedFragmentPolicy;
use std::borrow::Cow;
use thiserror::Error;

type Result<T> = std::result::Result<T, GenerateError>;

/// Generate typed document declarations for `documents` using the default
/// printer and optimizer.
pub fn generate(
    documents: &[DocumentFile],
    config: TypedDocumentConfig,
) -> Result<GeneratedOutput> {
    TypedDocumentGenerator::new(config).generate(documents)
}

/// Turns GraphQL documents into TypeScript declarations binding each
/// operation to a `DocumentNode<Result, Variables>` handle type.
///
/// A generator holds no per-generation state: every call to
/// [`generate()`](Self::generate) starts from scratch, and identical inputs
/// produce identical output.
#[derive(Debug)]
pub struct TypedDocumentGenerator {
    config: TypedDocumentConfig,
    names: NameResolver,
    optimizer: Box<dyn SelectionSetOptimizer>,
    printer: Box<dyn SelectionSetTypePrinter>,
}

impl TypedDocumentGenerator {
    pub fn new(config: TypedDocumentConfig) -> Self {
        Self {
            names: NameResolver::from_config(&config),
            config,
            optimizer: Box::new(FragmentInliner),
            printer: Box::new(ExternalTypesPrinter),
        }
    }

    pub fn config(&self) -> &TypedDocumentConfig {
        &self.config
    }

    pub fn names(&self) -> &NameResolver {
        &self.names
    }

    /// Use `optimizer` instead of [`FragmentInliner`] when
    /// `flattenGeneratedTypes` is enabled.
    pub fn with_optimizer(
        mut self,
        optimizer: impl SelectionSetOptimizer + 'static,
    ) -> Self {
        self.optimizer = Box::new(optimizer);
        self
    }

    /// Use `printer` instead of [`ExternalTypesPrinter`] to print result and
    /// variables types.
    pub fn with_type_printer(
        mut self,
        printer: impl SelectionSetTypePrinter + 'static,
    ) -> Self {
        self.printer = Box::new(printer);
        self
    }

    pub fn generate(&self, documents: &[DocumentFile]) -> Result<GeneratedOutput> {
        let documents = self.prepare_documents(documents);
        let aggregated = AggregatedDocuments::aggregate(
            &documents,
            &self.config.external_fragments,
        );
        if aggregated.is_empty() {
            log::debug!("No definitions to generate declarations for.");
            return Ok(GeneratedOutput::default());
        }

        if self.config.unresolved_fragments == UnresolvedFragmentPolicy::Error {
            validation::check_fragment_resolution(
                &aggregated,
                &self.config.fragment_imports_source_map,
            )?;
        }

        let declarations = TypeEmitter::new(
            &self.config,
            &self.names,
            self.printer.as_ref(),
            aggregated.locations(),
        ).emit(aggregated.definitions())?;

        let handle_import =
            DocumentHandleImport::parse(&self.config.document_type_import_directive)?
                .render(self.config.use_type_imports);

        let local_fragments = aggregated.local_fragment_definitions();
        let used_fragments =
            FragmentUsageAnalyzer::with_registry(&local_fragments)
                .collect_in_definitions(aggregated.definitions());
        let fragment_imports =
            FragmentImportResolver::new(&self.config.fragment_imports_source_map)
                .with_local_fragments(local_fragments.keys().copied())
                .resolve(&used_fragments, |name| match self.config.fragment_import_names {
                    FragmentImportNames::Value => name.to_string(),
                    FragmentImportNames::Type => self.names.fragment_type_name(name),
                })
                .iter()
                .map(|import| import.render(self.config.use_type_imports))
                .collect::<Vec<_>>();
        log::debug!(
            "{} fragments used, {} fragment import statements.",
            used_fragments.len(),
            fragment_imports.len(),
        );

        Ok(GeneratedOutput::assemble(
            vec![handle_import],
            fragment_imports,
            declarations,
        ))
    }

    fn prepare_documents<'d>(
        &self,
        documents: &'d [DocumentFile],
    ) -> Cow<'d, [DocumentFile]> {
        let mut documents = Cow::Borrowed(documents);
        if self.config.flatten_generated_types {
            log::debug!("Flattening fragments with {:?}.", self.optimizer);
            documents = Cow::Owned(self.optimizer.optimize(&documents));
        }
        if self.config.add_typename_to_selection_sets {
            for doc in documents.to_mut().iter_mut() {
                add_typename_to_document(doc.document_mut());
            }
        }
        documents
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(
        "Operations `{handle_name}` at {first_location} and at \
        {second_location} generate the same document name"
    )]
    DuplicateDocumentName {
        first_location: FilePosition,
        handle_name: String,
        second_location: FilePosition,
    },

    #[error("Fragment `{fragment_name}` spread at {location} is not defined locally or in `fragmentImportsSourceMap`")]
    UnresolvedFragment {
        fragment_name: String,
        location: FilePosition,
    },

    #[error("{}", describe_unsupported_operation(.policy, .location))]
    UnsupportedOperation {
        location: FilePosition,
        policy: AnonymousOperationPolicy,
    },
}

fn describe_unsupported_operation(
    policy: &AnonymousOperationPolicy,
    location: &FilePosition,
) -> String {
    match policy {
        AnonymousOperationPolicy::Reject => format!(
            "Anonymous operations are not supported: {location}",
        ),
        AnonymousOperationPolicy::ModuleAugmentation => format!(
            "Anonymous operation at {location} cannot be attached to its \
            source file because the file's location is unknown",
        ),
    }
}
