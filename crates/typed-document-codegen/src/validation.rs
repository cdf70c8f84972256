//! Checks that must pass before declarations are generated.

use crate::ast;
use crate::ast_visitor;
use crate::ast_visitor::AstVisitor;
use crate::loc::FilePosition;
use crate::AggregatedDocuments;
use crate::DocumentFile;
use crate::DocumentHandleImport;
use crate::DocumentMode;
use crate::DocumentPolicy;
use crate::GenerateError;
use crate::TypedDocumentConfig;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

const ACCEPTED_OUTPUT_EXTENSIONS: [&str; 2] = ["ts", "tsx"];

/// Validate the configuration and the output target of a generation.
///
/// Hosts must call this before
/// [`TypedDocumentGenerator::generate()`](crate::TypedDocumentGenerator::generate).
pub fn validate(
    config: &TypedDocumentConfig,
    documents: &[DocumentFile],
    output_file: impl AsRef<Path>,
) -> Result<(), ConfigurationError> {
    let output_file = output_file.as_ref();

    if config.document_mode == DocumentMode::String {
        return Err(ConfigurationError::DisallowedDocumentMode {
            document_mode: config.document_mode,
        });
    }

    let has_accepted_extension =
        output_file.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ACCEPTED_OUTPUT_EXTENSIONS.contains(&ext));
    if !has_accepted_extension {
        return Err(ConfigurationError::InvalidOutputExtension {
            output_file: output_file.to_path_buf(),
        });
    }

    if config.document_policy == DocumentPolicy::Single && documents.len() > 1 {
        return Err(ConfigurationError::TooManyDocuments {
            num_documents: documents.len(),
        });
    }

    DocumentHandleImport::parse(&config.document_type_import_directive)?;

    log::debug!("Configuration for {output_file:?} is valid.");
    Ok(())
}

/// Fail if any fragment spread in `aggregated` refers to a fragment that is
/// neither available in the aggregated documents (locally or externally) nor
/// listed in `source_map`.
pub fn check_fragment_resolution(
    aggregated: &AggregatedDocuments<'_>,
    source_map: &IndexMap<String, String>,
) -> Result<(), GenerateError> {
    for def in aggregated.definitions() {
        let mut checker = ResolutionChecker {
            aggregated,
            location: aggregated.location_of(def.document_id()),
            source_map,
        };
        ast_visitor::walk_definition(&mut checker, def.definition())?;
    }
    Ok(())
}

struct ResolutionChecker<'a, 'doc> {
    aggregated: &'a AggregatedDocuments<'doc>,
    location: Option<&'a str>,
    source_map: &'a IndexMap<String, String>,
}

impl AstVisitor for ResolutionChecker<'_, '_> {
    type Error = GenerateError;

    fn visit_fragment_spread(
        &mut self,
        spread: &ast::operation::FragmentSpread,
    ) -> Result<(), GenerateError> {
        let name = spread.fragment_name.as_str();
        if self.aggregated.has_fragment(name) || self.source_map.contains_key(name) {
            return Ok(());
        }

        Err(GenerateError::UnresolvedFragment {
            fragment_name: name.to_string(),
            location: FilePosition::from_pos(self.location, spread.position),
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error(
        "`documentMode: {document_mode:?}` is not supported when generating \
        typed document declarations"
    )]
    DisallowedDocumentMode {
        document_mode: DocumentMode,
    },

    #[error(
        "Invalid `documentTypeImportDirective` `{directive}`; expected \
        `module` or `module#Symbol`"
    )]
    InvalidImportDirective {
        directive: String,
    },

    #[error(
        "Typed document declarations require an output file ending in `.ts` \
        or `.tsx`, but got {output_file:?}"
    )]
    InvalidOutputExtension {
        output_file: PathBuf,
    },

    #[error(
        "`documentPolicy: single` accepts at most one document, but \
        {num_documents} were supplied"
    )]
    TooManyDocuments {
        num_documents: usize,
    },
}
