use crate::config_loader;
use crate::document_discovery;
use anyhow::Context;
use std::path::PathBuf;
use typed_document_codegen::DocumentFile;
use typed_document_codegen::TypedDocumentConfig;

/// Arguments shared by every command that loads GraphQL documents.
#[derive(Debug, clap::Args)]
pub(crate) struct DocumentInputArgs {
    #[arg(
        help="Path to a TOML file with the generator configuration.",
        long,
    )]
    pub config: Option<PathBuf>,

    #[arg(
        help="Overrides `documentTypeImportDirective` from the config file \
             (`module` or `module#Symbol`).",
        long,
    )]
    pub document_type_import_directive: Option<String>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL operations and fragments.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub file_or_dir_paths: Vec<PathBuf>,
}

/// The configuration and parsed documents a command operates on.
#[derive(Debug)]
pub(crate) struct DocumentInputs {
    pub config: TypedDocumentConfig,
    pub documents: Vec<DocumentFile>,
    pub num_skipped: usize,
}

impl DocumentInputArgs {
    pub(crate) fn load(&self) -> anyhow::Result<DocumentInputs> {
        let mut config = config_loader::load_config(self.config.as_deref())?;
        if let Some(directive) = &self.document_type_import_directive {
            log::debug!("Overriding `documentTypeImportDirective` with `{directive}`.");
            config.document_type_import_directive = directive.to_owned();
        }

        let discovered = document_discovery::discover_graphql_files(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        );
        if let Some(err) = discovered.errors.into_iter().next() {
            return Err(err).context("Failed to scan input paths");
        }

        let documents =
            discovered.file_paths
                .iter()
                .map(|path| {
                    DocumentFile::from_file(path)
                        .with_context(|| format!("Failed to load {path:?}"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
        log::debug!("Loaded {} GraphQL documents.", documents.len());

        Ok(DocumentInputs {
            config,
            documents,
            num_skipped: discovered.num_skipped,
        })
    }
}
