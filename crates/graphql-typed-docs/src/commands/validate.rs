use crate::commands::DocumentInputArgs;
use crate::commands::DocumentInputs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;
use typed_document_codegen::AggregatedDocuments;
use typed_document_codegen::UnresolvedFragmentPolicy;
use typed_document_codegen::validation;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    pub inputs: DocumentInputArgs,

    #[arg(
        help="The `.ts` or `.tsx` file declarations would be written to.",
        long,
        short='o',
    )]
    pub output: PathBuf,
}

#[derive(Debug)]
pub(crate) struct ValidateSummary {
    pub num_definitions: usize,
    pub num_documents: usize,
    pub num_skipped: usize,
}

impl ValidateCmd {
    pub(crate) fn execute(&self) -> anyhow::Result<ValidateSummary> {
        let DocumentInputs {
            config,
            documents,
            num_skipped,
        } = self.inputs.load()?;

        validation::validate(&config, &documents, &self.output)?;

        let aggregated =
            AggregatedDocuments::aggregate(&documents, &config.external_fragments);
        if config.unresolved_fragments == UnresolvedFragmentPolicy::Error {
            validation::check_fragment_resolution(
                &aggregated,
                &config.fragment_imports_source_map,
            )?;
        }

        Ok(ValidateSummary {
            num_definitions: aggregated.definitions().len(),
            num_documents: documents.len(),
            num_skipped,
        })
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.execute() {
            Ok(summary) => CommandResult::stdout(format_args!(
                concat!(
                    "{} All GraphQL documents validated successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-graphql files.\n",
                    "  * Validated {} definitions.",
                ),
                output_utils::GREEN_CHECK,
                summary.num_documents,
                summary.num_skipped,
                summary.num_definitions,
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} GraphQL validation errors: {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}
