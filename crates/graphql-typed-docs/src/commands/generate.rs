use crate::commands::DocumentInputArgs;
use crate::commands::DocumentInputs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use std::path::PathBuf;
use typed_document_codegen::GeneratedOutput;
use typed_document_codegen::TypedDocumentGenerator;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[command(flatten)]
    pub inputs: DocumentInputArgs,

    #[arg(
        help="The `.ts` or `.tsx` file to write declarations to.",
        long,
        short='o',
    )]
    pub output: PathBuf,

    #[arg(
        help="Print the declarations instead of writing them to --output.",
        long,
    )]
    pub stdout: bool,
}

#[derive(Debug)]
pub(crate) struct GenerateSummary {
    pub num_documents: usize,
    pub num_skipped: usize,
    pub output: GeneratedOutput,
}

impl GenerateCmd {
    pub(crate) fn execute(&self) -> anyhow::Result<GenerateSummary> {
        let DocumentInputs {
            config,
            documents,
            num_skipped,
        } = self.inputs.load()?;

        typed_document_codegen::validate(&config, &documents, &self.output)?;
        let output = TypedDocumentGenerator::new(config).generate(&documents)?;

        if !self.stdout {
            std::fs::write(&self.output, output.to_file_contents())
                .with_context(|| format!("Failed to write {:?}", self.output))?;
            log::debug!("Wrote declarations to {:?}.", self.output);
        }

        Ok(GenerateSummary {
            num_documents: documents.len(),
            num_skipped,
            output,
        })
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.execute() {
            Ok(summary) if self.stdout => CommandResult::stdout(format_args!(
                "{}",
                summary.output.to_file_contents().trim_end(),
            )),

            Ok(summary) => CommandResult::stdout(format_args!(
                concat!(
                    "{} Generated typed document declarations:\n",
                    "  * Loaded {} documents.\n",
                    "  * Skipped {} non-graphql files.\n",
                    "  * Wrote {:?}.",
                ),
                output_utils::GREEN_CHECK,
                summary.num_documents,
                summary.num_skipped,
                self.output,
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to generate typed document declarations: {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}
