mod document_inputs;
mod generate;
mod validate;

use crate::Cli;
use crate::CommandResult;
pub(crate) use document_inputs::DocumentInputArgs;
pub(crate) use document_inputs::DocumentInputs;
pub(crate) use generate::GenerateCmd;
pub(crate) use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-typed-docs")]
pub(crate) enum CommandEnum {
    /// Generate typed document declarations into an output file.
    Generate(Box<GenerateCmd>),

    /// Check the configuration and fragment resolution without writing
    /// anything.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
