use clap::CommandFactory;
use crate::commands;

/// Generate TypeScript typed-document-node declarations from GraphQL
/// operations and fragments.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-typed-docs", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable debug logging (overrides the LOG_LEVEL environment \
             variable).",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
