use crate::Cli;
use crate::CommandResult;

/// A `graphql-typed-docs` subcommand. Failures are reported through the
/// returned [`CommandResult`] rather than as errors.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
