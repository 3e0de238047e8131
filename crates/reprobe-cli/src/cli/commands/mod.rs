use super::args::{Cli, Command};

pub(crate) mod rank;
pub(crate) mod report;
pub(crate) mod run;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args).await,
        Command::Rank(args) => rank::run(args),
        Command::Report(args) => report::run(args),
    }
}
