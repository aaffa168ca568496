use clap::Parser;

mod cli;
mod commands;
mod logging;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Schema => lend_dash::schema::run(),
        cli::Command::Example => commands::example::run(),
        cli::Command::Market { source } => commands::market::run(&source),
        cli::Command::Deposit {
            asset,
            amount,
            source,
            send,
        } => commands::deposit::run(&commands::deposit::DepositConfig {
            asset,
            amount,
            source,
            send,
        }),
        cli::Command::LpTokens => commands::lp_tokens::run(),
    }
}
