mod chart;
mod credits;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "urania", author, version, about = "Natal charts and the credit ledger")]
struct Args {
    /// Ledger file (otherwise from configs/urania.toml).
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate a birth chart and print it as JSON.
    Chart(chart::ChartArgs),
    /// Inspect or adjust the credit balance.
    Credits {
        #[command(subcommand)]
        action: credits::CreditsAction,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut settings = urania_config::load_settings()?;
    if let Some(path) = args.ledger {
        settings.ledger_path = path;
    }

    let mut stdout = std::io::stdout().lock();
    match args.command {
        Command::Chart(chart_args) => chart::run(&chart_args, &settings, &mut stdout),
        Command::Credits { action } => credits::run(&action, &settings, &mut stdout),
    }
}
