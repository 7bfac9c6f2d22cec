use bstart_cli::{cli::Cli, logging, run, settings};
use clap::{CommandFactory, Parser};
use tracing::error;

#[tokio::main]
async fn main() {
    // Bare invocation prints help instead of silently launching nothing
    if std::env::args().len() == 1 {
        let _ = Cli::command().print_help();
        return;
    }

    let cli = Cli::parse();
    let log_dir = settings::log_dir();
    let _guard = logging::init_logging(cli.verbose, log_dir.as_deref());

    if let Err(err) = run::run(cli).await {
        error!(target = "bstart", error = %err, "run failed");
        std::process::exit(1);
    }
}
