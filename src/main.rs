//! nsctl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use nsctl::{run_namespace_command, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting nsctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: namespace={:?}, create={}, quiet={}, batch_mode={}, kubeconfig={:?}",
        cli.namespace, cli.create, cli.quiet, cli.batch_mode, cli.kubeconfig
    );

    match run_namespace_command(&cli).await {
        Ok(report) => {
            report.print();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
