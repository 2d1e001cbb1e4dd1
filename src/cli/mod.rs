//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::config::defaults;
use crate::namespace::RunRequest;

const AFTER_HELP: &str = "\
Examples:
  # view the current namespace
  nsctl -b

  # interactively select the namespace to switch to
  nsctl

  # change the current namespace to 'cheese'
  nsctl cheese

  # change the current namespace to 'brie' creating it if necessary
  nsctl --create brie";

/// View or change the current namespace context in the current Kubernetes cluster
#[derive(Parser, Debug)]
#[command(name = "nsctl")]
#[command(version)]
#[command(
    about = "View or change the current namespace context in the current Kubernetes cluster",
    long_about = None
)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Namespace to switch to (omit to pick one interactively)
    pub namespace: Option<String>,

    /// Create the namespace if it does not exist
    #[arg(short, long, default_value_t = false)]
    pub create: bool,

    /// Do not fail if the namespace does not exist
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Never prompt; just report the current namespace when none is given
    #[arg(short, long, default_value_t = false)]
    pub batch_mode: bool,

    /// Path to the kubeconfig file (overrides KUBECONFIG)
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "NSCTL_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

impl From<&Cli> for RunRequest {
    fn from(cli: &Cli) -> Self {
        Self {
            namespace: cli.namespace.clone(),
            create: cli.create,
            quiet: cli.quiet,
            batch_mode: cli.batch_mode,
        }
    }
}
