//! nsctl - View or change the current Kubernetes namespace
//!
//! Reads the kubeconfig, optionally lets the user pick a namespace from the
//! cluster, verifies it exists (creating it on request), and records it as
//! the namespace of the current context.
//!
//! # Example
//!
//! ```bash
//! # Show the current namespace
//! nsctl -b
//!
//! # Pick a namespace interactively
//! nsctl
//!
//! # Switch to a namespace, creating it when missing
//! nsctl --create brie
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod kube;
pub mod namespace;
pub mod ui;

pub use cli::Cli;
pub use context::{
    resolve_current_namespace, KubeConfig, KubeConfigStore, SessionContext, SessionContextStore,
};
pub use error::{ClusterErrorKind, NsError, Result};
pub use kube::{KubeClient, Namespace};
pub use namespace::{
    report, run_namespace, run_namespace_command, NamespaceDirectory, NamespacePicker,
    NamespaceSelector, NamespaceSwitcher, Report, ReportLevel, RunOutcome, RunRequest,
    SwitchOutcome,
};
