//! Namespace switching
//!
//! Selects a target namespace, checks it against the cluster, creates it
//! on request, and records it as the current context's namespace.

mod commands;
mod directory;
mod models;
mod report;
mod selector;
mod switcher;

#[cfg(test)]
pub(crate) mod testing;

pub use commands::{run_namespace, run_namespace_command};
pub use directory::NamespaceDirectory;
pub use models::{RunOutcome, RunRequest};
pub use report::{report, Report, ReportLevel};
pub use selector::{NamespacePicker, NamespaceSelector};
pub use switcher::{NamespaceSwitcher, SwitchOutcome};
