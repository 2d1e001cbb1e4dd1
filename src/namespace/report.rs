//! User-facing result messages

use std::fmt;

use super::models::RunOutcome;
use super::switcher::SwitchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warn,
}

/// Final message of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

impl Report {
    pub fn info(message: String) -> Self {
        Self {
            level: ReportLevel::Info,
            message,
        }
    }

    pub fn warn(message: String) -> Self {
        Self {
            level: ReportLevel::Warn,
            message,
        }
    }

    /// Info goes to stdout, warnings to stderr
    pub fn print(&self) {
        match self.level {
            ReportLevel::Info => println!("{}", self.message),
            ReportLevel::Warn => eprintln!("WARNING: {}", self.message),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Build the report for a run outcome
pub fn report(outcome: &RunOutcome) -> Report {
    match outcome {
        RunOutcome::Switch(SwitchOutcome::Switched(ctx)) => Report::info(format!(
            "Now using namespace '{}' on server '{}'.",
            ctx.namespace.as_deref().unwrap_or_default(),
            ctx.server
        )),
        RunOutcome::Switch(SwitchOutcome::AlreadyCurrent(ctx)) => from_context(
            ctx.namespace.as_deref().unwrap_or_default(),
            &ctx.name,
            &ctx.server,
        ),
        RunOutcome::Switch(SwitchOutcome::NoContext) => Report::warn(
            "there is no context defined in your Kubernetes configuration - we may be inside a test case or pod?"
                .to_string(),
        ),
        RunOutcome::Switch(SwitchOutcome::NotFoundIgnored(ns)) => {
            Report::info(format!("namespace {} does not exist yet", ns))
        }
        RunOutcome::Kept {
            namespace,
            context_name: Some(context_name),
            server,
            has_config: true,
        } => from_context(namespace, context_name, server),
        RunOutcome::Kept {
            namespace, server, ..
        } => Report::info(format!(
            "Using namespace '{}' on server '{}'. No context - probably a unit test or pod?",
            namespace, server
        )),
    }
}

fn from_context(namespace: &str, context_name: &str, server: &str) -> Report {
    Report::info(format!(
        "Using namespace '{}' from context named '{}' on server '{}'.",
        namespace, context_name, server
    ))
}
