//! Inputs and outcomes of a single namespace run

use super::switcher::SwitchOutcome;

/// Input to one invocation, shaped from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRequest {
    /// Namespace given on the command line, if any
    pub namespace: Option<String>,
    /// Create the namespace when it does not exist
    pub create: bool,
    /// Treat a missing namespace as a successful no-op
    pub quiet: bool,
    /// Never prompt
    pub batch_mode: bool,
}

impl RunRequest {
    /// The explicit namespace argument, ignoring empty strings
    pub fn explicit_namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }
}

/// What a run ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The switcher ran
    Switch(SwitchOutcome),
    /// No target, or the target is already the current namespace
    Kept {
        namespace: String,
        context_name: Option<String>,
        server: String,
        has_config: bool,
    },
}
