//! Target namespace selection

use log::debug;

use crate::config::picker;
use crate::error::{NsError, Result};

use super::directory::NamespaceDirectory;
use super::models::RunRequest;

/// Interactive single-choice prompt
pub trait NamespacePicker {
    /// Let the user pick one of `options`, pre-selecting `default`
    fn pick_with_default(
        &self,
        options: &[String],
        prompt: &str,
        default: &str,
        help: &str,
    ) -> Result<String>;
}

/// Decides which namespace a run targets
pub struct NamespaceSelector<'a, D, P> {
    directory: &'a D,
    picker: &'a P,
}

impl<'a, D, P> NamespaceSelector<'a, D, P>
where
    D: NamespaceDirectory,
    P: NamespacePicker,
{
    pub fn new(directory: &'a D, picker: &'a P) -> Self {
        Self { directory, picker }
    }

    /// Resolve the target namespace.
    ///
    /// An empty string means "keep the current namespace".
    pub async fn resolve(&self, request: &RunRequest, current_namespace: &str) -> Result<String> {
        if let Some(ns) = request.explicit_namespace() {
            debug!("Using namespace from command line: {}", ns);
            return Ok(ns.to_string());
        }

        if request.batch_mode {
            debug!("Batch mode without a namespace argument, keeping current namespace");
            return Ok(String::new());
        }

        let names = self
            .directory
            .list()
            .await
            .map_err(|e| NsError::ClusterQuery {
                operation: "retrieving the names of the namespaces".to_string(),
                source: Box::new(e),
            })?;

        match names.as_slice() {
            [] => {
                debug!("No namespaces found on the cluster");
                Ok(String::new())
            }
            [only] => {
                debug!("Only one namespace available: {}", only);
                Ok(only.clone())
            }
            _ => self
                .picker
                .pick_with_default(&names, picker::PROMPT, current_namespace, picker::HELP)
                .map_err(|e| match e {
                    NsError::Selection(_) => e,
                    other => NsError::Selection(other.to_string()),
                }),
        }
    }
}
