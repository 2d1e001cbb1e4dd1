//! Current namespace resolution

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::{defaults, in_cluster};

use super::models::KubeConfig;

/// Resolve the namespace the session currently uses:
/// 1. namespace of the current kubeconfig context
/// 2. service account namespace when running inside a pod
/// 3. `default`
pub fn resolve_current_namespace(config: Option<&KubeConfig>) -> String {
    resolve_current_namespace_with(config, Path::new(in_cluster::NAMESPACE_PATH))
}

pub(crate) fn resolve_current_namespace_with(
    config: Option<&KubeConfig>,
    service_account_namespace: &Path,
) -> String {
    let from_context = config
        .and_then(KubeConfig::current)
        .and_then(|ctx| ctx.namespace.as_deref())
        .filter(|ns| !ns.is_empty());
    if let Some(ns) = from_context {
        debug!("Using namespace from current context: {}", ns);
        return ns.to_string();
    }

    if let Ok(content) = fs::read_to_string(service_account_namespace) {
        let ns = content.trim();
        if !ns.is_empty() {
            debug!(
                "Using namespace from service account file {}: {}",
                service_account_namespace.display(),
                ns
            );
            return ns.to_string();
        }
    }

    defaults::NAMESPACE.to_string()
}
