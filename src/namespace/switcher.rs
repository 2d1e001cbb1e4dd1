//! Verify, create and commit a namespace change

use log::{debug, warn};

use crate::context::{KubeConfig, SessionContext, SessionContextStore};
use crate::error::{NsError, Result};

use super::directory::NamespaceDirectory;

/// Result of a switch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The current context now uses the namespace and was persisted
    Switched(SessionContext),
    /// The current context already used the namespace; nothing written
    AlreadyCurrent(SessionContext),
    /// There is no current context to update
    NoContext,
    /// The namespace does not exist and quiet mode asked to ignore that
    NotFoundIgnored(String),
}

/// Switches the current context to another namespace
pub struct NamespaceSwitcher<'a, D, S> {
    directory: &'a D,
    store: &'a S,
}

impl<'a, D, S> NamespaceSwitcher<'a, D, S>
where
    D: NamespaceDirectory,
    S: SessionContextStore,
{
    pub fn new(directory: &'a D, store: &'a S) -> Self {
        Self { directory, store }
    }

    /// Make `target` the namespace of the current context.
    ///
    /// `config` is the configuration loaded at the start of the run; it is
    /// written back through the store only when the namespace changes.
    /// Quiet takes priority over create for a missing namespace.
    pub async fn switch(
        &self,
        target: &str,
        config: Option<KubeConfig>,
        create: bool,
        quiet: bool,
    ) -> Result<SwitchOutcome> {
        match self.directory.get(target).await {
            Ok(ns) => debug!("Namespace '{}' exists", ns.name()),
            Err(e) if e.is_not_found() => {
                if quiet {
                    debug!("Namespace '{}' not found, ignoring in quiet mode", target);
                    return Ok(SwitchOutcome::NotFoundIgnored(target.to_string()));
                }
                if !create {
                    return Err(NsError::NamespaceNotFound(target.to_string()));
                }
                self.directory
                    .create(target)
                    .await
                    .map_err(|e| NsError::NamespaceCreate {
                        namespace: target.to_string(),
                        source: Box::new(e),
                    })?;
                debug!("Created namespace '{}'", target);
            }
            Err(e) => {
                return Err(NsError::ClusterQuery {
                    operation: format!("getting namespace {:?}", target),
                    source: Box::new(e),
                })
            }
        }

        let Some(mut config) = config else {
            warn!("No kubeconfig loaded, nothing to update");
            return Ok(SwitchOutcome::NoContext);
        };
        let Some(name) = config.current_context_name().map(str::to_string) else {
            warn!("No current context in kubeconfig, nothing to update");
            return Ok(SwitchOutcome::NoContext);
        };
        let server = config.current_server();
        let Some(ctx) = config.context_mut(&name) else {
            warn!("Current context '{}' not found in kubeconfig", name);
            return Ok(SwitchOutcome::NoContext);
        };

        let session = SessionContext {
            name: name.clone(),
            namespace: Some(target.to_string()),
            server,
        };

        if ctx.namespace.as_deref() == Some(target) {
            debug!("Context '{}' already uses namespace '{}'", name, target);
            return Ok(SwitchOutcome::AlreadyCurrent(session));
        }

        ctx.namespace = Some(target.to_string());
        self.store.persist(&config).map_err(|e| match e {
            NsError::ConfigPersist(_) => e,
            other => NsError::ConfigPersist(other.to_string()),
        })?;
        debug!("Context '{}' now uses namespace '{}'", name, target);

        Ok(SwitchOutcome::Switched(session))
    }
}
