//! Session context management
//!
//! Reads the kubeconfig, resolves the current context and namespace, and
//! writes the file back when the namespace changes.

mod models;
mod resolve;
mod store;

pub use models::{
    ClusterSpec, ContextSpec, KubeConfig, NamedCluster, NamedContext, NamedUser, SessionContext,
    UserSpec,
};
pub use resolve::resolve_current_namespace;
pub use store::{KubeConfigStore, SessionContextStore};
