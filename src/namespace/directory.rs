//! Cluster-side namespace lookup

use crate::error::Result;
use crate::kube::Namespace;

/// Queries and creates namespaces on the cluster.
///
/// Failures from `get` must carry a [`ClusterErrorKind`] so callers can
/// tell a missing namespace from any other error without knowing the
/// backend.
///
/// [`ClusterErrorKind`]: crate::error::ClusterErrorKind
#[allow(async_fn_in_trait)]
pub trait NamespaceDirectory {
    /// All namespace names, sorted lexicographically
    async fn list(&self) -> Result<Vec<String>>;

    /// Fetch one namespace
    async fn get(&self, name: &str) -> Result<Namespace>;

    /// Create a namespace
    async fn create(&self, name: &str) -> Result<()>;
}
