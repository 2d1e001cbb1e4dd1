//! Kubeconfig data models
//!
//! Only the fields this tool reads are typed. Everything else is kept in
//! `extra` maps so a load/persist cycle does not drop keys written by
//! other tools.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

type Extra = BTreeMap<String, serde_yml::Value>;

/// Treat an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level kubeconfig document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubeConfig {
    /// Name of the currently active context
    #[serde(
        rename = "current-context",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub current_context: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contexts: Vec<NamedContext>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clusters: Vec<NamedCluster>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<NamedUser>,
    /// apiVersion, kind, preferences and anything else
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedContext {
    pub name: String,
    pub context: ContextSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextSpec {
    #[serde(default)]
    pub cluster: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCluster {
    pub name: String,
    pub cluster: ClusterSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterSpec {
    #[serde(default)]
    pub server: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_authority_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure_skip_tls_verify: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedUser {
    pub name: String,
    #[serde(default)]
    pub user: UserSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(
        rename = "tokenFile",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub token_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_certificate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_certificate_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key_data: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Snapshot of the current session: context name, namespace and server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub name: String,
    pub namespace: Option<String>,
    pub server: String,
}

impl KubeConfig {
    /// Current context name; an empty string counts as unset
    pub fn current_context_name(&self) -> Option<&str> {
        self.current_context.as_deref().filter(|name| !name.is_empty())
    }

    pub fn context(&self, name: &str) -> Option<&ContextSpec> {
        self.contexts
            .iter()
            .find(|ctx| ctx.name == name)
            .map(|ctx| &ctx.context)
    }

    pub fn context_mut(&mut self, name: &str) -> Option<&mut ContextSpec> {
        self.contexts
            .iter_mut()
            .find(|ctx| ctx.name == name)
            .map(|ctx| &mut ctx.context)
    }

    pub fn cluster(&self, name: &str) -> Option<&ClusterSpec> {
        self.clusters
            .iter()
            .find(|cls| cls.name == name)
            .map(|cls| &cls.cluster)
    }

    pub fn user(&self, name: &str) -> Option<&UserSpec> {
        self.users
            .iter()
            .find(|usr| usr.name == name)
            .map(|usr| &usr.user)
    }

    /// The current context, if it is set and present in `contexts`
    pub fn current(&self) -> Option<&ContextSpec> {
        self.context(self.current_context_name()?)
    }

    /// Server of the cluster a context points at (empty if unknown)
    pub fn server_for(&self, ctx: &ContextSpec) -> String {
        self.cluster(&ctx.cluster)
            .map(|cls| cls.server.clone())
            .unwrap_or_default()
    }

    /// Server of the current context (empty if unknown)
    pub fn current_server(&self) -> String {
        self.current()
            .map(|ctx| self.server_for(ctx))
            .unwrap_or_default()
    }

    /// Resolve the current context into a session snapshot
    pub fn current_session(&self) -> Option<SessionContext> {
        let name = self.current_context_name()?;
        let ctx = self.context(name)?;
        Some(SessionContext {
            name: name.to_string(),
            namespace: ctx.namespace.clone(),
            server: self.server_for(ctx),
        })
    }
}
