//! In-memory collaborators for exercising the core without a cluster

use std::cell::{Cell, RefCell};

use crate::context::{KubeConfig, SessionContextStore};
use crate::error::{ClusterErrorKind, NsError, Result};
use crate::kube::Namespace;

use super::directory::NamespaceDirectory;
use super::selector::NamespacePicker;

/// In-memory directory that counts calls
#[derive(Default)]
pub struct FakeDirectory {
    pub names: Vec<String>,
    pub fail_list: bool,
    pub fail_get: Option<ClusterErrorKind>,
    pub fail_create: bool,
    pub list_calls: Cell<usize>,
    pub get_calls: Cell<usize>,
    pub created: RefCell<Vec<String>>,
}

impl FakeDirectory {
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl NamespaceDirectory for FakeDirectory {
    async fn list(&self) -> Result<Vec<String>> {
        self.list_calls.set(self.list_calls.get() + 1);
        if self.fail_list {
            return Err(NsError::Cluster {
                kind: ClusterErrorKind::Other,
                status: 403,
                message: "forbidden".to_string(),
            });
        }
        let mut names = self.names.clone();
        names.sort();
        Ok(names)
    }

    async fn get(&self, name: &str) -> Result<Namespace> {
        self.get_calls.set(self.get_calls.get() + 1);
        if let Some(kind) = self.fail_get {
            return Err(NsError::Cluster {
                kind,
                status: if kind == ClusterErrorKind::NotFound { 404 } else { 500 },
                message: format!("namespaces \"{}\" unavailable", name),
            });
        }
        if self.names.iter().any(|n| n == name) {
            Ok(Namespace::new(name))
        } else {
            Err(NsError::Cluster {
                kind: ClusterErrorKind::NotFound,
                status: 404,
                message: format!("namespaces \"{}\" not found", name),
            })
        }
    }

    async fn create(&self, name: &str) -> Result<()> {
        self.created.borrow_mut().push(name.to_string());
        if self.fail_create {
            return Err(NsError::Cluster {
                kind: ClusterErrorKind::Other,
                status: 403,
                message: "cannot create namespaces".to_string(),
            });
        }
        Ok(())
    }
}

/// Picker that records what it was shown
#[derive(Default)]
pub struct FakePicker {
    pub choice: Option<String>,
    pub shown: RefCell<Option<(Vec<String>, String)>>,
}

impl NamespacePicker for FakePicker {
    fn pick_with_default(
        &self,
        options: &[String],
        _prompt: &str,
        default: &str,
        _help: &str,
    ) -> Result<String> {
        *self.shown.borrow_mut() = Some((options.to_vec(), default.to_string()));
        self.choice
            .clone()
            .ok_or_else(|| NsError::Config("interrupted".to_string()))
    }
}

/// Store that keeps every persisted config
#[derive(Default)]
pub struct FakeStore {
    pub config: Option<KubeConfig>,
    pub fail_persist: bool,
    pub persisted: RefCell<Vec<KubeConfig>>,
}

impl SessionContextStore for FakeStore {
    fn load(&self) -> Result<Option<KubeConfig>> {
        Ok(self.config.clone())
    }

    fn persist(&self, config: &KubeConfig) -> Result<()> {
        if self.fail_persist {
            return Err(NsError::Config("read-only file system".to_string()));
        }
        self.persisted.borrow_mut().push(config.clone());
        Ok(())
    }
}

/// Kubeconfig with one current context `ctx` on `https://k8s.example.com`
pub fn kubeconfig_with_namespace(namespace: Option<&str>) -> KubeConfig {
    use crate::context::{ClusterSpec, ContextSpec, NamedCluster, NamedContext};

    KubeConfig {
        current_context: Some("ctx".to_string()),
        contexts: vec![
            NamedContext {
                name: "ctx".to_string(),
                context: ContextSpec {
                    cluster: "main".to_string(),
                    user: "admin".to_string(),
                    namespace: namespace.map(str::to_string),
                    ..Default::default()
                },
            },
            NamedContext {
                name: "other".to_string(),
                context: ContextSpec {
                    cluster: "main".to_string(),
                    user: "admin".to_string(),
                    namespace: Some("untouched".to_string()),
                    ..Default::default()
                },
            },
        ],
        clusters: vec![NamedCluster {
            name: "main".to_string(),
            cluster: ClusterSpec {
                server: "https://k8s.example.com".to_string(),
                ..Default::default()
            },
        }],
        ..Default::default()
    }
}
