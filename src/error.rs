use std::fmt;

/// Classification of a cluster API failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterErrorKind {
    /// The requested object does not exist
    NotFound,
    /// Anything else (transport, auth, server errors)
    Other,
}

/// Custom error type for namespace operations
#[derive(Debug)]
pub enum NsError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Cluster API returned a non-success response
    Cluster {
        kind: ClusterErrorKind,
        status: u16,
        message: String,
    },
    /// Listing or getting namespaces failed
    ClusterQuery {
        operation: String,
        source: Box<NsError>,
    },
    /// Namespace does not exist and creation was not requested
    NamespaceNotFound(String),
    /// Creating a missing namespace failed
    NamespaceCreate {
        namespace: String,
        source: Box<NsError>,
    },
    /// Writing the kubeconfig back failed
    ConfigPersist(String),
    /// Interactive selection failed or was cancelled
    Selection(String),
    /// Kubeconfig or client configuration error
    Config(String),
    /// YAML error
    Yaml(String),
}

impl NsError {
    /// Classify this error for not-found handling.
    ///
    /// Only a cluster response can be `NotFound`; transport and local
    /// failures are always `Other`.
    pub fn kind(&self) -> ClusterErrorKind {
        match self {
            NsError::Cluster { kind, .. } => *kind,
            _ => ClusterErrorKind::Other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ClusterErrorKind::NotFound
    }
}

impl fmt::Display for NsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NsError::Http(e) => write!(f, "HTTP request failed: {}", e),
            NsError::Cluster {
                status, message, ..
            } => write!(f, "cluster error (status {}): {}", status, message),
            NsError::ClusterQuery { operation, source } => write!(f, "{}: {}", operation, source),
            NsError::NamespaceNotFound(ns) => write!(f, "namespace '{}' not found", ns),
            NsError::NamespaceCreate { namespace, source } => {
                write!(f, "unable to create namespace {}: {}", namespace, source)
            }
            NsError::ConfigPersist(msg) => write!(f, "failed to update the kube config: {}", msg),
            NsError::Selection(msg) => write!(f, "picking the namespace: {}", msg),
            NsError::Config(msg) => write!(f, "Configuration error: {}", msg),
            NsError::Yaml(msg) => write!(f, "YAML error: {}", msg),
        }
    }
}

impl std::error::Error for NsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NsError::Http(e) => Some(e),
            NsError::ClusterQuery { source, .. } => Some(source.as_ref()),
            NsError::NamespaceCreate { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NsError {
    fn from(err: reqwest::Error) -> Self {
        NsError::Http(err)
    }
}

impl From<serde_yml::Error> for NsError {
    fn from(err: serde_yml::Error) -> Self {
        NsError::Yaml(err.to_string())
    }
}

impl From<std::io::Error> for NsError {
    fn from(err: std::io::Error) -> Self {
        NsError::Config(err.to_string())
    }
}

/// Result type alias for namespace operations
pub type Result<T> = std::result::Result<T, NsError>;
