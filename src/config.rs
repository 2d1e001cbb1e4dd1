/// Configuration constants for the Kubernetes API
pub mod kube {
    /// Core v1 namespaces endpoint
    pub const NAMESPACES_PATH: &str = "/api/v1/namespaces";

    /// Page size used when listing namespaces
    pub const LIST_PAGE_SIZE: u32 = 500;

    /// Kubernetes `Status.reason` for missing objects
    pub const REASON_NOT_FOUND: &str = "NotFound";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for the kubeconfig file
pub mod kubeconfig {
    /// Environment variable holding a list of kubeconfig paths
    pub const ENV_VAR: &str = "KUBECONFIG";

    /// Directory name (relative to HOME)
    pub const DIR_NAME: &str = ".kube";

    /// Config file name
    pub const FILE_NAME: &str = "config";

    /// Suffix for the temporary file used by atomic writes
    pub const TMP_SUFFIX: &str = "tmp";
}

/// Service account locations used when running inside a pod
pub mod in_cluster {
    pub const HOST_ENV_VAR: &str = "KUBERNETES_SERVICE_HOST";
    pub const PORT_ENV_VAR: &str = "KUBERNETES_SERVICE_PORT";
    pub const TOKEN_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/token";
    pub const CA_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/ca.crt";
    pub const NAMESPACE_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/namespace";
}

/// Interactive picker texts
pub mod picker {
    pub const PROMPT: &str = "Change namespace:";
    pub const HELP: &str = "pick the kubernetes namespace for the current kubernetes cluster";
}

/// Default values for CLI
pub mod defaults {
    /// Namespace used when the context does not name one
    pub const NAMESPACE: &str = "default";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
