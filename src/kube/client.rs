//! Kubernetes HTTP client

use std::fs;
use std::path::Path;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use reqwest::{Certificate, Client, ClientBuilder, Identity};
use serde::de::DeserializeOwned;

use crate::config::{in_cluster, kube};
use crate::context::KubeConfig;
use crate::error::{ClusterErrorKind, NsError, Result};

use super::models::Status;

/// Kubernetes API client bound to one cluster
pub struct KubeClient {
    client: Client,
    server: String,
    token: Option<String>,
}

impl KubeClient {
    /// Create a client for `server` with an optional bearer token
    pub fn new(server: String, token: Option<String>) -> Result<Self> {
        Self::build(Self::builder(), server, token)
    }

    /// Create a client from the current context of a kubeconfig.
    ///
    /// Relative certificate and token paths are resolved against `base_dir`.
    pub fn from_kubeconfig(config: &KubeConfig, base_dir: &Path) -> Result<Self> {
        let name = config
            .current_context_name()
            .ok_or_else(|| NsError::Config("no current context set in kubeconfig".to_string()))?;
        let ctx = config.context(name).ok_or_else(|| {
            NsError::Config(format!("context '{}' not found in kubeconfig", name))
        })?;
        let cluster = config.cluster(&ctx.cluster).ok_or_else(|| {
            NsError::Config(format!(
                "cluster '{}' of context '{}' not found in kubeconfig",
                ctx.cluster, name
            ))
        })?;
        if cluster.server.is_empty() {
            return Err(NsError::Config(format!(
                "cluster '{}' has no server address",
                ctx.cluster
            )));
        }

        debug!(
            "Building client for context '{}' (cluster '{}', server {})",
            name, ctx.cluster, cluster.server
        );

        let mut builder = Self::builder();

        if cluster.insecure_skip_tls_verify == Some(true) {
            debug!("TLS verification disabled for cluster '{}'", ctx.cluster);
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(pem) = read_pem(
            cluster.certificate_authority_data.as_deref(),
            cluster.certificate_authority.as_deref(),
            base_dir,
            "certificate-authority",
        )? {
            builder = builder.add_root_certificate(parse_certificate(&pem)?);
        }

        let mut token = None;
        if let Some(user) = config.user(&ctx.user) {
            token = match (&user.token, &user.token_file) {
                (Some(token), _) if !token.is_empty() => Some(token.clone()),
                (_, Some(file)) => Some(read_token_file(&base_dir.join(file))?),
                _ => None,
            };

            let cert = read_pem(
                user.client_certificate_data.as_deref(),
                user.client_certificate.as_deref(),
                base_dir,
                "client-certificate",
            )?;
            let key = read_pem(
                user.client_key_data.as_deref(),
                user.client_key.as_deref(),
                base_dir,
                "client-key",
            )?;
            if let (Some(mut cert), Some(key)) = (cert, key) {
                cert.push(b'\n');
                cert.extend_from_slice(&key);
                let identity = Identity::from_pem(&cert).map_err(|e| {
                    NsError::Config(format!("Invalid client certificate or key: {}", e))
                })?;
                builder = builder.identity(identity);
            }
        }

        Self::build(builder, cluster.server.clone(), token)
    }

    /// Create a client from the pod's service account
    pub fn in_cluster() -> Result<Self> {
        let host = std::env::var(in_cluster::HOST_ENV_VAR).map_err(|_| {
            NsError::Config(format!(
                "no kubeconfig found and not running inside a cluster ({} is not set)",
                in_cluster::HOST_ENV_VAR
            ))
        })?;
        let port =
            std::env::var(in_cluster::PORT_ENV_VAR).unwrap_or_else(|_| "443".to_string());
        let token = read_token_file(Path::new(in_cluster::TOKEN_PATH))?;

        let mut builder = Self::builder();
        if let Ok(pem) = fs::read(in_cluster::CA_PATH) {
            builder = builder.add_root_certificate(parse_certificate(&pem)?);
        }

        let server = in_cluster_server(&host, &port);
        debug!("Using in-cluster configuration: {}", server);
        Self::build(builder, server, Some(token))
    }

    /// Use the kubeconfig's current context when there is one, otherwise
    /// the in-cluster service account
    pub fn from_environment(config: Option<&KubeConfig>, base_dir: &Path) -> Result<Self> {
        match config {
            Some(config) if config.current().is_some() => Self::from_kubeconfig(config, base_dir),
            _ => Self::in_cluster(),
        }
    }

    /// Base client settings shared by every constructor
    fn builder() -> ClientBuilder {
        Client::builder()
            .connect_timeout(Duration::from_secs(kube::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(kube::REQUEST_TIMEOUT_SECS))
    }

    fn build(builder: ClientBuilder, server: String, token: Option<String>) -> Result<Self> {
        let client = builder
            .build()
            .map_err(|e| NsError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            server: server.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// API server address
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Build a full URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.server, path)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Parse a successful response, or classify the failure
    pub(crate) async fn parse_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::cluster_error(response, error_context).await);
        }
        Ok(response.json().await?)
    }

    /// Turn a non-success response into a classified cluster error
    pub(crate) async fn cluster_error(response: reqwest::Response, error_context: &str) -> NsError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<Status>(&body).ok();
        classify(status, parsed, error_context)
    }
}

/// Classify a failed response by `Status.reason`, falling back to the
/// HTTP status when the body is not a Status
fn classify(status: u16, parsed: Option<Status>, error_context: &str) -> NsError {
    let reason = parsed
        .as_ref()
        .and_then(|s| s.reason.as_deref())
        .filter(|r| !r.is_empty());
    let kind = match reason {
        Some(kube::REASON_NOT_FOUND) => ClusterErrorKind::NotFound,
        Some(_) => ClusterErrorKind::Other,
        None if status == 404 => ClusterErrorKind::NotFound,
        None => ClusterErrorKind::Other,
    };
    let message = parsed
        .and_then(|s| s.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("request for {} failed", error_context));
    NsError::Cluster {
        kind,
        status,
        message,
    }
}

/// Read PEM bytes from inline base64 data or from a file
fn read_pem(
    data: Option<&str>,
    path: Option<&str>,
    base_dir: &Path,
    field: &str,
) -> Result<Option<Vec<u8>>> {
    if let Some(data) = data.filter(|d| !d.is_empty()) {
        let decoded = STANDARD
            .decode(data.trim())
            .map_err(|e| NsError::Config(format!("Failed to decode {}-data: {}", field, e)))?;
        return Ok(Some(decoded));
    }

    if let Some(path) = path.filter(|p| !p.is_empty()) {
        let full_path = base_dir.join(path);
        let bytes = fs::read(&full_path).map_err(|e| {
            NsError::Config(format!(
                "Failed to read {} {}: {}",
                field,
                full_path.display(),
                e
            ))
        })?;
        return Ok(Some(bytes));
    }

    Ok(None)
}

fn read_token_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| {
        NsError::Config(format!("Failed to read token file {}: {}", path.display(), e))
    })?;
    Ok(content.trim().to_string())
}

fn parse_certificate(pem: &[u8]) -> Result<Certificate> {
    Certificate::from_pem(pem)
        .map_err(|e| NsError::Config(format!("Invalid certificate authority: {}", e)))
}

/// Server URL for the in-cluster service, bracketing IPv6 hosts
pub(crate) fn in_cluster_server(host: &str, port: &str) -> String {
    if host.contains(':') {
        format!("https://[{}]:{}", host, port)
    } else {
        format!("https://{}:{}", host, port)
    }
}

#[cfg(test)]
impl KubeClient {
    /// Create a test client pointing at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(base_url.to_string(), Some("test-token".to_string()))
            .expect("test client should build")
    }
}
