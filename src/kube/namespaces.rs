//! Namespace API operations

use log::debug;

use crate::config::kube;
use crate::error::Result;
use crate::kube::KubeClient;
use crate::namespace::NamespaceDirectory;

use super::models::{Namespace, NamespaceList};

impl KubeClient {
    /// List all namespace names, following `continue` tokens, sorted
    pub async fn list_namespaces(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut continue_token: Option<String> = None;
        let mut page = 1;

        loop {
            let mut url = format!(
                "{}?limit={}",
                self.url(kube::NAMESPACES_PATH),
                kube::LIST_PAGE_SIZE
            );
            if let Some(token) = &continue_token {
                url.push_str(&format!("&continue={}", urlencoding::encode(token)));
            }
            debug!("Fetching namespaces page {} from: {}", page, url);

            let response = self.get_request(&url).send().await?;
            let list: NamespaceList = self.parse_response(response, "namespaces").await?;
            debug!("Page {} returned {} namespaces", page, list.items.len());

            names.extend(list.items.into_iter().map(|ns| ns.metadata.name));

            continue_token = list.metadata.continue_token.filter(|t| !t.is_empty());
            if continue_token.is_none() {
                break;
            }
            page += 1;
        }

        names.sort();
        debug!("Fetched {} namespaces", names.len());
        Ok(names)
    }

    /// Get a namespace by name
    pub async fn get_namespace(&self, name: &str) -> Result<Namespace> {
        let url = format!(
            "{}/{}",
            self.url(kube::NAMESPACES_PATH),
            urlencoding::encode(name)
        );
        debug!("Fetching namespace '{}' from: {}", name, url);

        let response = self.get_request(&url).send().await?;
        self.parse_response(response, &format!("namespace '{}'", name))
            .await
    }

    /// Create a namespace
    pub async fn create_namespace(&self, name: &str) -> Result<Namespace> {
        let url = self.url(kube::NAMESPACES_PATH);
        debug!("Creating namespace '{}' at: {}", name, url);

        let response = self.post_request(&url).json(&Namespace::new(name)).send().await?;
        let created: Namespace = self
            .parse_response(response, &format!("creating namespace '{}'", name))
            .await?;
        debug!(
            "Created namespace '{}' (phase: {})",
            created.name(),
            created.phase().unwrap_or("unknown")
        );
        Ok(created)
    }
}

impl NamespaceDirectory for KubeClient {
    async fn list(&self) -> Result<Vec<String>> {
        self.list_namespaces().await
    }

    async fn get(&self, name: &str) -> Result<Namespace> {
        self.get_namespace(name).await
    }

    async fn create(&self, name: &str) -> Result<()> {
        self.create_namespace(name).await.map(|_| ())
    }
}
