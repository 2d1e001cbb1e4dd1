//! Kubernetes API client module
//!
//! A small REST client for the core v1 namespaces API.

mod client;
mod models;
mod namespaces;

pub use client::KubeClient;
pub use models::{Namespace, NamespaceList, NamespaceStatus, ObjectMeta};
