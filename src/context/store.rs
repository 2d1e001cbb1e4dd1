//! Kubeconfig file I/O

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::kubeconfig as kubeconfig_config;
use crate::error::{NsError, Result};

use super::models::KubeConfig;

/// Loads and persists the session configuration
pub trait SessionContextStore {
    /// Load the configuration; `None` when there is no config at all
    fn load(&self) -> Result<Option<KubeConfig>>;

    /// Replace the stored configuration with `config`
    fn persist(&self, config: &KubeConfig) -> Result<()>;
}

/// Handles reading and writing a kubeconfig file
pub struct KubeConfigStore {
    config_path: PathBuf,
}

impl Default for KubeConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KubeConfigStore {
    /// Create a store using `$KUBECONFIG` or `~/.kube/config`
    pub fn new() -> Self {
        let env_value = std::env::var_os(kubeconfig_config::ENV_VAR);
        Self::resolve(None, env_value.as_deref())
    }

    /// Create a store with a custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Pick the kubeconfig path:
    /// 1. explicit path (--kubeconfig)
    /// 2. first non-empty entry of the KUBECONFIG path list
    /// 3. ~/.kube/config
    pub fn resolve(explicit: Option<&Path>, env_value: Option<&std::ffi::OsStr>) -> Self {
        if let Some(path) = explicit {
            debug!("Using kubeconfig from CLI flag: {}", path.display());
            return Self::with_path(path.to_path_buf());
        }

        if let Some(value) = env_value {
            if let Some(path) = std::env::split_paths(value).find(|p| !p.as_os_str().is_empty()) {
                debug!(
                    "Using kubeconfig from {} env var: {}",
                    kubeconfig_config::ENV_VAR,
                    path.display()
                );
                return Self::with_path(path);
            }
        }

        Self::with_path(Self::default_config_path())
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(kubeconfig_config::DIR_NAME)
            .join(kubeconfig_config::FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Directory relative file references in the kubeconfig resolve against
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .config_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| kubeconfig_config::FILE_NAME.into());
        name.push(".");
        name.push(kubeconfig_config::TMP_SUFFIX);
        self.config_path.with_file_name(name)
    }
}

impl SessionContextStore for KubeConfigStore {
    /// Returns `None` if the file doesn't exist, errors on corrupt YAML.
    fn load(&self) -> Result<Option<KubeConfig>> {
        if !self.config_path.exists() {
            debug!("No kubeconfig at {}", self.config_path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            NsError::Config(format!(
                "Failed to read kubeconfig {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(Some(KubeConfig::default()));
        }

        let config = serde_yml::from_str(&content).map_err(|e| {
            NsError::Config(format!(
                "Failed to parse kubeconfig {}: {}",
                self.config_path.display(),
                e
            ))
        })?;
        Ok(Some(config))
    }

    /// Uses atomic write (tmp file + rename) and creates parent dir if needed.
    fn persist(&self, config: &KubeConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    NsError::ConfigPersist(format!(
                        "Failed to create config directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let yaml = serde_yml::to_string(config).map_err(|e| {
            NsError::ConfigPersist(format!("Failed to serialize kubeconfig: {}", e))
        })?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, &yaml).map_err(|e| {
            NsError::ConfigPersist(format!(
                "Failed to write temp config file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                NsError::ConfigPersist(format!("Failed to set permissions on config file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.config_path).map_err(|e| {
            NsError::ConfigPersist(format!(
                "Failed to rename temp config file to {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        debug!("Wrote kubeconfig {}", self.config_path.display());
        Ok(())
    }
}
