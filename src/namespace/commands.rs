//! Namespace command handler

use log::debug;

use crate::cli::Cli;
use crate::config::kubeconfig as kubeconfig_config;
use crate::context::{resolve_current_namespace, KubeConfig, KubeConfigStore, SessionContextStore};
use crate::error::{NsError, Result};
use crate::kube::{KubeClient, Namespace};
use crate::ui::{clear_spinner, create_spinner, DialoguerPicker};

use super::directory::NamespaceDirectory;
use super::models::{RunOutcome, RunRequest};
use super::report::{report, Report};
use super::selector::{NamespacePicker, NamespaceSelector};
use super::switcher::NamespaceSwitcher;

/// Run the namespace command against the real cluster and kubeconfig
pub async fn run_namespace_command(cli: &Cli) -> Result<Report> {
    let env_value = std::env::var_os(kubeconfig_config::ENV_VAR);
    let store = KubeConfigStore::resolve(cli.kubeconfig.as_deref(), env_value.as_deref());
    debug!("Using kubeconfig path {}", store.path().display());

    let config = store.load()?;
    let client = KubeClient::from_environment(config.as_ref(), &store.base_dir())
        .map_err(|e| NsError::Config(format!("creating kubernetes client: {}", e)))?;

    let request = RunRequest::from(cli);
    let directory = ProgressDirectory::new(&client, request.batch_mode);

    let mut outcome = run_namespace(&request, config, &directory, &store, &DialoguerPicker).await?;

    if let RunOutcome::Kept { server, .. } = &mut outcome {
        if server.is_empty() {
            *server = client.server().to_string();
        }
    }

    Ok(report(&outcome))
}

/// One full run: pick the target, switch when it differs from the
/// current namespace, otherwise keep the current one
pub async fn run_namespace<D, S, P>(
    request: &RunRequest,
    config: Option<KubeConfig>,
    directory: &D,
    store: &S,
    picker: &P,
) -> Result<RunOutcome>
where
    D: NamespaceDirectory,
    S: SessionContextStore,
    P: NamespacePicker,
{
    let current = resolve_current_namespace(config.as_ref());
    debug!("Current namespace: {}", current);

    let target = NamespaceSelector::new(directory, picker)
        .resolve(request, &current)
        .await?;

    if !target.is_empty() && target != current {
        let outcome = NamespaceSwitcher::new(directory, store)
            .switch(&target, config, request.create, request.quiet)
            .await?;
        return Ok(RunOutcome::Switch(outcome));
    }

    Ok(RunOutcome::Kept {
        namespace: current,
        context_name: config
            .as_ref()
            .and_then(KubeConfig::current_context_name)
            .map(str::to_string),
        server: config
            .as_ref()
            .map(KubeConfig::current_server)
            .unwrap_or_default(),
        has_config: config.is_some(),
    })
}

/// Shows a spinner while a cluster call is in flight
struct ProgressDirectory<'a, D> {
    inner: &'a D,
    quiet: bool,
}

impl<'a, D> ProgressDirectory<'a, D> {
    fn new(inner: &'a D, quiet: bool) -> Self {
        Self { inner, quiet }
    }
}

impl<D: NamespaceDirectory> NamespaceDirectory for ProgressDirectory<'_, D> {
    async fn list(&self) -> Result<Vec<String>> {
        let spinner = create_spinner("Loading namespaces...", self.quiet);
        let result = self.inner.list().await;
        clear_spinner(spinner);
        result
    }

    async fn get(&self, name: &str) -> Result<Namespace> {
        let spinner = create_spinner(&format!("Checking namespace '{}'...", name), self.quiet);
        let result = self.inner.get(name).await;
        clear_spinner(spinner);
        result
    }

    async fn create(&self, name: &str) -> Result<()> {
        let spinner = create_spinner(&format!("Creating namespace '{}'...", name), self.quiet);
        let result = self.inner.create(name).await;
        clear_spinner(spinner);
        result
    }
}
