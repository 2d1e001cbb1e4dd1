//! Integration tests for CLI functionality

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn nsctl_bin() -> &'static Path {
    assert_cmd::cargo::cargo_bin!("nsctl")
}

/// Command with a clean environment and an explicit kubeconfig
fn nsctl(kubeconfig: &Path) -> Command {
    let mut cmd = Command::new(nsctl_bin());
    cmd.env_remove("KUBECONFIG")
        .env_remove("NSCTL_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .env_remove("KUBERNETES_SERVICE_HOST")
        .arg("--kubeconfig")
        .arg(kubeconfig);
    cmd
}

/// Write a kubeconfig whose current context `dev-ctx` uses namespace `dev`
fn write_kubeconfig(dir: &TempDir, server: &str) -> PathBuf {
    let content = format!(
        r#"apiVersion: v1
kind: Config
current-context: dev-ctx
clusters:
- name: dev-cluster
  cluster:
    server: {server}
contexts:
- name: dev-ctx
  context:
    cluster: dev-cluster
    user: dev-user
    namespace: dev
- name: other-ctx
  context:
    cluster: dev-cluster
    user: dev-user
    namespace: kept
users:
- name: dev-user
  user:
    token: secret-token
"#
    );
    let file = dir.path().join("config");
    fs::write(&file, content).unwrap();
    file
}

fn namespace_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {"name": name},
        "status": {"phase": "Active"}
    })
}

fn not_found_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("namespaces \"{}\" not found", name),
        "reason": "NotFound",
        "code": 404
    })
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    Command::new(nsctl_bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "View or change the current namespace context",
        ))
        .stdout(predicate::str::contains("nsctl --create brie"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    Command::new(nsctl_bin())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nsctl"));
}

#[test]
fn test_unknown_flag_fails() {
    Command::new(nsctl_bin())
        .arg("--no-such-flag")
        .assert()
        .failure();
}

#[test]
fn test_batch_mode_reports_current_namespace() {
    let dir = TempDir::new().unwrap();
    let kubeconfig = write_kubeconfig(&dir, "https://k8s.example.com");
    let before = fs::read(&kubeconfig).unwrap();

    nsctl(&kubeconfig)
        .arg("-b")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Using namespace 'dev' from context named 'dev-ctx' on server 'https://k8s.example.com'.",
        ));

    assert_eq!(fs::read(&kubeconfig).unwrap(), before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_switch_rewrites_kubeconfig() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/prod"))
        .respond_with(ResponseTemplate::new(200).set_body_json(namespace_json("prod")))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let kubeconfig = write_kubeconfig(&dir, &server.uri());

    nsctl(&kubeconfig)
        .arg("prod")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Now using namespace 'prod' on server '{}'.",
            server.uri()
        )));

    let written = fs::read_to_string(&kubeconfig).unwrap();
    assert!(written.contains("namespace: prod"));
    assert!(written.contains("namespace: kept"));
    assert!(!written.contains("namespace: dev\n"));
    assert!(!dir.path().join("config.tmp").exists());
}

#[test]
fn test_switch_to_current_namespace_keeps_file() {
    let dir = TempDir::new().unwrap();
    let kubeconfig = write_kubeconfig(&dir, "https://k8s.example.com");
    let before = fs::read(&kubeconfig).unwrap();

    nsctl(&kubeconfig)
        .arg("dev")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using namespace 'dev' from context named 'dev-ctx'"));

    assert_eq!(fs::read(&kubeconfig).unwrap(), before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_namespace_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/cheese"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_json("cheese")))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let kubeconfig = write_kubeconfig(&dir, &server.uri());
    let before = fs::read(&kubeconfig).unwrap();

    nsctl(&kubeconfig)
        .arg("cheese")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cheese"));

    assert_eq!(fs::read(&kubeconfig).unwrap(), before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_quiet_missing_namespace_succeeds_without_changes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/cheese"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_json("cheese")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/namespaces"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let kubeconfig = write_kubeconfig(&dir, &server.uri());
    let before = fs::read(&kubeconfig).unwrap();

    nsctl(&kubeconfig)
        .args(["-q", "-c", "cheese"])
        .assert()
        .success()
        .stdout(predicate::str::contains("namespace cheese does not exist yet"));

    assert_eq!(fs::read(&kubeconfig).unwrap(), before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_missing_namespace_then_switch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/brie"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_json("brie")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/namespaces"))
        .respond_with(ResponseTemplate::new(201).set_body_json(namespace_json("brie")))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let kubeconfig = write_kubeconfig(&dir, &server.uri());

    nsctl(&kubeconfig)
        .args(["--create", "brie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Now using namespace 'brie'"));

    let written = fs::read_to_string(&kubeconfig).unwrap();
    assert!(written.contains("namespace: brie"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_server_error_fails_without_changes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/prod"))
        .respond_with(ResponseTemplate::new(500).set_body_string("etcd unavailable"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let kubeconfig = write_kubeconfig(&dir, &server.uri());
    let before = fs::read(&kubeconfig).unwrap();

    nsctl(&kubeconfig)
        .args(["-q", "prod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("getting namespace \"prod\""));

    assert_eq!(fs::read(&kubeconfig).unwrap(), before);
}

#[test]
fn test_invalid_kubeconfig_fails() {
    let dir = TempDir::new().unwrap();
    let kubeconfig = dir.path().join("config");
    fs::write(&kubeconfig, "contexts: [not: valid: yaml").unwrap();

    nsctl(&kubeconfig).arg("-b").assert().failure();
}
