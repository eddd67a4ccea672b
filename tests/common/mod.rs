#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use intaker::config::{Config, NotifyConfig};
use intaker::state::AppState;

pub const FORM_HTML: &str = "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>Onboarding — Swift</title></head>\n<body><form id=\"intake\"></form></body></html>\n";

/// A running server backed by its own temp directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub dir: TempDir,
    pub storage_dir: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON value to /submit, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a raw body to /submit, return (body, status).
    pub async fn submit_raw(&self, raw: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .header("content-type", "application/json")
            .body(raw.to_string())
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Files currently in the storage directory, sorted.
    pub fn stored_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(&self.storage_dir) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
        files.sort();
        files
    }

    /// Load a persisted intake by id.
    pub fn read_intake(&self, id: u64) -> Value {
        let path = self.storage_dir.join(format!("{id}.json"));
        let raw = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        serde_json::from_str(&raw).expect("intake is not valid JSON")
    }
}

/// A config pointing at `dir`, with both notifiers switched off.
pub fn test_config(dir: &Path) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        storage_dir: dir.join("intakes"),
        form_path: dir.join("index.html"),
        webhook_url: None,
        webhook_timeout_secs: 5,
        notify: NotifyConfig {
            command: None,
            ..NotifyConfig::default()
        },
        studio_name: "Swift Studio".to_string(),
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    }
}

/// A sample submission shaped like the onboarding form's output.
pub fn sample_submission(name: &str) -> Value {
    json!({
        "name": name,
        "business": format!("{name} Bakes"),
        "existingSite": "yes-outdated",
        "siteUrl": "https://example.com",
        "goals": ["leads", "sales"],
        "pages": ["home", "about", "contact"],
        "branding": ["logo"],
        "features": [],
        "inspiration": "",
        "timeline": "month",
        "budget": "1-2k",
        "notes": "Gluten free options please",
        "source": "instagram"
    })
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_, _| {}).await
}

/// Spawn with a tweaked config. The closure also receives the temp dir so it
/// can place scripts or point paths elsewhere.
pub async fn spawn_app_with(configure: impl FnOnce(&mut Config, &Path)) -> TestApp {
    spawn_app_custom(configure, |_| {}).await
}

/// Spawn with a tweaked config and then a tweaked state (e.g. swapped notifiers).
pub async fn spawn_app_custom(
    configure: impl FnOnce(&mut Config, &Path),
    customize: impl FnOnce(&mut AppState),
) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    std::fs::write(dir.path().join("index.html"), FORM_HTML).expect("Failed to write form");

    let mut config = test_config(dir.path());
    configure(&mut config, dir.path());
    let storage_dir = config.storage_dir.clone();

    let mut state = AppState::from_config(config).expect("Failed to build state");
    state.store.ensure_dir().expect("Failed to create storage dir");
    customize(&mut state);

    let app = intaker::build_router(Arc::new(state));

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        dir,
        storage_dir,
    }
}

/// Write an executable shell script into `dir` and return its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod script");
    path
}

/// Poll until `check` passes or the deadline expires.
pub async fn eventually<F>(timeout: Duration, mut check: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    check()
}
