use anyhow::{Context, Result};
use serde_json::Value;

use comporta_api::config::AppConfig;
use comporta_api::database::DatabaseManager;
use comporta_api::{app, AppState};

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create_person(&self, nome: &str) -> Result<i64> {
        let body: Value = self
            .client
            .post(self.url("/pessoa"))
            .form(&[("nome", nome)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        body["id"].as_i64().context("person id missing")
    }

    /// Adds an event and returns its id (the newest event of the person).
    pub async fn create_event(&self, id_pessoa: i64, nome: &str) -> Result<i64> {
        let body: Value = self
            .client
            .post(self.url("/evento"))
            .form(&[("id_pessoa", id_pessoa.to_string()), ("nome", nome.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        body["eventos"]
            .as_array()
            .and_then(|events| events.last())
            .and_then(|event| event["id"].as_i64())
            .context("event id missing")
    }
}

/// Start a server on a free port backed by its own in-memory database.
///
/// The server runs on the calling test's runtime and stops with it.
pub async fn spawn_server() -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let pool = DatabaseManager::connect_in_memory().await?;
    let mut config = AppConfig::from_env();
    config.api.enable_request_logging = false;
    let router = app(AppState::new(pool), &config);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind {}", base_url))?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });

    Ok(TestServer {
        base_url,
        client: reqwest::Client::new(),
    })
}
