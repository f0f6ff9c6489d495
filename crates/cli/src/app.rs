//! Command execution against the resolved configuration

use crate::cli::Command;
use anyhow::{bail, Context, Result};
use config::{ConfigLoader, ResolvedConfig};
use paste_client::{HttpError, HttpResponse, PasteClient, PasteClientError};
use std::io::Write;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};

/// Base URL used when neither the command line nor the configuration sets one
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Application wiring: the resolved configuration and a client built from it
pub struct Application {
    config: ResolvedConfig,
    client: PasteClient,
}

impl Application {
    /// Create the application from an already resolved configuration
    pub fn new(config: ResolvedConfig, base_url_override: Option<String>) -> Result<Self> {
        let base_url = select_base_url(base_url_override, &config);
        info!(environment = %config.environment(), base_url = %base_url, "Using pastebin backend");

        let client = PasteClient::new(base_url).context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Run one command, writing its output to `out`
    pub async fn execute<W: Write>(&self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::Config => {
                serde_json::to_writer_pretty(&mut *out, self.config.as_map())
                    .context("Failed to write configuration")?;
                writeln!(out)?;
                Ok(())
            }
            Command::Get { paste_id } => {
                let response = self.client.get_paste(&paste_id).await.map_err(request_error)?;
                write_response(response, out).await
            }
            Command::New { code, file } => {
                let code = read_code(code, file.as_deref()).await?;
                let response = self.client.new_paste(&code).await.map_err(request_error)?;
                write_response(response, out).await
            }
            Command::InitConfig { dir } => init_config(&dir, out),
        }
    }
}

/// Command line override, then `api_base_url` from the configuration, then the default
pub fn select_base_url(base_url_override: Option<String>, config: &ResolvedConfig) -> String {
    base_url_override
        .or_else(|| config.api_base_url().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Write the built-in records into `dir`
pub fn init_config<W: Write>(dir: &Path, out: &mut W) -> Result<()> {
    ConfigLoader::create_example(dir).context("Failed to write configuration records")?;
    writeln!(out, "Wrote configuration records to {}", dir.display())?;
    Ok(())
}

fn request_error(err: PasteClientError<HttpError>) -> anyhow::Error {
    anyhow::Error::new(err).context("Pastebin request failed")
}

async fn read_code(code: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(code) = code {
        return Ok(code);
    }

    if let Some(path) = file {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut code = String::new();
    tokio::io::stdin()
        .read_to_string(&mut code)
        .await
        .context("Failed to read paste from stdin")?;
    Ok(code)
}

async fn write_response<W: Write>(response: HttpResponse, out: &mut W) -> Result<()> {
    let status = response.status();
    let body = response.text().await.context("Failed to read response body")?;

    writeln!(out, "{}", body)?;

    if !status.is_success() {
        warn!(status = status.as_u16(), "Pastebin backend returned an error status");
        bail!("Pastebin backend responded with {}", status);
    }

    info!(status = status.as_u16(), "Pastebin request completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::ConfigRecords;
    use serde_json::{json, Value};
    use types::Environment;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn local_config() -> ResolvedConfig {
        ConfigRecords::builtin().resolve(Environment::Local)
    }

    #[test]
    fn test_base_url_selection() {
        let config = local_config();
        assert_eq!(
            select_base_url(Some("http://override".to_string()), &config),
            "http://override"
        );
        assert_eq!(select_base_url(None, &config), "http://localhost:8080");

        let production = ConfigRecords::builtin().resolve(Environment::Production);
        assert_eq!(select_base_url(None, &production), "https://pastebin.example.com");

        let empty = ConfigRecords::default().resolve(Environment::Staging);
        assert_eq!(select_base_url(None, &empty), DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_config_command_prints_resolved_record() {
        let app = Application::new(local_config(), None).unwrap();
        let mut out = Vec::new();

        app.execute(Command::Config, &mut out).await.unwrap();

        let printed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed["salutations"], json!(["Mr", "Miss", "Mme"]));
        assert_eq!(printed["api_base_url"], "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_get_command() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/actors/pastebin/get_paste"))
            .and(body_json(json!({ "args": { "paste_id": "abc123" } })))
            .respond_with(ResponseTemplate::new(200).set_body_string("print('hi')"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = Application::new(local_config(), Some(mock_server.uri())).unwrap();
        let mut out = Vec::new();

        app.execute(
            Command::Get {
                paste_id: "abc123".to_string(),
            },
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "print('hi')\n");
    }

    #[tokio::test]
    async fn test_new_command_from_file() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/actors/pastebin/new_paste"))
            .and(body_json(json!({ "args": { "code": "fn main() {}\n" } })))
            .respond_with(ResponseTemplate::new(200).set_body_string("\"p-7\""))
            .expect(1)
            .mount(&mock_server)
            .await;

        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("main.rs");
        std::fs::write(&file, "fn main() {}\n").unwrap();

        let app = Application::new(local_config(), Some(mock_server.uri())).unwrap();
        let mut out = Vec::new();

        app.execute(Command::New { code: None, file: Some(file) }, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\"p-7\"\n");
    }

    #[tokio::test]
    async fn test_error_status_prints_body_and_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/actors/pastebin/new_paste"))
            .respond_with(ResponseTemplate::new(503).set_body_string("read only"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = Application::new(local_config(), Some(mock_server.uri())).unwrap();
        let mut out = Vec::new();

        let err = app
            .execute(
                Command::New {
                    code: Some("x".to_string()),
                    file: None,
                },
                &mut out,
            )
            .await
            .unwrap_err();

        assert!(err.to_string().contains("503"));
        assert_eq!(String::from_utf8(out).unwrap(), "read only\n");
    }

    #[tokio::test]
    async fn test_init_config_command() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("records");
        let app = Application::new(local_config(), None).unwrap();
        let mut out = Vec::new();

        app.execute(Command::InitConfig { dir: target.clone() }, &mut out)
            .await
            .unwrap();

        assert!(target.join("production.yaml").exists());
        let records = ConfigLoader::load_dir(&target).unwrap();
        assert_eq!(records, ConfigRecords::builtin());
    }
}
