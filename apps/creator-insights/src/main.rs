mod analysis;
mod config;
mod errors;
mod ingest;
mod llm_client;
mod models;
mod output;

use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::pipeline::RunSummary;
use crate::config::Config;
use crate::errors::AnalysisError;
use crate::llm_client::LlmClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Populate the environment from .env before anything reads it
    let dotenv = dotenvy::dotenv();

    // Read configuration first; a missing credential is reported once logging is up
    let config = Config::from_env();
    let rust_log = config
        .as_ref()
        .map_or_else(|_| "info".to_string(), |c| c.rust_log.clone());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = dotenv {
        warn!("Could not load .env file: {e}");
    }

    info!("Starting creator-insights v{}", env!("CARGO_PKG_VERSION"));

    match run(config).await {
        Ok(summary) => {
            info!(
                "Analyzed {} of {} posts; output at {}",
                summary.posts_analyzed,
                summary.posts_loaded,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Run failed during {}: {e}", e.stage());
            e.exit_code()
        }
    }
}

async fn run(config: anyhow::Result<Config>) -> Result<RunSummary, AnalysisError> {
    // Credential is checked here, before any stage with side effects
    let config = config?;

    let llm = match &config.openai_api_url {
        Some(url) => LlmClient::with_base_url(config.openai_api_key.clone(), url.clone()),
        None => LlmClient::new(config.openai_api_key.clone()),
    };
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    analysis::pipeline::run(&config, &llm).await
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::analysis::pipeline::Stage;

    const CSV: &str = "Post title,Format,Release time,Tags,Radar chart,Views,Likes,Collects,Comments,Grow followers,Shared,Traffic source,Female,Age 25-34,Age 18-24,Overseas,Interest distribution,Growth strategy\n\
Launch day,Video,2024-05-01,#launch,r,900,80,20,10,5,3,Search,55%,45%,30%,4%,Tech,Tutorials\n";

    fn config_from(vars: &[(&str, String)]) -> anyhow::Result<Config> {
        let vars: HashMap<&str, String> = vars.iter().cloned().collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[tokio::test]
    async fn test_missing_key_stops_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = run(config_from(&[("OPENAI_API_URL", server.uri())]))
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Config(_)));
        assert_eq!(err.stage(), Stage::Configuring);
        assert_eq!(err.exit_status(), 2);
        assert!(err.to_string().contains("OPENAI_API_KEY"));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_configured_run_uses_url_override() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "Tutorial videos lead."}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let mut config = config_from(&[
            ("OPENAI_API_KEY", "sk-test".to_string()),
            ("OPENAI_API_URL", server.uri()),
        ])
        .unwrap();
        config.input_path = dir.path().join("creator_data.csv");
        config.output_path = dir.path().join("creator_analysis.txt");
        std::fs::write(&config.input_path, CSV).unwrap();

        let summary = run(Ok(config.clone())).await.unwrap();

        assert_eq!(summary.posts_loaded, 1);
        assert_eq!(
            std::fs::read_to_string(&config.output_path).unwrap(),
            "Tutorial videos lead."
        );
        server.verify().await;
    }
}
