use std::sync::Arc;

use car_advisor::{
    api::{create_router, AppState},
    config::Config,
    services::{
        providers::{
            CannedSentimentAnalyzer, CannedTranscriber, SentimentAnalyzer, Transcriber,
            WatsonNluAnalyzer, WatsonTranscriber,
        },
        Catalog,
    },
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("car_advisor=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };
    tracing::info!(vehicles = catalog.len(), "Vehicle catalog loaded");
    Ok(catalog)
}

fn build_providers(config: &Config) -> (Arc<dyn Transcriber>, Arc<dyn SentimentAnalyzer>) {
    if config.use_mock {
        tracing::warn!("USE_MOCK is set, serving canned transcription and analysis");
        return (Arc::new(CannedTranscriber), Arc::new(CannedSentimentAnalyzer));
    }

    let transcriber = WatsonTranscriber::new(
        config.watson_stt_apikey.clone().unwrap_or_default(),
        config.watson_stt_url.clone(),
        config.watson_stt_model.clone(),
    );
    let analyzer = WatsonNluAnalyzer::new(
        config.watson_nlu_apikey.clone().unwrap_or_default(),
        config.watson_nlu_url.clone(),
        config.watson_nlu_version.clone(),
        config.watson_nlu_model_id.clone(),
        config.nlu_language.clone(),
    );
    (Arc::new(transcriber), Arc::new(analyzer))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let catalog = load_catalog(&config)?;
    let (transcriber, analyzer) = build_providers(&config);

    let state = AppState::new(catalog, transcriber, analyzer, config.max_upload_bytes);
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
