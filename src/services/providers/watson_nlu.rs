/// IBM Watson Natural Language Understanding provider
///
/// Runs entity extraction with per-entity sentiment against a custom entity
/// model whose types are the vehicle attributes.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{
        watson::{AnalyzeFeatures, AnalyzeRequest, AnalyzeResponse, EntitiesOptions},
        DetectedEntity,
    },
    services::providers::SentimentAnalyzer,
};

#[derive(Clone)]
pub struct WatsonNluAnalyzer {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    version: String,
    model_id: String,
    language: String,
}

impl WatsonNluAnalyzer {
    pub fn new(
        api_key: String,
        api_url: String,
        version: String,
        model_id: String,
        language: String,
    ) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            version,
            model_id,
            language,
        }
    }

    fn analyze_url(&self) -> String {
        format!("{}/v1/analyze", self.api_url.trim_end_matches('/'))
    }

    fn request_body<'a>(&'a self, text: &'a str) -> AnalyzeRequest<'a> {
        AnalyzeRequest {
            text,
            language: &self.language,
            features: AnalyzeFeatures {
                entities: EntitiesOptions {
                    model: Some(self.model_id.as_str()).filter(|id| !id.is_empty()),
                    mentions: false,
                    sentiment: true,
                },
            },
        }
    }
}

#[async_trait::async_trait]
impl SentimentAnalyzer for WatsonNluAnalyzer {
    async fn analyze(&self, text: &str) -> AppResult<Vec<DetectedEntity>> {
        let response = self
            .http_client
            .post(self.analyze_url())
            .basic_auth("apikey", Some(&self.api_key))
            .query(&[("version", self.version.as_str())])
            .json(&self.request_body(text))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Watson NLU returned status {}: {}",
                status, body
            )));
        }

        let analyzed: AnalyzeResponse = response.json().await?;
        let entities: Vec<DetectedEntity> = analyzed
            .entities
            .into_iter()
            .map(DetectedEntity::from)
            .collect();

        tracing::info!(
            text_chars = text.chars().count(),
            entities = entities.len(),
            provider = self.name(),
            "Entity analysis completed"
        );

        Ok(entities)
    }

    fn name(&self) -> &'static str {
        "watson-nlu"
    }
}
