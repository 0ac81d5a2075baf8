use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{DetectedEntity, Mention, RecommendationResponse, UnknownAttributeError},
    services::{
        catalog::Catalog,
        providers::{SentimentAnalyzer, Transcriber},
        rules,
    },
};

/// Entities at or below this confidence are ignored
pub const MIN_ENTITY_CONFIDENCE: f64 = 0.60;

/// Turns buyer feedback into a recommendation response
///
/// Wires the transcription and sentiment collaborators to the rule engine.
/// Collaborator failures degrade to the "no action" response; contract
/// violations such as unknown attribute labels are returned as errors.
#[derive(Clone)]
pub struct FeedbackService {
    catalog: Arc<Catalog>,
    transcriber: Arc<dyn Transcriber>,
    analyzer: Arc<dyn SentimentAnalyzer>,
}

impl FeedbackService {
    pub fn new(
        catalog: Arc<Catalog>,
        transcriber: Arc<dyn Transcriber>,
        analyzer: Arc<dyn SentimentAnalyzer>,
    ) -> Self {
        Self {
            catalog,
            transcriber,
            analyzer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommends from written feedback
    pub async fn run_text(&self, car: &str, text: &str) -> AppResult<RecommendationResponse> {
        let entities = match self.analyzer.analyze(text).await {
            Ok(entities) => entities,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = self.analyzer.name(),
                    "Sentiment analysis failed"
                );
                return Ok(RecommendationResponse::empty());
            }
        };

        let mentions = prepare_mentions(entities)?;

        match rules::evaluate(&self.catalog, car, &mentions)? {
            Some(recommendation) => Ok(RecommendationResponse {
                recommendation: recommendation.vehicle.name,
                entities: mentions,
            }),
            None => Ok(RecommendationResponse::empty()),
        }
    }

    /// Recommends from spoken feedback
    pub async fn run_audio(&self, car: &str, audio: Vec<u8>) -> AppResult<RecommendationResponse> {
        let segments = match self.transcriber.transcribe(audio).await {
            Ok(segments) => segments,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = self.transcriber.name(),
                    "Transcription failed"
                );
                return Ok(RecommendationResponse::empty());
            }
        };

        if segments.is_empty() {
            tracing::info!(provider = self.transcriber.name(), "Nothing was transcribed");
            return Ok(RecommendationResponse::empty());
        }

        let text = segments.join(" ");
        self.run_text(car, &text).await
    }
}

/// Keeps confident entities and maps them to attribute mentions
///
/// Low-confidence entities are dropped before their labels are checked.
pub fn prepare_mentions(entities: Vec<DetectedEntity>) -> Result<Vec<Mention>, UnknownAttributeError> {
    entities
        .into_iter()
        .filter(|entity| entity.confidence > MIN_ENTITY_CONFIDENCE)
        .map(Mention::try_from)
        .collect()
}
