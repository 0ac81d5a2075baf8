use serde::{Deserialize, Serialize};

use super::mention::DetectedEntity;

// ============================================================================
// Speech to Text API Types
// ============================================================================

/// Response from POST /v1/recognize
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
    #[serde(default)]
    pub result_index: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRecognitionResult {
    #[serde(rename = "final", default)]
    pub is_final: bool,
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRecognitionAlternative {
    pub transcript: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl RecognizeResponse {
    /// Every alternative transcript of every result, in order
    pub fn transcripts(self) -> Vec<String> {
        self.results
            .into_iter()
            .flat_map(|result| result.alternatives)
            .map(|alternative| alternative.transcript)
            .collect()
    }
}

// ============================================================================
// Natural Language Understanding API Types
// ============================================================================

/// Body for POST /v1/analyze
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
    pub language: &'a str,
    pub features: AnalyzeFeatures<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeFeatures<'a> {
    pub entities: EntitiesOptions<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntitiesOptions<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
    pub mentions: bool,
    pub sentiment: bool,
}

/// Response from POST /v1/analyze
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub entities: Vec<NluEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NluEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub text: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub sentiment: Option<NluSentiment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NluSentiment {
    pub score: f64,
    #[serde(default)]
    pub label: Option<String>,
}

impl From<NluEntity> for DetectedEntity {
    fn from(entity: NluEntity) -> Self {
        DetectedEntity {
            entity_type: entity.entity_type,
            confidence: entity.confidence,
            // No sentiment block means the service found nothing to score
            sentiment: entity.sentiment.map(|s| s.score).unwrap_or(0.0),
            text: entity.text,
        }
    }
}
