/// Offline providers returning fixed payloads
///
/// Selected with `USE_MOCK=true` so the service can be demoed without cloud
/// credentials. The payloads are parsed through the same wire types as the
/// Watson responses.
use crate::{
    error::{AppError, AppResult},
    models::{
        watson::{AnalyzeResponse, RecognizeResponse},
        DetectedEntity,
    },
    services::providers::{SentimentAnalyzer, Transcriber},
};

const CANNED_RECOGNIZE_RESPONSE: &str = r#"{
    "result_index": 0,
    "results": [
        {
            "final": true,
            "alternatives": [
                {
                    "transcript": "espetacular visual é lindíssimo com belas amente kit multimídia compatível com android auto ",
                    "confidence": 0.84
                }
            ]
        },
        {
            "final": true,
            "alternatives": [
                {
                    "transcript": "o consumo destes já passa de sete novos quilômetros isso na cidade ",
                    "confidence": 0.55
                }
            ]
        }
    ]
}"#;

const CANNED_ANALYZE_RESPONSE: &str = r#"{
    "entities": [
        {
            "confidence": 0.643092,
            "count": 1,
            "disambiguation": { "subtype": ["NONE"] },
            "sentiment": { "label": "negative", "score": -0.851488 },
            "text": "mais feio",
            "type": "DESIGN"
        },
        {
            "confidence": 0.556987,
            "count": 1,
            "disambiguation": { "subtype": ["NONE"] },
            "sentiment": { "label": "negative", "score": -0.851488 },
            "text": "minha vida",
            "type": "DESIGN"
        }
    ],
    "language": "pt",
    "usage": { "features": 1, "text_characters": 68, "text_units": 1 }
}"#;

#[derive(Debug, Clone, Default)]
pub struct CannedTranscriber;

#[async_trait::async_trait]
impl Transcriber for CannedTranscriber {
    async fn transcribe(&self, _audio: Vec<u8>) -> AppResult<Vec<String>> {
        let response: RecognizeResponse = serde_json::from_str(CANNED_RECOGNIZE_RESPONSE)
            .map_err(|e| AppError::Internal(format!("Invalid canned transcript: {}", e)))?;
        Ok(response.transcripts())
    }

    fn name(&self) -> &'static str {
        "canned-stt"
    }
}

#[derive(Debug, Clone, Default)]
pub struct CannedSentimentAnalyzer;

#[async_trait::async_trait]
impl SentimentAnalyzer for CannedSentimentAnalyzer {
    async fn analyze(&self, _text: &str) -> AppResult<Vec<DetectedEntity>> {
        let response: AnalyzeResponse = serde_json::from_str(CANNED_ANALYZE_RESPONSE)
            .map_err(|e| AppError::Internal(format!("Invalid canned analysis: {}", e)))?;
        Ok(response.entities.into_iter().map(DetectedEntity::from).collect())
    }

    fn name(&self) -> &'static str {
        "canned-nlu"
    }
}
