use std::sync::Arc;

use axum_test::{
    multipart::{MultipartForm, Part},
    TestServer,
};
use serde_json::json;

use car_advisor::{
    api::{create_router, AppState},
    error::{AppError, AppResult},
    models::{DetectedEntity, RecommendationResponse},
    services::{
        providers::{CannedSentimentAnalyzer, CannedTranscriber, SentimentAnalyzer, Transcriber},
        Catalog,
    },
};

const MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Analyzer returning a fixed set of entities
struct FixedAnalyzer(Vec<DetectedEntity>);

#[async_trait::async_trait]
impl SentimentAnalyzer for FixedAnalyzer {
    async fn analyze(&self, _text: &str) -> AppResult<Vec<DetectedEntity>> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Transcriber whose backend is always down
struct UnavailableTranscriber;

#[async_trait::async_trait]
impl Transcriber for UnavailableTranscriber {
    async fn transcribe(&self, _audio: Vec<u8>) -> AppResult<Vec<String>> {
        Err(AppError::ExternalApi("service unavailable".to_string()))
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

fn entity(entity_type: &str, sentiment: f64, text: &str) -> DetectedEntity {
    DetectedEntity {
        entity_type: entity_type.to_string(),
        confidence: 0.9,
        sentiment,
        text: text.to_string(),
    }
}

fn server_with(
    transcriber: Arc<dyn Transcriber>,
    analyzer: Arc<dyn SentimentAnalyzer>,
    max_upload_bytes: usize,
) -> TestServer {
    let state = AppState::new(
        Catalog::builtin().unwrap(),
        transcriber,
        analyzer,
        max_upload_bytes,
    );
    TestServer::new(create_router(state)).unwrap()
}

fn create_test_server() -> TestServer {
    server_with(
        Arc::new(CannedTranscriber),
        Arc::new(CannedSentimentAnalyzer),
        MAX_UPLOAD_BYTES,
    )
}

fn flac(bytes: &[u8], file_name: &str) -> Part {
    Part::bytes(bytes.to_vec())
        .file_name(file_name)
        .mime_type("audio/flac")
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_index() {
    let server = create_test_server();
    let response = server.get("/").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "api": "/api" }));
}

#[tokio::test]
async fn test_text_feedback_multipart() {
    let server = create_test_server();

    let form = MultipartForm::new()
        .add_text("car", "FIAT 500")
        .add_text("text", "o visual é o mais feio que já vi");
    let response = server.post("/api").multipart(form).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["recommendation"], "CRONOS");
    // The low-confidence canned entity is filtered out
    assert_eq!(
        body["entities"],
        json!([{ "entity": "DESIGN", "sentiment": -0.851488, "mention": "mais feio" }])
    );
}

#[tokio::test]
async fn test_text_feedback_urlencoded() {
    let server = create_test_server();

    let response = server
        .post("/api")
        .form(&json!({ "car": "cronos", "text": "achei feio" }))
        .await;

    response.assert_status_ok();
    let body: RecommendationResponse = response.json();
    // CRONOS is the buyer's car, so the next best DESIGN score wins
    assert_eq!(body.recommendation, "FIAT 500");
}

#[tokio::test]
async fn test_audio_feedback() {
    let server = create_test_server();

    let form = MultipartForm::new()
        .add_text("car", "TORO")
        .add_part("audio", flac(b"fLaC\0\0\0\x22", "feedback.flac"));
    let response = server.post("/api").multipart(form).await;

    response.assert_status_ok();
    let body: RecommendationResponse = response.json();
    assert_eq!(body.recommendation, "FIAT 500");
    assert_eq!(body.entities.len(), 1);
}

#[tokio::test]
async fn test_audio_with_wrong_extension_is_empty() {
    let server = create_test_server();

    let form = MultipartForm::new()
        .add_text("car", "TORO")
        .add_text("text", "achei feio")
        .add_part("audio", flac(b"RIFF", "feedback.wav"));
    let response = server.post("/api").multipart(form).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "recommendation": "", "entities": [] }));
}

#[tokio::test]
async fn test_missing_car_is_empty() {
    let server = create_test_server();

    let form = MultipartForm::new().add_text("text", "achei feio");
    let response = server.post("/api").multipart(form).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "recommendation": "", "entities": [] }));
}

#[tokio::test]
async fn test_json_body_is_empty() {
    let server = create_test_server();

    let response = server
        .post("/api")
        .json(&json!({ "car": "TORO", "text": "achei feio" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "recommendation": "", "entities": [] }));
}

#[tokio::test]
async fn test_positive_feedback_is_empty() {
    let server = server_with(
        Arc::new(CannedTranscriber),
        Arc::new(FixedAnalyzer(vec![
            entity("DESEMPENHO", 0.8, "muito potente"),
            entity("CONFORTO", -0.3, "banco duro"),
        ])),
        MAX_UPLOAD_BYTES,
    );

    let response = server
        .post("/api")
        .form(&json!({ "car": "TORO", "text": "potente mas banco duro" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "recommendation": "", "entities": [] }));
}

#[tokio::test]
async fn test_tied_attributes_balance_recommendation() {
    let server = server_with(
        Arc::new(CannedTranscriber),
        Arc::new(FixedAnalyzer(vec![
            entity("SEGURANCA", -0.6, "poucos airbags"),
            entity("ACESSORIOS", -0.6, "sem multimidia"),
        ])),
        MAX_UPLOAD_BYTES,
    );

    let response = server
        .post("/api")
        .form(&json!({ "car": "FIAT 500", "text": "inseguro e sem multimidia" }))
        .await;

    response.assert_status_ok();
    let body: RecommendationResponse = response.json();
    assert_eq!(body.recommendation, "TORO");
    assert_eq!(body.entities.len(), 2);
}

#[tokio::test]
async fn test_unknown_attribute_is_server_error() {
    let server = server_with(
        Arc::new(CannedTranscriber),
        Arc::new(FixedAnalyzer(vec![entity("PRECO", -0.9, "caro demais")])),
        MAX_UPLOAD_BYTES,
    );

    let response = server
        .post("/api")
        .form(&json!({ "car": "TORO", "text": "caro demais" }))
        .expect_failure()
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Unknown attribute: PRECO");
}

#[tokio::test]
async fn test_transcription_failure_is_empty() {
    let server = server_with(
        Arc::new(UnavailableTranscriber),
        Arc::new(CannedSentimentAnalyzer),
        MAX_UPLOAD_BYTES,
    );

    let form = MultipartForm::new()
        .add_text("car", "TORO")
        .add_part("audio", flac(b"fLaC", "feedback.flac"));
    let response = server.post("/api").multipart(form).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "recommendation": "", "entities": [] }));
}

#[tokio::test]
async fn test_oversized_upload_is_empty() {
    let server = server_with(
        Arc::new(CannedTranscriber),
        Arc::new(CannedSentimentAnalyzer),
        256,
    );

    let form = MultipartForm::new()
        .add_text("car", "TORO")
        .add_part("audio", flac(&[0u8; 4096], "feedback.flac"));
    let response = server.post("/api").multipart(form).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "recommendation": "", "entities": [] }));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();

    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static("trace-42"),
        )
        .await;

    assert_eq!(response.header("x-request-id"), "trace-42");
}
