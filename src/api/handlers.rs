use axum::{
    extract::{multipart::MultipartError, FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    Extension, Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{error::AppResult, middleware::RequestId, models::RecommendationResponse};

use super::AppState;

/// Audio container accepted for uploads
const ALLOWED_AUDIO_EXTENSIONS: &[&str] = &["flac"];

// Request types

/// Fields of a feedback submission, however it was encoded
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackForm {
    pub car: Option<String>,
    pub text: Option<String>,
    #[serde(skip)]
    pub audio: Option<AudioUpload>,
}

#[derive(Debug)]
pub struct AudioUpload {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// What a submission asks the service to do
#[derive(Debug, PartialEq)]
pub enum FeedbackInput {
    Audio { car: String, audio: Vec<u8> },
    Text { car: String, text: String },
    /// Nothing usable; answered with the empty recommendation
    Unsupported,
}

impl FeedbackForm {
    /// Audio wins over text when both are sent
    pub fn into_input(self) -> FeedbackInput {
        let car = match self.car.filter(|car| !car.is_empty()) {
            Some(car) => car,
            None => return FeedbackInput::Unsupported,
        };

        if let Some(audio) = self.audio {
            return match audio.file_name.as_deref() {
                Some(name) if allowed_audio_file(name) => FeedbackInput::Audio {
                    car,
                    audio: audio.bytes,
                },
                _ => FeedbackInput::Unsupported,
            };
        }

        match self.text.filter(|text| !text.is_empty()) {
            Some(text) => FeedbackInput::Text { car, text },
            None => FeedbackInput::Unsupported,
        }
    }
}

fn allowed_audio_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            ALLOWED_AUDIO_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

async fn read_multipart(mut multipart: Multipart) -> Result<FeedbackForm, MultipartError> {
    let mut form = FeedbackForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("car") => form.car = Some(field.text().await?),
            Some("text") => form.text = Some(field.text().await?),
            Some("audio") => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                form.audio = Some(AudioUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Decodes a multipart or urlencoded submission
///
/// Anything unreadable yields `None`, which callers treat as "no action".
async fn read_feedback_form(state: &AppState, request: Request) -> Option<FeedbackForm> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, state).await.ok()?;
        match read_multipart(multipart).await {
            Ok(form) => Some(form),
            Err(e) => {
                tracing::warn!(error = %e, "Unreadable multipart body");
                None
            }
        }
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(form) = Form::<FeedbackForm>::from_request(request, state).await.ok()?;
        Some(form)
    } else {
        None
    }
}

// Handlers

/// API index
pub async fn index() -> Json<Value> {
    Json(json!({ "api": "/api" }))
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommends an alternative vehicle from written or spoken feedback
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    request: Request,
) -> AppResult<Json<RecommendationResponse>> {
    let input = match read_feedback_form(&state, request).await {
        Some(form) => form.into_input(),
        None => FeedbackInput::Unsupported,
    };

    let response = match input {
        FeedbackInput::Audio { car, audio } => {
            tracing::info!(
                request_id = %request_id,
                car = %car,
                audio_bytes = audio.len(),
                "Processing audio feedback"
            );
            state.feedback.run_audio(&car, audio).await?
        }
        FeedbackInput::Text { car, text } => {
            tracing::info!(
                request_id = %request_id,
                car = %car,
                text_chars = text.chars().count(),
                "Processing text feedback"
            );
            state.feedback.run_text(&car, &text).await?
        }
        FeedbackInput::Unsupported => {
            tracing::info!(request_id = %request_id, "Unsupported feedback request");
            RecommendationResponse::empty()
        }
    };

    tracing::info!(
        request_id = %request_id,
        recommendation = %response.recommendation,
        entities = response.entities.len(),
        "Feedback processed"
    );

    Ok(Json(response))
}
