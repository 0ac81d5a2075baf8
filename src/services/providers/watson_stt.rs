/// IBM Watson Speech to Text provider
///
/// Sends the uploaded FLAC audio to `/v1/recognize` in one synchronous call
/// and returns every transcript alternative.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::watson::RecognizeResponse,
    services::providers::Transcriber,
};

const AUDIO_CONTENT_TYPE: &str = "audio/flac";

#[derive(Clone)]
pub struct WatsonTranscriber {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl WatsonTranscriber {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }

    fn recognize_url(&self) -> String {
        format!("{}/v1/recognize", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl Transcriber for WatsonTranscriber {
    async fn transcribe(&self, audio: Vec<u8>) -> AppResult<Vec<String>> {
        let audio_bytes = audio.len();

        let response = self
            .http_client
            .post(self.recognize_url())
            .basic_auth("apikey", Some(&self.api_key))
            .query(&[("model", self.model.as_str()), ("max_alternatives", "0")])
            .header(reqwest::header::CONTENT_TYPE, AUDIO_CONTENT_TYPE)
            .body(audio)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Watson Speech to Text returned status {}: {}",
                status, body
            )));
        }

        let recognized: RecognizeResponse = response.json().await?;
        let transcripts = recognized.transcripts();

        tracing::info!(
            audio_bytes,
            segments = transcripts.len(),
            provider = self.name(),
            "Transcription completed"
        );

        Ok(transcripts)
    }

    fn name(&self) -> &'static str {
        "watson-stt"
    }
}
