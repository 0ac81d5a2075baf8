/// External collaborators of the feedback pipeline
///
/// Speech transcription and sentiment/entity extraction are delegated to
/// cloud services. Each concern sits behind a trait so the pipeline can run
/// against IBM Watson, the canned offline responses or test doubles.
use crate::{error::AppResult, models::DetectedEntity};

pub mod canned;
pub mod watson_nlu;
pub mod watson_stt;

pub use canned::{CannedSentimentAnalyzer, CannedTranscriber};
pub use watson_nlu::WatsonNluAnalyzer;
pub use watson_stt::WatsonTranscriber;

/// Speech-to-text service
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribes FLAC audio
    ///
    /// Returns the transcript segments in order. An empty list means nothing
    /// was recognized.
    async fn transcribe(&self, audio: Vec<u8>) -> AppResult<Vec<String>>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Entity and sentiment extraction service
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Detects attribute entities in `text`, each with its sentiment score
    async fn analyze(&self, text: &str) -> AppResult<Vec<DetectedEntity>>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
