use std::sync::Arc;

use crate::services::{
    catalog::Catalog,
    feedback::FeedbackService,
    providers::{SentimentAnalyzer, Transcriber},
};

/// Shared application state
///
/// Holds only immutable data and thread-safe clients, so handlers never lock.
#[derive(Clone)]
pub struct AppState {
    pub feedback: FeedbackService,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        transcriber: Arc<dyn Transcriber>,
        analyzer: Arc<dyn SentimentAnalyzer>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            feedback: FeedbackService::new(Arc::new(catalog), transcriber, analyzer),
            max_upload_bytes,
        }
    }
}
