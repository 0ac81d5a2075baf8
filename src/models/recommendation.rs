use serde::{Deserialize, Serialize};

use super::mention::Mention;

/// Body returned by `POST /api`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Recommended vehicle name, empty when no action is taken
    pub recommendation: String,
    /// Mentions the recommendation was computed from
    pub entities: Vec<Mention>,
}

impl RecommendationResponse {
    /// The "no action" response
    pub fn empty() -> Self {
        Self {
            recommendation: String::new(),
            entities: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendation.is_empty()
    }
}
