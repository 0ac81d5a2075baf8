use serde::{Deserialize, Serialize};

use super::attribute::{AttributeKey, UnknownAttributeError};

/// Entity as reported by the sentiment extraction service, before filtering
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedEntity {
    /// Entity type label, expected to name an attribute
    pub entity_type: String,
    pub confidence: f64,
    pub sentiment: f64,
    /// Text span the entity was detected in
    pub text: String,
}

/// One attribute reference with its sentiment, echoed back to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub entity: AttributeKey,
    pub sentiment: f64,
    pub mention: String,
}

impl Mention {
    pub fn new(entity: AttributeKey, sentiment: f64, mention: impl Into<String>) -> Self {
        Self {
            entity,
            sentiment,
            mention: mention.into(),
        }
    }
}

impl TryFrom<DetectedEntity> for Mention {
    type Error = UnknownAttributeError;

    fn try_from(entity: DetectedEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            entity: entity.entity_type.parse()?,
            sentiment: entity.sentiment,
            mention: entity.text,
        })
    }
}
