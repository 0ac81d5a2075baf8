pub mod attribute;
pub mod mention;
pub mod recommendation;
pub mod vehicle;
pub mod watson;

pub use attribute::{AttributeKey, AttributeScoreMap, UnknownAttributeError};
pub use mention::{DetectedEntity, Mention};
pub use recommendation::RecommendationResponse;
pub use vehicle::{FitScores, Vehicle};
