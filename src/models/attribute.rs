use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Product attribute a buyer can comment on
///
/// Declaration order matters: score maps iterate in this order and the
/// selector breaks ties by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeKey {
    Safety,
    Consumption,
    Performance,
    Maintenance,
    Comfort,
    Design,
    Accessories,
    Model,
}

impl AttributeKey {
    /// Every key, in declaration order
    pub const ALL: [AttributeKey; 8] = [
        AttributeKey::Safety,
        AttributeKey::Consumption,
        AttributeKey::Performance,
        AttributeKey::Maintenance,
        AttributeKey::Comfort,
        AttributeKey::Design,
        AttributeKey::Accessories,
        AttributeKey::Model,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::Safety => "SAFETY",
            AttributeKey::Consumption => "CONSUMPTION",
            AttributeKey::Performance => "PERFORMANCE",
            AttributeKey::Maintenance => "MAINTENANCE",
            AttributeKey::Comfort => "COMFORT",
            AttributeKey::Design => "DESIGN",
            AttributeKey::Accessories => "ACCESSORIES",
            AttributeKey::Model => "MODEL",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a collaborator reports an attribute outside the closed set
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown attribute: {0}")]
pub struct UnknownAttributeError(pub String);

impl FromStr for AttributeKey {
    type Err = UnknownAttributeError;

    /// Case-sensitive. Also accepts the Portuguese labels emitted by the
    /// custom NLU entity model.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SAFETY" | "SEGURANCA" => Ok(AttributeKey::Safety),
            "CONSUMPTION" | "CONSUMO" => Ok(AttributeKey::Consumption),
            "PERFORMANCE" | "DESEMPENHO" => Ok(AttributeKey::Performance),
            "MAINTENANCE" | "MANUTENCAO" => Ok(AttributeKey::Maintenance),
            "COMFORT" | "CONFORTO" => Ok(AttributeKey::Comfort),
            "DESIGN" => Ok(AttributeKey::Design),
            "ACCESSORIES" | "ACESSORIOS" => Ok(AttributeKey::Accessories),
            "MODEL" | "MODELO" => Ok(AttributeKey::Model),
            other => Err(UnknownAttributeError(other.to_string())),
        }
    }
}

/// Net sentiment per attribute
///
/// Backed by a fixed array so every key is always present.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttributeScoreMap {
    scores: [f64; 8],
}

impl AttributeScoreMap {
    /// All attributes at 0.0 (neutral)
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn get(&self, key: AttributeKey) -> f64 {
        self.scores[key.index()]
    }

    pub fn add(&mut self, key: AttributeKey, value: f64) {
        self.scores[key.index()] += value;
    }

    /// Iterates `(key, score)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, f64)> + '_ {
        AttributeKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
