use serde::{Deserialize, Serialize};

use super::attribute::AttributeKey;

/// Per-attribute fit scores of a vehicle
///
/// Higher means a better pick for a buyer unhappy with that attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
pub struct FitScores {
    pub safety: i32,
    pub consumption: i32,
    pub performance: i32,
    pub maintenance: i32,
    pub comfort: i32,
    pub design: i32,
    pub accessories: i32,
    pub model: i32,
}

impl FitScores {
    pub fn get(&self, key: AttributeKey) -> i32 {
        match key {
            AttributeKey::Safety => self.safety,
            AttributeKey::Consumption => self.consumption,
            AttributeKey::Performance => self.performance,
            AttributeKey::Maintenance => self.maintenance,
            AttributeKey::Comfort => self.comfort,
            AttributeKey::Design => self.design,
            AttributeKey::Accessories => self.accessories,
            AttributeKey::Model => self.model,
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    pub scores: FitScores,
}

impl Vehicle {
    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Fit scores for `keys`, in the order given
    pub fn fit_for(&self, keys: &[AttributeKey]) -> Vec<i32> {
        keys.iter().map(|key| self.scores.get(*key)).collect()
    }
}
