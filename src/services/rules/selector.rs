use crate::models::{AttributeKey, AttributeScoreMap};

/// Spread below which the negative attributes count as a near-tie
pub const NEAR_TIE_THRESHOLD: f64 = 0.1;

/// How the driving attribute set was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// Other attributes share the exact minimum score
    Tied,
    /// Negative attributes are within the near-tie threshold of each other
    NearTie,
    /// One attribute clearly dominates
    Single,
}

/// Outcome of target selection
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSelection {
    pub target_key: AttributeKey,
    pub target_value: f64,
    pub similarities: Vec<AttributeKey>,
    pub absolute_difference: Option<f64>,
    pub strategy: SelectionStrategy,
    /// Sort keys for the ranker, most significant first
    pub driving: Vec<AttributeKey>,
}

/// Decides which attributes drive the recommendation
///
/// Picks the most negative attribute, then widens the set when other
/// attributes tie with it exactly, or when all negative attributes sit within
/// [`NEAR_TIE_THRESHOLD`] of each other.
pub fn select_targets(scores: &AttributeScoreMap) -> TargetSelection {
    let (target_key, target_value) = most_negative(scores);
    let similarities = similarities(scores, target_key, target_value);
    let absolute_difference = absolute_difference(scores);

    let near_tie = absolute_difference.is_some_and(|diff| diff < NEAR_TIE_THRESHOLD);

    let (strategy, driving) = if !similarities.is_empty() {
        let mut driving = Vec::with_capacity(similarities.len() + 1);
        driving.push(target_key);
        driving.extend(similarities.iter().copied());
        (SelectionStrategy::Tied, driving)
    } else if near_tie {
        let driving = scores
            .iter()
            .filter(|(_, score)| *score < 0.0)
            .map(|(key, _)| key)
            .collect();
        (SelectionStrategy::NearTie, driving)
    } else {
        (SelectionStrategy::Single, vec![target_key])
    };

    TargetSelection {
        target_key,
        target_value,
        similarities,
        absolute_difference,
        strategy,
        driving,
    }
}

/// Minimum score; the first key in declaration order wins ties
fn most_negative(scores: &AttributeScoreMap) -> (AttributeKey, f64) {
    let mut entries = scores.iter();
    // The map always holds every key
    let mut best = entries.next().unwrap_or((AttributeKey::Safety, 0.0));
    for (key, score) in entries {
        if score < best.1 {
            best = (key, score);
        }
    }
    best
}

/// Other keys whose score equals `value` exactly
fn similarities(scores: &AttributeScoreMap, target: AttributeKey, value: f64) -> Vec<AttributeKey> {
    scores
        .iter()
        .filter(|(key, score)| *key != target && *score == value)
        .map(|(key, _)| key)
        .collect()
}

/// `|n0 - n1 - n2 - ...|` over the negative scores in declaration order
///
/// Order-dependent, and not the same as the spread of the negatives.
/// `None` when nothing is negative.
fn absolute_difference(scores: &AttributeScoreMap) -> Option<f64> {
    let mut negatives = scores.iter().map(|(_, score)| score).filter(|score| *score < 0.0);
    let first = negatives.next()?;
    Some(negatives.fold(first, |acc, score| acc - score).abs())
}
