use crate::models::{AttributeScoreMap, Mention};

/// Sums mention sentiment per attribute, starting from an all-neutral map
pub fn aggregate(mentions: &[Mention]) -> AttributeScoreMap {
    mentions
        .iter()
        .fold(AttributeScoreMap::zeroed(), |mut scores, mention| {
            scores.add(mention.entity, mention.sentiment);
            scores
        })
}

/// Plain sum of every mention's sentiment, in input order
pub fn sentiment_total(mentions: &[Mention]) -> f64 {
    mentions.iter().fold(0.0, |acc, mention| acc + mention.sentiment)
}
