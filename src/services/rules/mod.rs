//! Recommendation rule engine
//!
//! Turns per-attribute sentiment into a vehicle recommendation:
//! the aggregator nets sentiment per attribute, the selector decides which
//! attributes drive the choice and the ranker picks the best-fit vehicle.
//! Everything here is pure and reads only the immutable catalog.

pub mod aggregator;
pub mod ranker;
pub mod selector;

use crate::{
    error::AppResult,
    models::{Mention, Vehicle},
    services::catalog::Catalog,
};

pub use aggregator::{aggregate, sentiment_total};
pub use ranker::rank;
pub use selector::{select_targets, SelectionStrategy, TargetSelection};

/// A recommended vehicle and the selection that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub vehicle: Vehicle,
    pub selection: TargetSelection,
}

/// Runs the rule engine for one buyer
///
/// Returns `None` when the overall sentiment is not negative, in which case no
/// alternative is suggested.
pub fn evaluate(catalog: &Catalog, car: &str, mentions: &[Mention]) -> AppResult<Option<Recommendation>> {
    let total = sentiment_total(mentions);
    if total >= 0.0 {
        tracing::debug!(total, "Feedback is not negative, skipping recommendation");
        return Ok(None);
    }

    let scores = aggregate(mentions);
    let selection = select_targets(&scores);
    let vehicle = rank(catalog, car, &selection.driving)?.clone();

    tracing::info!(
        car = %car,
        total,
        target = %selection.target_key,
        strategy = ?selection.strategy,
        driving = ?selection.driving,
        recommendation = %vehicle.name,
        "Recommendation computed"
    );

    Ok(Some(Recommendation { vehicle, selection }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttributeKey;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_evaluate_design_complaint() {
        let mentions = vec![
            Mention::new(AttributeKey::Design, -0.85, "mais feio"),
            Mention::new(AttributeKey::Design, -0.85, "feio demais"),
        ];

        let recommendation = evaluate(&catalog(), "FIAT 500", &mentions)
            .unwrap()
            .unwrap();

        assert_eq!(recommendation.vehicle.name, "CRONOS");
        assert_eq!(recommendation.selection.target_value, -1.7);
        assert_eq!(recommendation.selection.strategy, SelectionStrategy::Single);
        assert_eq!(recommendation.selection.driving, vec![AttributeKey::Design]);
    }

    #[test]
    fn test_evaluate_non_negative_total_short_circuits() {
        let mentions = vec![
            Mention::new(AttributeKey::Design, -0.5, "feio"),
            Mention::new(AttributeKey::Performance, 0.5, "rapido"),
        ];
        assert!(evaluate(&catalog(), "TORO", &mentions).unwrap().is_none());
    }

    #[test]
    fn test_evaluate_no_mentions() {
        assert!(evaluate(&catalog(), "TORO", &[]).unwrap().is_none());
    }

    #[test]
    fn test_evaluate_negative_total_with_positive_attribute() {
        // Total is negative even though COMFORT is positive
        let mentions = vec![
            Mention::new(AttributeKey::Consumption, -0.9, "bebe muito"),
            Mention::new(AttributeKey::Comfort, 0.3, "macio"),
        ];

        let recommendation = evaluate(&catalog(), "ARGO", &mentions).unwrap().unwrap();
        assert_eq!(recommendation.selection.target_key, AttributeKey::Consumption);
        // ARGO is excluded; TORO has the next best CONSUMPTION score
        assert_eq!(recommendation.vehicle.name, "TORO");
    }

    #[test]
    fn test_evaluate_tied_attributes() {
        let mentions = vec![
            Mention::new(AttributeKey::Accessories, -0.6, "sem multimidia"),
            Mention::new(AttributeKey::Safety, -0.6, "poucos airbags"),
        ];

        let recommendation = evaluate(&catalog(), "fiat 500", &mentions).unwrap().unwrap();
        assert_eq!(
            recommendation.selection.driving,
            vec![AttributeKey::Safety, AttributeKey::Accessories]
        );
        // SAFETY 3: TORO and MAREA; ACCESSORIES 4 vs 1
        assert_eq!(recommendation.vehicle.name, "TORO");
    }
}
