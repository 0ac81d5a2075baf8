use crate::{
    error::{AppError, AppResult},
    models::{AttributeKey, Vehicle},
    services::catalog::Catalog,
};

/// Best-fit vehicle for the driving attributes, excluding the buyer's car
///
/// Candidates are ordered by their fit scores taken in `driving` order,
/// highest first. The sort is stable, so equal candidates keep catalog order.
pub fn rank<'a>(catalog: &'a Catalog, car: &str, driving: &[AttributeKey]) -> AppResult<&'a Vehicle> {
    let mut candidates: Vec<(&Vehicle, Vec<i32>)> = catalog
        .vehicles()
        .iter()
        .filter(|vehicle| !vehicle.is_named(car))
        .map(|vehicle| (vehicle, vehicle.fit_for(driving)))
        .collect();

    candidates.sort_by(|(_, a), (_, b)| b.cmp(a));

    candidates
        .first()
        .map(|(vehicle, _)| *vehicle)
        .ok_or_else(|| AppError::CatalogExhausted(car.to_string()))
}
