use std::{collections::HashSet, path::Path};

use crate::models::Vehicle;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors raised while loading or validating the vehicle catalog
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Catalog needs at least 2 vehicles, found {0}")]
    TooSmall(usize),

    #[error("Duplicate vehicle in catalog: {0}")]
    DuplicateVehicle(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable, ordered table of vehicles
///
/// Validated on construction: at least two vehicles and no two names equal
/// ignoring case. Excluding any single buyer car therefore always leaves a
/// candidate to rank.
#[derive(Debug, Clone)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self, CatalogError> {
        if vehicles.len() < 2 {
            return Err(CatalogError::TooSmall(vehicles.len()));
        }

        let mut seen = HashSet::new();
        for vehicle in &vehicles {
            if !seen.insert(vehicle.name.to_lowercase()) {
                return Err(CatalogError::DuplicateVehicle(vehicle.name.clone()));
            }
        }

        Ok(Self { vehicles })
    }

    /// The default vehicle table shipped with the service
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let vehicles: Vec<Vehicle> = serde_json::from_str(json)?;
        Self::new(vehicles)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
