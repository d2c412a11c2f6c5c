//! Resource savings estimate for the public calculator.
//!
//! Per-pair figures for cleaning a pair instead of replacing it.

use serde::{Deserialize, Serialize};

use crate::error::{KilapError, KilapResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSavings {
    pub water_liters: f64,
    pub energy_kwh: f64,
    pub plastic_kg: f64,
    pub trees: f64,
}

impl ResourceSavings {
    const fn per_pair(water_liters: f64, energy_kwh: f64, plastic_kg: f64, trees: f64) -> Self {
        Self {
            water_liters,
            energy_kwh,
            plastic_kg,
            trees,
        }
    }

    fn scaled(self, pairs: u32) -> Self {
        let n = f64::from(pairs);
        Self {
            water_liters: self.water_liters * n,
            energy_kwh: self.energy_kwh * n,
            plastic_kg: self.plastic_kg * n,
            trees: self.trees * n,
        }
    }
}

fn per_pair(service_name: &str) -> Option<ResourceSavings> {
    match service_name {
        "Cuci Dasar" => Some(ResourceSavings::per_pair(15.0, 0.3, 0.05, 0.001)),
        "Cuci Premium" => Some(ResourceSavings::per_pair(25.0, 0.5, 0.08, 0.002)),
        "Repaint & Restoration" => Some(ResourceSavings::per_pair(45.0, 1.2, 0.2, 0.005)),
        _ => None,
    }
}

/// Savings for `pairs` pairs cleaned with the named stock service.
pub fn estimate(service_name: &str, pairs: u32) -> KilapResult<ResourceSavings> {
    if pairs == 0 {
        return Err(KilapError::validation("Number of pairs must be at least 1"));
    }
    per_pair(service_name)
        .map(|s| s.scaled(pairs))
        .ok_or_else(|| KilapError::validation(format!("No savings data for service '{}'", service_name)))
}
