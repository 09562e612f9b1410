//! Rocket launch feasibility: does the cargo fit, and is there enough fuel
//! to lift it?
//!
//! Independent of the habitability model. Supplies are given per square
//! metre of rocket floor; every colonist takes one square metre and weighs
//! 70 kg.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const COLONIST_MASS_KG: f64 = 70.0;
pub const WATER_DENSITY_KG_PER_L: f64 = 1.0;
pub const FUEL_DENSITY_KG_PER_L: f64 = 0.8;
/// Litres of fuel needed per 100 kg lifted
pub const FUEL_PER_100_KG: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManifestError {
    #[error("{field} must be a non-negative number (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Floor area of the rocket in m²
    pub area_m2: f64,
    /// Height of the rocket in m
    pub height_m: f64,
    /// Seeds in kg/m²
    pub seeds: f64,
    /// Food rations in kg/m²
    pub rations: f64,
    /// Medicine in kg/m²
    pub medicine: f64,
    /// Tools in kg/m²
    pub tools: f64,
    /// Water in litres
    pub water_l: f64,
    /// Fuel in litres
    pub fuel_l: f64,
    pub men: u32,
    pub women: u32,
    /// Carried for the record; embryos add no mass or volume
    pub frozen_embryos: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchStatus {
    Ready,
    OverVolume,
    InsufficientFuel,
}

impl LaunchStatus {
    pub fn message(self) -> &'static str {
        match self {
            LaunchStatus::Ready => "Rocket ready for launch!",
            LaunchStatus::OverVolume => "The rocket is over its volume. It cannot launch.",
            LaunchStatus::InsufficientFuel => "Not enough fuel for launch.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LaunchReport {
    pub rocket_volume_m3: f64,
    pub occupied_volume_m3: f64,
    pub total_mass_kg: f64,
    pub fuel_l: f64,
    pub minimum_fuel_l: f64,
    pub status: LaunchStatus,
}

impl Manifest {
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (field, value) in [("area_m2", self.area_m2), ("height_m", self.height_m)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ManifestError::NotPositive { field, value });
            }
        }
        let quantities = [
            ("seeds", self.seeds),
            ("rations", self.rations),
            ("medicine", self.medicine),
            ("tools", self.tools),
            ("water_l", self.water_l),
            ("fuel_l", self.fuel_l),
        ];
        for (field, value) in quantities {
            if !value.is_finite() || value < 0.0 {
                return Err(ManifestError::Negative { field, value });
            }
        }
        Ok(())
    }

    fn colonists(&self) -> f64 {
        f64::from(self.men) + f64::from(self.women)
    }

    fn supplies_per_m2(&self) -> f64 {
        self.seeds + self.rations + self.medicine + self.tools
    }

    /// Mass of everything except fuel, in kg
    pub fn dry_mass_kg(&self) -> f64 {
        self.supplies_per_m2() * self.area_m2
            + self.colonists() * COLONIST_MASS_KG
            + self.water_l * WATER_DENSITY_KG_PER_L
    }

    /// Fuel needed to lift the dry cargo alone. Shown before the user picks
    /// how much fuel to load.
    pub fn dry_minimum_fuel_l(&self) -> f64 {
        fuel_for(self.dry_mass_kg())
    }
}

fn fuel_for(mass_kg: f64) -> f64 {
    mass_kg / 100.0 * FUEL_PER_100_KG
}

/// Check whether the manifest fits the rocket and can be lifted.
pub fn assess(manifest: &Manifest) -> Result<LaunchReport, ManifestError> {
    manifest.validate()?;

    let rocket_volume_m3 = manifest.area_m2 * manifest.height_m;

    // floor-area items count as one metre tall
    let occupied_volume_m3 =
        manifest.colonists() + manifest.supplies_per_m2() + manifest.water_l + manifest.fuel_l;

    let total_mass_kg = manifest.dry_mass_kg() + manifest.fuel_l * FUEL_DENSITY_KG_PER_L;
    let minimum_fuel_l = fuel_for(total_mass_kg);

    let status = if occupied_volume_m3 > rocket_volume_m3 {
        LaunchStatus::OverVolume
    } else if manifest.fuel_l < minimum_fuel_l {
        LaunchStatus::InsufficientFuel
    } else {
        LaunchStatus::Ready
    };

    tracing::debug!(?status, occupied_volume_m3, total_mass_kg, minimum_fuel_l, "assessed launch");

    Ok(LaunchReport {
        rocket_volume_m3,
        occupied_volume_m3,
        total_mass_kg,
        fuel_l: manifest.fuel_l,
        minimum_fuel_l,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> Manifest {
        Manifest {
            area_m2: 100.0,
            height_m: 50.0,
            seeds: 2.0,
            rations: 5.0,
            medicine: 1.0,
            tools: 2.0,
            water_l: 1000.0,
            fuel_l: 1500.0,
            men: 5,
            women: 5,
            frozen_embryos: 20,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_dry_mass_and_minimum_fuel() {
        let manifest = sample_manifest();
        // 10 kg/m² * 100 m² + 10 * 70 kg + 1000 L water
        assert!(close(manifest.dry_mass_kg(), 2700.0));
        assert!(close(manifest.dry_minimum_fuel_l(), 810.0));
    }

    #[test]
    fn test_ready_for_launch() {
        let report = assess(&sample_manifest()).unwrap();
        assert!(close(report.rocket_volume_m3, 5000.0));
        assert!(close(report.occupied_volume_m3, 2520.0));
        // 2700 + 1500 * 0.8
        assert!(close(report.total_mass_kg, 3900.0));
        assert!(close(report.minimum_fuel_l, 1170.0));
        assert_eq!(report.status, LaunchStatus::Ready);
    }

    #[test]
    fn test_insufficient_fuel() {
        let mut manifest = sample_manifest();
        manifest.fuel_l = 900.0;
        // minimum = (2700 + 720) * 0.3 = 1026
        let report = assess(&manifest).unwrap();
        assert_eq!(report.status, LaunchStatus::InsufficientFuel);
    }

    #[test]
    fn test_volume_checked_before_fuel() {
        let mut manifest = sample_manifest();
        manifest.height_m = 1.0;
        manifest.fuel_l = 0.0;
        let report = assess(&manifest).unwrap();
        assert_eq!(report.status, LaunchStatus::OverVolume);
    }

    #[test]
    fn test_embryos_do_not_change_mass() {
        let mut manifest = sample_manifest();
        let before = assess(&manifest).unwrap().total_mass_kg;
        manifest.frozen_embryos = 10_000;
        assert_eq!(assess(&manifest).unwrap().total_mass_kg, before);
    }

    #[test]
    fn test_invalid_manifest() {
        let mut manifest = sample_manifest();
        manifest.area_m2 = 0.0;
        assert!(matches!(
            assess(&manifest),
            Err(ManifestError::NotPositive { field: "area_m2", .. })
        ));

        let mut manifest = sample_manifest();
        manifest.water_l = -5.0;
        assert!(matches!(
            assess(&manifest),
            Err(ManifestError::Negative { field: "water_l", .. })
        ));
    }
}
