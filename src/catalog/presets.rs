//! Reference bodies compiled into the binary.
//!
//! Factor values are listed in [`Factor::ALL`](crate::factors::Factor::ALL)
//! order: climate, food, water, air, biodiversity, ozone, temperature,
//! radiation, atmosphere, soil, disasters, disease, technology, society.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::body::BodyProfile;
use crate::factors::FactorSet;

pub fn earth() -> BodyProfile {
    BodyProfile {
        name: "Earth".to_string(),
        distance_au: 1.0,
        travel_time_years: 0.0,
        star_distance_au: 1.0,
        habitable_zone: true,
        factors: FactorSet::preset([90.0, 95.0, 95.0, 90.0, 85.0, 90.0, 85.0, 95.0, 90.0, 80.0, 80.0, 85.0, 70.0, 75.0]),
    }
}

pub fn mars() -> BodyProfile {
    BodyProfile {
        name: "Mars".to_string(),
        distance_au: 1.52,
        travel_time_years: 0.5,
        star_distance_au: 1.52,
        habitable_zone: false,
        factors: FactorSet::preset([25.0, 15.0, 20.0, 10.0, 5.0, 15.0, 30.0, 20.0, 25.0, 40.0, 60.0, 30.0, 15.0, 35.0]),
    }
}

pub fn europa() -> BodyProfile {
    BodyProfile {
        name: "Europa (Jupiter)".to_string(),
        distance_au: 5.2,
        travel_time_years: 6.0,
        star_distance_au: 5.2,
        habitable_zone: false,
        // water is subsurface ice
        factors: FactorSet::preset([40.0, 20.0, 90.0, 5.0, 10.0, 0.0, 10.0, 10.0, 5.0, 5.0, 70.0, 20.0, 10.0, 25.0]),
    }
}

pub fn titan() -> BodyProfile {
    BodyProfile {
        name: "Titan (Saturn)".to_string(),
        distance_au: 9.5,
        travel_time_years: 7.0,
        star_distance_au: 9.5,
        habitable_zone: false,
        // surface liquids are methane
        factors: FactorSet::preset([30.0, 10.0, 5.0, 15.0, 0.0, 0.0, 5.0, 50.0, 40.0, 30.0, 50.0, 10.0, 15.0, 20.0]),
    }
}

pub fn proxima_b() -> BodyProfile {
    BodyProfile {
        name: "Proxima Centauri b".to_string(),
        // ~4.24 light years
        distance_au: 268_770.0,
        travel_time_years: 6300.0,
        star_distance_au: 0.0485,
        habitable_zone: true,
        factors: FactorSet::preset([60.0, 40.0, 70.0, 50.0, 30.0, 40.0, 60.0, 40.0, 50.0, 50.0, 60.0, 50.0, 5.0, 40.0]),
    }
}

pub fn trappist_1e() -> BodyProfile {
    BodyProfile {
        name: "TRAPPIST-1e".to_string(),
        distance_au: 395_369.0,
        travel_time_years: 9000.0,
        star_distance_au: 0.029,
        habitable_zone: true,
        factors: FactorSet::preset([55.0, 45.0, 80.0, 60.0, 35.0, 50.0, 55.0, 45.0, 55.0, 45.0, 55.0, 45.0, 5.0, 45.0]),
    }
}

/// Rough present-day ratings of Earth, used by the survival estimate when
/// the user does not enter their own.
pub fn current_era_earth() -> FactorSet {
    FactorSet::preset([65.0, 75.0, 70.0, 60.0, 55.0, 75.0, 60.0, 85.0, 70.0, 65.0, 50.0, 60.0, 80.0, 55.0])
}

/// The bodies shipped with the catalog, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceBody {
    Earth,
    Mars,
    Europa,
    Titan,
    ProximaB,
    #[serde(rename = "trappist-1e")]
    Trappist1e,
}

impl ReferenceBody {
    pub const ALL: [ReferenceBody; 6] = [
        ReferenceBody::Earth,
        ReferenceBody::Mars,
        ReferenceBody::Europa,
        ReferenceBody::Titan,
        ReferenceBody::ProximaB,
        ReferenceBody::Trappist1e,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ReferenceBody::Earth => "earth",
            ReferenceBody::Mars => "mars",
            ReferenceBody::Europa => "europa",
            ReferenceBody::Titan => "titan",
            ReferenceBody::ProximaB => "proxima-b",
            ReferenceBody::Trappist1e => "trappist-1e",
        }
    }

    /// 1-based position in the selection menu
    pub fn menu_number(self) -> usize {
        self as usize + 1
    }

    pub fn profile(self) -> BodyProfile {
        match self {
            ReferenceBody::Earth => earth(),
            ReferenceBody::Mars => mars(),
            ReferenceBody::Europa => europa(),
            ReferenceBody::Titan => titan(),
            ReferenceBody::ProximaB => proxima_b(),
            ReferenceBody::Trappist1e => trappist_1e(),
        }
    }
}

impl fmt::Display for ReferenceBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_pass_validation() {
        for body in ReferenceBody::ALL {
            let profile = body.profile();
            assert!(profile.validate().is_ok(), "{}", profile.name);
            let values: Vec<f64> = profile.factors.iter().map(|(_, v)| v).collect();
            let rebuilt: [f64; 14] = values.try_into().unwrap();
            assert_eq!(FactorSet::from_values(rebuilt).unwrap(), profile.factors);
        }
    }

    #[test]
    fn test_current_era_preset_is_valid() {
        let values: Vec<f64> = current_era_earth().iter().map(|(_, v)| v).collect();
        let rebuilt: [f64; 14] = values.try_into().unwrap();
        assert!(FactorSet::from_values(rebuilt).is_ok());
    }

    #[test]
    fn test_menu_numbers() {
        assert_eq!(ReferenceBody::Earth.menu_number(), 1);
        assert_eq!(ReferenceBody::Trappist1e.menu_number(), 6);
    }

    #[test]
    fn test_serde_keys_match_key() {
        for body in ReferenceBody::ALL {
            let json = serde_json::to_string(&body).unwrap();
            assert_eq!(json, format!("\"{}\"", body.key()));
        }
    }

    #[test]
    fn test_habitable_zone_flags() {
        assert!(earth().habitable_zone);
        assert!(!mars().habitable_zone);
        assert!(proxima_b().habitable_zone);
        assert!(trappist_1e().habitable_zone);
    }
}
