use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One of the fixed survival dimensions a body is rated on.
///
/// The declaration order is the canonical order used for scoring, reports
/// and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    ClimateStability,
    FoodSecurity,
    WaterAvailability,
    AirQuality,
    Biodiversity,
    OzoneLayer,
    TemperatureRange,
    RadiationLevels,
    AtmosphericComposition,
    SoilQuality,
    NaturalDisasters,
    DiseasePrevalence,
    TechnologyDevelopment,
    SocialStability,
}

impl Factor {
    pub const COUNT: usize = 14;

    pub const ALL: [Factor; Factor::COUNT] = [
        Factor::ClimateStability,
        Factor::FoodSecurity,
        Factor::WaterAvailability,
        Factor::AirQuality,
        Factor::Biodiversity,
        Factor::OzoneLayer,
        Factor::TemperatureRange,
        Factor::RadiationLevels,
        Factor::AtmosphericComposition,
        Factor::SoilQuality,
        Factor::NaturalDisasters,
        Factor::DiseasePrevalence,
        Factor::TechnologyDevelopment,
        Factor::SocialStability,
    ];

    /// Position of this factor in [`Factor::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Snake-case key used in config files and JSON ("climate_stability")
    pub fn key(self) -> &'static str {
        match self {
            Factor::ClimateStability => "climate_stability",
            Factor::FoodSecurity => "food_security",
            Factor::WaterAvailability => "water_availability",
            Factor::AirQuality => "air_quality",
            Factor::Biodiversity => "biodiversity",
            Factor::OzoneLayer => "ozone_layer",
            Factor::TemperatureRange => "temperature_range",
            Factor::RadiationLevels => "radiation_levels",
            Factor::AtmosphericComposition => "atmospheric_composition",
            Factor::SoilQuality => "soil_quality",
            Factor::NaturalDisasters => "natural_disasters",
            Factor::DiseasePrevalence => "disease_prevalence",
            Factor::TechnologyDevelopment => "technology_development",
            Factor::SocialStability => "social_stability",
        }
    }

    /// Human-readable label ("Climate Stability")
    pub fn label(self) -> &'static str {
        match self {
            Factor::ClimateStability => "Climate Stability",
            Factor::FoodSecurity => "Food Security",
            Factor::WaterAvailability => "Water Availability",
            Factor::AirQuality => "Air Quality",
            Factor::Biodiversity => "Biodiversity",
            Factor::OzoneLayer => "Ozone Layer",
            Factor::TemperatureRange => "Temperature Range",
            Factor::RadiationLevels => "Radiation Levels",
            Factor::AtmosphericComposition => "Atmospheric Composition",
            Factor::SoilQuality => "Soil Quality",
            Factor::NaturalDisasters => "Natural Disasters",
            Factor::DiseasePrevalence => "Disease Prevalence",
            Factor::TechnologyDevelopment => "Technology Development",
            Factor::SocialStability => "Social Stability",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Factor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Factor::ALL
            .iter()
            .copied()
            .find(|f| f.key() == key)
            .ok_or_else(|| CoreError::InvalidFactor(format!("unknown factor '{}'", key)))
    }
}
