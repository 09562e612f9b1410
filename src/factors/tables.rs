use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use super::factor::Factor;
use crate::error::{CoreError, CoreResult};

type Values = [f64; Factor::COUNT];

/// Collect `(factor, value)` pairs into a complete table.
///
/// Every factor must appear exactly once and every value must pass `check`,
/// which returns a description of the violated bound.
fn collect_complete<I>(pairs: I, table: &str, check: fn(f64) -> Option<&'static str>) -> CoreResult<Values>
where
    I: IntoIterator<Item = (Factor, f64)>,
{
    let mut slots: [Option<f64>; Factor::COUNT] = [None; Factor::COUNT];

    for (factor, value) in pairs {
        if let Some(problem) = check(value) {
            return Err(CoreError::InvalidFactor(format!(
                "{} value for '{}' {} (got {})",
                table,
                factor.key(),
                problem,
                value
            )));
        }
        let slot = &mut slots[factor.index()];
        if slot.is_some() {
            return Err(CoreError::InvalidFactor(format!(
                "{} assigns '{}' more than once",
                table,
                factor.key()
            )));
        }
        *slot = Some(value);
    }

    let missing: Vec<&str> = Factor::ALL
        .iter()
        .filter(|f| slots[f.index()].is_none())
        .map(|f| f.key())
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::InvalidFactor(format!(
            "{} is missing: {}",
            table,
            missing.join(", ")
        )));
    }

    let mut values = [0.0; Factor::COUNT];
    for (value, slot) in values.iter_mut().zip(slots) {
        *value = slot.unwrap_or_default();
    }
    Ok(values)
}

/// Parse string keys (from YAML/JSON) into factors, then collect.
fn collect_keyed(
    map: BTreeMap<String, f64>,
    table: &str,
    check: fn(f64) -> Option<&'static str>,
) -> CoreResult<Values> {
    let pairs = map
        .into_iter()
        .map(|(key, value)| key.parse::<Factor>().map(|f| (f, value)))
        .collect::<CoreResult<Vec<_>>>()?;
    collect_complete(pairs, table, check)
}

/// Serialize a table as a map in canonical factor order.
fn serialize_values<S: Serializer>(values: &Values, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(Factor::COUNT))?;
    for factor in Factor::ALL {
        map.serialize_entry(factor.key(), &values[factor.index()])?;
    }
    map.end()
}

fn check_rating(value: f64) -> Option<&'static str> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        Some("must be between 0 and 100")
    } else {
        None
    }
}

fn check_weight(value: f64) -> Option<&'static str> {
    if !value.is_finite() || value <= 0.0 {
        Some("must be a positive number")
    } else {
        None
    }
}

fn check_ideal(value: f64) -> Option<&'static str> {
    if !value.is_finite() || value <= 0.0 || value > 100.0 {
        Some("must be greater than 0 and at most 100")
    } else {
        None
    }
}

/// A complete rating of a body: one value in `[0, 100]` per factor.
///
/// Construction validates completeness and range, so a `FactorSet` that
/// exists can always be scored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct FactorSet {
    values: Values,
}

impl FactorSet {
    /// Build from `(factor, value)` pairs. Fails with `InvalidFactor` if a
    /// factor is missing, repeated, or out of range.
    pub fn from_pairs<I>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Factor, f64)>,
    {
        Ok(Self {
            values: collect_complete(pairs, "factor set", check_rating)?,
        })
    }

    /// Build from values listed in [`Factor::ALL`] order.
    pub fn from_values(values: Values) -> CoreResult<Self> {
        Self::from_pairs(Factor::ALL.into_iter().zip(values))
    }

    /// Reference data compiled into the binary; checked by the catalog tests.
    pub(crate) const fn preset(values: Values) -> Self {
        Self { values }
    }

    pub fn get(&self, factor: Factor) -> f64 {
        self.values[factor.index()]
    }

    /// Copy of this set with one factor replaced.
    pub fn with(&self, factor: Factor, value: f64) -> CoreResult<Self> {
        let mut values = self.values;
        values[factor.index()] = value;
        Self::from_values(values)
    }

    /// Values as an ordered sequence of `(factor, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.iter().map(move |f| (*f, self.values[f.index()]))
    }

    pub fn to_pairs(&self) -> Vec<(Factor, f64)> {
        self.iter().collect()
    }
}

impl TryFrom<BTreeMap<String, f64>> for FactorSet {
    type Error = CoreError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Ok(Self {
            values: collect_keyed(map, "factor set", check_rating)?,
        })
    }
}

impl Serialize for FactorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_values(&self.values, serializer)
    }
}

/// Relative importance of each factor. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct WeightTable {
    weights: Values,
}

impl WeightTable {
    /// The fixed weights every score in this crate is computed with.
    pub const fn standard() -> Self {
        Self {
            weights: [
                0.15, // climate stability
                0.12, // food security
                0.12, // water availability
                0.08, // air quality
                0.07, // biodiversity
                0.05, // ozone layer
                0.06, // temperature range
                0.05, // radiation levels
                0.06, // atmospheric composition
                0.05, // soil quality
                0.04, // natural disasters
                0.05, // disease prevalence
                0.05, // technology development
                0.05, // social stability
            ],
        }
    }

    pub fn from_pairs<I>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Factor, f64)>,
    {
        Ok(Self {
            weights: collect_complete(pairs, "weight table", check_weight)?,
        })
    }

    pub fn get(&self, factor: Factor) -> f64 {
        self.weights[factor.index()]
    }

    /// Sum of all weights. Not assumed to be exactly 1.0.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.iter().map(move |f| (*f, self.weights[f.index()]))
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<BTreeMap<String, f64>> for WeightTable {
    type Error = CoreError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Ok(Self {
            weights: collect_keyed(map, "weight table", check_weight)?,
        })
    }
}

impl Serialize for WeightTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_values(&self.weights, serializer)
    }
}

/// Target value per factor for the long-run survival estimate.
/// A factor at or above its ideal counts as fully satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct IdealTable {
    ideals: Values,
}

impl IdealTable {
    /// Earth's reference ratings.
    pub const fn standard() -> Self {
        Self {
            ideals: [90.0, 95.0, 95.0, 90.0, 85.0, 90.0, 85.0, 95.0, 90.0, 80.0, 80.0, 85.0, 70.0, 75.0],
        }
    }

    pub fn from_pairs<I>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Factor, f64)>,
    {
        Ok(Self {
            ideals: collect_complete(pairs, "ideal table", check_ideal)?,
        })
    }

    pub fn get(&self, factor: Factor) -> f64 {
        self.ideals[factor.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.iter().map(move |f| (*f, self.ideals[f.index()]))
    }
}

impl Default for IdealTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<BTreeMap<String, f64>> for IdealTable {
    type Error = CoreError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Ok(Self {
            ideals: collect_keyed(map, "ideal table", check_ideal)?,
        })
    }
}

impl Serialize for IdealTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_values(&self.ideals, serializer)
    }
}
