pub mod factor;
pub mod tables;

pub use factor::Factor;
pub use tables::{FactorSet, IdealTable, WeightTable};
