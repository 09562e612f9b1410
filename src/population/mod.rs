pub mod mission;
pub mod projector;

pub use mission::MissionParameters;
pub use projector::{project, PopulationOutcome, ProjectionBreakdown};
