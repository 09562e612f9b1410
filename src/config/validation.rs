use std::collections::HashSet;

use super::schema::Config;
use crate::catalog::BodyCatalog;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for (i, body) in config.bodies.iter().enumerate() {
        if let Err(e) = body.validate() {
            errors.push(format!("bodies[{}]: {}", i, e));
        }

        let key = body.name.trim().to_lowercase();
        if !seen.insert(key) {
            errors.push(format!("bodies[{}].name: duplicate body '{}'", i, body.name));
        }

        if BodyCatalog::lookup(&body.name).is_ok() {
            errors.push(format!(
                "bodies[{}].name: '{}' is already a reference body",
                i, body.name
            ));
        }
    }

    if let Some(ref mission) = config.mission {
        if let Err(e) = mission.validate() {
            errors.push(format!("mission: {}", e));
        }
    }

    if let Some(year) = config.survival.as_ref().and_then(|s| s.year) {
        if year < 0 {
            errors.push(format!("survival.year: must not be negative (got {})", year));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
