use super::types::{Session, SESSION_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default session file path (~/.config/colony-viability/session.json)
pub fn get_session_path() -> PathBuf {
    crate::config::get_config_dir().join("session.json")
}

/// Load the session from a JSON file
///
/// If the file doesn't exist, returns a new empty session.
/// If the file exists but has an unsupported version, or holds a custom body
/// or mission that fails validation, returns an error.
pub fn load_session(path: &Path) -> Result<Session> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no session file, starting fresh");
        return Ok(Session::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open session file at {}", path.display()))?;

    let session: Session = serde_json::from_reader(file).context("Failed to load session")?;

    if session.version != SESSION_VERSION {
        anyhow::bail!("Unsupported session version: {}", session.version);
    }

    session
        .validate()
        .with_context(|| format!("Invalid session file at {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded session");
    Ok(session)
}

/// Save the session to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_session(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, session).context("Failed to serialize session")?;

    file.commit().context("Failed to save session")?;

    tracing::info!(path = %path.display(), "saved session");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceBody;
    use crate::population::MissionParameters;
    use std::env;

    #[test]
    fn test_load_missing_file_returns_empty() {
        let temp_path = env::temp_dir().join("colony_viability_test_missing.json");
        let _ = std::fs::remove_file(&temp_path);

        let session = load_session(&temp_path).unwrap();
        assert_eq!(session.version, 1);
        assert!(session.mission.is_none());
        assert!(session.catalog.active().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("colony_viability_test_roundtrip.json");
        let _ = std::fs::remove_file(&temp_path);

        let mut session = Session::new();
        session.select_reference(ReferenceBody::Titan);
        session.set_mission(MissionParameters::new(4, 5, 6, 7.5).unwrap()).unwrap();

        save_session(&temp_path, &session).unwrap();
        let loaded = load_session(&temp_path).unwrap();

        assert_eq!(loaded.catalog, session.catalog);
        assert_eq!(loaded.mission, session.mission);
        assert_eq!(loaded.active_body().unwrap().name, "Titan (Saturn)");

        let _ = std::fs::remove_file(&temp_path);
    }

    fn write_edited(path: &Path, session: &Session, edit: impl FnOnce(&mut serde_json::Value)) {
        let mut value = serde_json::to_value(session).unwrap();
        edit(&mut value);
        std::fs::write(path, serde_json::to_string(&value).unwrap()).unwrap();
    }

    #[test]
    fn test_invalid_custom_body_rejected() {
        let temp_path = env::temp_dir().join("colony_viability_test_bad_custom.json");

        let mut session = Session::new();
        let mut body = ReferenceBody::Mars.profile();
        body.name = "Edited".to_string();
        session.set_custom(body).unwrap();
        write_edited(&temp_path, &session, |v| {
            v["catalog"]["selection"]["custom"]["distance_au"] = serde_json::json!(-4.0);
        });

        let err = load_session(&temp_path).unwrap_err();
        assert!(format!("{:#}", err).contains("distance_au"));

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_invalid_mission_rejected() {
        let temp_path = env::temp_dir().join("colony_viability_test_bad_mission.json");

        let mut session = Session::new();
        session.set_mission(MissionParameters::new(2, 2, 0, 3.0).unwrap()).unwrap();
        write_edited(&temp_path, &session, |v| {
            v["mission"]["duration_years"] = serde_json::json!(0.0);
        });

        let err = load_session(&temp_path).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid mission parameters"));

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let temp_path = env::temp_dir().join("colony_viability_test_version.json");
        std::fs::write(&temp_path, r#"{"version": 99}"#).unwrap();

        let err = load_session(&temp_path).unwrap_err();
        assert!(err.to_string().contains("Unsupported session version"));

        let _ = std::fs::remove_file(&temp_path);
    }
}
