pub mod body;
pub mod presets;

pub use body::BodyProfile;
pub use presets::ReferenceBody;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Which body is currently active. A reference body and a custom body are
/// never active at the same time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    None,
    Reference(ReferenceBody),
    Custom(BodyProfile),
}

/// Reference bodies plus a single slot for a user-defined one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyCatalog {
    #[serde(default)]
    selection: Selection,
}

impl BodyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference bodies in menu order
    pub fn references() -> &'static [ReferenceBody] {
        &ReferenceBody::ALL
    }

    /// The baseline every body is compared against
    pub fn earth() -> BodyProfile {
        presets::earth()
    }

    /// Find a reference body by menu number ("2"), key ("proxima-b") or
    /// display name ("Proxima Centauri b"), ignoring case.
    pub fn lookup(query: &str) -> CoreResult<ReferenceBody> {
        let query = query.trim();

        if let Ok(number) = query.parse::<usize>() {
            return ReferenceBody::ALL
                .iter()
                .copied()
                .find(|b| b.menu_number() == number)
                .ok_or_else(|| CoreError::UnknownBody(query.to_string()));
        }

        ReferenceBody::ALL
            .iter()
            .copied()
            .find(|b| b.key().eq_ignore_ascii_case(query) || b.profile().name.eq_ignore_ascii_case(query))
            .ok_or_else(|| CoreError::UnknownBody(query.to_string()))
    }

    /// Activate a reference body, discarding any custom body.
    pub fn select_reference(&mut self, body: ReferenceBody) {
        if matches!(self.selection, Selection::Custom(_)) {
            tracing::debug!("discarding custom body");
        }
        tracing::debug!(body = body.key(), "selected reference body");
        self.selection = Selection::Reference(body);
    }

    /// Install a custom body, replacing the previous one and clearing any
    /// reference selection.
    pub fn set_custom(&mut self, profile: BodyProfile) -> CoreResult<()> {
        profile.validate()?;
        tracing::debug!(name = %profile.name, "installed custom body");
        self.selection = Selection::Custom(profile);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selection = Selection::None;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The custom body, if one is active
    pub fn custom(&self) -> Option<&BodyProfile> {
        match &self.selection {
            Selection::Custom(profile) => Some(profile),
            _ => None,
        }
    }

    /// Profile of the active body, if any
    pub fn active(&self) -> Option<BodyProfile> {
        match &self.selection {
            Selection::None => None,
            Selection::Reference(body) => Some(body.profile()),
            Selection::Custom(profile) => Some(profile.clone()),
        }
    }
}
