use serde::{Deserialize, Serialize};

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Light,
    #[default]
    Dark,
}

impl Preference {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark mode.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Display name for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Encode as the stored JSON string, e.g. `"dark"` including quotes.
    pub(crate) fn encode(self) -> String {
        match self {
            Self::Light => "\"light\"",
            Self::Dark => "\"dark\"",
        }
        .to_string()
    }

    /// Decode a stored value. Anything that is not one of the two encoded
    /// strings yields `None`.
    pub(crate) fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}
