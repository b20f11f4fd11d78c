//! Process settings loaded via OrthoConfig.
//!
//! Settings are layered from configuration files and `NAMEGEN_*` environment
//! variables. Command-line flags stay with the CLI parser.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Profile used when `--mode` is not given.
pub const DEFAULT_PROFILE: &str = "english";

/// Profile used when the requested one is not registered.
pub const FALLBACK_PROFILE: &str = "english";

/// Settings that shape how the binary resolves profiles and logs.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NAMEGEN")]
pub struct NamegenSettings {
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
    /// Profile used when none is requested.
    pub default_profile: Option<String>,
    /// Profile used when the requested profile is unknown.
    pub fallback_profile: Option<String>,
}

impl NamegenSettings {
    /// Return the configured default profile, falling back to
    /// [`DEFAULT_PROFILE`].
    #[must_use]
    pub fn default_profile(&self) -> &str {
        self.default_profile.as_deref().unwrap_or(DEFAULT_PROFILE)
    }

    /// Return the configured fallback profile, falling back to
    /// [`FALLBACK_PROFILE`].
    #[must_use]
    pub fn fallback_profile(&self) -> &str {
        self.fallback_profile.as_deref().unwrap_or(FALLBACK_PROFILE)
    }
}
