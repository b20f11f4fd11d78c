//! The generator contract every culture profile implements.

use std::collections::BTreeMap;

use crate::config::ProfileConfig;
use crate::error::GenerationError;
use crate::name::NameResult;

/// Metadata key holding the registry name of a profile.
pub const INFO_NAME: &str = "name";

/// Metadata key holding free-text notes about a profile.
pub const INFO_NOTES: &str = "notes";

/// A named generator for one culture's name style.
///
/// Implementations must:
/// - Produce byte-identical output for identical configurations with a
///   non-zero seed.
/// - Honour the gender, realism, and surname settings of the configuration.
/// - Title-case every emitted name component.
#[cfg_attr(test, mockall::automock)]
pub trait NameProfile: Send + Sync {
    /// Generates one name for the supplied configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when a resource the profile depends on is
    /// unavailable. Profiles built from static tables never fail.
    fn generate(&self, config: &ProfileConfig) -> Result<NameResult, GenerationError>;

    /// Returns static metadata such as the display name and notes.
    fn info(&self) -> BTreeMap<String, String>;
}
