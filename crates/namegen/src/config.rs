//! Request configuration passed to every profile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::random::RANDOM_SEED;

/// Lowest accepted realism value.
pub const REALISM_MIN: u8 = 0;

/// Highest accepted realism value.
pub const REALISM_MAX: u8 = 100;

/// Realism used when the caller does not choose one.
pub const DEFAULT_REALISM: u8 = 50;

/// Gender used to select curated pools and ending tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male-leaning names.
    Male,
    /// Female-leaning names.
    Female,
    /// A designed mix, dominated by gender-neutral names.
    #[default]
    Neutral,
}

impl Gender {
    /// Returns the lowercase label used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ConfigError;

    /// Parses `male`, `female`, or `neutral`, ignoring case and surrounding
    /// whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "neutral" => Ok(Self::Neutral),
            _ => Err(ConfigError::InvalidGender {
                value: value.to_owned(),
            }),
        }
    }
}

/// An immutable description of one generation request.
///
/// Values are normalised on the way in: realism is clamped to
/// [`REALISM_MIN`]..=[`REALISM_MAX`] and a non-positive count becomes `1`.
///
/// # Example
///
/// ```
/// use namegen::{Gender, ProfileConfig};
///
/// let config = ProfileConfig::new()
///     .with_seed(42)
///     .with_realism(140)
///     .with_gender(Gender::Female)
///     .with_count(0)
///     .with_include_last(true);
///
/// assert_eq!(config.realism(), 100);
/// assert_eq!(config.count(), 1);
/// assert!(config.include_last());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileConfig {
    count: usize,
    seed: u64,
    realism: u8,
    gender: Gender,
    family: Option<String>,
    include_last: bool,
    reverse: bool,
    dev_mode: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileConfig {
    /// Creates a configuration with the default values: one neutral name at
    /// realism 50, random seed, no surname.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 1,
            seed: RANDOM_SEED,
            realism: DEFAULT_REALISM,
            gender: Gender::Neutral,
            family: None,
            include_last: false,
            reverse: false,
            dev_mode: false,
        }
    }

    /// Sets the number of names to produce; values below one become one.
    #[must_use]
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = usize::try_from(count.max(1)).unwrap_or(usize::MAX);
        self
    }

    /// Sets the seed; `0` requests non-reproducible output.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets realism, clamping it into `0..=100`.
    #[must_use]
    pub fn with_realism(mut self, realism: i64) -> Self {
        let clamped = realism.clamp(i64::from(REALISM_MIN), i64::from(REALISM_MAX));
        self.realism = u8::try_from(clamped).unwrap_or(REALISM_MAX);
        self
    }

    /// Sets the gender.
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Sets the family override hint; blank values clear it.
    #[must_use]
    pub fn with_family(mut self, family: Option<String>) -> Self {
        self.family = family
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        self
    }

    /// Requests (or omits) a surname.
    #[must_use]
    pub const fn with_include_last(mut self, include_last: bool) -> Self {
        self.include_last = include_last;
        self
    }

    /// Requests surname-first display order.
    #[must_use]
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Enables the development-mode configuration dump.
    #[must_use]
    pub const fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    /// Returns the number of names to produce (always at least one).
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the clamped realism value.
    #[must_use]
    pub const fn realism(&self) -> u8 {
        self.realism
    }

    /// Returns the gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Returns the family override hint, if any.
    #[must_use]
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Returns `true` when a surname was requested.
    #[must_use]
    pub const fn include_last(&self) -> bool {
        self.include_last
    }

    /// Returns `true` when names print surname first.
    #[must_use]
    pub const fn reverse(&self) -> bool {
        self.reverse
    }

    /// Returns `true` when the development dump is enabled.
    #[must_use]
    pub const fn dev_mode(&self) -> bool {
        self.dev_mode
    }
}
