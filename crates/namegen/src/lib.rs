//! Culture-flavoured personal name generation.
//!
//! Names are produced by profiles, one per culture, that blend two
//! strategies: drawing from curated lists of real names, or assembling a name
//! from a small phonotactic grammar of onsets, vowels, codas, and endings. A
//! realism setting from 0 to 100 controls the blend.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - A thread-safe [`ProfileRegistry`] keyed by normalised profile names
//! - Reproducible generation for any non-zero seed via [`RandomSource`]
//! - One parameterised synthesis engine driven by data-only
//!   [`CultureSpec`] records
//! - Ten built-in cultures, listed in [`cultures::BUILTIN_CULTURES`]
//! - A command-line front end in [`cli`]
//!
//! # Example
//!
//! ```
//! use namegen::{Gender, ProfileConfig, ProfileRegistry};
//!
//! let registry = ProfileRegistry::with_builtin_profiles();
//! let profile = registry.get("japanese").expect("japanese is built in");
//!
//! let config = ProfileConfig::new()
//!     .with_seed(42)
//!     .with_realism(80)
//!     .with_gender(Gender::Female)
//!     .with_include_last(true);
//!
//! let first = profile.generate(&config).expect("generation succeeds");
//! let again = profile.generate(&config).expect("generation succeeds");
//!
//! assert_eq!(first, again);
//! assert!(first.has_last());
//! ```

pub mod cli;
mod config;
pub mod cultures;
mod engine;
mod error;
mod name;
mod pick;
mod profile;
mod random;
mod registry;
pub mod settings;

pub use config::{DEFAULT_REALISM, Gender, ProfileConfig, REALISM_MAX, REALISM_MIN};
pub use engine::{
    CultureProfile, CultureSpec, EndingChance, Endings, Flourish, ForeignFamily, GivenNames,
    NameShape, NameSource, NeutralMix, Phonology, PrefixRule, Surnames, SyllableBias, SyllableRange,
    Table, TracedName, curated_chance,
};
pub use error::{ConfigError, GenerationError, PickError, ProfileError};
pub use name::{NameResult, title_case};
pub use pick::{pick, try_pick};
pub use profile::{INFO_NAME, INFO_NOTES, NameProfile};
pub use random::{RANDOM_SEED, RandomSource};
pub use registry::{ProfileRegistry, normalize_profile_name};
