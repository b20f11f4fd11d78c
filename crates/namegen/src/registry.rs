//! Profile registry mapping normalised names to generators.
//!
//! The registry is built once at process start, normally through
//! [`ProfileRegistry::with_builtin_profiles`], and then shared by reference.
//! Lookups take a read lock and registrations take a write lock, so a reader
//! never observes a partially inserted entry.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::cultures::register_builtin;
use crate::error::ProfileError;
use crate::profile::NameProfile;

type ProfileMap = BTreeMap<String, Arc<dyn NameProfile>>;

/// Normalises a profile name for storage and lookup.
///
/// # Example
///
/// ```
/// use namegen::normalize_profile_name;
///
/// assert_eq!(normalize_profile_name("  Nordic "), "nordic");
/// ```
#[must_use]
pub fn normalize_profile_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A thread-safe lookup table from profile name to generator.
///
/// # Example
///
/// ```
/// use namegen::{ProfileConfig, ProfileRegistry};
///
/// let registry = ProfileRegistry::with_builtin_profiles();
/// let profile = registry.get("English").expect("english is built in");
///
/// let config = ProfileConfig::new().with_seed(42).with_include_last(true);
/// let name = profile.generate(&config).expect("built-in profiles never fail");
///
/// assert!(!name.first.is_empty());
/// assert!(!name.last.is_empty());
/// ```
#[derive(Default)]
pub struct ProfileRegistry {
    profiles: RwLock<ProfileMap>,
}

impl fmt::Debug for ProfileRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileRegistry")
            .field("profiles", &self.list())
            .finish()
    }
}

impl ProfileRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in culture profile.
    #[must_use]
    pub fn with_builtin_profiles() -> Self {
        let registry = Self::new();
        register_builtin(&registry);
        registry
    }

    /// Registers `profile` under the normalised `name`.
    ///
    /// An existing entry with the same normalised name is replaced; the last
    /// registration wins.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty after trimming. Registration happens from
    /// static startup code, so an empty name is a programming error.
    pub fn register(&self, name: &str, profile: Arc<dyn NameProfile>) {
        let key = normalize_profile_name(name);
        assert!(
            !key.is_empty(),
            "ProfileRegistry::register: profile name must not be empty"
        );

        let replaced = self.write().insert(key.clone(), profile).is_some();
        if replaced {
            debug!(profile = %key, "replaced existing name profile");
        } else {
            debug!(profile = %key, "registered name profile");
        }
    }

    /// Looks up the profile registered under the normalised `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotFound`] if no profile is registered under
    /// that name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn NameProfile>, ProfileError> {
        let key = normalize_profile_name(name);
        self.read()
            .get(&key)
            .cloned()
            .ok_or(ProfileError::NotFound { name: key })
    }

    /// Returns every registered name in ascending lexical order.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Returns the metadata of the profile registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotFound`] if no profile is registered under
    /// that name.
    pub fn info(&self, name: &str) -> Result<BTreeMap<String, String>, ProfileError> {
        self.get(name).map(|profile| profile.info())
    }

    /// Returns `true` if a profile is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(&normalize_profile_name(name))
    }

    /// Returns the number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Entries are inserted in a single map operation, so a poisoned lock
    // still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, ProfileMap> {
        self.profiles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProfileMap> {
        self.profiles.write().unwrap_or_else(PoisonError::into_inner)
    }
}
