//! Error types for the namegen crate.
//!
//! This module defines semantic error enums for profile lookup, name
//! generation, candidate selection, and configuration parsing, following the
//! project's error handling conventions with `thiserror`.

use thiserror::Error;

/// Errors raised when resolving a profile from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// No profile is registered under the requested name.
    #[error("profile '{name}' not found")]
    NotFound {
        /// The normalised profile name that was not found.
        name: String,
    },
}

/// Errors that can occur while a profile generates a name.
///
/// The built-in culture profiles are total and never produce these errors.
/// The variant exists for profiles backed by fallible resources such as an
/// external dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A resource the profile depends on could not be used.
    #[error("profile '{profile}' could not generate a name: {message}")]
    ResourceUnavailable {
        /// Name of the profile that failed.
        profile: String,
        /// Description of the failure.
        message: String,
    },
}

/// Errors returned by the non-panicking candidate selection helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    /// The candidate slice was empty.
    #[error("cannot pick from an empty candidate list")]
    EmptyCandidates,
}

/// Errors raised while parsing request configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The gender value is not one of `male`, `female`, or `neutral`.
    #[error("invalid gender '{value}': expected male, female, or neutral")]
    InvalidGender {
        /// The rejected value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_error_not_found_formats_correctly() {
        let err = ProfileError::NotFound {
            name: "klingon".to_owned(),
        };
        assert_eq!(err.to_string(), "profile 'klingon' not found");
    }

    #[test]
    fn generation_error_resource_unavailable_formats_correctly() {
        let err = GenerationError::ResourceUnavailable {
            profile: "english".to_owned(),
            message: "dictionary offline".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "profile 'english' could not generate a name: dictionary offline"
        );
    }

    #[test]
    fn pick_error_empty_candidates_formats_correctly() {
        assert_eq!(
            PickError::EmptyCandidates.to_string(),
            "cannot pick from an empty candidate list"
        );
    }

    #[test]
    fn config_error_invalid_gender_formats_correctly() {
        let err = ConfigError::InvalidGender {
            value: "robot".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid gender 'robot': expected male, female, or neutral"
        );
    }
}
