//! Integration tests for the profile registry.
//!
//! These tests exercise the public registry API with the built-in cultures
//! and check that concurrent registration never exposes a partial entry.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use namegen::cultures::{BUILTIN_CULTURES, NORDIC};
use namegen::{
    CultureProfile, GenerationError, INFO_NAME, INFO_NOTES, NameProfile, NameResult,
    ProfileConfig, ProfileError, ProfileRegistry,
};
use rstest::{fixture, rstest};

/// Minimal profile used to observe which registration is visible.
struct Constant(&'static str);

impl NameProfile for Constant {
    fn generate(&self, _config: &ProfileConfig) -> Result<NameResult, GenerationError> {
        Ok(NameResult::new(self.0, ""))
    }

    fn info(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(INFO_NAME.to_owned(), self.0.to_owned())])
    }
}

#[fixture]
fn builtin() -> ProfileRegistry {
    ProfileRegistry::with_builtin_profiles()
}

#[rstest]
fn builtin_registry_lists_every_culture_in_order(builtin: ProfileRegistry) {
    assert_eq!(
        builtin.list(),
        vec![
            "amharic", "celtic", "chinese", "english", "hawaiian", "italian", "japanese",
            "korean", "nordic", "spanish",
        ]
    );
    assert_eq!(builtin.len(), BUILTIN_CULTURES.len());
}

#[rstest]
#[case("English")]
#[case("  nordic  ")]
#[case("HAWAIIAN")]
fn lookups_ignore_case_and_whitespace(builtin: ProfileRegistry, #[case] name: &str) {
    assert!(builtin.get(name).is_ok());
}

#[rstest]
fn unknown_profile_is_reported(builtin: ProfileRegistry) {
    let err = builtin.get("Klingon").err().expect("unknown profile");

    assert_eq!(
        err,
        ProfileError::NotFound {
            name: "klingon".to_owned()
        }
    );
    assert_eq!(err.to_string(), "profile 'klingon' not found");
}

#[rstest]
fn info_exposes_culture_metadata(builtin: ProfileRegistry) {
    let info = builtin.info("celtic").expect("celtic registered");

    assert_eq!(info.get(INFO_NAME).map(String::as_str), Some("celtic"));
    assert!(info.get(INFO_NOTES).is_some_and(|notes| !notes.is_empty()));
    assert_eq!(
        info.get("family_keys").map(String::as_str),
        Some("celtic, irish, scottish, welsh, gaelic")
    );
}

#[rstest]
fn overriding_a_builtin_replaces_it(builtin: ProfileRegistry) {
    builtin.register("Nordic", Arc::new(Constant("override")));

    let name = builtin
        .get("nordic")
        .expect("nordic registered")
        .generate(&ProfileConfig::new())
        .expect("constant profile");

    assert_eq!(name.first, "override");
    assert_eq!(builtin.len(), BUILTIN_CULTURES.len());
}

#[test]
fn custom_culture_profiles_can_be_registered() {
    let registry = ProfileRegistry::new();
    registry.register("norse", Arc::new(CultureProfile::new(&NORDIC)));

    let config = ProfileConfig::new().with_seed(3).with_include_last(true);
    let name = registry
        .get("norse")
        .expect("registered")
        .generate(&config)
        .expect("static culture");

    assert!(name.has_last());
}

#[test]
fn concurrent_registration_and_lookup_see_whole_entries() {
    const WRITERS: usize = 4;
    const ROUNDS: usize = 200;
    let registry = ProfileRegistry::new();
    registry.register("shared", Arc::new(Constant("initial")));

    thread::scope(|scope| {
        let shared = &registry;
        for writer in 0..WRITERS {
            scope.spawn(move || {
                let labels = ["even", "odd"].into_iter().cycle().take(ROUNDS);
                for (round, label) in labels.enumerate() {
                    shared.register("shared", Arc::new(Constant(label)));
                    shared.register(&format!("writer-{writer}-{round}"), Arc::new(Constant(label)));
                }
            });
        }

        for _ in 0..WRITERS {
            scope.spawn(move || {
                for _ in 0..ROUNDS {
                    let profile = shared.get("shared").expect("shared stays registered");
                    let name = profile
                        .generate(&ProfileConfig::new())
                        .expect("constant profile");
                    assert!(["initial", "even", "odd"].contains(&name.first.as_str()));
                    let listed = shared.list();
                    assert!(listed.windows(2).all(|pair| pair.first() < pair.last()));
                }
            });
        }
    });

    assert_eq!(registry.len(), 1 + WRITERS * ROUNDS);
}
