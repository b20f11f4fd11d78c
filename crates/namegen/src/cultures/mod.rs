//! Built-in culture records.
//!
//! Every record is static, ASCII-romanised data consumed by
//! [`CultureProfile`]. [`BUILTIN_CULTURES`] is the explicit list the registry
//! is populated from; adding a culture means adding a module here and an
//! entry to that list.

mod amharic;
mod celtic;
mod chinese;
mod english;
mod hawaiian;
mod italian;
mod japanese;
mod korean;
mod nordic;
mod spanish;

use std::sync::Arc;

use crate::engine::{CultureProfile, CultureSpec};
use crate::registry::ProfileRegistry;

pub use amharic::AMHARIC;
pub use celtic::CELTIC;
pub use chinese::CHINESE;
pub use english::ENGLISH;
pub use hawaiian::HAWAIIAN;
pub use italian::ITALIAN;
pub use japanese::JAPANESE;
pub use korean::KOREAN;
pub use nordic::NORDIC;
pub use spanish::SPANISH;

/// Every built-in culture, in registration order.
pub static BUILTIN_CULTURES: &[&CultureSpec] = &[
    &ENGLISH, &JAPANESE, &NORDIC, &SPANISH, &ITALIAN, &CELTIC, &HAWAIIAN, &CHINESE, &KOREAN,
    &AMHARIC,
];

/// Registers each built-in culture under its key.
pub fn register_builtin(registry: &ProfileRegistry) {
    for &spec in BUILTIN_CULTURES {
        registry.register(spec.key, Arc::new(CultureProfile::new(spec)));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;
    use crate::config::{Gender, ProfileConfig};
    use crate::engine::NameSource;
    use crate::name::title_case;
    use crate::profile::NameProfile;

    fn by_key(key: &str) -> &'static CultureSpec {
        BUILTIN_CULTURES
            .iter()
            .copied()
            .find(|spec| spec.key == key)
            .expect("built-in culture")
    }

    #[test]
    fn keys_are_unique_and_normalised() {
        let keys: HashSet<&str> = BUILTIN_CULTURES.iter().map(|spec| spec.key).collect();

        assert_eq!(keys.len(), BUILTIN_CULTURES.len());
        assert!(keys.iter().all(|key| *key == key.trim().to_lowercase()));
    }

    #[test]
    fn required_tables_are_populated() {
        for spec in BUILTIN_CULTURES {
            let given = &spec.given;
            assert!(!given.male.is_empty(), "{}", spec.key);
            assert!(!given.female.is_empty(), "{}", spec.key);
            assert!(!given.neutral.is_empty(), "{}", spec.key);
            assert!(!spec.phonology.onsets.is_empty(), "{}", spec.key);
            assert!(!spec.phonology.vowels.is_empty(), "{}", spec.key);
            if let Some(surnames) = &spec.surnames {
                assert!(!surnames.curated.is_empty(), "{}", spec.key);
            }
        }
    }

    #[test]
    fn registration_covers_every_culture() {
        let registry = ProfileRegistry::new();
        register_builtin(&registry);

        let mut expected: Vec<String> = BUILTIN_CULTURES
            .iter()
            .map(|spec| spec.key.to_owned())
            .collect();
        expected.sort();
        assert_eq!(registry.list(), expected);
    }

    #[rstest]
    #[case("english")]
    #[case("japanese")]
    #[case("nordic")]
    #[case("spanish")]
    #[case("italian")]
    #[case("celtic")]
    #[case("hawaiian")]
    #[case("chinese")]
    #[case("korean")]
    #[case("amharic")]
    fn every_culture_is_deterministic(#[case] key: &str) {
        let profile = CultureProfile::new(by_key(key));
        for seed in [1_u64, 42, 9_001] {
            for realism in [0_i64, 50, 100] {
                let config = ProfileConfig::new()
                    .with_seed(seed)
                    .with_realism(realism)
                    .with_gender(Gender::Female)
                    .with_include_last(true);
                let first = profile.generate(&config).expect("static culture");
                let second = profile.generate(&config).expect("static culture");

                assert_eq!(first, second);
                assert!(!first.first.is_empty());
                assert!(!first.last.is_empty());
                assert!(first.first.is_ascii());
            }
        }
    }

    #[test]
    fn random_seed_draws_mostly_differ() {
        let profile = CultureProfile::new(&ENGLISH);
        let config = ProfileConfig::new().with_realism(0).with_include_last(true);
        let distinct: HashSet<String> = (0..100)
            .map(|_| {
                profile
                    .generate(&config)
                    .expect("static culture")
                    .display(false)
            })
            .collect();

        assert!(distinct.len() > 50, "only {} distinct names", distinct.len());
    }

    #[test]
    fn english_curated_male_names_come_from_the_list() {
        let allowed: HashSet<String> = ENGLISH.given.male.iter().map(|n| title_case(n)).collect();
        let surnames: HashSet<String> = ENGLISH
            .surnames
            .as_ref()
            .expect("english surnames")
            .curated
            .iter()
            .map(|n| title_case(n))
            .collect();
        let profile = CultureProfile::new(&ENGLISH);

        for seed in 1..500 {
            let config = ProfileConfig::new()
                .with_seed(seed)
                .with_realism(100)
                .with_gender(Gender::Male)
                .with_include_last(true);
            let traced = profile.generate_traced(&config);
            if traced.given_source == NameSource::Curated {
                assert!(allowed.contains(&traced.name.first), "{}", traced.name.first);
            }
            if traced.surname_source == Some(NameSource::Curated) {
                assert!(surnames.contains(&traced.name.last), "{}", traced.name.last);
            }
        }
    }

    #[test]
    fn celtic_curated_surnames_take_patronymic_prefixes() {
        let profile = CultureProfile::new(&CELTIC);
        let prefixed = (1..2_000_u64)
            .map(|seed| {
                profile.generate_traced(
                    &ProfileConfig::new()
                        .with_seed(seed)
                        .with_realism(100)
                        .with_include_last(true),
                )
            })
            .filter(|traced| {
                traced.surname_source == Some(NameSource::Curated)
                    && ["Fitz", "Ap"]
                        .iter()
                        .any(|prefix| traced.name.last.starts_with(prefix))
            })
            .count();

        assert!(prefixed > 0);
    }

    #[test]
    fn celtic_prefixes_are_never_doubled() {
        let prefixes = CELTIC
            .surnames
            .as_ref()
            .and_then(|surnames| surnames.prefixes)
            .expect("celtic prefixes")
            .prefixes;
        let doubled: Vec<String> = prefixes
            .iter()
            .flat_map(move |outer| {
                prefixes
                    .iter()
                    .map(move |inner| format!("{outer}{inner}").to_lowercase())
            })
            .collect();
        let profile = CultureProfile::new(&CELTIC);
        let mut kept_macleod = false;

        for seed in 1..2_000_u64 {
            let traced = profile.generate_traced(
                &ProfileConfig::new()
                    .with_seed(seed)
                    .with_realism(100)
                    .with_include_last(true),
            );
            if traced.surname_source != Some(NameSource::Curated) {
                continue;
            }
            let last = traced.name.last.to_lowercase();
            assert!(
                !doubled.iter().any(|pair| last.starts_with(pair.as_str())),
                "{}",
                traced.name.last
            );
            kept_macleod |= traced.name.last == "Macleod";
        }
        assert!(kept_macleod);
    }

    #[test]
    fn chinese_surnames_are_single_syllables_at_low_realism() {
        let profile = CultureProfile::new(&CHINESE);
        for seed in 1..300 {
            let traced = profile.generate_traced(
                &ProfileConfig::new()
                    .with_seed(seed)
                    .with_realism(0)
                    .with_include_last(true),
            );
            // The longest initial plus final is `zh` + `uang`.
            assert!(traced.name.last.len() <= 6, "{}", traced.name.last);
        }
    }

    #[test]
    fn hawaiian_procedural_names_use_hawaiian_letters() {
        let profile = CultureProfile::new(&HAWAIIAN);
        for seed in 1..300 {
            let name = profile
                .generate(
                    &ProfileConfig::new()
                        .with_seed(seed)
                        .with_realism(0)
                        .with_include_last(true),
                )
                .expect("static culture");
            for part in [name.first, name.last] {
                assert!(
                    part.to_lowercase().chars().all(|c| "aeiouhklmnpw".contains(c)),
                    "{part}"
                );
            }
        }
    }
}
