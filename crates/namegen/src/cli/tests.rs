//! Unit tests for the CLI helpers.

use std::collections::BTreeMap;

use rstest::{fixture, rstest};

use super::*;
use crate::error::GenerationError;
use crate::name::NameResult;
use crate::profile::{INFO_NAME, MockNameProfile};

fn fixed_profile(first: &'static str, last: &'static str) -> Arc<dyn NameProfile> {
    let mut mock = MockNameProfile::new();
    mock.expect_generate().returning(move |config| {
        let surname = if config.include_last() { last } else { "" };
        Ok(NameResult::new(first, surname))
    });
    mock.expect_info().returning(move || {
        BTreeMap::from([
            (INFO_NAME.to_owned(), first.to_lowercase()),
            (INFO_NOTES.to_owned(), format!("{first} notes")),
        ])
    });
    Arc::new(mock)
}

#[fixture]
fn registry() -> ProfileRegistry {
    let registry = ProfileRegistry::new();
    registry.register("english", fixed_profile("Ada", "Lovelace"));
    registry.register("hawaiian", fixed_profile("Kai", ""));
    registry
}

fn run_to_string(args: &[&str], registry: &ProfileRegistry) -> Result<String, CliError> {
    let parsed = parse_args(args.iter().copied()).expect("parse args");
    let mut out = Vec::new();
    run(&parsed, registry, &NamegenSettings::default(), &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn defaults_match_documented_flags() {
    let args = parse_args(["namegen"]).expect("parse args");

    assert_eq!(args.mode, None);
    assert_eq!(args.gender, Gender::Neutral);
    assert_eq!(args.realism, 50);
    assert_eq!(args.seed, RANDOM_SEED);
    assert_eq!(args.count, 1);
    assert!(!args.last && !args.reverse && !args.dev && !args.list);
}

#[rstest]
#[case(&["namegen", "--mode", "nordic"])]
#[case(&["namegen", "--lang", "nordic"])]
fn mode_accepts_lang_alias(#[case] argv: &[&str]) {
    let args = parse_args(argv.iter().copied()).expect("parse args");
    assert_eq!(args.mode.as_deref(), Some("nordic"));
}

#[test]
fn short_flags_map_to_config() {
    let args = parse_args([
        "namegen", "-s", "42", "-c", "3", "-l", "-r", "-d", "--gender", "Female", "--family",
        "nordic",
    ])
    .expect("parse args");
    let config = args.to_config();

    assert_eq!(config.seed(), 42);
    assert_eq!(config.count(), 3);
    assert!(config.include_last() && config.reverse() && config.dev_mode());
    assert_eq!(config.gender(), Gender::Female);
    assert_eq!(config.family(), Some("nordic"));
}

#[rstest]
#[case("-20", 0)]
#[case("250", 100)]
fn realism_out_of_range_is_clamped(#[case] raw: &str, #[case] expected: u8) {
    let args = parse_args(["namegen", "--realism", raw]).expect("parse args");
    assert_eq!(args.to_config().realism(), expected);
}

#[test]
fn invalid_gender_is_rejected() {
    assert!(parse_args(["namegen", "--gender", "robot"]).is_err());
}

#[rstest]
fn prints_one_line_per_name(registry: ProfileRegistry) {
    let text = run_to_string(&["namegen", "-c", "4"], &registry).expect("run");
    assert_eq!(text, "Ada\nAda\nAda\nAda\n");
}

#[rstest]
#[case(&["namegen", "-l"], "Ada Lovelace\n")]
#[case(&["namegen", "-l", "-r"], "Lovelace Ada\n")]
#[case(&["namegen", "-r"], "Ada\n")]
fn surname_flags_control_formatting(
    registry: ProfileRegistry,
    #[case] argv: &[&str],
    #[case] expected: &str,
) {
    assert_eq!(run_to_string(argv, &registry).expect("run"), expected);
}

#[rstest]
fn culture_without_surname_prints_first_name_only(registry: ProfileRegistry) {
    let text = run_to_string(&["namegen", "--mode", "hawaiian", "-l", "-r"], &registry)
        .expect("run");
    assert_eq!(text, "Kai\n");
}

#[rstest]
fn unknown_profile_falls_back(registry: ProfileRegistry) {
    let resolved = resolve_profile(&registry, "Klingon", "english").expect("fallback");

    assert!(resolved.fell_back);
    assert_eq!(resolved.name, "english");
    assert_eq!(
        run_to_string(&["namegen", "--mode", "klingon"], &registry).expect("run"),
        "Ada\n"
    );
}

#[rstest]
fn known_profile_is_normalised(registry: ProfileRegistry) {
    let resolved = resolve_profile(&registry, " HAWAIIAN ", "english").expect("resolve");

    assert!(!resolved.fell_back);
    assert_eq!(resolved.name, "hawaiian");
}

#[test]
fn missing_fallback_is_fatal() {
    let registry = ProfileRegistry::new();
    let err = resolve_profile(&registry, "klingon", "english")
        .err()
        .expect("no profiles registered");

    assert!(matches!(
        err,
        CliError::FallbackUnavailable { ref requested, ref fallback }
            if requested == "klingon" && fallback == "english"
    ));
}

#[test]
fn generation_errors_propagate() {
    let mut mock = MockNameProfile::new();
    mock.expect_generate().returning(|_| {
        Err(GenerationError::ResourceUnavailable {
            profile: "english".to_owned(),
            message: "dictionary offline".to_owned(),
        })
    });
    let registry = ProfileRegistry::new();
    registry.register("english", Arc::new(mock));

    let err = run_to_string(&["namegen"], &registry).expect_err("generation fails");
    assert!(matches!(err, CliError::Generation(_)));
}

#[rstest]
fn dev_mode_dumps_config_first(registry: ProfileRegistry) {
    let text = run_to_string(&["namegen", "-d", "-s", "9", "--mode", "english"], &registry)
        .expect("run");
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some(DEV_MODE_HEADER));
    assert!(text.contains("\"mode\": \"english\""));
    assert!(text.contains("\"seed\": 9"));
    assert!(text.contains("\"devMode\": true"));
    assert_eq!(text.lines().last(), Some("Ada"));
}

#[rstest]
fn list_prints_sorted_profiles_with_notes(registry: ProfileRegistry) {
    let text = run_to_string(&["namegen", "--list"], &registry).expect("run");
    assert_eq!(text, "english\tAda notes\nhawaiian\tKai notes\n");
}

#[rstest]
#[case(42, 0, 42)]
#[case(42, 3, 45)]
#[case(u64::MAX, 1, 1)]
#[case(RANDOM_SEED, 5, RANDOM_SEED)]
fn seeds_advance_per_name(#[case] base: u64, #[case] index: usize, #[case] expected: u64) {
    assert_eq!(seed_for_index(base, index), expected);
}

#[test]
fn fixed_seed_runs_are_reproducible_and_varied() {
    let registry = ProfileRegistry::with_builtin_profiles();
    let argv = ["namegen", "--mode", "nordic", "-s", "42", "-c", "5", "-l"];

    let first = run_to_string(&argv, &registry).expect("run");
    let second = run_to_string(&argv, &registry).expect("run");
    let distinct: std::collections::HashSet<&str> = first.lines().collect();

    assert_eq!(first, second);
    assert!(distinct.len() > 1, "{first}");
}

#[test]
fn default_profile_comes_from_settings() {
    let registry = ProfileRegistry::new();
    registry.register("nordic", fixed_profile("Astrid", "Lind"));
    let settings = NamegenSettings {
        default_profile: Some("nordic".to_owned()),
        fallback_profile: Some("nordic".to_owned()),
        ..NamegenSettings::default()
    };
    let args = parse_args(["namegen"]).expect("parse args");
    let mut out = Vec::new();

    run(&args, &registry, &settings, &mut out).expect("run");

    assert_eq!(String::from_utf8(out).expect("utf-8"), "Astrid\n");
}
