//! The shared draw-or-assemble procedure behind every culture profile.

use super::{
    CultureSpec, ForeignFamily, NameShape, NameSource, NeutralMix, SyllableRange, Table,
    curated_chance,
};
use crate::config::Gender;
use crate::random::RandomSource;

/// Realism below which the low-realism syllable range applies.
const LOW_REALISM_BELOW: u8 = 40;

/// Realism from which consonant clusters may replace an onset.
const CLUSTER_MIN_REALISM: u8 = 50;

/// Realism above which real-name fragments may replace a syllable.
const FRAGMENT_ABOVE_REALISM: u8 = 60;

/// Denominator of the fragment chance; the chance is `realism / 200`.
const FRAGMENT_ROLL: usize = 200;

/// One generated name component before title-casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Draw {
    pub(super) value: String,
    pub(super) source: NameSource,
}

impl Draw {
    fn curated(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: NameSource::Curated,
        }
    }

    const fn procedural(value: String) -> Self {
        Self {
            value,
            source: NameSource::Procedural,
        }
    }
}

/// Appends `suffix` unless it is empty or `name` already ends with it.
pub(super) fn append_suffix(name: &mut String, suffix: &str) {
    if !suffix.is_empty() && !name.ends_with(suffix) {
        name.push_str(suffix);
    }
}

/// Returns `true` when `surname` already opens with one of `prefixes`
/// followed by a capital, as in `MacLeod` or `OBrien`.
#[must_use]
pub(super) fn carries_prefix(surname: &str, prefixes: Table) -> bool {
    prefixes.iter().any(|prefix| {
        surname
            .strip_prefix(*prefix)
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_uppercase)
    })
}

/// Shape of one assembled syllable.
#[derive(Debug, Clone, Copy)]
enum SyllablePattern {
    /// Onset, vowel, and an optional coda.
    Usual,
    /// Onset, vowel, and a coda drawn from the given table.
    Closed(Table),
    /// A vowel alone.
    BareVowel,
}

/// Per-request synthesis state.
// `spec` is a `&'static` reference, so tables borrowed through it stay valid
// across the `&mut self` calls below.
pub(super) struct Synthesizer {
    spec: &'static CultureSpec,
    rng: RandomSource,
    gender: Gender,
    realism: u8,
    curated_chance: u32,
}

impl Synthesizer {
    pub(super) fn new(
        spec: &'static CultureSpec,
        rng: RandomSource,
        gender: Gender,
        realism: u8,
    ) -> Self {
        Self {
            spec,
            rng,
            gender,
            realism,
            curated_chance: curated_chance(realism),
        }
    }

    pub(super) fn given_name(&mut self) -> Draw {
        if self.rng.chance(self.curated_chance) {
            let pool = self.given_pool();
            return Draw::curated(*self.rng.pick(pool));
        }

        let given = &self.spec.given;
        let mut name = self.assemble(&given.shape.syllables, true);
        self.append_ending(&mut name, &given.shape, true);

        if let Some(flourish) = given.flourish {
            let eligible = flourish.gender == self.gender && self.realism >= flourish.min_realism;
            if eligible && self.rng.chance(flourish.chance) {
                append_suffix(&mut name, flourish.ending);
            }
        }

        Draw::procedural(name)
    }

    /// Returns `None` when the culture has no surname concept.
    pub(super) fn surname(&mut self, family: Option<&str>) -> Option<Draw> {
        let surnames = self.spec.surnames.as_ref()?;

        if self.rng.chance(self.curated_chance) {
            let base = *self.rng.pick(surnames.curated);
            let mut value = String::new();
            if let Some(rule) = surnames.prefixes {
                if !carries_prefix(base, rule.prefixes) && self.rng.chance(rule.chance) {
                    value.push_str(*self.rng.pick(rule.prefixes));
                }
            }
            value.push_str(base);
            return Some(Draw::curated(value));
        }

        let with_endings = self.spec.recognises_family(family)
            || surnames.foreign_family == ForeignFamily::CultureDefault;
        let mut name = self.assemble(&surnames.shape.syllables, false);
        self.append_ending(&mut name, &surnames.shape, with_endings);
        Some(Draw::procedural(name))
    }

    fn given_pool(&mut self) -> &'static [&'static str] {
        let given = &self.spec.given;
        match self.gender {
            Gender::Male => given.male,
            Gender::Female => given.female,
            Gender::Neutral => match given.neutral_mix {
                NeutralMix::NeutralOnly => given.neutral,
                NeutralMix::Blended { neutral, male } => {
                    let roll = self.rng.percent();
                    if roll < neutral {
                        given.neutral
                    } else if roll < neutral.saturating_add(male) {
                        given.male
                    } else {
                        given.female
                    }
                }
            },
        }
    }

    /// `given` enables the culture's gendered syllable bias.
    fn assemble(&mut self, range: &SyllableRange, given: bool) -> String {
        let count = if self.realism < LOW_REALISM_BELOW {
            self.rng
                .between(range.low_realism_min, range.low_realism_max)
        } else {
            self.rng.between(range.min, range.max)
        };

        let fragments = self.spec.phonology.fragments;
        let fragments_allowed = self.realism > FRAGMENT_ABOVE_REALISM && !fragments.is_empty();

        let mut name = String::new();
        for _ in 0..count.max(1) {
            if fragments_allowed && self.rng.index(FRAGMENT_ROLL) < usize::from(self.realism) {
                name.push_str(*self.rng.pick(fragments));
            } else {
                let pattern = if given {
                    self.given_pattern()
                } else {
                    SyllablePattern::Usual
                };
                self.push_syllable(&mut name, pattern);
            }
        }
        name
    }

    fn given_pattern(&mut self) -> SyllablePattern {
        let Some(bias) = self.spec.phonology.given_bias else {
            return SyllablePattern::Usual;
        };
        match self.gender {
            Gender::Female if self.rng.chance(bias.female_bare_vowel) => {
                SyllablePattern::BareVowel
            }
            Gender::Male if self.rng.chance(bias.male_closed) => {
                SyllablePattern::Closed(bias.closing_codas)
            }
            Gender::Neutral if self.rng.chance(bias.neutral_closed) => {
                SyllablePattern::Closed(bias.closing_codas)
            }
            Gender::Male | Gender::Female | Gender::Neutral => SyllablePattern::Usual,
        }
    }

    fn push_syllable(&mut self, name: &mut String, pattern: SyllablePattern) {
        let phonology = &self.spec.phonology;

        if phonology.inversion_chance > 0 && self.rng.chance(phonology.inversion_chance) {
            name.push_str(*self.rng.pick(phonology.vowels));
            name.push_str(*self.rng.pick(phonology.onsets));
            name.push_str(*self.rng.pick(phonology.vowels));
            return;
        }

        if matches!(pattern, SyllablePattern::BareVowel) {
            name.push_str(*self.rng.pick(phonology.vowels));
            return;
        }

        let use_cluster = self.realism >= CLUSTER_MIN_REALISM
            && !phonology.clusters.is_empty()
            && self.rng.chance(phonology.cluster_chance);
        let onsets = if use_cluster {
            phonology.clusters
        } else {
            phonology.onsets
        };
        name.push_str(*self.rng.pick(onsets));
        name.push_str(*self.rng.pick(phonology.vowels));
        let codas = match pattern {
            SyllablePattern::Closed(closing) if !closing.is_empty() => closing,
            SyllablePattern::Usual | SyllablePattern::Closed(_) | SyllablePattern::BareVowel => {
                phonology.codas
            }
        };
        if !codas.is_empty() {
            name.push_str(*self.rng.pick(codas));
        }
    }

    fn append_ending(&mut self, name: &mut String, shape: &NameShape, enabled: bool) {
        if !enabled {
            return;
        }
        let table = shape.endings.for_gender(self.gender);
        if table.is_empty() || !self.rng.chance(shape.ending_chance.at(self.realism)) {
            return;
        }
        append_suffix(name, *self.rng.pick(table));
    }
}
