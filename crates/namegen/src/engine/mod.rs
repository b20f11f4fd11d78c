//! Parameterised name synthesis shared by every culture profile.
//!
//! A culture is described by a data-only [`CultureSpec`]: curated name pools,
//! a small phonotactic grammar, and the shape rules for given names and
//! surnames. [`CultureProfile`] runs the shared algorithm over a spec and
//! implements [`NameProfile`].
//!
//! # Algorithm
//!
//! 1. Clamp realism and map it through the step curve in [`curated_chance`]
//!    to the probability of drawing from a curated list.
//! 2. Draw the given name from the gendered curated pool, or assemble it from
//!    syllables (onset, vowel, optional coda), optional real-name fragments,
//!    and an idempotent ending.
//! 3. When a surname is requested and the culture has surnames, draw or
//!    assemble it the same way, honouring the family hint.
//! 4. Title-case both parts.

mod realism;
mod synthesis;

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{Gender, ProfileConfig};
use crate::error::GenerationError;
use crate::name::{NameResult, title_case};
use crate::profile::{INFO_NAME, INFO_NOTES, NameProfile};
use crate::random::RandomSource;

pub use realism::curated_chance;

use synthesis::Synthesizer;

/// A static table of name fragments.
pub type Table = &'static [&'static str];

/// Data describing one culture's naming style.
#[derive(Debug)]
pub struct CultureSpec {
    /// Registry key, lowercase.
    pub key: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Free-text notes surfaced through [`NameProfile::info`].
    pub notes: &'static str,
    /// Additional family hints treated as this culture.
    pub aliases: Table,
    /// Given-name pools and shape.
    pub given: GivenNames,
    /// Surname rules; `None` for cultures without surnames.
    pub surnames: Option<Surnames>,
    /// Syllable building blocks.
    pub phonology: Phonology,
}

/// Curated given-name pools and the procedural shape for given names.
#[derive(Debug)]
pub struct GivenNames {
    /// Male-leaning curated names.
    pub male: Table,
    /// Female-leaning curated names.
    pub female: Table,
    /// Gender-neutral curated names.
    pub neutral: Table,
    /// Pool mix used when the requested gender is neutral.
    pub neutral_mix: NeutralMix,
    /// Procedural shape.
    pub shape: NameShape,
    /// Optional gendered ending applied at high realism.
    pub flourish: Option<Flourish>,
}

/// Curated surnames and the procedural shape for surnames.
#[derive(Debug)]
pub struct Surnames {
    /// Curated surnames.
    pub curated: Table,
    /// Optional prefixes occasionally joined to curated surnames.
    pub prefixes: Option<PrefixRule>,
    /// Procedural shape.
    pub shape: NameShape,
    /// Policy for family hints naming another culture.
    pub foreign_family: ForeignFamily,
}

/// Procedural shape of a name: syllable count and endings.
#[derive(Debug)]
pub struct NameShape {
    /// Number of syllables to assemble.
    pub syllables: SyllableRange,
    /// Ending tables by gender.
    pub endings: Endings,
    /// Chance of appending an ending, rising with realism.
    pub ending_chance: EndingChance,
}

/// Inclusive syllable-count ranges.
///
/// Realism below 40 uses the `low_realism_*` range, which typically allows
/// shorter, rougher names.
#[derive(Debug, Clone, Copy)]
pub struct SyllableRange {
    /// Minimum syllables at realism 40 and above.
    pub min: u32,
    /// Maximum syllables at realism 40 and above.
    pub max: u32,
    /// Minimum syllables below realism 40.
    pub low_realism_min: u32,
    /// Maximum syllables below realism 40.
    pub low_realism_max: u32,
}

impl SyllableRange {
    /// A range used at every realism level.
    #[must_use]
    pub const fn fixed(min: u32, max: u32) -> Self {
        Self {
            min,
            max,
            low_realism_min: min,
            low_realism_max: max,
        }
    }
}

/// Ending tables by gender. Empty entries weight "no ending".
#[derive(Debug, Clone, Copy)]
pub struct Endings {
    /// Endings for male names.
    pub male: Table,
    /// Endings for female names.
    pub female: Table,
    /// Endings for neutral names.
    pub neutral: Table,
}

impl Endings {
    /// One table shared by every gender.
    #[must_use]
    pub const fn shared(table: Table) -> Self {
        Self {
            male: table,
            female: table,
            neutral: table,
        }
    }

    /// Returns the table for `gender`.
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> Table {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Neutral => self.neutral,
        }
    }
}

/// Percentage chance of appending an ending, stepped by realism.
#[derive(Debug, Clone, Copy)]
pub struct EndingChance {
    /// Chance below realism 60.
    pub base: u32,
    /// Chance from realism 60.
    pub from_60: u32,
    /// Chance from realism 80.
    pub from_80: u32,
}

impl EndingChance {
    /// The same chance at every realism level.
    #[must_use]
    pub const fn flat(pct: u32) -> Self {
        Self {
            base: pct,
            from_60: pct,
            from_80: pct,
        }
    }

    /// Returns the chance for a clamped realism value.
    #[must_use]
    pub const fn at(&self, realism: u8) -> u32 {
        if realism >= 80 {
            self.from_80
        } else if realism >= 60 {
            self.from_60
        } else {
            self.base
        }
    }
}

/// Pool mix for neutral requests.
#[derive(Debug, Clone, Copy)]
pub enum NeutralMix {
    /// Percent from the neutral pool, percent from the male pool; the
    /// remainder comes from the female pool.
    Blended {
        /// Share of neutral names.
        neutral: u32,
        /// Share of male names.
        male: u32,
    },
    /// Neutral requests only use the neutral pool.
    NeutralOnly,
}

/// Syllable building blocks.
#[derive(Debug)]
pub struct Phonology {
    /// Syllable onsets; empty strings allow vowel-initial syllables.
    pub onsets: Table,
    /// Consonant clusters that may replace the onset from realism 50.
    pub clusters: Table,
    /// Chance of using a cluster when allowed.
    pub cluster_chance: u32,
    /// Syllable nuclei.
    pub vowels: Table,
    /// Optional codas; an empty table gives open syllables.
    pub codas: Table,
    /// Chance of a vowel-onset-vowel syllable instead of the usual order.
    pub inversion_chance: u32,
    /// Real-name fragments injected in place of syllables above realism 60.
    pub fragments: Table,
    /// Optional gendered syllable patterns for given names.
    pub given_bias: Option<SyllableBias>,
}

/// Gendered syllable patterns for procedural given names.
///
/// Each chance is rolled per syllable; surnames always use the usual pattern.
#[derive(Debug, Clone, Copy)]
pub struct SyllableBias {
    /// Codas used for closed syllables.
    pub closing_codas: Table,
    /// Chance of a closed syllable in male names.
    pub male_closed: u32,
    /// Chance of a vowel-only syllable in female names.
    pub female_bare_vowel: u32,
    /// Chance of a closed syllable in neutral names.
    pub neutral_closed: u32,
}

/// An ending favoured for one gender at high realism.
#[derive(Debug, Clone, Copy)]
pub struct Flourish {
    /// Gender the flourish applies to.
    pub gender: Gender,
    /// Minimum realism.
    pub min_realism: u8,
    /// Percentage chance once eligible.
    pub chance: u32,
    /// The ending itself.
    pub ending: &'static str,
}

/// Prefixes joined to curated surnames, such as `Mac` or `Fitz`.
#[derive(Debug, Clone, Copy)]
pub struct PrefixRule {
    /// Candidate prefixes.
    pub prefixes: Table,
    /// Percentage chance of prefixing a curated surname.
    pub chance: u32,
}

/// How a culture treats a family hint naming some other culture.
///
/// Unrecognised hints are never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignFamily {
    /// Apply the culture's usual surname rules.
    CultureDefault,
    /// Assemble procedural surnames without the culture's endings.
    BareSyllables,
}

/// Where a name component came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameSource {
    /// Drawn from a curated list.
    Curated,
    /// Assembled from syllables.
    Procedural,
}

/// A generated name together with the source of each component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedName {
    /// The generated name.
    pub name: NameResult,
    /// Source of the given name.
    pub given_source: NameSource,
    /// Source of the surname; `None` when no surname was produced.
    pub surname_source: Option<NameSource>,
}

impl CultureSpec {
    /// Returns `true` when `family` selects this culture's own surname rules.
    ///
    /// A missing hint, the culture key, and any alias all match,
    /// case-insensitively.
    #[must_use]
    pub fn recognises_family(&self, family: Option<&str>) -> bool {
        family.is_none_or(|hint| {
            hint.eq_ignore_ascii_case(self.key)
                || self
                    .aliases
                    .iter()
                    .any(|alias| hint.eq_ignore_ascii_case(alias))
        })
    }
}

/// A [`NameProfile`] driven by a [`CultureSpec`].
#[derive(Debug, Clone, Copy)]
pub struct CultureProfile {
    spec: &'static CultureSpec,
}

impl CultureProfile {
    /// Wraps a culture spec.
    #[must_use]
    pub const fn new(spec: &'static CultureSpec) -> Self {
        Self { spec }
    }

    /// Returns the underlying spec.
    #[must_use]
    pub const fn spec(&self) -> &'static CultureSpec {
        self.spec
    }

    /// Generates a name and reports where each component came from.
    #[must_use]
    pub fn generate_traced(&self, config: &ProfileConfig) -> TracedName {
        let realism = config.realism();
        let chance = curated_chance(realism);
        let rng = RandomSource::new(config.seed());
        debug!(
            profile = self.spec.key,
            realism,
            curated_chance = chance,
            deterministic = rng.is_deterministic(),
            "generating name"
        );

        let mut synth = Synthesizer::new(self.spec, rng, config.gender(), realism);
        let given = synth.given_name();

        let surname = if config.include_last() {
            let family = config.family();
            if !self.spec.recognises_family(family) {
                debug!(
                    profile = self.spec.key,
                    family, "family hint not recognised; using culture defaults"
                );
            }
            synth.surname(family)
        } else {
            None
        };

        let (last, surname_source) = surname.map_or_else(
            || (String::new(), None),
            |draw| (title_case(&draw.value), Some(draw.source)),
        );

        TracedName {
            name: NameResult::new(title_case(&given.value), last),
            given_source: given.source,
            surname_source,
        }
    }
}

impl NameProfile for CultureProfile {
    fn generate(&self, config: &ProfileConfig) -> Result<NameResult, GenerationError> {
        Ok(self.generate_traced(config).name)
    }

    fn info(&self) -> BTreeMap<String, String> {
        let family_keys = std::iter::once(self.spec.key)
            .chain(self.spec.aliases.iter().copied())
            .collect::<Vec<_>>()
            .join(", ");
        let surnames = if self.spec.surnames.is_some() {
            "yes"
        } else {
            "no"
        };

        BTreeMap::from([
            (INFO_NAME.to_owned(), self.spec.key.to_owned()),
            ("display_name".to_owned(), self.spec.display_name.to_owned()),
            (INFO_NOTES.to_owned(), self.spec.notes.to_owned()),
            ("surnames".to_owned(), surnames.to_owned()),
            ("family_keys".to_owned(), family_keys),
        ])
    }
}
