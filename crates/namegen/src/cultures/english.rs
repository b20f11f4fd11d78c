//! English given names and surnames.

use crate::engine::{
    CultureSpec, EndingChance, Endings, ForeignFamily, GivenNames, NameShape, NeutralMix,
    Phonology, Surnames, SyllableBias, SyllableRange,
};

/// English-style names with `-son`/`-ford` surnames and real-name fragments.
pub static ENGLISH: CultureSpec = CultureSpec {
    key: "english",
    display_name: "English",
    notes: "English-like names with surname suffixes and real-name fragments at high realism",
    aliases: &["en", "anglo"],
    given: GivenNames {
        male: &[
            "James", "William", "Thomas", "George", "Oliver", "Henry", "Edward", "Charles",
            "Arthur", "Samuel", "Daniel", "Joseph", "Benjamin", "Harry", "Jack", "Alfred",
            "Frederick", "Robert", "Richard", "Matthew", "Peter", "Simon", "Walter", "Hugh",
        ],
        female: &[
            "Elizabeth", "Mary", "Charlotte", "Emily", "Alice", "Eleanor", "Grace", "Lucy",
            "Sophie", "Harriet", "Margaret", "Catherine", "Jane", "Victoria", "Florence", "Rose",
            "Amelia", "Isabel", "Edith", "Beatrice", "Clara", "Evelyn", "Hannah", "Abigail",
        ],
        neutral: &[
            "Alex", "Jordan", "Taylor", "Morgan", "Riley", "Casey", "Jamie", "Sam", "Charlie",
            "Robin", "Ashley", "Avery",
        ],
        neutral_mix: NeutralMix::Blended {
            neutral: 60,
            male: 20,
        },
        shape: NameShape {
            syllables: SyllableRange {
                min: 2,
                max: 3,
                low_realism_min: 1,
                low_realism_max: 3,
            },
            endings: Endings {
                male: &["", "", "", "ton", "ric", "ard"],
                female: &["", "", "", "a", "ly", "beth", "ine"],
                neutral: &["", "", "", "y", "en"],
            },
            ending_chance: EndingChance {
                base: 15,
                from_60: 30,
                from_80: 40,
            },
        },
        flourish: None,
    },
    surnames: Some(Surnames {
        curated: &[
            "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies",
            "Robinson", "Wright", "Thompson", "Evans", "Walker", "White", "Roberts", "Green",
            "Hall", "Wood", "Jackson", "Clarke", "Harrison", "Cooper", "Hughes", "Ashford",
        ],
        prefixes: None,
        shape: NameShape {
            syllables: SyllableRange::fixed(1, 2),
            endings: Endings::shared(&["son", "ford", "wood", "well", "shire"]),
            ending_chance: EndingChance {
                base: 30,
                from_60: 60,
                from_80: 60,
            },
        },
        foreign_family: ForeignFamily::BareSyllables,
    }),
    phonology: Phonology {
        onsets: &[
            "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "r", "s", "t", "v",
            "w", "y", "z",
        ],
        clusters: &["br", "cl", "cr", "gr", "st", "th", "sh", "tr"],
        cluster_chance: 15,
        vowels: &["a", "e", "i", "o", "u"],
        codas: &["", "", "", "n", "r", "l", "d", "m", "s", "t"],
        inversion_chance: 0,
        fragments: &[
            "el", "ric", "mar", "an", "beth", "ron", "ly", "ton", "den", "ley", "gar", "wyn",
        ],
        given_bias: Some(SyllableBias {
            closing_codas: &["n", "r", "l", "d", "m", "s", "t"],
            male_closed: 40,
            female_bare_vowel: 30,
            neutral_closed: 30,
        }),
    },
};
