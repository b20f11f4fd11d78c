//! Hawaiian given names and surnames.

use crate::engine::{
    CultureSpec, EndingChance, Endings, ForeignFamily, GivenNames, NameShape, NeutralMix,
    Phonology, Surnames, SyllableRange,
};

/// Hawaiian names: eight consonants, open syllables, long vowel runs.
pub static HAWAIIAN: CultureSpec = CultureSpec {
    key: "hawaiian",
    display_name: "Hawaiian",
    notes: "Strict open-syllable phonotactics; neutral requests draw only neutral names",
    aliases: &["haw"],
    given: GivenNames {
        male: &[
            "Kai", "Keanu", "Koa", "Noa", "Ikaika", "Kekoa", "Makana", "Keoni", "Kaleo", "Kanani",
            "Maleko", "Kainoa", "Kimo", "Kekai", "Lono", "Keola", "Makoa", "Nalu",
        ],
        female: &[
            "Leilani", "Kalani", "Malia", "Noelani", "Nalani", "Keala", "Moana", "Anela", "Kiana",
            "Lani", "Makana", "Kailani", "Melia", "Alana", "Kapua", "Mahina", "Kalea", "Kamalani",
            "Nanea", "Kekepania",
        ],
        neutral: &[
            "Kai", "Kalani", "Noa", "Moana", "Makana", "Lani", "Nalu", "Keala", "Kaleo", "Mahina",
        ],
        neutral_mix: NeutralMix::NeutralOnly,
        shape: NameShape {
            syllables: SyllableRange {
                min: 2,
                max: 4,
                low_realism_min: 2,
                low_realism_max: 4,
            },
            endings: Endings::shared(&["", "", "", "a", "i", "o", "u"]),
            ending_chance: EndingChance::flat(35),
        },
        flourish: None,
    },
    surnames: Some(Surnames {
        curated: &[
            "Kamehameha", "Kalakaua", "Kealoha", "Kawika", "Kailani", "Makana", "Kaleo", "Kamaka",
            "Keoni", "Kahale",
        ],
        prefixes: None,
        shape: NameShape {
            syllables: SyllableRange {
                min: 4,
                max: 4,
                low_realism_min: 3,
                low_realism_max: 5,
            },
            endings: Endings::shared(&["", "", "", "lani", "nui", "loa", "mano"]),
            ending_chance: EndingChance::flat(45),
        },
        foreign_family: ForeignFamily::CultureDefault,
    }),
    phonology: Phonology {
        onsets: &["", "", "h", "k", "l", "m", "n", "p", "w"],
        clusters: &[],
        cluster_chance: 0,
        vowels: &[
            "a", "e", "i", "o", "u", "ai", "ae", "ao", "au", "ei", "io", "oa", "oi", "ou", "ua",
            "ui",
        ],
        codas: &[],
        inversion_chance: 0,
        fragments: &[],
        given_bias: None,
    },
};
