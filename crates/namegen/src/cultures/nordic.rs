//! Scandinavian given names and surnames.

use crate::engine::{
    CultureSpec, EndingChance, Endings, ForeignFamily, GivenNames, NameShape, NeutralMix,
    Phonology, Surnames, SyllableRange,
};

/// Swedish, Norwegian, and Danish naming patterns, romanised to ASCII.
pub static NORDIC: CultureSpec = CultureSpec {
    key: "nordic",
    display_name: "Nordic",
    notes: "Curated Scandinavian lists blended with procedural syllables",
    aliases: &["scandinavian", "norse"],
    given: GivenNames {
        male: &[
            "Erik", "Karl", "Lars", "Sven", "Bjorn", "Leif", "Nils", "Oskar", "Otto", "Felix",
            "Hans", "Johan", "Jonas", "Magnus", "Henrik", "Rolf", "Ulf", "Gunnar", "Harald",
            "Sigurd", "Anders", "Hakon", "Einar", "Ragnar", "Stellan", "Torbjorn", "Mikkel",
            "Kristian", "Mats", "Kjell",
        ],
        female: &[
            "Anna", "Elsa", "Ingrid", "Freya", "Astrid", "Sigrid", "Helga", "Greta", "Klara",
            "Maja", "Ida", "Lina", "Karin", "Hilda", "Frida", "Solveig", "Liv", "Nora", "Emilia",
            "Matilda", "Hanna", "Lotte", "Saga", "Tove", "Sanna", "Eira", "Alva", "Linnea",
            "Agnes", "Kristin",
        ],
        neutral: &[
            "Alex", "Robin", "Kim", "Noa", "Mika", "Lenn", "Toni", "Jules", "Nika", "Elli",
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
                male: &["", "", "", "er", "ar", "rik", "ulf", "vald", "son"],
                female: &["", "", "", "a", "e", "hild", "frid", "borg", "dis"],
                neutral: &["", "", "", "en", "in", "e"],
            },
            ending_chance: EndingChance::flat(100),
        },
        flourish: None,
    },
    surnames: Some(Surnames {
        curated: &[
            "Johansson", "Andersson", "Karlsson", "Nilsson", "Larsson", "Olsson", "Persson",
            "Svensson", "Gustafsson", "Pettersson", "Hansen", "Jensen", "Nielsen", "Olsen", "Lund",
            "Dahl", "Berg", "Lindberg", "Lindstrom", "Bergstrom", "Nygaard", "Skov", "Haugland",
            "Solberg", "Sandberg", "Lind", "Holm", "Ekberg", "Soderberg", "Thorsen",
        ],
        prefixes: None,
        shape: NameShape {
            syllables: SyllableRange::fixed(2, 3),
            endings: Endings::shared(&[
                "", "", "", "son", "sen", "berg", "strom", "lund", "holm", "gaard", "vik",
            ]),
            ending_chance: EndingChance {
                base: 20,
                from_60: 30,
                from_80: 45,
            },
        },
        foreign_family: ForeignFamily::CultureDefault,
    }),
    phonology: Phonology {
        onsets: &[
            "b", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "r", "s", "t", "v", "w",
            "bj", "dj", "fj", "gj", "hj", "kj", "lj", "mj", "nj", "rj", "sj", "tj", "vj", "sk",
            "st", "sp", "sn", "sm", "sl", "sv", "tr", "dr", "br", "gr", "kr", "fr",
        ],
        clusters: &[],
        cluster_chance: 0,
        vowels: &["a", "e", "i", "o", "u", "y", "ae", "oe"],
        codas: &["", "", "", "n", "r", "s", "t", "d", "k", "l", "m", "ng"],
        inversion_chance: 25,
        fragments: &[],
        given_bias: None,
    },
};
