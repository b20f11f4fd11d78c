//! Spanish given names and surnames.

use crate::engine::{
    CultureSpec, EndingChance, Endings, ForeignFamily, GivenNames, NameShape, NeutralMix,
    Phonology, Surnames, SyllableRange,
};

/// Spanish names with `-ez`/`-es` surname suffixes and open syllables.
pub static SPANISH: CultureSpec = CultureSpec {
    key: "spanish",
    display_name: "Spanish",
    notes: "Spanish-like names with -ez / -es surname suffixes and vowel-rich syllables",
    aliases: &["es", "hispanic"],
    given: GivenNames {
        male: &[
            "Alejandro", "Carlos", "Javier", "Miguel", "Pablo", "Diego", "Manuel", "Antonio",
            "Francisco", "Luis", "Sergio", "Rafael", "Fernando", "Jorge", "Alberto", "Ramon",
            "Enrique", "Andres", "Hugo", "Mateo", "Santiago", "Ignacio", "Emilio", "Tomas",
        ],
        female: &[
            "Lucia", "Maria", "Carmen", "Isabel", "Sofia", "Elena", "Paula", "Marta", "Laura",
            "Ana", "Cristina", "Pilar", "Rosa", "Beatriz", "Teresa", "Alba", "Irene", "Nuria",
            "Valeria", "Ines", "Adriana", "Silvia", "Raquel", "Dolores",
        ],
        neutral: &[
            "Alex", "Cruz", "Guadalupe", "Reyes", "Trinidad", "Ariel", "Noa", "Celeste", "Rosario",
            "Sol",
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
                male: &["", "", "", "o", "io", "ando", "el"],
                female: &["", "", "", "a", "ia", "ela", "ina"],
                neutral: &["", "", "", "e", "al"],
            },
            ending_chance: EndingChance {
                base: 20,
                from_60: 35,
                from_80: 50,
            },
        },
        flourish: None,
    },
    surnames: Some(Surnames {
        curated: &[
            "Garcia", "Martinez", "Lopez", "Sanchez", "Gonzalez", "Rodriguez", "Fernandez",
            "Perez", "Gomez", "Martin", "Jimenez", "Ruiz", "Hernandez", "Diaz", "Moreno", "Alvarez",
            "Munoz", "Romero", "Navarro", "Torres", "Dominguez", "Vazquez", "Ramos", "Castillo",
        ],
        prefixes: None,
        shape: NameShape {
            syllables: SyllableRange::fixed(1, 2),
            endings: Endings::shared(&["ez", "es", "ado", "ias"]),
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
            "b", "c", "d", "f", "g", "h", "j", "l", "m", "n", "p", "r", "s", "t", "v", "z", "",
        ],
        clusters: &["br", "cr", "dr", "gr", "pl", "tr", "ll", "ch"],
        cluster_chance: 10,
        vowels: &["a", "e", "i", "o", "u"],
        codas: &["", "", "", "", "n", "l", "r", "s"],
        inversion_chance: 0,
        fragments: &["mar", "ana", "ro", "el", "carlos", "iza", "al"],
        given_bias: None,
    },
};
