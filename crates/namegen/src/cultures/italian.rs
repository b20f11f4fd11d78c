//! Italian given names and surnames.

use crate::engine::{
    CultureSpec, EndingChance, Endings, ForeignFamily, GivenNames, NameShape, NeutralMix,
    Phonology, Surnames, SyllableRange,
};

/// Italian names with diphthong-rich vowels and diminutive endings.
pub static ITALIAN: CultureSpec = CultureSpec {
    key: "italian",
    display_name: "Italian",
    notes: "Curated Italian lists blended with procedural syllables and diminutive endings",
    aliases: &["it"],
    given: GivenNames {
        male: &[
            "Marco", "Luca", "Matteo", "Giovanni", "Francesco", "Alessandro", "Andrea", "Giorgio",
            "Paolo", "Stefano", "Roberto", "Davide", "Simone", "Federico", "Riccardo", "Antonio",
            "Giuseppe", "Salvatore", "Vincenzo", "Nicola", "Enrico", "Fabio", "Daniele",
            "Massimo", "Leonardo", "Emanuele", "Pietro", "Filippo", "Michele", "Claudio",
        ],
        female: &[
            "Giulia", "Sofia", "Martina", "Francesca", "Chiara", "Alice", "Elena", "Valentina",
            "Sara", "Laura", "Federica", "Alessia", "Giorgia", "Silvia", "Elisa", "Paola",
            "Roberta", "Claudia", "Maria", "Anna", "Beatrice", "Camilla", "Arianna", "Lucia",
            "Ilaria", "Simona", "Caterina", "Serena", "Emanuela", "Cristina",
        ],
        neutral: &[
            "Andrea", "Gabriele", "Alex", "Noa", "Sasha", "Giovi", "Dani", "Vale", "Nico", "Rene",
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
                male: &["", "", "", "o", "i", "e", "ino", "etto", "one"],
                female: &["", "", "", "a", "ia", "ina", "etta", "ella"],
                neutral: &["", "", "", "a", "e", "i"],
            },
            ending_chance: EndingChance::flat(100),
        },
        flourish: None,
    },
    surnames: Some(Surnames {
        curated: &[
            "Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci",
            "Marino", "Greco", "Bruno", "Gallo", "Conti", "Costa", "Giordano", "Mancini", "Rizzo",
            "Lombardi", "Moretti", "Barbieri", "Fontana", "Santoro", "Mariani", "Rinaldi",
            "Caruso", "Ferrara", "Gatti", "Longo", "Martinelli", "Leone",
        ],
        prefixes: None,
        shape: NameShape {
            syllables: SyllableRange::fixed(2, 3),
            endings: Endings::shared(&[
                "", "", "", "i", "o", "a", "ini", "etti", "elli", "one", "aro",
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
            "b", "c", "d", "f", "g", "l", "m", "n", "p", "r", "s", "t", "v", "z", "br", "cr",
            "dr", "fr", "gr", "pr", "tr", "ch", "gh", "gl", "gn", "sc", "sp", "st", "", "",
        ],
        clusters: &[],
        cluster_chance: 0,
        vowels: &["a", "e", "i", "o", "u", "ai", "ei", "ia", "io", "ua"],
        codas: &["", "", "", "n", "l", "r", "s", "t"],
        inversion_chance: 25,
        fragments: &[],
        given_bias: None,
    },
};
