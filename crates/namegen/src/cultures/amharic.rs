//! Ethiopian given names and patronymic-style surnames.

use crate::engine::{
    CultureSpec, EndingChance, Endings, ForeignFamily, GivenNames, NameShape, NeutralMix,
    Phonology, Surnames, SyllableRange,
};

/// Amharic names. Curated surnames are drawn from given names, as with
/// patronymics.
pub static AMHARIC: CultureSpec = CultureSpec {
    key: "amharic",
    display_name: "Amharic",
    notes: "Ethiopian names; surnames follow the patronymic style of reusing given names",
    aliases: &["am", "ethiopian"],
    given: GivenNames {
        male: &[
            "Abebe", "Bekele", "Dawit", "Tesfaye", "Kebede", "Getachew", "Yohannes", "Mulugeta",
            "Solomon", "Alemayehu", "Biruk", "Girma", "Haile", "Mengistu", "Tadesse", "Fikru",
            "Eshetu", "Seifu", "Addisu", "Zerihun",
        ],
        female: &[
            "Almaz", "Hanna", "Selam", "Mulu", "Meseret", "Tigist", "Rahel", "Saba", "Aster",
            "Genet", "Wubit", "Eden", "Liya", "Frehiwot", "Biruktawit", "Yeshi", "Marta", "Tsedey",
            "Yodit", "Mekdes",
        ],
        neutral: &[
            "Selam", "Biruk", "Mulu", "Genet", "Eden", "Liya", "Saba", "Haile", "Solomon", "Addisu",
        ],
        neutral_mix: NeutralMix::NeutralOnly,
        shape: NameShape {
            syllables: SyllableRange {
                min: 2,
                max: 3,
                low_realism_min: 1,
                low_realism_max: 3,
            },
            endings: Endings::shared(&["", "", "", "e", "u", "a", "ye"]),
            ending_chance: EndingChance::flat(45),
        },
        flourish: None,
    },
    surnames: Some(Surnames {
        curated: &[
            "Bekele", "Tesfaye", "Kebede", "Abebe", "Getachew", "Alemayehu", "Girma", "Haile",
            "Mengistu", "Tadesse",
        ],
        prefixes: None,
        shape: NameShape {
            syllables: SyllableRange::fixed(2, 2),
            endings: Endings::shared(&["", "", "", "ye", "w", "e"]),
            ending_chance: EndingChance::flat(50),
        },
        foreign_family: ForeignFamily::CultureDefault,
    }),
    phonology: Phonology {
        onsets: &[
            "", "", "b", "d", "f", "g", "h", "k", "l", "m", "n", "p", "r", "s", "t", "w", "y",
            "z", "ch", "sh",
        ],
        clusters: &[],
        cluster_chance: 0,
        vowels: &["a", "e", "i", "o", "u", "aa", "ee", "ie"],
        codas: &["", "", "", "", "n", "m", "r", "l", "t"],
        inversion_chance: 0,
        fragments: &[],
        given_bias: None,
    },
};
