//! Mandarin given names and surnames in toneless pinyin.

use crate::engine::{
    CultureSpec, EndingChance, Endings, ForeignFamily, GivenNames, NameShape, NeutralMix,
    Phonology, Surnames, SyllableRange,
};

/// Pinyin names: one-syllable surnames and two-syllable given names.
///
/// `v` stands in for `u` with an umlaut.
pub static CHINESE: CultureSpec = CultureSpec {
    key: "chinese",
    display_name: "Chinese",
    notes: "Pinyin initials and finals; single-syllable surnames, two-syllable given names",
    aliases: &["zh", "mandarin"],
    given: GivenNames {
        male: &[
            "Wei", "Jie", "Jun", "Hao", "Ming", "Lei", "Qiang", "Bo", "Chen", "Feng", "Yu", "Peng",
            "Tao", "Yang", "Bin", "Guang", "Dong", "Chao", "Gang", "Sheng", "Zhi", "Heng", "Xiang",
            "Rui", "Yong", "Xuan", "Yifan", "Haoran", "Zhe", "Yuze",
        ],
        female: &[
            "Mei", "Ling", "Yan", "Na", "Jing", "Xiu", "Hua", "Fang", "Ying", "Li", "Juan", "Min",
            "Qian", "Xue", "Xia", "Lan", "Ting", "Rong", "Xin", "Shan", "Yutong", "Yihan", "Zihan",
            "Ruoxi", "Xinyi", "Jia", "Yue", "Yuxi", "Kexin", "Meng",
        ],
        neutral: &[
            "Wei", "Yu", "Rui", "Xin", "Jia", "Yue", "Ming", "Yang", "Lin", "An",
        ],
        neutral_mix: NeutralMix::Blended {
            neutral: 60,
            male: 20,
        },
        shape: NameShape {
            syllables: SyllableRange::fixed(2, 2),
            endings: Endings::shared(&[]),
            ending_chance: EndingChance::flat(0),
        },
        flourish: None,
    },
    surnames: Some(Surnames {
        curated: &[
            "Wang", "Li", "Zhang", "Liu", "Chen", "Yang", "Huang", "Zhao", "Wu", "Zhou", "Xu",
            "Sun", "Ma", "Zhu", "Hu", "Guo", "He", "Gao", "Lin", "Luo", "Zheng", "Liang", "Xie",
            "Song", "Tang", "Han", "Feng", "Yu", "Dong", "Xiao",
        ],
        prefixes: None,
        shape: NameShape {
            syllables: SyllableRange::fixed(1, 1),
            endings: Endings::shared(&[]),
            ending_chance: EndingChance::flat(0),
        },
        foreign_family: ForeignFamily::BareSyllables,
    }),
    phonology: Phonology {
        onsets: &[
            "", "", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "zh",
            "ch", "sh", "r", "z", "c", "s", "y", "w",
        ],
        clusters: &[],
        cluster_chance: 0,
        vowels: &[
            "a", "ai", "an", "ang", "ao", "e", "ei", "en", "eng", "er", "i", "ia", "ian", "iang",
            "iao", "ie", "in", "ing", "iong", "iu", "o", "ong", "ou", "u", "ua", "uai", "uan",
            "uang", "ui", "un", "uo", "v", "ve", "van", "vn",
        ],
        codas: &[],
        inversion_chance: 0,
        fragments: &[],
        given_bias: None,
    },
};
