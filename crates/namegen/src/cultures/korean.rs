//! Korean given names and surnames in Revised Romanisation.

use crate::engine::{
    CultureSpec, EndingChance, Endings, ForeignFamily, GivenNames, NameShape, NeutralMix,
    Phonology, Surnames, SyllableRange,
};

/// Korean names: one-syllable surnames and mostly two-syllable given names.
pub static KOREAN: CultureSpec = CultureSpec {
    key: "korean",
    display_name: "Korean",
    notes: "Romanised hangul-like syllables; single-syllable surnames",
    aliases: &["ko"],
    given: GivenNames {
        male: &[
            "Minjun", "Seojun", "Jiho", "Joon", "Hyunwoo", "Taehyun", "Junho", "Donghyun",
            "Seungmin", "Jisung", "Hyun", "Sungmin", "Jinhyuk", "Jaehoon", "Wonjun", "Daehyun",
            "Kangmin", "Sangwoo", "Youngho", "Byungwoo", "Jaewon", "Seungwoo", "Kihyun", "Sungwoo",
            "Hyeonjin", "Seongho", "Jinwoo", "Kyungsoo", "Inho", "Gunwoo",
        ],
        female: &[
            "Seoyeon", "Seoah", "Jiwon", "Soojin", "Hyejin", "Yuna", "Minseo", "Jiyeon", "Eunji",
            "Soyeon", "Hayoung", "Yeji", "Dahyun", "Seulgi", "Nayeon", "Jisoo", "Jieun", "Eunseo",
            "Chaeyoung", "Sumin", "Yejin", "Hana", "Hyerin", "Jimin", "Bomin", "Sora", "Yuri",
            "Sena", "Mina", "Euna",
        ],
        neutral: &[
            "Jiwon", "Jimin", "Hana", "Yuna", "Mina", "Yuri", "Sora", "Hyun", "Jun", "Eun",
        ],
        neutral_mix: NeutralMix::Blended {
            neutral: 60,
            male: 20,
        },
        shape: NameShape {
            syllables: SyllableRange {
                min: 2,
                max: 2,
                low_realism_min: 2,
                low_realism_max: 3,
            },
            endings: Endings::shared(&[]),
            ending_chance: EndingChance::flat(0),
        },
        flourish: None,
    },
    surnames: Some(Surnames {
        curated: &[
            "Kim", "Lee", "Park", "Choi", "Jung", "Kang", "Cho", "Yoon", "Jang", "Lim", "Han",
            "Oh", "Seo", "Shin", "Kwon", "Hwang", "Ahn", "Song", "Ryu", "Hong", "Yang", "Ko",
            "Moon", "Baek", "Heo", "Nam", "Jeon", "Bae", "No", "Min",
        ],
        prefixes: None,
        shape: NameShape {
            syllables: SyllableRange::fixed(1, 1),
            endings: Endings::shared(&[]),
            ending_chance: EndingChance::flat(0),
        },
        foreign_family: ForeignFamily::CultureDefault,
    }),
    phonology: Phonology {
        onsets: &[
            "g", "k", "n", "d", "t", "r", "m", "b", "p", "s", "j", "ch", "h", "", "", "",
        ],
        clusters: &["kk", "tt", "pp", "ss", "jj"],
        cluster_chance: 5,
        vowels: &[
            "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "u", "wo",
            "we", "wi", "yu", "eu", "ui", "i",
        ],
        codas: &["", "", "", "", "n", "m", "ng", "k", "t", "l", "r", "s"],
        inversion_chance: 0,
        fragments: &[],
        given_bias: None,
    },
};
