//! Japanese given names and surnames in Hepburn-style romaji.

use crate::config::Gender;
use crate::engine::{
    CultureSpec, EndingChance, Endings, Flourish, ForeignFamily, GivenNames, NameShape,
    NeutralMix, Phonology, Surnames, SyllableRange,
};

/// Japanese names built from open CV syllables and palatalised clusters.
pub static JAPANESE: CultureSpec = CultureSpec {
    key: "japanese",
    display_name: "Japanese",
    notes: "Curated romaji lists blended with kana-like procedural syllables",
    aliases: &["ja", "jp"],
    given: GivenNames {
        male: &[
            "Haruto", "Yuto", "Sota", "Yuki", "Koki", "Ren", "Kaito", "Takumi", "Daiki", "Ryota",
            "Yuma", "Riku", "Shota", "Tatsuya", "Kenta", "Keita", "Kazuki", "Shinji", "Hiroshi",
            "Taro", "Kenji", "Naoki", "Koji", "Masato", "Yusuke", "Hayato", "Shun", "Minato",
            "Itsuki", "Sora",
        ],
        female: &[
            "Yui", "Aoi", "Sakura", "Hina", "Rin", "Mio", "Yuna", "Akari", "Hana", "Mei",
            "Nanami", "Rina", "Ayaka", "Haruka", "Miku", "Misaki", "Kaori", "Emi", "Nozomi",
            "Yoko", "Keiko", "Sachiko", "Naoko", "Maki", "Chihiro", "Reina", "Sumire", "Koharu",
            "Saki", "Natsumi",
        ],
        neutral: &[
            "Akira", "Hikaru", "Kaoru", "Makoto", "Nao", "Rei", "Ryo", "Sora", "Yu", "Haruka",
        ],
        neutral_mix: NeutralMix::Blended {
            neutral: 60,
            male: 20,
        },
        shape: NameShape {
            syllables: SyllableRange {
                min: 2,
                max: 4,
                low_realism_min: 1,
                low_realism_max: 3,
            },
            endings: Endings::shared(&["", "", "", "to", "ta", "ki", "shi", "ya", "na", "ko"]),
            ending_chance: EndingChance::flat(100),
        },
        flourish: Some(Flourish {
            gender: Gender::Female,
            min_realism: 70,
            chance: 15,
            ending: "ko",
        }),
    },
    surnames: Some(Surnames {
        curated: &[
            "Sato", "Suzuki", "Takahashi", "Tanaka", "Watanabe", "Ito", "Yamamoto", "Nakamura",
            "Kobayashi", "Kato", "Yoshida", "Yamada", "Sasaki", "Yamaguchi", "Matsumoto", "Inoue",
            "Kimura", "Hayashi", "Shimizu", "Yamazaki", "Morita", "Okada", "Abe", "Fujita",
            "Ishikawa", "Hashimoto", "Ikeda", "Maeda", "Fukuda", "Ota",
        ],
        prefixes: None,
        shape: NameShape {
            syllables: SyllableRange::fixed(2, 3),
            endings: Endings::shared(&[
                "", "", "", "moto", "yama", "kawa", "zaki", "mura", "naka", "shita", "gawa",
            ]),
            ending_chance: EndingChance::flat(35),
        },
        foreign_family: ForeignFamily::CultureDefault,
    }),
    phonology: Phonology {
        onsets: &[
            "k", "s", "t", "n", "h", "m", "y", "r", "w", "g", "z", "d", "b", "p",
        ],
        clusters: &[
            "ky", "gy", "sh", "ch", "j", "ny", "hy", "by", "py", "my", "ry", "ts",
        ],
        cluster_chance: 20,
        vowels: &["a", "i", "u", "e", "o"],
        codas: &[],
        inversion_chance: 0,
        fragments: &[],
        given_bias: None,
    },
};
