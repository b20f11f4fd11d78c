//! Irish, Scottish, and Welsh given names and surnames.

use crate::engine::{
    CultureSpec, EndingChance, Endings, ForeignFamily, GivenNames, NameShape, NeutralMix,
    Phonology, PrefixRule, Surnames, SyllableRange,
};

/// Gaelic and Brythonic names with patronymic surname prefixes.
pub static CELTIC: CultureSpec = CultureSpec {
    key: "celtic",
    display_name: "Celtic",
    notes: "Irish, Scottish, and Welsh names; curated surnames may take Mac/Mc/O/Fitz/Ap",
    aliases: &["irish", "scottish", "welsh", "gaelic"],
    given: GivenNames {
        male: &[
            "Sean", "Liam", "Conor", "Ciaran", "Eoin", "Niall", "Fionn", "Declan", "Ronan",
            "Cormac", "Aidan", "Patrick", "Donal", "Darragh", "Colm", "Padraig", "Gavin", "Owain",
            "Rhys", "Dylan", "Alasdair", "Callum", "Ewan", "Angus", "Fergus",
        ],
        female: &[
            "Siobhan", "Aoife", "Niamh", "Saoirse", "Orla", "Maeve", "Deirdre", "Brigid",
            "Grainne", "Aisling", "Ciara", "Eimear", "Fiona", "Mairead", "Roisin", "Keira", "Erin",
            "Bronagh", "Catriona", "Gwen", "Rhian", "Sian", "Eleri", "Megan", "Bethan",
        ],
        neutral: &[
            "Rowan", "Morgan", "Rory", "Erin", "Gavin", "Fiona", "Rhys", "Dylan", "Aidan", "Maeve",
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
            endings: Endings::shared(&[
                "", "", "", "an", "en", "in", "on", "ach", "aidh", "wyn", "wen",
            ]),
            ending_chance: EndingChance::flat(40),
        },
        flourish: None,
    },
    surnames: Some(Surnames {
        curated: &[
            "Murphy", "Kelly", "OBrien", "ONeill", "Byrne", "Ryan", "Walsh", "Sullivan", "Doyle",
            "McCarthy", "MacLeod", "MacDonald", "Campbell", "Stewart", "Fraser", "Sinclair",
            "MacKenzie", "Douglas", "Jones", "Evans", "Williams", "Davies", "Morgan", "Thomas",
        ],
        prefixes: Some(PrefixRule {
            prefixes: &["Mac", "Mc", "O", "Fitz", "Ap"],
            chance: 35,
        }),
        shape: NameShape {
            syllables: SyllableRange {
                min: 2,
                max: 3,
                low_realism_min: 1,
                low_realism_max: 3,
            },
            endings: Endings::shared(&[
                "", "", "", "son", "ley", "lan", "nan", "don", "more", "ford",
            ]),
            ending_chance: EndingChance::flat(45),
        },
        foreign_family: ForeignFamily::CultureDefault,
    }),
    phonology: Phonology {
        onsets: &[
            "", "", "b", "c", "d", "f", "g", "h", "k", "l", "m", "n", "p", "r", "s", "t", "v", "w",
            "y", "br", "cr", "dr", "fr", "gr", "tr", "cl", "gl", "pl", "sl", "ch",
        ],
        clusters: &[],
        cluster_chance: 0,
        vowels: &[
            "a", "e", "i", "o", "u", "y", "ae", "ai", "ao", "ea", "ei", "eo", "ia", "ie", "io",
            "oa", "oi", "ou", "ua", "ui",
        ],
        codas: &[
            "", "", "", "", "n", "m", "r", "l", "s", "t", "d", "g", "k", "nn", "ll", "rr", "ch",
            "sh",
        ],
        inversion_chance: 0,
        fragments: &[],
        given_bias: None,
    },
};
