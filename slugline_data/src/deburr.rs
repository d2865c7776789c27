//! Latin deburring table and the combining-mark ranges stripped alongside it.
//!
//! Covers Latin-1 Supplement, Latin Extended-A and Latin Extended-B letters.
//! Anything outside these blocks is left for the NFKD pass to decompose.

/// Basic-Latin spelling for an accented Latin-1 Supplement or Latin
/// Extended-A/B letter, or `None` if `c` is not one.
///
/// Extended-B tone letters, clicks and the glottal stops have no Latin base
/// and return `None`.
///
/// ```
/// use slugline_data::deburr::deburr_letter;
///
/// assert_eq!(deburr_letter('é'), Some("e"));
/// assert_eq!(deburr_letter('Æ'), Some("Ae"));
/// assert_eq!(deburr_letter('×'), None);
/// ```
pub fn deburr_letter(c: char) -> Option<&'static str> {
    let base = match c {
        // Latin-1 Supplement
        '\u{C0}'..='\u{C5}' => "A",
        '\u{C6}' => "Ae",
        '\u{C7}' => "C",
        '\u{C8}'..='\u{CB}' => "E",
        '\u{CC}'..='\u{CF}' => "I",
        '\u{D0}' => "D",
        '\u{D1}' => "N",
        '\u{D2}'..='\u{D6}' | '\u{D8}' => "O",
        '\u{D9}'..='\u{DC}' => "U",
        '\u{DD}' => "Y",
        '\u{DE}' => "Th",
        '\u{DF}' => "ss",
        '\u{E0}'..='\u{E5}' => "a",
        '\u{E6}' => "ae",
        '\u{E7}' => "c",
        '\u{E8}'..='\u{EB}' => "e",
        '\u{EC}'..='\u{EF}' => "i",
        '\u{F0}' => "d",
        '\u{F1}' => "n",
        '\u{F2}'..='\u{F6}' | '\u{F8}' => "o",
        '\u{F9}'..='\u{FC}' => "u",
        '\u{FD}' | '\u{FF}' => "y",
        '\u{FE}' => "th",

        // Latin Extended-A
        '\u{100}' | '\u{102}' | '\u{104}' => "A",
        '\u{101}' | '\u{103}' | '\u{105}' => "a",
        '\u{106}' | '\u{108}' | '\u{10A}' | '\u{10C}' => "C",
        '\u{107}' | '\u{109}' | '\u{10B}' | '\u{10D}' => "c",
        '\u{10E}' | '\u{110}' => "D",
        '\u{10F}' | '\u{111}' => "d",
        '\u{112}' | '\u{114}' | '\u{116}' | '\u{118}' | '\u{11A}' => "E",
        '\u{113}' | '\u{115}' | '\u{117}' | '\u{119}' | '\u{11B}' => "e",
        '\u{11C}' | '\u{11E}' | '\u{120}' | '\u{122}' => "G",
        '\u{11D}' | '\u{11F}' | '\u{121}' | '\u{123}' => "g",
        '\u{124}' | '\u{126}' => "H",
        '\u{125}' | '\u{127}' => "h",
        '\u{128}' | '\u{12A}' | '\u{12C}' | '\u{12E}' | '\u{130}' => "I",
        '\u{129}' | '\u{12B}' | '\u{12D}' | '\u{12F}' | '\u{131}' => "i",
        '\u{132}' => "IJ",
        '\u{133}' => "ij",
        '\u{134}' => "J",
        '\u{135}' => "j",
        '\u{136}' => "K",
        '\u{137}' | '\u{138}' => "k",
        '\u{139}' | '\u{13B}' | '\u{13D}' | '\u{13F}' | '\u{141}' => "L",
        '\u{13A}' | '\u{13C}' | '\u{13E}' | '\u{140}' | '\u{142}' => "l",
        '\u{143}' | '\u{145}' | '\u{147}' | '\u{14A}' => "N",
        '\u{144}' | '\u{146}' | '\u{148}' | '\u{14B}' => "n",
        '\u{149}' => "'n",
        '\u{14C}' | '\u{14E}' | '\u{150}' => "O",
        '\u{14D}' | '\u{14F}' | '\u{151}' => "o",
        '\u{152}' => "Oe",
        '\u{153}' => "oe",
        '\u{154}' | '\u{156}' | '\u{158}' => "R",
        '\u{155}' | '\u{157}' | '\u{159}' => "r",
        '\u{15A}' | '\u{15C}' | '\u{15E}' | '\u{160}' => "S",
        '\u{15B}' | '\u{15D}' | '\u{15F}' | '\u{161}' | '\u{17F}' => "s",
        '\u{162}' | '\u{164}' | '\u{166}' => "T",
        '\u{163}' | '\u{165}' | '\u{167}' => "t",
        '\u{168}' | '\u{16A}' | '\u{16C}' | '\u{16E}' | '\u{170}' | '\u{172}' => "U",
        '\u{169}' | '\u{16B}' | '\u{16D}' | '\u{16F}' | '\u{171}' | '\u{173}' => "u",
        '\u{174}' => "W",
        '\u{175}' => "w",
        '\u{176}' | '\u{178}' => "Y",
        '\u{177}' => "y",
        '\u{179}' | '\u{17B}' | '\u{17D}' => "Z",
        '\u{17A}' | '\u{17C}' | '\u{17E}' => "z",
        // Latin Extended-B
        '\u{180}' | '\u{183}' => "b",
        '\u{181}' | '\u{182}' | '\u{243}' => "B",
        '\u{186}' | '\u{19F}' | '\u{1A0}' | '\u{1D1}' | '\u{1EA}' | '\u{1EC}' | '\u{1FE}' | '\u{20C}' | '\u{20E}'
        | '\u{22A}' | '\u{22C}' | '\u{22E}' | '\u{230}' => "O",
        '\u{1A1}' | '\u{1D2}' | '\u{1EB}' | '\u{1ED}' | '\u{1FF}' | '\u{20D}' | '\u{20F}' | '\u{22B}' | '\u{22D}'
        | '\u{22F}' | '\u{231}' => "o",
        '\u{187}' | '\u{23B}' => "C",
        '\u{188}' | '\u{23C}' => "c",
        '\u{189}' | '\u{18A}' | '\u{18B}' => "D",
        '\u{18C}' | '\u{221}' => "d",
        '\u{18E}' | '\u{18F}' | '\u{190}' | '\u{204}' | '\u{206}' | '\u{228}' | '\u{246}' => "E",
        '\u{1DD}' | '\u{205}' | '\u{207}' | '\u{229}' | '\u{247}' => "e",
        '\u{191}' => "F",
        '\u{192}' => "f",
        '\u{193}' | '\u{194}' | '\u{1E4}' | '\u{1E6}' | '\u{1F4}' => "G",
        '\u{1E5}' | '\u{1E7}' | '\u{1F5}' => "g",
        '\u{195}' => "hv",
        '\u{1F6}' => "Hv",
        '\u{21E}' => "H",
        '\u{21F}' => "h",
        '\u{196}' | '\u{197}' | '\u{1CF}' | '\u{208}' | '\u{20A}' => "I",
        '\u{1D0}' | '\u{209}' | '\u{20B}' => "i",
        '\u{198}' | '\u{1E8}' => "K",
        '\u{199}' | '\u{1E9}' => "k",
        '\u{19A}' | '\u{234}' => "l",
        '\u{23D}' => "L",
        '\u{19C}' => "M",
        '\u{19D}' | '\u{1F8}' | '\u{220}' => "N",
        '\u{19E}' | '\u{1F9}' | '\u{235}' => "n",
        '\u{1A2}' => "OI",
        '\u{1A3}' => "oi",
        '\u{1A4}' => "P",
        '\u{1A5}' => "p",
        '\u{1A6}' | '\u{210}' | '\u{212}' | '\u{24C}' => "R",
        '\u{211}' | '\u{213}' | '\u{24D}' => "r",
        '\u{218}' => "S",
        '\u{219}' | '\u{23F}' => "s",
        '\u{1AC}' | '\u{1AE}' | '\u{21A}' | '\u{23E}' => "T",
        '\u{1AB}' | '\u{1AD}' | '\u{21B}' | '\u{236}' => "t",
        '\u{1AF}' | '\u{1B1}' | '\u{1D3}' | '\u{1D5}' | '\u{1D7}' | '\u{1D9}' | '\u{1DB}' | '\u{214}' | '\u{216}'
        | '\u{244}' => "U",
        '\u{1B0}' | '\u{1D4}' | '\u{1D6}' | '\u{1D8}' | '\u{1DA}' | '\u{1DC}' | '\u{215}' | '\u{217}' => "u",
        '\u{1B2}' | '\u{245}' => "V",
        '\u{1B3}' | '\u{232}' | '\u{24E}' => "Y",
        '\u{1B4}' | '\u{233}' | '\u{24F}' => "y",
        '\u{1B5}' | '\u{1B7}' | '\u{1EE}' | '\u{224}' => "Z",
        '\u{1B6}' | '\u{1BA}' | '\u{1EF}' | '\u{225}' | '\u{240}' => "z",
        '\u{1BF}' => "w",
        '\u{1F7}' => "W",
        '\u{1C4}' | '\u{1F1}' => "DZ",
        '\u{1C5}' | '\u{1F2}' => "Dz",
        '\u{1C6}' | '\u{1F3}' => "dz",
        '\u{1C7}' => "LJ",
        '\u{1C8}' => "Lj",
        '\u{1C9}' => "lj",
        '\u{1CA}' => "NJ",
        '\u{1CB}' => "Nj",
        '\u{1CC}' => "nj",
        '\u{1CD}' | '\u{1DE}' | '\u{1E0}' | '\u{1FA}' | '\u{200}' | '\u{202}' | '\u{226}' | '\u{23A}' => "A",
        '\u{1CE}' | '\u{1DF}' | '\u{1E1}' | '\u{1FB}' | '\u{201}' | '\u{203}' | '\u{227}' => "a",
        '\u{1E2}' | '\u{1FC}' => "AE",
        '\u{1E3}' | '\u{1FD}' => "ae",
        '\u{1F0}' | '\u{237}' | '\u{249}' => "j",
        '\u{248}' => "J",
        '\u{222}' => "OU",
        '\u{223}' => "ou",
        '\u{238}' => "db",
        '\u{239}' => "qp",
        '\u{24A}' => "Q",
        '\u{24B}' => "q",
        _ => return None,
    };
    Some(base)
}

/// Combining Diacritical Marks, Combining Half Marks, and Combining
/// Diacritical Marks for Symbols.
pub const COMBINING_MARK_RANGES: &[(char, char)] = &[
    ('\u{0300}', '\u{036F}'),
    ('\u{20D0}', '\u{20FF}'),
    ('\u{FE20}', '\u{FE2F}'),
];

pub fn is_combining_mark(c: char) -> bool {
    COMBINING_MARK_RANGES
        .iter()
        .any(|&(low, high)| (low..=high).contains(&c))
}
