//! Character-property predicates: `\p{...}`, `\P{...}`, `[:name:]`.
//!
//! Classification is purely lexical. Names resolve against static tables
//! under UAX44-LM3 loose matching: case-insensitive, underscores, hyphens
//! and whitespace ignored, optional leading `is`. Whatever the tables don't
//! know is preserved verbatim as `Other` so the AST round-trips across
//! classifier databases.

use silk_ast::{Atom, AtomKind, CharacterProperty, GeneralCategory, PosixClass, PropertyKind};

use crate::diagnostics::{ParseErrorKind, Result};
use crate::parser::Parser;

impl Parser<'_> {
    /// `\p{...}` / `\P{...}`; the `p`/`P` is consumed, `inverted` records
    /// which one it was.
    pub(crate) fn lex_character_property(&mut self, start: usize, inverted: bool) -> Result<Atom> {
        self.expect_char('{')?;
        let body_start = self.src.position();
        let body = self.src.eat_while(|c| c != '}');
        if body.is_empty() {
            return self.err(
                ParseErrorKind::ExpectedNonEmptyContents,
                self.src.span_from(body_start),
            );
        }
        let kind = classify_property(body);
        self.expect_char('}')?;
        Ok(Atom::new(
            AtomKind::Property(CharacterProperty {
                kind,
                inverted,
                is_posix: false,
            }),
            self.src.span_from(start),
        ))
    }

    /// `[:name:]` / `[:^name:]` inside a custom character class. Returns
    /// `None` when no `:]` terminator is found; the caller runs this under
    /// `try_eating` so the `[` re-lexes as a nested class start.
    pub(crate) fn lex_posix_class(&mut self) -> Result<Option<Atom>> {
        let start = self.src.position();
        if !self.src.try_eat_seq("[:") {
            return Ok(None);
        }
        let inverted = self.src.try_eat('^');
        let name = self.src.eat_while(|c| c != ':' && c != ']' && c != '[');
        if !self.src.try_eat_seq(":]") {
            return Ok(None);
        }
        let kind = classify_posix_value(name);
        Ok(Some(Atom::new(
            AtomKind::Property(CharacterProperty {
                kind,
                inverted,
                is_posix: true,
            }),
            self.src.span_from(start),
        )))
    }
}

/// Split a property body at `=` and classify.
fn classify_property(body: &str) -> PropertyKind {
    match body.split_once('=') {
        Some((key, value)) => classify_key_value(key, value),
        None => classify_value_only(body),
    }
}

fn classify_key_value(key: &str, value: &str) -> PropertyKind {
    let loose_key = loose_name(key);
    let loose_value = loose_name(value);
    match loose_key.as_str() {
        "gc" | "generalcategory" => match general_category(&loose_value) {
            Some(gc) => PropertyKind::GeneralCategory(gc),
            None => other(key, value),
        },
        "sc" | "script" => match script(&loose_value) {
            Some(name) => PropertyKind::Script(name.to_string()),
            None => other(key, value),
        },
        "scx" | "scriptextensions" => match script(&loose_value) {
            Some(name) => PropertyKind::ScriptExtensions(name.to_string()),
            None => other(key, value),
        },
        "blk" | "block" => PropertyKind::Block(value.trim().to_string()),
        "age" => PropertyKind::Age(value.trim().to_string()),
        "name" | "na" => PropertyKind::Name(value.trim().to_string()),
        _ => other(key, value),
    }
}

fn classify_value_only(value: &str) -> PropertyKind {
    let loose = loose_name(value);
    match loose.as_str() {
        "any" => return PropertyKind::Any,
        "assigned" => return PropertyKind::Assigned,
        "ascii" => return PropertyKind::Ascii,
        _ => {}
    }
    if let Some(gc) = general_category(&loose) {
        return PropertyKind::GeneralCategory(gc);
    }
    if let Some(name) = binary_property(&loose) {
        return PropertyKind::Binary(name.to_string());
    }
    if let Some(posix) = posix_class(&loose) {
        return PropertyKind::Posix(posix);
    }
    if let Some(name) = script(&loose) {
        return PropertyKind::Script(name.to_string());
    }
    PropertyKind::Other {
        key: None,
        value: value.trim().to_string(),
    }
}

/// POSIX names shadow everything else for `[:name:]` bodies; `[:word:]` must
/// not classify as the binary `Word` property, for example.
fn classify_posix_value(value: &str) -> PropertyKind {
    if let Some(posix) = posix_class(&loose_name(value)) {
        return PropertyKind::Posix(posix);
    }
    classify_value_only(value)
}

fn other(key: &str, value: &str) -> PropertyKind {
    PropertyKind::Other {
        key: Some(key.trim().to_string()),
        value: value.trim().to_string(),
    }
}

/// UAX44-LM3: keep alphanumerics lowercased, drop `_`, `-` and whitespace,
/// strip one leading `is` when something remains.
fn loose_name(name: &str) -> String {
    let tightened: String = name
        .chars()
        .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    match tightened.strip_prefix("is") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => tightened,
    }
}

fn general_category(loose: &str) -> Option<GeneralCategory> {
    use GeneralCategory::*;
    let gc = match loose {
        "c" | "other" => Other,
        "cc" | "control" | "cntrl" => Control,
        "cf" | "format" => Format,
        "cn" | "unassigned" => Unassigned,
        "co" | "privateuse" => PrivateUse,
        "cs" | "surrogate" => Surrogate,
        "l" | "letter" => Letter,
        "lc" | "casedletter" => CasedLetter,
        "ll" | "lowercaseletter" => LowercaseLetter,
        "lm" | "modifierletter" => ModifierLetter,
        "lo" | "otherletter" => OtherLetter,
        "lt" | "titlecaseletter" => TitlecaseLetter,
        "lu" | "uppercaseletter" => UppercaseLetter,
        "m" | "mark" | "combiningmark" => Mark,
        "mc" | "spacingmark" => SpacingMark,
        "me" | "enclosingmark" => EnclosingMark,
        "mn" | "nonspacingmark" => NonspacingMark,
        "n" | "number" => Number,
        "nd" | "decimalnumber" | "digit" => DecimalNumber,
        "nl" | "letternumber" => LetterNumber,
        "no" | "othernumber" => OtherNumber,
        "p" | "punctuation" | "punct" => Punctuation,
        "pc" | "connectorpunctuation" => ConnectorPunctuation,
        "pd" | "dashpunctuation" => DashPunctuation,
        "pe" | "closepunctuation" => ClosePunctuation,
        "pf" | "finalpunctuation" => FinalPunctuation,
        "pi" | "initialpunctuation" => InitialPunctuation,
        "po" | "otherpunctuation" => OtherPunctuation,
        "ps" | "openpunctuation" => OpenPunctuation,
        "s" | "symbol" => Symbol,
        "sc" | "currencysymbol" => CurrencySymbol,
        "sk" | "modifiersymbol" => ModifierSymbol,
        "sm" | "mathsymbol" => MathSymbol,
        "so" | "othersymbol" => OtherSymbol,
        "z" | "separator" => Separator,
        "zl" | "lineseparator" => LineSeparator,
        "zp" | "paragraphseparator" => ParagraphSeparator,
        "zs" | "spaceseparator" => SpaceSeparator,
        _ => return None,
    };
    Some(gc)
}

fn posix_class(loose: &str) -> Option<PosixClass> {
    use PosixClass::*;
    let class = match loose {
        "alnum" => Alnum,
        "alpha" => Alpha,
        "ascii" => Ascii,
        "blank" => Blank,
        "cntrl" => Cntrl,
        "digit" => Digit,
        "graph" => Graph,
        "lower" => Lower,
        "print" => Print,
        "punct" => Punct,
        "space" => Space,
        "upper" => Upper,
        "word" => Word,
        "xdigit" => Xdigit,
        _ => return None,
    };
    Some(class)
}

/// Binary properties: loose key to canonical name.
const BINARY_PROPERTIES: &[(&str, &str)] = &[
    ("alphabetic", "Alphabetic"),
    ("alpha", "Alphabetic"),
    ("asciihexdigit", "ASCII_Hex_Digit"),
    ("ahex", "ASCII_Hex_Digit"),
    ("bidicontrol", "Bidi_Control"),
    ("bidimirrored", "Bidi_Mirrored"),
    ("cased", "Cased"),
    ("caseignorable", "Case_Ignorable"),
    ("changeswhencasefolded", "Changes_When_Casefolded"),
    ("changeswhencasemapped", "Changes_When_Casemapped"),
    ("changeswhenlowercased", "Changes_When_Lowercased"),
    ("changeswhentitlecased", "Changes_When_Titlecased"),
    ("changeswhenuppercased", "Changes_When_Uppercased"),
    ("dash", "Dash"),
    ("defaultignorablecodepoint", "Default_Ignorable_Code_Point"),
    ("deprecated", "Deprecated"),
    ("diacritic", "Diacritic"),
    ("emoji", "Emoji"),
    ("emojimodifier", "Emoji_Modifier"),
    ("emojimodifierbase", "Emoji_Modifier_Base"),
    ("emojipresentation", "Emoji_Presentation"),
    ("extender", "Extender"),
    ("graphemebase", "Grapheme_Base"),
    ("graphemeextend", "Grapheme_Extend"),
    ("hexdigit", "Hex_Digit"),
    ("hex", "Hex_Digit"),
    ("idcontinue", "ID_Continue"),
    ("idstart", "ID_Start"),
    ("ideographic", "Ideographic"),
    ("joincontrol", "Join_Control"),
    ("logicalorderexception", "Logical_Order_Exception"),
    ("lowercase", "Lowercase"),
    ("math", "Math"),
    ("noncharactercodepoint", "Noncharacter_Code_Point"),
    ("patternsyntax", "Pattern_Syntax"),
    ("patternwhitespace", "Pattern_White_Space"),
    ("quotationmark", "Quotation_Mark"),
    ("radical", "Radical"),
    ("regionalindicator", "Regional_Indicator"),
    ("sentenceterminal", "Sentence_Terminal"),
    ("softdotted", "Soft_Dotted"),
    ("terminalpunctuation", "Terminal_Punctuation"),
    ("unifiedideograph", "Unified_Ideograph"),
    ("uppercase", "Uppercase"),
    ("variationselector", "Variation_Selector"),
    ("whitespace", "White_Space"),
    ("xidcontinue", "XID_Continue"),
    ("xidstart", "XID_Start"),
];

fn binary_property(loose: &str) -> Option<&'static str> {
    BINARY_PROPERTIES
        .iter()
        .find(|(key, _)| *key == loose)
        .map(|(_, canonical)| *canonical)
}

/// Script names, canonical forms. Loose keys are derived on the fly.
const SCRIPTS: &[&str] = &[
    "Adlam",
    "Ahom",
    "Anatolian_Hieroglyphs",
    "Arabic",
    "Armenian",
    "Avestan",
    "Balinese",
    "Bamum",
    "Bassa_Vah",
    "Batak",
    "Bengali",
    "Bhaiksuki",
    "Bopomofo",
    "Brahmi",
    "Braille",
    "Buginese",
    "Buhid",
    "Canadian_Aboriginal",
    "Carian",
    "Caucasian_Albanian",
    "Chakma",
    "Cham",
    "Cherokee",
    "Chorasmian",
    "Common",
    "Coptic",
    "Cuneiform",
    "Cypriot",
    "Cyrillic",
    "Deseret",
    "Devanagari",
    "Dogra",
    "Duployan",
    "Egyptian_Hieroglyphs",
    "Elbasan",
    "Elymaic",
    "Ethiopic",
    "Georgian",
    "Glagolitic",
    "Gothic",
    "Grantha",
    "Greek",
    "Gujarati",
    "Gurmukhi",
    "Han",
    "Hangul",
    "Hanifi_Rohingya",
    "Hanunoo",
    "Hatran",
    "Hebrew",
    "Hiragana",
    "Imperial_Aramaic",
    "Inherited",
    "Inscriptional_Pahlavi",
    "Inscriptional_Parthian",
    "Javanese",
    "Kaithi",
    "Kannada",
    "Katakana",
    "Kayah_Li",
    "Kharoshthi",
    "Khitan_Small_Script",
    "Khmer",
    "Khojki",
    "Khudawadi",
    "Lao",
    "Latin",
    "Lepcha",
    "Limbu",
    "Linear_A",
    "Linear_B",
    "Lisu",
    "Lycian",
    "Lydian",
    "Mahajani",
    "Makasar",
    "Malayalam",
    "Mandaic",
    "Manichaean",
    "Marchen",
    "Masaram_Gondi",
    "Medefaidrin",
    "Meetei_Mayek",
    "Mende_Kikakui",
    "Meroitic_Cursive",
    "Meroitic_Hieroglyphs",
    "Miao",
    "Modi",
    "Mongolian",
    "Mro",
    "Multani",
    "Myanmar",
    "Nabataean",
    "Nandinagari",
    "New_Tai_Lue",
    "Newa",
    "Nko",
    "Nushu",
    "Nyiakeng_Puachue_Hmong",
    "Ogham",
    "Ol_Chiki",
    "Old_Hungarian",
    "Old_Italic",
    "Old_North_Arabian",
    "Old_Permic",
    "Old_Persian",
    "Old_Sogdian",
    "Old_South_Arabian",
    "Old_Turkic",
    "Oriya",
    "Osage",
    "Osmanya",
    "Pahawh_Hmong",
    "Palmyrene",
    "Pau_Cin_Hau",
    "Phags_Pa",
    "Phoenician",
    "Psalter_Pahlavi",
    "Rejang",
    "Runic",
    "Samaritan",
    "Saurashtra",
    "Sharada",
    "Shavian",
    "Siddham",
    "SignWriting",
    "Sinhala",
    "Sogdian",
    "Sora_Sompeng",
    "Soyombo",
    "Sundanese",
    "Syloti_Nagri",
    "Syriac",
    "Tagalog",
    "Tagbanwa",
    "Tai_Le",
    "Tai_Tham",
    "Tai_Viet",
    "Takri",
    "Tamil",
    "Tangut",
    "Telugu",
    "Thaana",
    "Thai",
    "Tibetan",
    "Tifinagh",
    "Tirhuta",
    "Ugaritic",
    "Vai",
    "Wancho",
    "Warang_Citi",
    "Yezidi",
    "Yi",
    "Zanabazar_Square",
];

fn script(loose: &str) -> Option<&'static str> {
    SCRIPTS
        .iter()
        .find(|name| loose_name(name) == loose)
        .copied()
}
