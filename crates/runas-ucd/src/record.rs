//! Parsing of single `UnicodeData.txt` lines.
//!
//! A line has 15 semicolon-separated fields. Only three are read here:
//!
//! | field | meaning                          |
//! |-------|----------------------------------|
//! | 0     | code point, hexadecimal          |
//! | 1     | character name                   |
//! | 10    | Unicode 1.0 name, used as alias  |

use crate::query::contains;

const FIELD_CODE_POINT: usize = 0;
const FIELD_NAME: usize = 1;
const FIELD_ALIAS: usize = 10;

/// One character entry from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub code_point: u32,
    /// The name, followed by ` (<alias>)` when the record carries an alias.
    pub display_name: String,
    /// Words of the name then of the alias, without duplicates.
    pub name_words: Vec<String>,
}

impl Record {
    /// Parse one database line.
    ///
    /// The database is trusted to be well formed: an unparseable code point
    /// becomes `0` and missing fields read as empty rather than failing.
    pub fn parse(line: &str) -> Record {
        let fields: Vec<&str> = line.split(';').collect();
        let field = |idx: usize| fields.get(idx).copied().unwrap_or("");

        let raw_code = field(FIELD_CODE_POINT);
        let code_point = u32::from_str_radix(raw_code.trim(), 16).unwrap_or_else(|_| {
            log::debug!("unparseable code point {raw_code:?} in line {line:?}");
            0
        });

        let name = field(FIELD_NAME);
        let alias = field(FIELD_ALIAS);

        let mut display_name = name.to_string();
        if !alias.is_empty() {
            display_name.push_str(&format!(" ({alias})"));
        }

        let mut name_words: Vec<String> = Vec::new();
        for word in tokenize(name).into_iter().chain(tokenize(alias)) {
            if !contains(&name_words, &word) {
                name_words.push(word);
            }
        }

        Record {
            code_point,
            display_name,
            name_words,
        }
    }

    /// The character itself, or U+FFFD for values that are not scalar values
    /// (the surrogate range entries).
    pub fn glyph(&self) -> char {
        char::from_u32(self.code_point).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Split a name into words. Hyphens separate words just like spaces.
pub fn tokenize(text: &str) -> Vec<String> {
    text.replace('-', " ")
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATIN_CAPITAL_A: &str = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;";

    #[test]
    fn parses_plain_record() {
        let record = Record::parse(LATIN_CAPITAL_A);
        assert_eq!(record.code_point, 0x41);
        assert_eq!(record.glyph(), 'A');
        assert_eq!(record.display_name, "LATIN CAPITAL LETTER A");
        assert_eq!(record.name_words, vec!["LATIN", "CAPITAL", "LETTER", "A"]);
    }

    #[test]
    fn hyphen_separates_words() {
        let record = Record::parse("002D;HYPHEN-MINUS;Pd;0;ES;;;;;N;;;;;");
        assert_eq!(record.glyph(), '-');
        assert_eq!(record.display_name, "HYPHEN-MINUS");
        assert_eq!(record.name_words, vec!["HYPHEN", "MINUS"]);
    }

    #[test]
    fn alias_extends_name_and_words() {
        let record = Record::parse("0027;APOSTROPHE;Po;0;ON;;;;;N;APOSTROPHE-QUOTE;;;");
        assert_eq!(record.glyph(), '\'');
        assert_eq!(record.display_name, "APOSTROPHE (APOSTROPHE-QUOTE)");
        assert_eq!(record.name_words, vec!["APOSTROPHE", "QUOTE"]);
    }

    #[test]
    fn alias_words_follow_name_words_in_first_seen_order() {
        let record = Record::parse(
            "00A0;NO-BREAK SPACE;Zs;0;CS;<noBreak> 0020;;;;N;NON-BREAKING SPACE;;;;",
        );
        assert_eq!(record.display_name, "NO-BREAK SPACE (NON-BREAKING SPACE)");
        assert_eq!(record.name_words, vec!["NO", "BREAK", "SPACE", "NON", "BREAKING"]);
    }

    #[test]
    fn words_are_unique() {
        let record = Record::parse("0000;A B A;Cc;0;BN;;;;;N;B-A-C;;;;");
        assert_eq!(record.name_words, vec!["A", "B", "C"]);
    }

    #[test]
    fn exclamation_mark_without_alias() {
        let record = Record::parse("0021;EXCLAMATION MARK;Po;0;ON;;;;;N;;;;;");
        assert_eq!(record.glyph(), '!');
        assert_eq!(record.display_name, "EXCLAMATION MARK");
        assert_eq!(record.name_words, vec!["EXCLAMATION", "MARK"]);
    }

    #[test]
    fn malformed_code_point_degrades_to_zero() {
        let record = Record::parse("ZZZZ;SOMETHING ODD;So;0;ON;;;;;N;;;;;");
        assert_eq!(record.code_point, 0);
        assert_eq!(record.name_words, vec!["SOMETHING", "ODD"]);
    }

    #[test]
    fn short_line_reads_missing_fields_as_empty() {
        let record = Record::parse("0041;LATIN CAPITAL LETTER A");
        assert_eq!(record.code_point, 0x41);
        assert_eq!(record.display_name, "LATIN CAPITAL LETTER A");
    }

    #[test]
    fn surrogate_code_point_renders_replacement_glyph() {
        let record = Record::parse("D800;<Non Private Use High Surrogate, First>;Cs;0;L;;;;;N;;;;;");
        assert_eq!(record.code_point, 0xD800);
        assert_eq!(record.glyph(), char::REPLACEMENT_CHARACTER);
    }

    #[test]
    fn tokenize_splits_on_space_and_hyphen() {
        assert_eq!(tokenize("A"), vec!["A"]);
        assert_eq!(tokenize("A B"), vec!["A", "B"]);
        assert_eq!(tokenize("A B-C"), vec!["A", "B", "C"]);
        assert_eq!(tokenize("A  B--C "), vec!["A", "B", "C"]);
        assert!(tokenize("").is_empty());
    }
}
