//! Index record derivation.
//!
//! Every surface form a user might look an entry up by gets one record:
//! the reading, each kanji spelling and sub-spelling, and hiragana
//! cross-links for katakana forms.

use std::collections::HashSet;

use crate::header::Header;
use crate::kana::{contains_katakana, katakana_to_hiragana};

/// Sub-spelling separator inside a kanji field (halfwidth ･, U+FF65).
const SUB_SPELLING_SEPARATOR: char = '･';
/// Loanword word separator (fullwidth ・, U+30FB).
const INTERPUNCT: char = '・';

/// One lookup key. `value` is matched against user input, `title` is the
/// headword shown for the hit, `yomi` disambiguates kanji keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexRecord {
    pub value: String,
    pub title: String,
    pub yomi: Option<String>,
}

impl IndexRecord {
    fn new(value: impl Into<String>, title: impl Into<String>, yomi: Option<&str>) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            yomi: yomi.map(str::to_string),
        }
    }
}

/// Derive the deduplicated index set for a parsed header. Records keep
/// first-insertion order so output is stable across runs.
pub fn build_index(header: &Header) -> Vec<IndexRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    let mut push = |record: IndexRecord| {
        if seen.insert(record.clone()) {
            records.push(record);
        }
    };

    if header.has_kanji() {
        for (reading, kanji) in header.readings.iter().zip(&header.kanji) {
            let title = format!("{reading}【{kanji}】");
            push(IndexRecord::new(reading, &title, None));
            if contains_katakana(reading) {
                push(IndexRecord::new(katakana_to_hiragana(reading), &title, None));
            }
            for sub in kanji.split(SUB_SPELLING_SEPARATOR) {
                push(IndexRecord::new(sub, sub, Some(reading.as_str())));
                push(IndexRecord::new(sub, &title, Some(reading.as_str())));
            }
        }
    } else {
        let title = header.readings.join(", ");
        for form in &header.readings {
            push(IndexRecord::new(form, &title, None));
            push(IndexRecord::new(katakana_to_hiragana(form), &title, None));
            if form.contains(INTERPUNCT) {
                let stripped = form.replace(INTERPUNCT, "");
                push(IndexRecord::new(
                    katakana_to_hiragana(&stripped),
                    &title,
                    None,
                ));
                push(IndexRecord::new(stripped, &title, None));
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Header {
        Header::parse(line).expect("test header parses")
    }

    fn has(records: &[IndexRecord], value: &str, title: &str) -> bool {
        records
            .iter()
            .any(|r| r.value == value && r.title == title)
    }

    #[test]
    fn kanji_entry_indexes_reading_and_spelling() {
        let header = parse("とうきょう【東京】(То:кё:) [геогр.]〔005-28-71〕");
        let records = build_index(&header);
        assert!(has(&records, "とうきょう", "とうきょう【東京】"));
        assert!(has(&records, "東京", "東京"));
        assert!(has(&records, "東京", "とうきょう【東京】"));
        let kanji_key = records.iter().find(|r| r.value == "東京").unwrap();
        assert_eq!(kanji_key.yomi.as_deref(), Some("とうきょう"));
    }

    #[test]
    fn sub_spellings_are_decomposed() {
        let header = parse("しょしょ【処々･所々･諸所】(сёсё)〔004-99-20〕");
        let records = build_index(&header);
        for sub in ["処々", "所々", "諸所"] {
            assert!(has(&records, sub, sub));
            assert!(has(&records, sub, "しょしょ【処々･所々･諸所】"));
        }
    }

    #[test]
    fn katakana_reading_gains_hiragana_key() {
        let header = parse("リューチューとう【琉球島】(Рю:тю:-то:) [геогр.]〔008-71-42〕");
        let records = build_index(&header);
        let title = "リューチューとう【琉球島】";
        assert!(has(&records, "リューチューとう", title));
        assert!(has(&records, "りゅーちゅーとう", title));
    }

    #[test]
    fn multi_value_readings_share_kanji_records() {
        let header = parse("パリ, パリー【巴里】(Пари, Пари:)〔000-61-85〕");
        let records = build_index(&header);
        assert!(has(&records, "パリ", "パリ【巴里】"));
        assert!(has(&records, "パリー", "パリー【巴里】"));
        assert!(has(&records, "巴里", "巴里"));
    }

    #[test]
    fn loanword_entry_indexes_both_casings() {
        let header = parse("カルカッタ(Карукатта) [геогр.]〔000-28-00〕");
        let records = build_index(&header);
        assert!(has(&records, "カルカッタ", "カルカッタ"));
        assert!(has(&records, "かるかった", "カルカッタ"));
    }

    #[test]
    fn interpunct_forms_get_stripped_variants() {
        let header = parse("ケソン・シティー(Кэсон-Сити:) [геогр.]〔005-06-52〕");
        let records = build_index(&header);
        let title = "ケソン・シティー";
        assert!(has(&records, "ケソン・シティー", title));
        assert!(has(&records, "けそん・してぃー", title));
        assert!(has(&records, "ケソンシティー", title));
        assert!(has(&records, "けそんしてぃー", title));
    }

    #[test]
    fn multi_form_loanword_title_is_joined() {
        let header = parse("ケソン, ケソン・シティー(Кэсон, Кэсон-Сити:)〔005-06-52〕");
        let records = build_index(&header);
        let title = "ケソン, ケソン・シティー";
        assert!(has(&records, "ケソン", title));
        assert!(has(&records, "ケソンシティー", title));
    }

    #[test]
    fn records_are_deduplicated() {
        let header = parse("しょしょ【処々･処々】(сёсё)〔004-99-20〕");
        let records = build_index(&header);
        let dupes = records
            .iter()
            .filter(|r| r.value == "処々" && r.title == "処々")
            .count();
        assert_eq!(dupes, 1);
    }
}
