//! Entry header parsing.
//!
//! The first line of every entry file packs the headword into one of four
//! fixed shapes, tried in order:
//!
//! ```text
//! とうきょう【東京】(То:кё:) [геогр.]〔005-28-71〕      reading + kanji + domain
//! しょしょ【処々･所々】(сёсё)〔004-99-20〕              reading + kanji
//! カルカッタ(Карукатта) [геогр.]〔000-28-00〕           loanword + domain
//! ボヘミア(бохэмиа)〔000-40-00〕                        loanword
//! ```
//!
//! Each field may hold a comma-separated list of alternatives sharing one
//! reference code and one optional domain.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static KANJI_WITH_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)【(.+?)】\((.+?)\) \[(.+?)]〔(\d{3}-\d{2}-\d{2})〕$").expect("valid regex")
});
static KANJI_PLAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)【(.+?)】\((.+?)\)〔(\d{3}-\d{2}-\d{2})〕$").expect("valid regex")
});
// Some source files carry stray whitespace between the transcription and the
// reference code; accept them with a warning.
static KANJI_PLAIN_LENIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)【(.+?)】\((.+?)\)\s*〔(\d{3}-\d{2}-\d{2})〕$").expect("valid regex")
});
static LOANWORD_WITH_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\((.+?)\) \[(.+?)]〔(\d{3}-\d{2}-\d{2})〕$").expect("valid regex")
});
static LOANWORD_PLAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\((.+?)\)〔(\d{3}-\d{2}-\d{2})〕$").expect("valid regex")
});

/// Which structural shape the header line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderShape {
    KanjiWithDomain,
    KanjiPlain,
    LoanwordWithDomain,
    LoanwordPlain,
}

/// Parsed header fields. List fields are broadcast to a common length, so
/// zipping them is always safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub shape: HeaderShape,
    /// Kana readings; for loanword shapes these are the katakana surface forms.
    pub readings: Vec<String>,
    /// Kanji spellings, one per reading. Empty for loanword shapes. A single
    /// spelling may itself hold `･`-separated synonymous spellings.
    pub kanji: Vec<String>,
    /// Cyrillic transcriptions, one per reading.
    pub transcriptions: Vec<String>,
    pub domain: Option<String>,
    /// `DDD-DD-DD` reference code, the entry's unique id.
    pub refcode: String,
}

impl Header {
    /// Parse the first line of an entry file. Returns `None` when the line
    /// matches none of the recognized shapes.
    pub fn parse(line: &str) -> Option<Header> {
        if let Some(caps) = KANJI_WITH_DOMAIN.captures(line) {
            return Some(Self::from_kanji_captures(
                HeaderShape::KanjiWithDomain,
                &caps[1],
                &caps[2],
                &caps[3],
                Some(caps[4].to_string()),
                &caps[5],
                line,
            ));
        }
        if let Some(caps) = KANJI_PLAIN.captures(line) {
            return Some(Self::from_kanji_captures(
                HeaderShape::KanjiPlain,
                &caps[1],
                &caps[2],
                &caps[3],
                None,
                &caps[4],
                line,
            ));
        }
        if let Some(caps) = KANJI_PLAIN_LENIENT.captures(line) {
            warn!(line, "header has stray whitespace before reference code");
            return Some(Self::from_kanji_captures(
                HeaderShape::KanjiPlain,
                &caps[1],
                &caps[2],
                &caps[3],
                None,
                &caps[4],
                line,
            ));
        }
        if let Some(caps) = LOANWORD_WITH_DOMAIN.captures(line) {
            return Some(Self::from_loanword_captures(
                HeaderShape::LoanwordWithDomain,
                &caps[1],
                &caps[2],
                Some(caps[3].to_string()),
                &caps[4],
                line,
            ));
        }
        if let Some(caps) = LOANWORD_PLAIN.captures(line) {
            return Some(Self::from_loanword_captures(
                HeaderShape::LoanwordPlain,
                &caps[1],
                &caps[2],
                None,
                &caps[3],
                line,
            ));
        }
        None
    }

    /// True for the two shapes carrying a kanji spelling.
    pub fn has_kanji(&self) -> bool {
        !self.kanji.is_empty()
    }

    fn from_kanji_captures(
        shape: HeaderShape,
        readings: &str,
        kanji: &str,
        transcriptions: &str,
        domain: Option<String>,
        refcode: &str,
        line: &str,
    ) -> Header {
        let readings = split_list(readings);
        let kanji = split_list(kanji);
        let transcriptions = split_list(transcriptions);
        let len = readings.len().max(kanji.len()).max(transcriptions.len());
        if readings.len() != len || kanji.len() != len || transcriptions.len() != len {
            warn!(line, "field counts disagree, repeating first elements");
        }
        Header {
            shape,
            readings: broadcast(readings, len),
            kanji: broadcast(kanji, len),
            transcriptions: broadcast(transcriptions, len),
            domain,
            refcode: refcode.to_string(),
        }
    }

    fn from_loanword_captures(
        shape: HeaderShape,
        forms: &str,
        transcriptions: &str,
        domain: Option<String>,
        refcode: &str,
        line: &str,
    ) -> Header {
        let readings = split_list(forms);
        let transcriptions = split_list(transcriptions);
        let len = readings.len().max(transcriptions.len());
        if readings.len() != len || transcriptions.len() != len {
            warn!(line, "field counts disagree, repeating first elements");
        }
        Header {
            shape,
            readings: broadcast(readings, len),
            kanji: Vec::new(),
            transcriptions: broadcast(transcriptions, len),
            domain,
            refcode: refcode.to_string(),
        }
    }
}

fn split_list(field: &str) -> Vec<String> {
    field.split(',').map(|part| part.trim().to_string()).collect()
}

/// Pad `values` to `len` by repeating the first element. Lossy by design:
/// the source data occasionally drops alternatives from one field only.
fn broadcast(mut values: Vec<String>, len: usize) -> Vec<String> {
    if let Some(first) = values.first().cloned() {
        while values.len() < len {
            values.push(first.clone());
        }
    }
    values
}
