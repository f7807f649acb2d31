//! Entry assembly.

use std::fmt::Write;

use crate::body::format_lines;
use crate::header::Header;
use crate::index::{IndexRecord, build_index};

/// One fully assembled dictionary entry, ready to render.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Reference code, also the source filename stem.
    pub id: String,
    /// Display headwords paired with their transcriptions, one heading each.
    pub titles: Vec<(String, String)>,
    pub index: Vec<IndexRecord>,
    pub domain: Option<String>,
    /// Concatenated body blocks.
    pub body: String,
}

impl Entry {
    /// Assemble an entry from its parsed header and raw body lines.
    pub fn from_parts<S: AsRef<str>>(header: &Header, body_lines: &[S]) -> Entry {
        let titles = if header.has_kanji() {
            header
                .readings
                .iter()
                .zip(&header.kanji)
                .zip(&header.transcriptions)
                .map(|((reading, kanji), transcription)| {
                    (format!("{reading}【{kanji}】"), transcription.clone())
                })
                .collect()
        } else {
            header
                .readings
                .iter()
                .zip(&header.transcriptions)
                .map(|(form, transcription)| (form.clone(), transcription.clone()))
                .collect()
        };
        Entry {
            id: header.refcode.clone(),
            titles,
            index: build_index(header),
            domain: header.domain.clone(),
            body: format_lines(body_lines),
        }
    }

    /// Comma-joined headword list, used as the entry's display title.
    pub fn title(&self) -> String {
        let titles: Vec<&str> = self.titles.iter().map(|(t, _)| t.as_str()).collect();
        titles.join(", ")
    }

    /// Render the `<d:entry>` element.
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        let _ = writeln!(xml, r#"<d:entry id="{}" d:title="{}">"#, self.id, self.title());
        for record in &self.index {
            match &record.yomi {
                Some(yomi) => {
                    let _ = writeln!(
                        xml,
                        r#"<d:index d:value="{}" d:title="{}" d:yomi="{}"/>"#,
                        record.value, record.title, yomi
                    );
                }
                None => {
                    let _ = writeln!(
                        xml,
                        r#"<d:index d:value="{}" d:title="{}"/>"#,
                        record.value, record.title
                    );
                }
            }
        }
        xml.push_str("<div class=\"entry\">\n");
        for (title, transcription) in &self.titles {
            let _ = writeln!(xml, "<h1>{title} <small>{transcription}</small></h1>");
        }
        if let Some(domain) = &self.domain {
            let _ = writeln!(xml, "<p class=\"domain\">[{domain}]</p>");
        }
        let _ = writeln!(xml, "<p>{}</p>", self.body);
        xml.push_str("</div>\n</d:entry>");
        xml
    }
}
