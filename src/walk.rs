//! Directory traversal and document output.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, error};
use walkdir::WalkDir;

use crate::entry::Entry;
use crate::error::{ConvertError, Result};
use crate::header::Header;

/// Extension of entry files; everything else in the tree is ignored.
const ENTRY_EXTENSION: &str = "txt";

pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>
<d:dictionary xmlns="http://www.w3.org/1999/xhtml" xmlns:wd="http://www.wadoku.de/xml/entry"
    xmlns:d="http://www.apple.com/DTDs/DictionaryService-1.0.rng">"#;
pub const XML_FOOTER: &str = "</d:dictionary>";

/// Outcome of a full conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub skipped: usize,
}

/// Convert every `.txt` file under `root` into the sink, wrapped in the
/// document header and footer. Files are visited depth-first in filesystem
/// enumeration order.
///
/// A file that fails to convert aborts the run by default, leaving whatever
/// was already flushed as a truncated document. With `keep_going` the file
/// is logged, counted in the summary, and the run continues.
pub fn convert_tree<W: Write>(root: &Path, out: &mut W, keep_going: bool) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    writeln!(out, "{XML_HEADER}")?;
    for file in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !file.file_type().is_file() {
            continue;
        }
        let path = file.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(ENTRY_EXTENSION) {
            continue;
        }
        match convert_file(path) {
            Ok(entry) => {
                writeln!(out, "{}", entry.to_xml())?;
                summary.converted += 1;
                debug!(path = %path.display(), id = %entry.id, "converted entry");
            }
            Err(err) => {
                error!(path = %path.display(), "{err}");
                if !keep_going {
                    return Err(err);
                }
                summary.skipped += 1;
            }
        }
    }
    writeln!(out, "{XML_FOOTER}")?;
    Ok(summary)
}

/// Parse and assemble a single entry file.
pub fn convert_file(path: &Path) -> Result<Entry> {
    let text = fs::read_to_string(path).map_err(|source| ConvertError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    let header = Header::parse(first).ok_or_else(|| ConvertError::UnmatchedHeader {
        path: path.to_path_buf(),
        line: first.to_string(),
    })?;
    let body: Vec<&str> = lines.collect();
    Ok(Entry::from_parts(&header, &body))
}
