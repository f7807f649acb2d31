//! Body line reformatting.
//!
//! Lines after the header pass through almost unchanged: link targets are
//! rewritten for the dictionary viewer, enumerated sense lists get a marker
//! class, and the `～` headword-repetition prefix is bold-faced.

use once_cell::sync::Lazy;
use regex::Regex;

// The ～ run ends at the first space; the three variants differ only in what
// precedes it on the line.
static BOLD_LEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(～.+?) .+").expect("valid regex"));
static BOLD_AFTER_COLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^: (～.+?) .+").expect("valid regex"));
static BOLD_AFTER_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\): (～.+?) .+").expect("valid regex"));

/// Reformat all body lines and wrap each in its block container.
pub fn format_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&format_line(line.as_ref()));
    }
    out
}

fn format_line(line: &str) -> String {
    let line = line.replace("href=\"#", "href=\"x-dictionary:r:");
    if line.starts_with("1.") {
        // TODO close the enumerated list; senses after the last item still
        // land inside it in the viewer.
        return format!("<div class=\"list\">{line}</div>");
    }
    let pattern = if line.starts_with('～') {
        Some(&*BOLD_LEAD)
    } else if line.starts_with(": ～") {
        Some(&*BOLD_AFTER_COLON)
    } else if BOLD_AFTER_NUMBER.is_match(&line) {
        Some(&*BOLD_AFTER_NUMBER)
    } else {
        None
    };
    let bolded = pattern.and_then(|re| re.captures(&line)).map(|caps| {
        let marker = caps.get(1).expect("pattern has one group").as_str();
        line.replacen(marker, &format!("<b>{marker}</b>"), 1)
    });
    let line = bolded.unwrap_or(line);
    format!("<div>{line}</div>")
}
