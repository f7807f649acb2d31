//! Converts a Warodai dictionary source tree (one plain-text file per
//! headword) into a single XML document for Apple's Dictionary Development
//! Kit.

pub mod body;
pub mod entry;
pub mod error;
pub mod header;
pub mod index;
pub mod kana;
pub mod walk;

pub use entry::Entry;
pub use error::{ConvertError, Result};
pub use header::{Header, HeaderShape};
pub use index::{IndexRecord, build_index};
pub use walk::{RunSummary, convert_file, convert_tree};
