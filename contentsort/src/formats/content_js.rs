//! Support for the `content.js` translation array convention.
//!
//! The file carries a single array literal of `[key, value]` pairs between
//! fixed marker lines, with arbitrary code before and after:
//!
//! ```text
//! const allData = [
//!   [`5 hours ago`, `vor 5 Stunden`],
//!   [`Apple`, `A`],
//! ]
//!
//! export default allData;
//! ```
//!
//! Extraction is line-oriented against this fixed convention, not a general
//! JavaScript parser. Entries spanning multiple lines are a documented
//! limitation: they are dropped on rewrite, not an error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::Error, sort::sort_pairs, traits::Parser, types::TranslationPair};

/// The fixed line opening the translation array, compared against trimmed
/// line text.
pub const ARRAY_OPEN: &str = "const allData = [";

/// The fixed line closing the translation array for the extractor.
pub const ARRAY_CLOSE: &str = "]";

lazy_static! {
    // One pair per line: bracket, backtick token, comma, backtick token,
    // bracket, optional trailing comma. Anchored at the start only; trailing
    // text after the entry is tolerated, as the original authoring tool was.
    static ref PAIR_LINE_REGEX: Regex =
        Regex::new(r"^\[\s*(`[^`]*`)\s*,\s*(`[^`]*`)\s*\],?").unwrap();
}

/// Represents a parsed `content.js` translation data file.
///
/// The preamble (everything before the array-open marker) is not retained:
/// rewriting always starts the file at the marker line. The trailer is
/// everything after the array-close line and is reproduced verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// All pairs extracted from the array body, in input order.
    pub pairs: Vec<TranslationPair>,
    /// Lines following the array-close marker, in original order.
    ///
    /// `None` when the input never closes the array; in that case the
    /// rewrite emits no close marker either, matching what it read.
    pub trailer: Option<Vec<String>>,
}

impl Format {
    /// Returns a copy of this file with its pairs reordered by the sort
    /// policy. The trailer is untouched.
    pub fn sorted(self) -> Format {
        Format {
            pairs: sort_pairs(self.pairs),
            trailer: self.trailer,
        }
    }
}

/// Scans lines for the array block and extracts one pair per matching line.
///
/// Non-matching lines inside the array are silently skipped. Scanning stops
/// at the first trimmed `]` line; the close line itself is not consumed.
fn extract_pairs(lines: &[String]) -> Vec<TranslationPair> {
    let mut pairs = Vec::new();
    let mut inside_array = false;

    for line in lines {
        let trimmed = line.trim();

        if !inside_array {
            if trimmed == ARRAY_OPEN {
                inside_array = true;
            }
            continue;
        }

        if trimmed == ARRAY_CLOSE {
            break;
        }

        if let Some(captures) = PAIR_LINE_REGEX.captures(trimmed) {
            pairs.push(TranslationPair {
                key: captures[1].to_string(),
                value: captures[2].to_string(),
            });
        }
    }

    pairs
}

/// Locates the trailer zone: everything after the first line at or past the
/// array-open marker whose trimmed text is `]` or `];`.
fn split_trailer(lines: &[String]) -> Option<Vec<String>> {
    let open = lines.iter().position(|line| line.trim() == ARRAY_OPEN)?;
    let body = &lines[open + 1..];
    let close = body.iter().position(|line| {
        let trimmed = line.trim();
        trimmed == "]" || trimmed == "];"
    })?;
    Some(body[close + 1..].to_vec())
}

impl Parser for Format {
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;

        Ok(Format {
            pairs: extract_pairs(&lines),
            trailer: split_trailer(&lines),
        })
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut content = String::new();

        content.push_str(ARRAY_OPEN);
        content.push('\n');

        for pair in &self.pairs {
            content.push_str(&format!("  {},\n", pair));
        }

        // The close marker is only written when the input had one; the blank
        // line after it separates the array from the trailer code.
        if let Some(trailer) = &self.trailer {
            content.push_str("]\n\n");
            for line in trailer {
                content.push_str(line);
                content.push('\n');
            }
        }

        writer.write_all(content.as_bytes()).map_err(Error::Io)
    }

    /// Override default file reading to tolerate a byte-order mark at the
    /// start of the file; plain UTF-8 passes through unchanged.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Self::from_str(&decoded)
    }
}

/// Reads `input`, reorders its translation array by the sort policy, and
/// writes the rewritten file to `output`. Returns the number of pairs
/// processed.
///
/// # Errors
///
/// - [`Error::FileNotFound`] if `input` does not exist; nothing is written.
/// - [`Error::NoPairsFound`] if extraction yields zero pairs; nothing is
///   written.
/// - [`Error::Io`] for any other read or write failure.
pub fn sort_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize, Error> {
    let input = input.as_ref();
    if !input.exists() {
        return Err(Error::FileNotFound(input.to_path_buf()));
    }

    let format = Format::read_from(input)?;
    if format.pairs.is_empty() {
        return Err(Error::NoPairsFound);
    }

    let sorted = format.sorted();
    sorted.write_to(output)?;

    Ok(sorted.pairs.len())
}
