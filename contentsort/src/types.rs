//! Core types for contentsort.
//! The extractor decodes into these; the emitter serializes them back out.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{error::Error, traits::Parser};

/// A single translation entry extracted from the data array.
///
/// Both `key` and `value` are raw text fragments exactly as captured from the
/// source line, including their backtick delimiters. Identity is positional:
/// duplicate keys are kept as separate entries, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationPair {
    /// The key token, delimiters included (e.g. `` `5 hours ago` ``).
    pub key: String,

    /// The translated value token, delimiters included.
    pub value: String,
}

impl TranslationPair {
    /// Returns the key text with backtick delimiters and edge spaces removed.
    ///
    /// This is the text the sort policy classifies and compares on; the raw
    /// token is what gets written back out.
    pub fn stripped_key(&self) -> &str {
        self.key.trim_matches(|c| c == '`' || c == ' ')
    }
}

impl Display for TranslationPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.key, self.value)
    }
}

/// JSON cache form of an extracted pair list, for inspection or hand-off to
/// other tooling.
impl Parser for Vec<TranslationPair> {
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(Error::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> TranslationPair {
        TranslationPair {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_stripped_key_removes_backticks_and_spaces() {
        let p = pair("` 5 hours ago `", "`vor 5 Stunden`");
        assert_eq!(p.stripped_key(), "5 hours ago");
    }

    #[test]
    fn test_stripped_key_keeps_inner_text() {
        let p = pair("`a ` b`", "`x`");
        assert_eq!(p.stripped_key(), "a ` b");
    }

    #[test]
    fn test_display_reconstructs_entry() {
        let p = pair("`Apple`", "`A`");
        assert_eq!(p.to_string(), "[`Apple`, `A`]");
    }

    #[test]
    fn test_json_cache_round_trip() {
        let pairs = vec![pair("`Apple`", "`A`"), pair("`Zebra`", "`Z`")];
        let mut buf = Vec::new();
        pairs.to_writer(&mut buf).unwrap();
        let loaded = Vec::<TranslationPair>::from_str(&String::from_utf8(buf).unwrap()).unwrap();
        assert_eq!(pairs, loaded);
    }
}
