//! The sort policy applied to extracted translation pairs.
//!
//! Time-relative keys ("N hours/days/months/years ago") cluster first,
//! ordered by unit then magnitude; everything else follows in
//! case-insensitive alphabetical order.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::TranslationPair;

lazy_static! {
    static ref TIME_KEY_REGEX: Regex =
        Regex::new(r"^(\d+)\s+(hour|day|month|year)s?\s+ago$").unwrap();
}

/// Time units recognized in time-relative keys.
///
/// Variant order is the sort priority: hours before days before months
/// before years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeUnit {
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    fn from_unit_word(word: &str) -> Option<Self> {
        match word {
            "hour" => Some(TimeUnit::Hour),
            "day" => Some(TimeUnit::Day),
            "month" => Some(TimeUnit::Month),
            "year" => Some(TimeUnit::Year),
            _ => None,
        }
    }
}

/// Classifies a delimiter-stripped key as time-relative, returning its sort
/// components, or `None` for keys outside the time pattern.
///
/// The pattern is case-sensitive and places no lower bound on the number, so
/// "0 hours ago" is a valid time key with magnitude 0.
pub fn classify_time_key(key: &str) -> Option<(TimeUnit, u128)> {
    let captures = TIME_KEY_REGEX.captures(key)?;
    let unit = TimeUnit::from_unit_word(captures.get(2)?.as_str())?;
    // A digit run too long for u128 saturates rather than failing.
    let magnitude = captures
        .get(1)?
        .as_str()
        .parse::<u128>()
        .unwrap_or(u128::MAX);
    Some((unit, magnitude))
}

/// Reorders extracted pairs: all time-relative keys first, sorted by
/// (unit, magnitude), then every remaining key in case-insensitive
/// alphabetical order. Both sorts are stable, so duplicate keys keep their
/// relative input order.
pub fn sort_pairs(pairs: Vec<TranslationPair>) -> Vec<TranslationPair> {
    let (mut time_entries, mut other_entries): (Vec<_>, Vec<_>) = pairs
        .into_iter()
        .partition(|pair| classify_time_key(pair.stripped_key()).is_some());

    time_entries.sort_by_key(|pair| classify_time_key(pair.stripped_key()));
    other_entries.sort_by_key(|pair| pair.stripped_key().to_lowercase());

    time_entries.extend(other_entries);
    time_entries
}
