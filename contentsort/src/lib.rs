#![forbid(unsafe_code)]
//! Deterministic reordering for `content.js`-style translation data files.
//!
//! The file format is a fixed line-oriented convention: a `const allData = [`
//! marker, one `` [`key`, `value`] `` pair per line, a closing `]`, and
//! arbitrary trailing code that must survive the rewrite untouched. This
//! crate extracts the pairs, reorders them (time-relative keys such as
//! "5 hours ago" first, grouped by unit and magnitude, then everything else
//! alphabetically, ignoring case), and re-emits the file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use contentsort::sort_file;
//!
//! // One-shot: read, sort, rewrite.
//! let pairs = sort_file("content.js", "content_sorted.js")?;
//! println!("sorted {pairs} pairs");
//! # Ok::<(), contentsort::Error>(())
//! ```
//!
//! Or work with the parsed form directly:
//!
//! ```rust
//! use contentsort::{formats::content_js::Format, traits::Parser};
//!
//! let format = Format::from_str("const allData = [\n  [`b`, `2`],\n  [`a`, `1`],\n]\n")?;
//! let sorted = format.sorted();
//! assert_eq!(sorted.pairs[0].key, "`a`");
//! # Ok::<(), contentsort::Error>(())
//! ```

pub mod error;
pub mod formats;
pub mod sort;
pub mod traits;
pub mod types;

// Re-export most used items for easy consumption
pub use crate::{
    error::Error,
    formats::content_js::sort_file,
    sort::{TimeUnit, classify_time_key, sort_pairs},
    types::TranslationPair,
};
