//! The translation data file formats contentsort understands.
//!
//! Currently this is the `content.js` array-literal convention used by the
//! localization data files this tool maintains.

pub mod content_js;

pub use content_js::Format as ContentJsFormat;
