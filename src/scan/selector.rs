//! Finds class selectors in raw stylesheet text.
//!
//! This is a pattern match over text, not a CSS parser: matches inside
//! comments, strings, URLs or attribute selectors are reported too.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// `.` followed by a name starting with a letter, `_` or `-`.
pub const CLASS_SELECTOR_PATTERN: &str = r"\.([a-zA-Z_-][a-zA-Z0-9_-]*)";

static CLASS_SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CLASS_SELECTOR_PATTERN).expect("class selector pattern is valid"));

/// Returns the distinct class names in `content`, without the leading `.`.
#[must_use]
pub fn extract_classes(content: &str) -> BTreeSet<String> {
    CLASS_SELECTOR
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
