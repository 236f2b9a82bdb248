//! Post identifiers derived from display titles.
//!
//! Identifiers are never stored: both the listing page (when building links)
//! and the detail page (when resolving an incoming path segment) recompute
//! them from the title, so a generated link always points back at the record
//! it came from.
//!
//! | Title | Identifier |
//! |-------|------------|
//! | `MCP Development` | `mcp-development` |
//! | `Dashboards & Insight` | `dashboards-insight` |
//! | `  Leading/Trailing!!` | `leading-trailing` |

use regex::Regex;
use std::sync::LazyLock;

/// Separator inserted for every run of non-alphanumeric characters.
pub const SEPARATOR: char = '-';

/// Map a display title to its URL-safe identifier.
///
/// Lower-cases the input, collapses each maximal run of characters outside
/// `[a-z0-9]` into a single `-`, then strips a leading and a trailing `-`.
/// Total over all strings: an input without ASCII alphanumerics yields `""`.
pub fn identifier_of(title: &str) -> String {
    static RE_NON_ALNUM: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex is valid"));

    let lowered = title.to_lowercase();
    let collapsed = RE_NON_ALNUM.replace_all(&lowered, "-");

    // Runs are already collapsed, so at most one separator sits at each end.
    let trimmed = collapsed.strip_prefix(SEPARATOR).unwrap_or(&collapsed);
    let trimmed = trimmed.strip_suffix(SEPARATOR).unwrap_or(trimmed);
    trimmed.to_owned()
}

/// Check whether `segment` is already in identifier form.
///
/// Equivalent to `identifier_of(segment) == segment`.
pub fn is_identifier(segment: &str) -> bool {
    !segment.starts_with(SEPARATOR)
        && !segment.ends_with(SEPARATOR)
        && !segment.contains("--")
        && segment
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == SEPARATOR)
}
