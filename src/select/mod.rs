//! Interactive file selection.
//!
//! The terminal widget itself lives in [`prompt`]; this module holds the
//! pure pieces it is built from, so filtering and scrolling behavior stay
//! testable without a tty:
//!
//! - [`Outcome`]: what a selection run can end with. Cancellation is a
//!   first-class outcome, not an error.
//! - [`matches`]: the search predicate applied to entry names.
//! - [`filter_indices`] / [`scroll_offset`]: list filtering and window math.

mod prompt;

pub use prompt::Picker;

use crate::scan::FileEntry;

/// Result of an interactive selection run.
///
/// Errors (terminal failures, empty item list) are reported separately via
/// `Result`; this type only covers the two ways a run can end normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operator confirmed the entry at this index into the original
    /// item sequence.
    Confirmed(usize),
    /// The operator backed out. The invocation ends silently with no output.
    Cancelled,
}

/// Search predicate: case-insensitive, whitespace-insensitive substring
/// match of the typed input against an entry name. Paths are not searched.
///
/// Whitespace in the input separates tokens rather than being matched
/// literally, so "notes txt" finds "Notes.TXT". Every token must appear
/// somewhere in the whitespace-stripped, lowercased name.
pub fn matches(name: &str, input: &str) -> bool {
    let name = fold(name);
    input
        .split_whitespace()
        .all(|token| name.contains(&token.to_lowercase()))
}

fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Indices of the items whose name matches the query, in original order.
pub fn filter_indices(items: &[FileEntry], query: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(&item.name, query))
        .map(|(i, _)| i)
        .collect()
}

/// Adjust the window offset so the cursor stays visible in a window of
/// `size` rows.
pub fn scroll_offset(offset: usize, cursor: usize, size: usize) -> usize {
    if cursor < offset {
        cursor
    } else if size > 0 && cursor >= offset + size {
        cursor + 1 - size
    } else {
        offset
    }
}
