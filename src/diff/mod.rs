//! Line-level diff engine.
//!
//! Aligns two texts by the longest common subsequence of their lines,
//! backtracks the table into an edit script, and optionally regroups the
//! script into rows for a two-column view. Lines match only when they are
//! byte-for-byte identical.

pub mod hunks;
pub mod lcs;
pub mod side_by_side;
pub mod stats;
pub mod types;

pub use hunks::{collapse_context, hunks, DisplayItem};
pub use lcs::{split_lines, LcsTable};
pub use side_by_side::build_side_by_side_rows;
pub use stats::compute_stats;
pub use types::{ChangeType, DiffLine, DiffStats, Hunk, SideBySideRow};

/// Compute the edit script turning `old` into `new`, in document order.
///
/// Absent content is treated as the empty string, which splits into a
/// single empty line.
pub fn compute_diff(old: Option<&str>, new: Option<&str>) -> Vec<DiffLine> {
    let old_lines = split_lines(old.unwrap_or(""));
    let new_lines = split_lines(new.unwrap_or(""));

    let table = LcsTable::build(&old_lines, &new_lines);
    table.backtrack(&old_lines, &new_lines)
}
