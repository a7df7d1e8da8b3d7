//! Property-based tests for the diff engine.
//!
//! Inputs are drawn from a tiny line alphabet so that repeated lines, and
//! therefore ambiguous alignments, are common.

use linediff::diff::{
    build_side_by_side_rows, collapse_context, compute_diff, compute_stats, hunks, split_lines,
    ChangeType, DiffLine, DisplayItem, LcsTable,
};
use proptest::prelude::*;
use similar::{capture_diff_slices, Algorithm, DiffOp};

// =============================================================================
// Helper Functions
// =============================================================================

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "", "a\r"]), 0..12)
        .prop_map(|lines| lines.join("\n"))
}

fn join_side(lines: &[DiffLine], keep: ChangeType) -> String {
    lines
        .iter()
        .filter(|l| l.change_type == ChangeType::Unchanged || l.change_type == keep)
        .map(|l| l.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// LCS length according to an independent optimal diff.
fn oracle_lcs_len(old: &str, new: &str) -> usize {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    capture_diff_slices(Algorithm::Myers, &old_lines, &new_lines)
        .iter()
        .map(|op| match op {
            DiffOp::Equal { len, .. } => *len,
            _ => 0,
        })
        .sum()
}

// =============================================================================
// Edit Script Properties
// =============================================================================

proptest! {
    /// Property: diffing a text against itself changes nothing
    #[test]
    fn prop_identity(t in text()) {
        let lines = compute_diff(Some(&t), Some(&t));
        for (pos, line) in lines.iter().enumerate() {
            prop_assert_eq!(line.change_type, ChangeType::Unchanged);
            prop_assert_eq!(line.old_line_number, Some(pos + 1));
            prop_assert_eq!(line.new_line_number, Some(pos + 1));
        }
    }

    /// Property: both inputs can be rebuilt from the edit script
    #[test]
    fn prop_reconstruction(old in text(), new in text()) {
        let lines = compute_diff(Some(&old), Some(&new));
        prop_assert_eq!(join_side(&lines, ChangeType::Removed), old);
        prop_assert_eq!(join_side(&lines, ChangeType::Added), new);
    }

    /// Property: max(N, M) <= len <= N + M
    #[test]
    fn prop_length_bounds(old in text(), new in text()) {
        let n = split_lines(&old).len();
        let m = split_lines(&new).len();
        let len = compute_diff(Some(&old), Some(&new)).len();
        prop_assert!(n.max(m) <= len);
        prop_assert!(len <= n + m);
    }

    /// Property: present line numbers are exactly 1..=N and 1..=M in order
    #[test]
    fn prop_line_numbers_monotonic(old in text(), new in text()) {
        let lines = compute_diff(Some(&old), Some(&new));
        let olds: Vec<usize> = lines.iter().filter_map(|l| l.old_line_number).collect();
        let news: Vec<usize> = lines.iter().filter_map(|l| l.new_line_number).collect();
        prop_assert_eq!(olds, (1..=split_lines(&old).len()).collect::<Vec<_>>());
        prop_assert_eq!(news, (1..=split_lines(&new).len()).collect::<Vec<_>>());
    }

    /// Property: line numbers match the change type
    #[test]
    fn prop_line_shape(old in text(), new in text()) {
        for line in compute_diff(Some(&old), Some(&new)) {
            match line.change_type {
                ChangeType::Unchanged => {
                    prop_assert!(line.old_line_number.is_some() && line.new_line_number.is_some())
                }
                ChangeType::Added => {
                    prop_assert!(line.old_line_number.is_none() && line.new_line_number.is_some())
                }
                ChangeType::Removed => {
                    prop_assert!(line.old_line_number.is_some() && line.new_line_number.is_none())
                }
            }
        }
    }

    /// Property: the alignment keeps as many lines as an optimal diff
    #[test]
    fn prop_unchanged_count_is_lcs(old in text(), new in text()) {
        let lines = compute_diff(Some(&old), Some(&new));
        let unchanged = lines.iter().filter(|l| !l.is_change()).count();

        let old_lines = split_lines(&old);
        let new_lines = split_lines(&new);
        let table = LcsTable::build(&old_lines, &new_lines);

        prop_assert_eq!(unchanged, table.lcs_len());
        prop_assert_eq!(unchanged, oracle_lcs_len(&old, &new));
    }

    /// Property: within every hunk all removals precede all additions
    #[test]
    fn prop_removals_lead_each_hunk(old in text(), new in text()) {
        let lines = compute_diff(Some(&old), Some(&new));
        for hunk in hunks(&lines) {
            let kinds: Vec<ChangeType> =
                lines[hunk.start..hunk.end].iter().map(|l| l.change_type).collect();
            let first_add = kinds.iter().position(|k| *k == ChangeType::Added).unwrap_or(kinds.len());
            prop_assert!(kinds[..first_add].iter().all(|k| *k == ChangeType::Removed));
            prop_assert!(kinds[first_add..].iter().all(|k| *k == ChangeType::Added));
        }
    }

    /// Property: stats agree with the line sequence and the hunks
    #[test]
    fn prop_stats_consistent(old in text(), new in text()) {
        let lines = compute_diff(Some(&old), Some(&new));
        let stats = compute_stats(&lines);
        let found = hunks(&lines);

        prop_assert_eq!(found.iter().map(|h| h.added).sum::<usize>(), stats.added);
        prop_assert_eq!(found.iter().map(|h| h.removed).sum::<usize>(), stats.removed);
        prop_assert_eq!(found.iter().map(|h| h.len()).sum::<usize>(), stats.added + stats.removed);
    }
}

// =============================================================================
// Side-by-Side Properties
// =============================================================================

proptest! {
    /// Property: every line lands in exactly one row, on its own side
    #[test]
    fn prop_side_by_side_complete(old in text(), new in text()) {
        let lines = compute_diff(Some(&old), Some(&new));
        let rows = build_side_by_side_rows(&lines);

        let mut placed = 0;
        for row in &rows {
            prop_assert!(row.left.is_some() || row.right.is_some());
            if let Some(ref left) = row.left {
                prop_assert!(left.change_type != ChangeType::Added);
            }
            if let Some(ref right) = row.right {
                prop_assert!(right.change_type != ChangeType::Removed);
            }
            match (&row.left, &row.right) {
                (Some(l), Some(r)) if l.change_type == ChangeType::Unchanged
                    || r.change_type == ChangeType::Unchanged =>
                {
                    prop_assert_eq!(l, r);
                    placed += 1;
                }
                (l, r) => placed += l.is_some() as usize + r.is_some() as usize,
            }
        }
        prop_assert_eq!(placed, lines.len());

        let left: Vec<&DiffLine> = rows.iter().filter_map(|r| r.left.as_ref()).collect();
        let expected_left: Vec<&DiffLine> =
            lines.iter().filter(|l| l.change_type != ChangeType::Added).collect();
        prop_assert_eq!(left, expected_left);

        let right: Vec<&DiffLine> = rows.iter().filter_map(|r| r.right.as_ref()).collect();
        let expected_right: Vec<&DiffLine> =
            lines.iter().filter(|l| l.change_type != ChangeType::Removed).collect();
        prop_assert_eq!(right, expected_right);
    }

    /// Property: collapsing hides only unchanged lines and accounts for all of them
    #[test]
    fn prop_collapse_accounts_for_every_line(old in text(), new in text(), context in 0usize..4) {
        let lines = compute_diff(Some(&old), Some(&new));
        let items = collapse_context(&lines, Some(context));

        let mut kept = Vec::new();
        let mut hidden = 0;
        for item in &items {
            match item {
                DisplayItem::Line { index, .. } => kept.push(*index),
                DisplayItem::Collapsed { hidden: n } => {
                    prop_assert!(*n > 0);
                    hidden += n;
                }
            }
        }
        prop_assert_eq!(kept.len() + hidden, lines.len());
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
        for (index, line) in lines.iter().enumerate() {
            if line.is_change() {
                prop_assert!(kept.contains(&index));
            }
        }
    }
}

// =============================================================================
// Fixed Scenarios
// =============================================================================

#[test]
fn scenario_unequal_batches() {
    let lines = compute_diff(Some("a\nb\nc\nd"), Some("a\nz"));
    let stats = compute_stats(&lines);
    assert_eq!((stats.added, stats.removed), (1, 3));

    let rows = build_side_by_side_rows(&lines);
    let changed: Vec<_> = rows.iter().skip(1).collect();
    assert_eq!(changed.len(), 3);
    assert!(changed.iter().all(|r| r.left.is_some()));
    assert_eq!(changed.iter().filter(|r| r.right.is_none()).count(), 2);
}

#[test]
fn scenario_both_absent() {
    let lines = compute_diff(None, None);
    assert_eq!(lines, vec![DiffLine::unchanged("", 1, 1)]);
    assert_eq!(build_side_by_side_rows(&lines).len(), 1);
}
