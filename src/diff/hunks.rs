use super::types::{ChangeType, DiffLine, Hunk};

/// Every maximal run of changed lines, in document order.
pub fn hunks(lines: &[DiffLine]) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !lines[i].is_change() {
            i += 1;
            continue;
        }

        let start = i;
        let mut hunk = Hunk {
            start,
            end: start,
            removed: 0,
            added: 0,
        };
        while i < lines.len() && lines[i].is_change() {
            match lines[i].change_type {
                ChangeType::Removed => hunk.removed += 1,
                ChangeType::Added => hunk.added += 1,
                ChangeType::Unchanged => unreachable!(),
            }
            i += 1;
        }
        hunk.end = i;
        hunks.push(hunk);
    }

    hunks
}

/// A line kept for display, or a marker for a hidden run of unchanged lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem<'a> {
    Line { line: &'a DiffLine, index: usize },
    Collapsed { hidden: usize },
}

/// Collapse unchanged runs longer than the context window.
///
/// Up to `context` unchanged lines are kept on each side of every hunk. A
/// run before the first hunk only keeps its tail, a run after the last hunk
/// only keeps its head. With no hunks at all, or `context == None`, every
/// line is kept.
pub fn collapse_context(lines: &[DiffLine], context: Option<usize>) -> Vec<DisplayItem<'_>> {
    let Some(context) = context else {
        return keep_all(lines);
    };
    if !lines.iter().any(DiffLine::is_change) {
        return keep_all(lines);
    }

    let mut items = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].is_change() {
            items.push(DisplayItem::Line {
                line: &lines[i],
                index: i,
            });
            i += 1;
            continue;
        }

        // Collect the full run of consecutive unchanged lines
        let run_start = i;
        while i < lines.len() && !lines[i].is_change() {
            i += 1;
        }
        let run_end = i;
        let total = run_end - run_start;

        let show_top = if run_start > 0 { context } else { 0 };
        let show_bottom = if run_end < lines.len() { context } else { 0 };

        if show_top + show_bottom >= total {
            for index in run_start..run_end {
                items.push(DisplayItem::Line {
                    line: &lines[index],
                    index,
                });
            }
            continue;
        }

        for index in run_start..run_start + show_top {
            items.push(DisplayItem::Line {
                line: &lines[index],
                index,
            });
        }
        items.push(DisplayItem::Collapsed {
            hidden: total - show_top - show_bottom,
        });
        for index in run_end - show_bottom..run_end {
            items.push(DisplayItem::Line {
                line: &lines[index],
                index,
            });
        }
    }

    items
}

fn keep_all(lines: &[DiffLine]) -> Vec<DisplayItem<'_>> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| DisplayItem::Line { line, index })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_diff;

    fn numbered(count: usize) -> String {
        (1..=count)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_hunks_identical_is_empty() {
        let lines = compute_diff(Some("a\nb"), Some("a\nb"));
        assert!(hunks(&lines).is_empty());
    }

    #[test]
    fn test_hunks_split_by_unchanged() {
        let lines = compute_diff(Some("a\nb\nc\nd\ne"), Some("a\nB\nc\nd\nE\nF"));
        let found = hunks(&lines);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].removed, 1);
        assert_eq!(found[0].added, 1);
        assert_eq!(found[0].len(), 2);
        assert_eq!(found[1].removed, 1);
        assert_eq!(found[1].added, 2);
        assert_eq!(found[1].end, lines.len());
    }

    #[test]
    fn test_collapse_disabled_keeps_everything() {
        let lines = compute_diff(Some(&numbered(20)), Some(&numbered(21)));
        assert_eq!(collapse_context(&lines, None).len(), lines.len());
    }

    #[test]
    fn test_collapse_identical_keeps_everything() {
        let text = numbered(50);
        let lines = compute_diff(Some(&text), Some(&text));
        assert_eq!(collapse_context(&lines, Some(3)).len(), 50);
    }

    #[test]
    fn test_collapse_leading_run() {
        // Only the last line differs: 19 unchanged lines lead the change.
        let old = numbered(20);
        let new = format!("{}\nchanged", numbered(19));
        let lines = compute_diff(Some(&old), Some(&new));
        let items = collapse_context(&lines, Some(3));

        assert_eq!(items[0], DisplayItem::Collapsed { hidden: 16 });
        assert_eq!(items.len(), 1 + 3 + 2);
    }

    #[test]
    fn test_collapse_between_hunks() {
        let mut new_lines: Vec<String> = (1..=20).map(|n| format!("line {n}")).collect();
        new_lines[0] = "first".to_string();
        new_lines[19] = "last".to_string();
        let lines = compute_diff(Some(&numbered(20)), Some(&new_lines.join("\n")));
        let items = collapse_context(&lines, Some(2));

        // -1 +1, two kept, marker, two kept, -1 +1
        assert_eq!(items.len(), 2 + 2 + 1 + 2 + 2);
        assert_eq!(items[4], DisplayItem::Collapsed { hidden: 14 });
    }

    #[test]
    fn test_collapse_short_run_is_kept() {
        let lines = compute_diff(Some("a\nb\nc\nd"), Some("x\nb\nc\ny"));
        let items = collapse_context(&lines, Some(1));
        assert!(items
            .iter()
            .all(|item| matches!(item, DisplayItem::Line { .. })));
    }
}
