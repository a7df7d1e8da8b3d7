use super::types::{ChangeType, DiffLine, SideBySideRow};

/// Regroup a diff-line sequence into rows for two-column display.
///
/// A run of removals is paired by position with the run of additions that
/// immediately follows it; the shorter side is padded with `None`.
pub fn build_side_by_side_rows(lines: &[DiffLine]) -> Vec<SideBySideRow> {
    debug_assert!(lines.iter().all(DiffLine::is_well_formed));

    let mut rows = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        match lines[i].change_type {
            ChangeType::Unchanged => {
                rows.push(SideBySideRow {
                    left: Some(lines[i].clone()),
                    right: Some(lines[i].clone()),
                });
                i += 1;
            }
            ChangeType::Removed => {
                // Collect consecutive removals
                let del_start = i;
                while i < lines.len() && lines[i].change_type == ChangeType::Removed {
                    i += 1;
                }
                // Collect consecutive additions
                let add_start = i;
                while i < lines.len() && lines[i].change_type == ChangeType::Added {
                    i += 1;
                }

                let dels = &lines[del_start..add_start];
                let adds = &lines[add_start..i];
                let max = dels.len().max(adds.len());

                for j in 0..max {
                    rows.push(SideBySideRow {
                        left: dels.get(j).cloned(),
                        right: adds.get(j).cloned(),
                    });
                }
            }
            ChangeType::Added => {
                rows.push(SideBySideRow {
                    left: None,
                    right: Some(lines[i].clone()),
                });
                i += 1;
            }
        }
    }

    rows
}
