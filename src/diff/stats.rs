use super::types::{ChangeType, DiffLine, DiffStats};

pub fn compute_stats(lines: &[DiffLine]) -> DiffStats {
    debug_assert!(lines.iter().all(DiffLine::is_well_formed));

    lines
        .iter()
        .fold(DiffStats::default(), |mut stats, line| {
            match line.change_type {
                ChangeType::Added => stats.added += 1,
                ChangeType::Removed => stats.removed += 1,
                ChangeType::Unchanged => {}
            }
            stats
        })
}
