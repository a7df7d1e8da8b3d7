use super::types::DiffLine;

/// Split text into lines on `\n`. Empty text is a single empty line.
///
/// No trimming and no line-ending normalisation: a `\r` before the `\n`
/// stays part of the line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Dense `(N+1) x (M+1)` table of LCS lengths over line prefixes.
///
/// `get(i, j)` is the length of the longest common subsequence of
/// `old[..i]` and `new[..j]`.
pub struct LcsTable {
    cells: Vec<u32>,
    width: usize,
    rows: usize,
}

impl LcsTable {
    pub fn build(old: &[&str], new: &[&str]) -> Self {
        let rows = old.len() + 1;
        let width = new.len() + 1;
        let mut cells = vec![0u32; rows * width];

        for i in 1..rows {
            for j in 1..width {
                let value = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
                cells[i * width + j] = value;
            }
        }

        tracing::debug!(old_lines = old.len(), new_lines = new.len(), "built lcs table");

        Self { cells, width, rows }
    }

    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }

    /// Length of the LCS of the full sequences.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.width - 1) as usize
    }

    /// Walk the table from `(N, M)` back to the origin and return the edit
    /// script in document order.
    ///
    /// Ties prefer `Added` while walking backwards, so within a hunk the
    /// removals come first once the script is reversed.
    pub fn backtrack(&self, old: &[&str], new: &[&str]) -> Vec<DiffLine> {
        debug_assert_eq!(self.rows, old.len() + 1);
        debug_assert_eq!(self.width, new.len() + 1);

        let mut lines = Vec::with_capacity(old.len() + new.len());
        let (mut i, mut j) = (old.len(), new.len());

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
                lines.push(DiffLine::unchanged(old[i - 1], i, j));
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || self.get(i, j - 1) >= self.get(i - 1, j)) {
                lines.push(DiffLine::added(new[j - 1], j));
                j -= 1;
            } else {
                lines.push(DiffLine::removed(old[i - 1], i));
                i -= 1;
            }
        }

        lines.reverse();
        lines
    }
}
