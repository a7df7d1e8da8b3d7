use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Unchanged,
    Added,
    Removed,
}

impl ChangeType {
    /// Gutter marker used by the unified view.
    pub fn marker(&self) -> char {
        match self {
            ChangeType::Unchanged => ' ',
            ChangeType::Added => '+',
            ChangeType::Removed => '-',
        }
    }
}

/// One line of the edit script.
///
/// `old_line_number` is present for `Unchanged` and `Removed` lines,
/// `new_line_number` for `Unchanged` and `Added` lines. Both are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub change_type: ChangeType,
    pub content: String,
    pub old_line_number: Option<usize>,
    pub new_line_number: Option<usize>,
}

impl DiffLine {
    pub fn unchanged(content: impl Into<String>, old: usize, new: usize) -> Self {
        Self {
            change_type: ChangeType::Unchanged,
            content: content.into(),
            old_line_number: Some(old),
            new_line_number: Some(new),
        }
    }

    pub fn added(content: impl Into<String>, new: usize) -> Self {
        Self {
            change_type: ChangeType::Added,
            content: content.into(),
            old_line_number: None,
            new_line_number: Some(new),
        }
    }

    pub fn removed(content: impl Into<String>, old: usize) -> Self {
        Self {
            change_type: ChangeType::Removed,
            content: content.into(),
            old_line_number: Some(old),
            new_line_number: None,
        }
    }

    pub fn is_change(&self) -> bool {
        self.change_type != ChangeType::Unchanged
    }

    /// Whether the line numbers present match the change type.
    pub(crate) fn is_well_formed(&self) -> bool {
        match self.change_type {
            ChangeType::Unchanged => {
                self.old_line_number.is_some() && self.new_line_number.is_some()
            }
            ChangeType::Added => self.old_line_number.is_none() && self.new_line_number.is_some(),
            ChangeType::Removed => {
                self.old_line_number.is_some() && self.new_line_number.is_none()
            }
        }
    }
}

/// One row of the two-column view. At least one side is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBySideRow {
    /// `Unchanged` or `Removed`.
    pub left: Option<DiffLine>,
    /// `Unchanged` or `Added`.
    pub right: Option<DiffLine>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// A maximal run of changed lines, as a range into the diff-line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub start: usize,
    pub end: usize,
    pub removed: usize,
    pub added: usize,
}

impl Hunk {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
