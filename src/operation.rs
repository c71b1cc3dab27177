use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a line [`Op`].
///
/// [`Equal`](OpKind::Equal) is never produced by [`operations`]; equal runs
/// are implied by the gaps between consecutive operations. It exists so that
/// callers assembling their own scripts can carry explicit equal ranges
/// through [`apply_edits`](crate::apply_edits).
///
/// [`operations`]: crate::operations
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Delete,
    Insert,
    Equal,
}

impl Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpKind::Delete => "delete",
            OpKind::Insert => "insert",
            OpKind::Equal => "equal",
        };
        f.write_str(name)
    }
}

/// A single consolidated line operation.
///
/// `[i1, i2)` is the half-open range of affected lines in the source
/// sequence; for insertions it is empty (`i1 == i2`) and marks the position
/// the new lines go. `j1` is the start index in the target sequence, with
/// the end implied by the number of carried lines (see [`Op::j2`]).
///
/// `content` holds the target lines an insertion carries, owned by the
/// operation so it stays valid independently of the target sequence it was
/// computed from. Deletions reference the source by index only and carry no
/// content.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Op {
    pub kind: OpKind,
    pub content: Vec<String>,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
}

impl Op {
    /// The end of this operation's target range, implied by `content`.
    #[must_use]
    pub fn j2(&self) -> usize {
        self.j1 + self.content.len()
    }
}
