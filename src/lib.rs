//! Minimal line-level edit scripts via Myers' diff algorithm.
//!
//! Given two ordered sequences of lines, [`operations`] returns the shortest
//! list of [`Op`]-s (deletions and insertions, equal runs are implied)
//! transforming the first sequence into the second. [`apply_edits`] replays
//! such a list against the source sequence to reconstruct the target.
//!
//! Lines are compared with [`lines_equal`], which tolerates differing line
//! terminator styles, so diffing a CRLF file against an LF file only reports
//! real content changes.
//!
//! ```
//! use linediff::{apply_edits, operations, split_lines};
//!
//! let a = split_lines("one\ntwo\nthree\n");
//! let b = split_lines("one\ndeux\nthree\n");
//!
//! let ops = operations(&a, &b);
//! assert_eq!(ops.len(), 2); // delete "two\n", insert "deux\n"
//! assert_eq!(apply_edits(&a, &ops), b);
//! ```

mod apply;
mod myers;
mod operation;
mod utils;

pub use apply::apply_edits;
pub use myers::operations;
pub use operation::{Op, OpKind};
pub use utils::{lines_equal::lines_equal, split_lines::split_lines};
