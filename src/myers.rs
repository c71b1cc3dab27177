mod backtrack;
mod trace;

use backtrack::backtrack;
use trace::shortest_edit_sequence;

use crate::operation::{Op, OpKind};

/// Computes the shortest list of line operations converting `a` into `b`.
/// Each operation covers the run of changed lines walked between two
/// breakpoints of the edit path; equal lines are implied by the gaps
/// between operations and never materialized.
///
/// The returned operations are ordered by `i1`, do not overlap in source
/// index space, and together delete/insert exactly `D` lines where `D` is
/// the minimal line edit distance between the sequences. Lines are compared
/// with [`lines_equal`](crate::lines_equal), so a CRLF line matches its LF
/// counterpart.
///
/// Runs in `O((M+N)·D)` time and space for sequences of `M` and `N` lines.
/// Two large, highly dissimilar inputs therefore cost quadratic time and
/// memory; the call blocks until done.
///
/// ## Example
///
/// ```
/// use linediff::{OpKind, operations};
///
/// let ops = operations(&["a\n", "b\n", "c\n"], &["a\n", "x\n", "c\n"]);
/// assert_eq!(ops[0].kind, OpKind::Delete);
/// assert_eq!((ops[0].i1, ops[0].i2), (1, 2));
/// assert_eq!(ops[1].kind, OpKind::Insert);
/// assert_eq!(ops[1].content, vec!["x\n"]);
/// ```
#[must_use]
pub fn operations<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<Op> {
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }

    let m = a.len();
    let n = b.len();

    let trace = shortest_edit_sequence(a, b);
    let snakes = backtrack(&trace, m, n);

    let mut solution = Vec::new();
    let mut x = 0;
    let mut y = 0;

    // The breakpoints run from the origin toward (m, n); the stretch between
    // the cursor and each breakpoint resolves into one deletion run, then
    // one insertion run, then free diagonal moves up to the breakpoint.
    for &(x0, y0) in snakes.iter().flatten() {
        let k0 = x0 as isize - y0 as isize;

        let mut pending: Option<Op> = None;

        // Horizontal stretch: lines of `a` absent from `b`.
        while k0 > x as isize - y as isize {
            if pending.is_none() {
                pending = Some(Op {
                    kind: OpKind::Delete,
                    content: Vec::new(),
                    i1: x,
                    i2: x,
                    j1: y,
                });
            }
            x += 1;
            if x == m {
                break;
            }
        }
        if let Some(mut op) = pending.take() {
            op.i2 = x;
            solution.push(op);
        }

        // Vertical stretch: lines of `b` absent from `a`.
        while k0 < x as isize - y as isize {
            if pending.is_none() {
                pending = Some(Op {
                    kind: OpKind::Insert,
                    content: Vec::new(),
                    i1: x,
                    i2: x,
                    j1: y,
                });
            }
            y += 1;
        }
        if let Some(mut op) = pending.take() {
            op.i2 = x;
            op.content = b[op.j1..y]
                .iter()
                .map(|line| line.as_ref().to_owned())
                .collect();
            solution.push(op);
        }

        // Equal stretch: implied, never materialized.
        while x < x0 {
            x += 1;
            y += 1;
        }

        if x >= m && y >= n {
            break;
        }
    }

    solution
}
