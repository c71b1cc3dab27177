use crate::operation::{Op, OpKind};

/// Replays an edit script against the source lines `a`, producing the
/// target sequence.
///
/// Source lines lying between consecutive operations (the implied equal
/// ranges) are copied through from `a`; [`Insert`](OpKind::Insert) and
/// [`Equal`](OpKind::Equal) operations contribute their own content, while
/// a [`Delete`](OpKind::Delete) contributes nothing.
///
/// The operations must be sorted by `i1`, non-overlapping, and consistent
/// with `a`. This is a caller contract and is not validated; feeding a
/// script computed against a different source yields garbage, not an error.
///
/// Because copied-through lines come from `a`, reconstruction of a target
/// computed with [`operations`](crate::operations) is exact except that
/// unchanged lines keep the source's terminator style (see
/// [`lines_equal`](crate::lines_equal)).
#[must_use]
pub fn apply_edits<S: AsRef<str>>(a: &[S], operations: &[Op]) -> Vec<String> {
    let mut b = Vec::new();
    let mut prev_i2 = 0;

    for op in operations {
        // Catch up over the implied equal range.
        if op.i1 > prev_i2 {
            b.extend(a[prev_i2..op.i1].iter().map(|line| line.as_ref().to_owned()));
        }
        match op.kind {
            OpKind::Equal | OpKind::Insert => b.extend(op.content.iter().cloned()),
            OpKind::Delete => {}
        }
        prev_i2 = op.i2;
    }

    // Final catch up past the last operation.
    if a.len() > prev_i2 {
        b.extend(a[prev_i2..].iter().map(|line| line.as_ref().to_owned()));
    }

    b
}
