use super::trace::Trace;

/// Walks the trace backward from the solution endpoint `(m, n)` to the
/// origin, recording the breakpoint visited at each depth. A breakpoint
/// marks where a vertical or horizontal step ends and a run of free
/// diagonal moves begins.
///
/// The neighbour each depth descended from is re-derived with the same
/// tie-breaking rule as the forward search, so both passes agree on ties.
/// Depths the walk never touches (it stops as soon as either coordinate or
/// the depth hits zero) stay `None`.
///
/// Panics if the trace is inconsistent with `(m, n)`; a trace produced by
/// the forward search never is.
pub(crate) fn backtrack(trace: &Trace, m: usize, n: usize) -> Vec<Option<(usize, usize)>> {
    let mut snakes = vec![None; trace.depth() + 1];

    let mut x = m;
    let mut y = n;
    let mut d = trace.depth();

    while x > 0 && y > 0 && d > 0 {
        let v = trace.snapshot(d);
        snakes[d] = Some((x, y));

        let k = x as isize - y as isize;
        let d_i = d as isize;
        let k_prev = if k == -d_i || (k != d_i && v[k - 1] < v[k + 1]) {
            k + 1
        } else {
            k - 1
        };

        x = v[k_prev];
        let y_prev = x as isize - k_prev;
        assert!(
            y_prev >= 0,
            "inconsistent trace: depth {d} leads to a negative target index on diagonal {k_prev}"
        );
        y = y_prev as usize;

        d -= 1;
    }

    snakes[d] = Some((x, y));
    snakes
}
