use std::ops::{Index, IndexMut};

use crate::utils::lines_equal::lines_equal;

/// `V` contains the endpoints of the furthest reaching `D`-paths. For each
/// recorded endpoint `(x, y)` on diagonal `k`, only `x` is retained because
/// `y` can be computed from `x - k`.
///
/// `k` takes on negative values, so `V` is a light-weight wrapper around a
/// `Vec` plus an `offset` (the largest possible `|k|`) mapping diagonals
/// back to indices >= 0.
#[derive(Debug, Clone)]
pub(crate) struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(m: usize, n: usize) -> Self {
        Self {
            offset: (m + n) as isize,
            v: vec![0; 2 * (m + n) + 1],
        }
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output {
        &self.v[(index + self.offset) as usize]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        &mut self.v[(index + self.offset) as usize]
    }
}

/// Per-depth history of the forward search: one owned snapshot of [`V`] for
/// every explored depth `0..=D`. Each snapshot is independent, so the
/// backtracker can read any depth without aliasing concerns.
#[derive(Debug)]
pub(crate) struct Trace {
    snapshots: Vec<V>,
}

impl Trace {
    /// The minimal edit distance found by the search.
    pub(crate) fn depth(&self) -> usize {
        self.snapshots.len() - 1
    }

    pub(crate) fn snapshot(&self, d: usize) -> &V {
        &self.snapshots[d]
    }
}

/// Forward pass of Myers' shortest edit script search over the lines of `a`
/// and `b`.
///
/// Explores depths `d = 0, 1, ...` and for each depth the diagonals
/// `k = -d, -d+2, ..., d`, always keeping the furthest reaching `x` per
/// diagonal. Returns once the endpoint `(M, N)` is reached; the number of
/// snapshots in the returned trace is `D + 1` where `D` is the minimal edit
/// distance.
///
/// Runs in `O((M+N)·D)` time and space; the trace is the dominant
/// allocation, at one vector of `2·(M+N)+1` reaches per explored depth.
///
/// At least one of the sequences must be non-empty; `operations` handles
/// the trivial empty-vs-empty case before searching.
pub(crate) fn shortest_edit_sequence<S: AsRef<str>>(a: &[S], b: &[S]) -> Trace {
    let m = a.len();
    let n = b.len();
    debug_assert!(m + n > 0, "empty edit graphs have nothing to search");

    let mut v = V::new(m, n);
    let mut snapshots = Vec::new();

    for d in 0..=(m + n) as isize {
        // Endpoints for even d lie on even k lines, and vice versa.
        for k in (-d..=d).step_by(2) {
            // Either move down from k+1 (an insertion) or right from k-1 (a
            // deletion). The larger reach wins; on a tie the right-move
            // wins, preferring deletions before insertions.
            let mut x = if k == -d || (k != d && v[k - 1] < v[k + 1]) {
                v[k + 1]
            } else {
                v[k - 1] + 1
            };
            let mut y = (x as isize - k) as usize;

            // Follow the snake: free diagonal moves while lines match.
            while x < m && y < n && lines_equal(a[x].as_ref(), b[y].as_ref()) {
                x += 1;
                y += 1;
            }

            v[k] = x;

            if x == m && y == n {
                snapshots.push(v.clone());
                return Trace { snapshots };
            }
        }

        snapshots.push(v.clone());
    }

    unreachable!("the search reaches (M, N) within M+N depths")
}
