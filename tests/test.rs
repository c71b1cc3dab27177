use linediff::{Op, OpKind, apply_edits, lines_equal, operations, split_lines};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("", ""; "both empty")]
#[test_case("a\nb\nc\n", "a\nb\nc\n"; "identical")]
#[test_case("a\nb\nc\n", "a\nx\nc\n"; "replace middle")]
#[test_case("", "a\nb\nc\n"; "insert everything")]
#[test_case("a\nb\nc\n", ""; "delete everything")]
#[test_case("a\nb\nc\n", "c\nb\na\n"; "reversed")]
#[test_case("fn main() {\n}\n", "fn main() {\n    println!(\"hi\");\n}\n"; "code insert")]
#[test_case("one\ntwo\nthree", "one\n2\nthree"; "unterminated final line")]
#[test_case("\n\n\n", "\n\n"; "blank lines")]
#[test_case("x\n", "y\nx\nz\n"; "grow both ends")]
fn test_round_trip(a_text: &str, b_text: &str) {
    let a = split_lines(a_text);
    let b = split_lines(b_text);

    assert_eq!(apply_edits(&a, &operations(&a, &b)), b);
}

#[test]
fn test_round_trip_with_mixed_terminators_is_exact_up_to_style() {
    let a = split_lines("a\r\nb\r\nc\r\n");
    let b = split_lines("a\nx\nc\n");

    let reconstructed = apply_edits(&a, &operations(&a, &b));

    // Unchanged lines keep the source's CRLF flavor, so compare with the
    // same tolerance the diff itself uses.
    assert_eq!(reconstructed.len(), b.len());
    for (actual, expected) in reconstructed.iter().zip(&b) {
        assert!(
            lines_equal(actual, expected),
            "{actual:?} differs from {expected:?} beyond its terminator"
        );
    }
    assert_eq!(reconstructed[1], "x\n"); // the inserted line is taken from b
}

#[test]
fn test_identity_yields_empty_script() {
    let a = split_lines("alpha\nbeta\ngamma\n");
    assert_eq!(operations(&a, &a), Vec::<Op>::new());
}

#[test]
fn test_one_sided_inputs_yield_single_operations() {
    let b = split_lines("a\nb\nc\n");
    let ops = operations::<String>(&[], &b);
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].kind, OpKind::Insert);
    assert_eq!((ops[0].i1, ops[0].i2, ops[0].j1), (0, 0, 0));
    assert_eq!(ops[0].content, b);

    let a = split_lines("a\nb\nc\n");
    let ops = operations::<String>(&a, &[]);
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].kind, OpKind::Delete);
    assert_eq!((ops[0].i1, ops[0].i2), (0, 3));
}

#[test]
fn test_single_line_replacement_script() {
    let ops = operations(&["a\n", "b\n", "c\n"], &["a\n", "x\n", "c\n"]);

    assert_eq!(
        ops,
        vec![
            Op {
                kind: OpKind::Delete,
                content: Vec::new(),
                i1: 1,
                i2: 2,
                j1: 1,
            },
            Op {
                kind: OpKind::Insert,
                content: vec!["x\n".to_owned()],
                i1: 2,
                i2: 2,
                j1: 1,
            },
        ]
    );
}

/// Reference line edit distance: insertions and deletions only, a
/// replacement counting as one of each, computed with the classic dynamic
/// program.
fn reference_edit_distance(a: &[String], b: &[String]) -> usize {
    let mut dist = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dist.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dist[0].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dist[i][j] = if lines_equal(&a[i - 1], &b[j - 1]) {
                dist[i - 1][j - 1]
            } else {
                dist[i - 1][j].min(dist[i][j - 1]) + 1
            };
        }
    }
    dist[a.len()][b.len()]
}

fn changed_line_count(ops: &[Op]) -> usize {
    ops.iter()
        .map(|op| match op.kind {
            OpKind::Delete => op.i2 - op.i1,
            OpKind::Insert | OpKind::Equal => op.content.len(),
        })
        .sum()
}

fn all_sequences(alphabet: &[&str], max_len: usize) -> Vec<Vec<String>> {
    let mut result: Vec<Vec<String>> = vec![Vec::new()];
    let mut frontier: Vec<Vec<String>> = vec![Vec::new()];
    for _ in 0..max_len {
        let mut extended = Vec::new();
        for sequence in &frontier {
            for &line in alphabet {
                let mut longer = sequence.clone();
                longer.push(line.to_owned());
                extended.push(longer);
            }
        }
        result.extend(extended.iter().cloned());
        frontier = extended;
    }
    result
}

/// Exhaustively checks minimality, the round trip, and the ordering
/// invariants over every pair of sequences up to length 3 from a two-line
/// alphabet (225 pairs).
#[test]
fn test_exhaustive_small_inputs() {
    let sequences = all_sequences(&["a\n", "b\n"], 3);

    for a in &sequences {
        for b in &sequences {
            let ops = operations(a, b);

            assert_eq!(apply_edits(a, &ops), *b, "round trip failed for {a:?} -> {b:?}");
            assert_eq!(
                changed_line_count(&ops),
                reference_edit_distance(a, b),
                "non-minimal script for {a:?} -> {b:?}"
            );
            for window in ops.windows(2) {
                assert!(
                    window[0].i2 <= window[1].i1,
                    "overlapping or unsorted operations for {a:?} -> {b:?}"
                );
            }
        }
    }
}

#[test]
fn test_inserted_content_is_owned() {
    let b = split_lines("a\nb\n");
    let ops = operations(&split_lines(""), &b);
    drop(b);

    // Content must remain usable after the target sequence is gone.
    assert_eq!(ops[0].content, vec!["a\n", "b\n"]);
}
