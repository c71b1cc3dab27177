use std::{env, fs, process};

use linediff::{OpKind, operations, split_lines};

/// Prints the line operations turning one file into another.
///
/// Run it with:
/// `cargo run --example print-diff old.txt new.txt`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: print-diff <old> <new>");
        process::exit(1);
    }

    let old_content = fs::read_to_string(&args[1]).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", args[1]);
        process::exit(1);
    });

    let new_content = fs::read_to_string(&args[2]).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", args[2]);
        process::exit(1);
    });

    let old_lines = split_lines(&old_content);
    let new_lines = split_lines(&new_content);

    for op in operations(&old_lines, &new_lines) {
        match op.kind {
            OpKind::Delete => {
                for line in &old_lines[op.i1..op.i2] {
                    print!("-{line}");
                }
            }
            OpKind::Insert | OpKind::Equal => {
                for line in &op.content {
                    print!("+{line}");
                }
            }
        }
    }
}
