pub mod lines_equal;
pub mod split_lines;
