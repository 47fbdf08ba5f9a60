//! Compare two texts from the command line and print both views
//!
//! Run with: cargo run --example compare_demo

use text_compare::compare::{ComparisonOptions, RowKind, compare_texts};
use text_compare::export::inline_text;

fn main() {
    let left = "fn main() {\n    let x = 1;\n    println!(\"x = {}\", x);\n}\n";
    let right = "fn main() {\n    let   x = 2;\n    println!( \"x = {}\", x);\n    println!(\"done\");\n}\n";

    for ignore_whitespace in [false, true] {
        let options = ComparisonOptions {
            ignore_case: false,
            ignore_whitespace,
        };
        let result = compare_texts(left, right, options);

        println!("== ignore_whitespace={ignore_whitespace} ==");
        println!(
            "+{} added  -{} removed  {} unchanged",
            result.stats.added, result.stats.removed, result.stats.unchanged
        );

        for row in &result.rows {
            let tag = match row.kind {
                RowKind::Unchanged => ' ',
                RowKind::Removed => '-',
                RowKind::Added => '+',
                RowKind::Modified => '~',
            };
            println!(
                "{} {:>3} {:<32} | {:>3} {}",
                tag,
                row.left_line_number
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                row.left_text.as_deref().unwrap_or(""),
                row.right_line_number
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                row.right_text.as_deref().unwrap_or(""),
            );
        }

        println!("-- inline --");
        println!("{}", inline_text(&result));
        println!();
    }
}
