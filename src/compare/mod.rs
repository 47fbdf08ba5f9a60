//! Text comparison engine
//!
//! A comparison is a pure function of a [`ComparisonRequest`]: the inputs are
//! preprocessed, diffed line by line, and the resulting segments are turned
//! into stats, side-by-side rows and inline lines.

mod align;
mod differ;
mod inline;
mod preprocess;
mod stats;
mod types;

pub use align::build_rows;
pub use differ::{LineDiffOptions, diff_lines};
pub use inline::render_inline;
pub use preprocess::{Prepared, prepare};
pub use stats::calculate_stats;
pub use types::{
    AlignedRow, ComparisonOptions, ComparisonRequest, ComparisonResult, DiffStats, InlineLine,
    Marker, RowKind, SegmentKind, TextSegment, count_lines, split_lines,
};

use std::time::Instant;
use tracing::debug;

/// Run a full comparison
pub fn compare(request: &ComparisonRequest) -> ComparisonResult {
    let started = Instant::now();
    let prepared = prepare(&request.left, &request.right, request.options);
    let segments = diff_lines(&prepared.left, &prepared.right, prepared.line_options);

    let stats = calculate_stats(&segments);
    let rows = build_rows(&segments);
    let inline = render_inline(&segments);

    debug!(
        segments = segments.len(),
        added = stats.added,
        removed = stats.removed,
        unchanged = stats.unchanged,
        elapsed_us = started.elapsed().as_micros() as u64,
        "comparison finished"
    );

    ComparisonResult {
        segments,
        stats,
        rows,
        inline,
    }
}

/// Shorthand for comparing two borrowed texts
pub fn compare_texts(left: &str, right: &str, options: ComparisonOptions) -> ComparisonResult {
    compare(&ComparisonRequest::new(left, right, options))
}
