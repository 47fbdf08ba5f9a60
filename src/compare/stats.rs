use super::types::{DiffStats, SegmentKind, TextSegment};

/// Count added, removed and unchanged lines across all segments
pub fn calculate_stats(segments: &[TextSegment]) -> DiffStats {
    let mut stats = DiffStats::default();

    for segment in segments {
        let lines = segment.line_count();
        match segment.kind {
            SegmentKind::Added => stats.added += lines,
            SegmentKind::Removed => stats.removed += lines,
            SegmentKind::Unchanged => stats.unchanged += lines,
        }
    }

    stats
}
