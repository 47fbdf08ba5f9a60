use super::types::{InlineLine, Marker, TextSegment};

/// Flatten segments into marked lines, in segment order and without pairing
pub fn render_inline(segments: &[TextSegment]) -> Vec<InlineLine> {
    segments
        .iter()
        .flat_map(|segment| {
            let marker = Marker::from(segment.kind);
            segment.lines.iter().map(move |line| InlineLine {
                marker,
                text: line.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::types::SegmentKind;

    #[test]
    fn test_removed_lines_stay_ahead_of_added_lines() {
        let segments = vec![
            TextSegment::new(SegmentKind::Unchanged, vec!["a".to_string()]),
            TextSegment::new(SegmentKind::Removed, vec!["b".to_string(), "c".to_string()]),
            TextSegment::new(SegmentKind::Added, vec!["x".to_string()]),
        ];

        let lines = render_inline(&segments);
        let rendered: Vec<String> = lines
            .iter()
            .map(|l| format!("{}{}", l.marker, l.text))
            .collect();
        assert_eq!(rendered, vec![" a", "-b", "-c", "+x"]);
    }

    #[test]
    fn test_no_segments_no_lines() {
        assert!(render_inline(&[]).is_empty());
    }
}
