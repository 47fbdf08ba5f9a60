use super::types::{AlignedRow, RowKind, SegmentKind, TextSegment};

/// Independent 1-based line counters for both sides
struct LineCursor {
    left: usize,
    right: usize,
}

impl LineCursor {
    fn new() -> Self {
        Self { left: 1, right: 1 }
    }

    fn next_left(&mut self) -> usize {
        let line = self.left;
        self.left += 1;
        line
    }

    fn next_right(&mut self) -> usize {
        let line = self.right;
        self.right += 1;
        line
    }
}

/// Build side-by-side rows from segments.
///
/// A removed segment directly followed by an added segment is paired into
/// `Modified` rows; any other removed or added segment stands alone.
/// Pairing only looks at the immediately next segment.
pub fn build_rows(segments: &[TextSegment]) -> Vec<AlignedRow> {
    let mut rows = Vec::new();
    let mut cursor = LineCursor::new();
    let mut i = 0usize;

    while i < segments.len() {
        let segment = &segments[i];
        match segment.kind {
            SegmentKind::Unchanged => {
                for line in &segment.lines {
                    rows.push(AlignedRow {
                        kind: RowKind::Unchanged,
                        left_text: Some(line.clone()),
                        right_text: Some(line.clone()),
                        left_line_number: Some(cursor.next_left()),
                        right_line_number: Some(cursor.next_right()),
                    });
                }
                i += 1;
            }
            SegmentKind::Removed => match segments.get(i + 1) {
                Some(next) if next.kind == SegmentKind::Added => {
                    push_modified(&mut rows, &mut cursor, &segment.lines, &next.lines);
                    // the added segment was consumed by the pair
                    i += 2;
                }
                _ => {
                    for line in &segment.lines {
                        rows.push(AlignedRow {
                            kind: RowKind::Removed,
                            left_text: Some(line.clone()),
                            right_text: None,
                            left_line_number: Some(cursor.next_left()),
                            right_line_number: None,
                        });
                    }
                    i += 1;
                }
            },
            SegmentKind::Added => {
                for line in &segment.lines {
                    rows.push(AlignedRow {
                        kind: RowKind::Added,
                        left_text: None,
                        right_text: Some(line.clone()),
                        left_line_number: None,
                        right_line_number: Some(cursor.next_right()),
                    });
                }
                i += 1;
            }
        }
    }

    rows
}

fn push_modified(
    rows: &mut Vec<AlignedRow>,
    cursor: &mut LineCursor,
    removed: &[String],
    added: &[String],
) {
    let max = removed.len().max(added.len());

    for j in 0..max {
        let left_text = removed.get(j).cloned();
        let right_text = added.get(j).cloned();
        let left_line_number = left_text.as_ref().map(|_| cursor.next_left());
        let right_line_number = right_text.as_ref().map(|_| cursor.next_right());

        rows.push(AlignedRow {
            kind: RowKind::Modified,
            left_text,
            right_text,
            left_line_number,
            right_line_number,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(kind: SegmentKind, lines: &[&str]) -> TextSegment {
        TextSegment::new(kind, lines.iter().map(|l| l.to_string()).collect())
    }

    fn numbers(rows: &[AlignedRow]) -> Vec<(Option<usize>, Option<usize>)> {
        rows.iter()
            .map(|r| (r.left_line_number, r.right_line_number))
            .collect()
    }

    #[test]
    fn test_unchanged_lines_advance_both_sides() {
        let rows = build_rows(&[segment(SegmentKind::Unchanged, &["a", "b"])]);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.kind == RowKind::Unchanged));
        assert!(rows.iter().all(|r| r.left_text == r.right_text));
        assert_eq!(numbers(&rows), vec![(Some(1), Some(1)), (Some(2), Some(2))]);
    }

    #[test]
    fn test_uneven_pair_pads_the_shorter_side() {
        let rows = build_rows(&[
            segment(SegmentKind::Unchanged, &["keep"]),
            segment(SegmentKind::Removed, &["old1", "old2", "old3"]),
            segment(SegmentKind::Added, &["new1"]),
            segment(SegmentKind::Unchanged, &["tail"]),
        ]);

        assert_eq!(
            rows.iter().map(|r| r.kind).collect::<Vec<_>>(),
            vec![
                RowKind::Unchanged,
                RowKind::Modified,
                RowKind::Modified,
                RowKind::Modified,
                RowKind::Unchanged
            ]
        );
        assert_eq!(
            numbers(&rows),
            vec![
                (Some(1), Some(1)),
                (Some(2), Some(2)),
                (Some(3), None),
                (Some(4), None),
                (Some(5), Some(3)),
            ]
        );
        assert_eq!(rows[1].right_text.as_deref(), Some("new1"));
        assert_eq!(rows[2].right_text, None);
        assert_eq!(rows[3].left_text.as_deref(), Some("old3"));
    }

    #[test]
    fn test_more_added_than_removed() {
        let rows = build_rows(&[
            segment(SegmentKind::Removed, &["a"]),
            segment(SegmentKind::Added, &["x", "y"]),
        ]);
        assert_eq!(numbers(&rows), vec![(Some(1), Some(1)), (None, Some(2))]);
        assert!(rows.iter().all(|r| r.kind == RowKind::Modified));
        assert_eq!(rows[1].left_text, None);
    }

    #[test]
    fn test_removed_block_before_unchanged_is_not_paired() {
        let rows = build_rows(&[
            segment(SegmentKind::Removed, &["gone"]),
            segment(SegmentKind::Unchanged, &["same"]),
            segment(SegmentKind::Added, &["new"]),
        ]);

        assert_eq!(
            rows.iter().map(|r| r.kind).collect::<Vec<_>>(),
            vec![RowKind::Removed, RowKind::Unchanged, RowKind::Added]
        );
        assert_eq!(
            numbers(&rows),
            vec![(Some(1), None), (Some(2), Some(1)), (None, Some(2))]
        );
    }

    #[test]
    fn test_added_before_removed_is_not_paired() {
        let rows = build_rows(&[
            segment(SegmentKind::Added, &["new"]),
            segment(SegmentKind::Removed, &["old"]),
        ]);
        assert_eq!(
            rows.iter().map(|r| r.kind).collect::<Vec<_>>(),
            vec![RowKind::Added, RowKind::Removed]
        );
        assert_eq!(numbers(&rows), vec![(None, Some(1)), (Some(1), None)]);
    }

    #[test]
    fn test_trailing_removal_at_end_of_file() {
        let rows = build_rows(&[
            segment(SegmentKind::Unchanged, &["a"]),
            segment(SegmentKind::Removed, &["b", "c"]),
        ]);
        assert_eq!(rows[1].kind, RowKind::Removed);
        assert_eq!(rows[2].left_line_number, Some(3));
        assert_eq!(rows[2].right_line_number, None);
    }
}
