use super::types::{SegmentKind, TextSegment, split_lines};
use similar::{Algorithm, DiffTag, TextDiff};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineDiffOptions {
    /// Match lines that differ only in leading, trailing or interior whitespace runs
    pub ignore_whitespace: bool,
}

/// Compute a line-level diff between `left` and `right`.
///
/// The edit script is minimal (Myers, no deadline). Every change region is
/// emitted as at most one `Removed` segment followed by at most one `Added`
/// segment, and adjacent segments never share a kind. Unchanged lines carry
/// the left side's text.
pub fn diff_lines(left: &str, right: &str, options: LineDiffOptions) -> Vec<TextSegment> {
    let left_lines = split_lines(left);
    let right_lines = split_lines(right);

    let left_keys = match_keys(&left_lines, options.ignore_whitespace);
    let right_keys = match_keys(&right_lines, options.ignore_whitespace);
    let left_key_refs: Vec<&str> = left_keys.iter().map(|key| key.as_ref()).collect();
    let right_key_refs: Vec<&str> = right_keys.iter().map(|key| key.as_ref()).collect();

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(&left_key_refs, &right_key_refs);

    let mut builder = SegmentBuilder::default();
    for op in diff.ops() {
        match op.tag() {
            DiffTag::Equal => builder.unchanged(&left_lines[op.old_range()]),
            DiffTag::Delete => builder.removed(&left_lines[op.old_range()]),
            DiffTag::Insert => builder.added(&right_lines[op.new_range()]),
            DiffTag::Replace => {
                builder.removed(&left_lines[op.old_range()]);
                builder.added(&right_lines[op.new_range()]);
            }
        }
    }

    builder.finish()
}

fn match_keys<'a>(lines: &[&'a str], ignore_whitespace: bool) -> Vec<Cow<'a, str>> {
    lines
        .iter()
        .map(|line| {
            if ignore_whitespace {
                Cow::Owned(normalize_whitespace(line))
            } else {
                Cow::Borrowed(*line)
            }
        })
        .collect()
}

/// Trim the line and collapse interior whitespace runs to a single space
fn normalize_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Accumulates diff ops into merged segments. Pending removals and additions
/// are held until the next unchanged run (or the end) so a change region
/// always comes out as removed-then-added.
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<TextSegment>,
    pending_removed: Vec<String>,
    pending_added: Vec<String>,
}

impl SegmentBuilder {
    fn unchanged(&mut self, lines: &[&str]) {
        if lines.is_empty() {
            return;
        }
        self.flush_changes();

        if let Some(last) = self.segments.last_mut()
            && last.kind == SegmentKind::Unchanged
        {
            last.lines.extend(lines.iter().map(|line| line.to_string()));
            return;
        }

        self.segments.push(TextSegment::new(
            SegmentKind::Unchanged,
            lines.iter().map(|line| line.to_string()).collect(),
        ));
    }

    fn removed(&mut self, lines: &[&str]) {
        self.pending_removed
            .extend(lines.iter().map(|line| line.to_string()));
    }

    fn added(&mut self, lines: &[&str]) {
        self.pending_added
            .extend(lines.iter().map(|line| line.to_string()));
    }

    fn flush_changes(&mut self) {
        if !self.pending_removed.is_empty() {
            let lines = std::mem::take(&mut self.pending_removed);
            self.segments
                .push(TextSegment::new(SegmentKind::Removed, lines));
        }
        if !self.pending_added.is_empty() {
            let lines = std::mem::take(&mut self.pending_added);
            self.segments.push(TextSegment::new(SegmentKind::Added, lines));
        }
    }

    fn finish(mut self) -> Vec<TextSegment> {
        self.flush_changes();
        self.segments
    }
}
