use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh64::Xxh64;

/// Options selected before a comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComparisonOptions {
    pub ignore_case: bool,
    pub ignore_whitespace: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

/// A maximal run of consecutive lines sharing one classification.
///
/// Lines are stored without their terminators. `text()` joins them with `\n`
/// and never ends with a line break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub kind: SegmentKind,
    pub lines: Vec<String>,
}

impl TextSegment {
    pub fn new(kind: SegmentKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_change(&self) -> bool {
        self.kind != SegmentKind::Unchanged
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Unchanged,
    Removed,
    Added,
    Modified,
}

/// One visual line of the side-by-side view. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedRow {
    pub kind: RowKind,
    pub left_text: Option<String>,
    pub right_text: Option<String>,
    pub left_line_number: Option<usize>,
    pub right_line_number: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    #[serde(rename = "+")]
    Added,
    #[serde(rename = "-")]
    Removed,
    #[serde(rename = " ")]
    Context,
}

impl Marker {
    pub fn as_char(self) -> char {
        match self {
            Marker::Added => '+',
            Marker::Removed => '-',
            Marker::Context => ' ',
        }
    }
}

impl From<SegmentKind> for Marker {
    fn from(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Added => Marker::Added,
            SegmentKind::Removed => Marker::Removed,
            SegmentKind::Unchanged => Marker::Context,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One line of the inline view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineLine {
    pub marker: Marker,
    pub text: String,
}

/// Line counts, not segment counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn left_lines(&self) -> usize {
        self.unchanged + self.removed
    }

    pub fn right_lines(&self) -> usize {
        self.unchanged + self.added
    }

    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }
}

/// Everything a comparison needs. `left` and `right` are kept verbatim,
/// before any case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub left: String,
    pub right: String,
    pub options: ComparisonOptions,
}

impl ComparisonRequest {
    pub fn new(
        left: impl Into<String>,
        right: impl Into<String>,
        options: ComparisonOptions,
    ) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            options,
        }
    }

    /// Combined size of both inputs in bytes
    pub fn input_len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Stable XXHash64 over both texts and the options
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh64::new(0);
        hasher.update(&(self.left.len() as u64).to_le_bytes());
        hasher.update(self.left.as_bytes());
        hasher.update(&(self.right.len() as u64).to_le_bytes());
        hasher.update(self.right.as_bytes());
        hasher.update(&[
            self.options.ignore_case as u8,
            self.options.ignore_whitespace as u8,
        ]);
        hasher.digest()
    }
}

/// Output of one comparison run. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub segments: Vec<TextSegment>,
    pub stats: DiffStats,
    pub rows: Vec<AlignedRow>,
    pub inline: Vec<InlineLine>,
}

impl ComparisonResult {
    pub fn is_identical(&self) -> bool {
        !self.stats.has_changes()
    }
}

/// Split an input text into lines.
///
/// One trailing `\n` is dropped first; an empty text has no lines, while
/// `"\n"` is a single blank line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').collect()
}

pub fn count_lines(text: &str) -> usize {
    split_lines(text).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_counting_strips_one_trailing_break() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("a\n"), 1);
        assert_eq!(count_lines("a\nb"), 2);
        assert_eq!(count_lines("a\n\n"), 2);
        assert_eq!(count_lines("\n"), 1);
        assert_eq!(split_lines("x\r\ny"), vec!["x\r", "y"]);
    }

    #[test]
    fn test_segment_text_has_no_trailing_break() {
        let segment = TextSegment::new(
            SegmentKind::Removed,
            vec!["one".to_string(), "".to_string()],
        );
        assert_eq!(segment.text(), "one\n");
        assert_eq!(segment.line_count(), 2);
        assert!(segment.is_change());
    }

    #[test]
    fn test_fingerprint_tracks_texts_and_options() {
        let base = ComparisonRequest::new("a\nb", "a\nc", ComparisonOptions::default());
        let same = base.clone();
        let swapped = ComparisonRequest::new("a\nc", "a\nb", ComparisonOptions::default());
        let shifted = ComparisonRequest::new("a\nba", "\nc", ComparisonOptions::default());
        let folded = ComparisonRequest::new(
            "a\nb",
            "a\nc",
            ComparisonOptions {
                ignore_case: true,
                ignore_whitespace: false,
            },
        );

        assert_eq!(base.fingerprint(), same.fingerprint());
        assert_ne!(base.fingerprint(), swapped.fingerprint());
        assert_ne!(base.fingerprint(), shifted.fingerprint());
        assert_ne!(base.fingerprint(), folded.fingerprint());
    }

    #[test]
    fn test_markers_render_as_single_chars() {
        assert_eq!(Marker::from(SegmentKind::Added).to_string(), "+");
        assert_eq!(Marker::from(SegmentKind::Removed).to_string(), "-");
        assert_eq!(Marker::from(SegmentKind::Unchanged).to_string(), " ");
    }
}
