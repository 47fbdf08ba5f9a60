use crate::backend::loader_backend::LoadedFile;
use crate::compare::ComparisonResult;
use std::sync::Arc;

/// One of the two input panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    Left,
    Right,
}

impl Pane {
    pub fn label(self) -> &'static str {
        match self {
            Pane::Left => "Original Text",
            Pane::Right => "Modified Text",
        }
    }
}

/// Response messages from background operations
pub enum ResponseMessage {
    /// A finished comparison, delivered whole
    Compared {
        generation: u64,
        result: Arc<ComparisonResult>,
    },
    FileLoaded {
        pane: Pane,
        result: Result<LoadedFile, String>,
    },
}
