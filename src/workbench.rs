//! State of the comparison workbench, independent of any widget toolkit.
//!
//! Nothing recomputes on its own: a comparison starts only from
//! [`Workbench::compare`], and any edit or option change drops the shown
//! result along with interest in whatever is still in flight.

use crate::backend::CompareHandle;
use crate::compare::{ComparisonOptions, ComparisonRequest, ComparisonResult, count_lines};
use crate::messages::Pane;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOutcome {
    Submitted(u64),
    /// Both inputs are empty
    NothingToCompare,
    TooLarge { size: usize, limit: usize },
    TooManyLines { lines: usize, limit: usize },
}

/// Caller-side bounds on what is handed to the comparison worker. A running
/// comparison cannot be interrupted, so these also bound how long a
/// superseded run keeps the worker busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub max_bytes: usize,
    pub max_lines: usize,
}

pub struct Workbench {
    left: String,
    right: String,
    options: ComparisonOptions,
    result: Option<Arc<ComparisonResult>>,
    pending: bool,
    limits: InputLimits,
    handle: CompareHandle,
}

impl Workbench {
    pub fn new(handle: CompareHandle, options: ComparisonOptions, limits: InputLimits) -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            options,
            result: None,
            pending: false,
            limits,
            handle,
        }
    }

    pub fn text(&self, pane: Pane) -> &str {
        match pane {
            Pane::Left => &self.left,
            Pane::Right => &self.right,
        }
    }

    /// Mutable access for text widgets. Call [`Workbench::invalidate`] after an edit.
    pub fn text_mut(&mut self, pane: Pane) -> &mut String {
        match pane {
            Pane::Left => &mut self.left,
            Pane::Right => &mut self.right,
        }
    }

    pub fn set_text(&mut self, pane: Pane, text: String) {
        *self.text_mut(pane) = text;
        self.invalidate();
    }

    pub fn options(&self) -> ComparisonOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ComparisonOptions) {
        if options != self.options {
            self.options = options;
            self.invalidate();
        }
    }

    pub fn invalidate(&mut self) {
        if self.result.is_some() || self.pending {
            debug!("Inputs changed, clearing comparison");
        }
        self.result = None;
        self.pending = false;
        self.handle.invalidate();
    }

    pub fn can_compare(&self) -> bool {
        !(self.left.is_empty() && self.right.is_empty())
    }

    pub fn compare(&mut self) -> CompareOutcome {
        if !self.can_compare() {
            return CompareOutcome::NothingToCompare;
        }

        let size = self.left.len() + self.right.len();
        if size > self.limits.max_bytes {
            warn!(
                size,
                limit = self.limits.max_bytes,
                "Refusing oversize comparison"
            );
            return CompareOutcome::TooLarge {
                size,
                limit: self.limits.max_bytes,
            };
        }

        let lines = count_lines(&self.left) + count_lines(&self.right);
        if lines > self.limits.max_lines {
            warn!(
                lines,
                limit = self.limits.max_lines,
                "Refusing comparison with too many lines"
            );
            return CompareOutcome::TooManyLines {
                lines,
                limit: self.limits.max_lines,
            };
        }

        let request = ComparisonRequest::new(self.left.clone(), self.right.clone(), self.options);
        let generation = self.handle.submit(request);
        self.pending = true;
        CompareOutcome::Submitted(generation)
    }

    /// Take a delivered result if it answers the latest request.
    /// Returns whether it was accepted.
    pub fn accept(&mut self, generation: u64, result: Arc<ComparisonResult>) -> bool {
        if !self.handle.is_current(generation) {
            debug!(generation, "Discarding stale comparison result");
            return false;
        }
        self.result = Some(result);
        self.pending = false;
        true
    }

    pub fn result(&self) -> Option<&ComparisonResult> {
        self.result.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::spawn_compare_backend;
    use crate::messages::ResponseMessage;
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    fn setup_with(limits: InputLimits) -> (Workbench, Receiver<ResponseMessage>) {
        let (sender, receiver) = mpsc::channel();
        let handle = spawn_compare_backend(sender);
        (
            Workbench::new(handle, ComparisonOptions::default(), limits),
            receiver,
        )
    }

    fn setup(max_bytes: usize) -> (Workbench, Receiver<ResponseMessage>) {
        setup_with(InputLimits {
            max_bytes,
            max_lines: 1000,
        })
    }

    fn deliver(workbench: &mut Workbench, receiver: &Receiver<ResponseMessage>) -> bool {
        match receiver.recv_timeout(Duration::from_secs(5)) {
            Ok(ResponseMessage::Compared { generation, result }) => {
                workbench.accept(generation, result)
            }
            _ => panic!("expected a comparison result"),
        }
    }

    #[test]
    fn test_compare_requires_some_input() {
        let (mut workbench, _receiver) = setup(1024);
        assert!(!workbench.can_compare());
        assert_eq!(workbench.compare(), CompareOutcome::NothingToCompare);
        assert!(!workbench.is_pending());
    }

    #[test]
    fn test_result_arrives_after_explicit_compare() {
        let (mut workbench, receiver) = setup(1024);
        workbench.set_text(Pane::Left, "a\nb\nc".to_string());
        workbench.set_text(Pane::Right, "a\nx\nc".to_string());
        assert!(workbench.result().is_none());

        assert!(matches!(workbench.compare(), CompareOutcome::Submitted(_)));
        assert!(workbench.is_pending());
        assert!(deliver(&mut workbench, &receiver));

        let result = workbench.result().expect("result");
        assert_eq!(result.stats.added, 1);
        assert_eq!(result.stats.removed, 1);
        assert!(!workbench.is_pending());
    }

    #[test]
    fn test_edit_clears_result_and_drops_in_flight_response() {
        let (mut workbench, receiver) = setup(1024);
        workbench.set_text(Pane::Left, "one".to_string());
        workbench.compare();

        workbench.text_mut(Pane::Right).push_str("two");
        workbench.invalidate();

        assert!(!deliver(&mut workbench, &receiver));
        assert!(workbench.result().is_none());
        assert!(!workbench.is_pending());
    }

    #[test]
    fn test_option_change_invalidates_only_when_different() {
        let (mut workbench, receiver) = setup(1024);
        workbench.set_text(Pane::Left, "Hello".to_string());
        workbench.set_text(Pane::Right, "hello".to_string());
        workbench.compare();
        assert!(deliver(&mut workbench, &receiver));

        workbench.set_options(ComparisonOptions::default());
        assert!(workbench.result().is_some());

        workbench.set_options(ComparisonOptions {
            ignore_case: true,
            ignore_whitespace: false,
        });
        assert!(workbench.result().is_none());

        workbench.compare();
        assert!(deliver(&mut workbench, &receiver));
        assert!(workbench.result().expect("result").is_identical());
    }

    #[test]
    fn test_newer_compare_supersedes_older() {
        let (mut workbench, receiver) = setup(1024);
        workbench.set_text(Pane::Left, "a".to_string());
        workbench.set_text(Pane::Right, "b".to_string());
        let CompareOutcome::Submitted(first) = workbench.compare() else {
            panic!("first compare not submitted");
        };
        let CompareOutcome::Submitted(second) = workbench.compare() else {
            panic!("second compare not submitted");
        };
        assert!(second > first);

        // The worker may or may not have answered the first request; only the
        // second may ever be accepted.
        loop {
            match receiver.recv_timeout(Duration::from_secs(5)) {
                Ok(ResponseMessage::Compared { generation, result }) => {
                    let accepted = workbench.accept(generation, result);
                    assert_eq!(accepted, generation == second);
                    if accepted {
                        break;
                    }
                }
                _ => panic!("expected a comparison result"),
            }
        }
        assert!(workbench.result().is_some());
    }

    #[test]
    fn test_oversize_input_is_refused() {
        let (mut workbench, _receiver) = setup(8);
        workbench.set_text(Pane::Left, "12345".to_string());
        workbench.set_text(Pane::Right, "6789".to_string());
        assert_eq!(
            workbench.compare(),
            CompareOutcome::TooLarge { size: 9, limit: 8 }
        );
        assert!(!workbench.is_pending());
    }

    #[test]
    fn test_too_many_lines_is_refused() {
        let (mut workbench, receiver) = setup_with(InputLimits {
            max_bytes: 1024,
            max_lines: 4,
        });
        workbench.set_text(Pane::Left, "a\nb\nc\n".to_string());
        workbench.set_text(Pane::Right, "a\nb".to_string());
        assert_eq!(
            workbench.compare(),
            CompareOutcome::TooManyLines { lines: 5, limit: 4 }
        );
        assert!(!workbench.is_pending());

        workbench.set_text(Pane::Right, "a".to_string());
        assert!(matches!(workbench.compare(), CompareOutcome::Submitted(_)));
        assert!(deliver(&mut workbench, &receiver));
    }
}
