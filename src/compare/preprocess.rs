use super::differ::LineDiffOptions;
use super::types::ComparisonOptions;
use std::borrow::Cow;

/// Inputs ready for the line differencer.
///
/// Case folding is applied to the text itself. Whitespace handling is passed
/// on as a differencer option so the displayed whitespace survives.
#[derive(Debug)]
pub struct Prepared<'a> {
    pub left: Cow<'a, str>,
    pub right: Cow<'a, str>,
    pub line_options: LineDiffOptions,
}

pub fn prepare<'a>(left: &'a str, right: &'a str, options: ComparisonOptions) -> Prepared<'a> {
    let (left, right) = if options.ignore_case {
        (
            Cow::Owned(left.to_lowercase()),
            Cow::Owned(right.to_lowercase()),
        )
    } else {
        (Cow::Borrowed(left), Cow::Borrowed(right))
    };

    Prepared {
        left,
        right,
        line_options: LineDiffOptions {
            ignore_whitespace: options.ignore_whitespace,
        },
    }
}
