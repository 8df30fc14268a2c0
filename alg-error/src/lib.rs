//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs a kind with the regions of the input it points at.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

// lets `#[derive(ErrorKind)]` refer to this crate by name in its own tests
extern crate self as alg_error;

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns this error kind as [`Any`], so that callers can tell error kinds apart.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
///
/// Errors raised by operations that are not tied to any input (such as folding constants in an
/// already-built node) carry no spans, and their reports consist of the message only.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that does not point at any region of the source code.
    pub fn unspanned(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Returns true if the kind of this error is `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<T>()
    }

    /// Returns a reference to the kind of this error if it is `T`.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Applies the given function to every span of this error. This is used to move spans from
    /// one coordinate space to another, e.g. from whitespace-stripped text back into the text the
    /// user typed.
    pub fn map_spans(mut self, f: impl FnMut(Range<usize>) -> Range<usize>) -> Self {
        self.spans = self.spans.into_iter().map(f).collect();
        self
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Renders the report of this error into a string. The string contains ANSI color codes.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report(src_id).write((src_id, Source::from(input)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use alg_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("`{}` is not welcome here", name),
        labels = ["this name"],
        help = "try another name",
    )]
    struct Unwelcome {
        name: String,
    }

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = "nothing to see")]
    struct Silent;

    fn render(err: &Error, input: &str) -> String {
        let report = err.report_to_string("input", input).unwrap();
        strip_ansi_escapes::strip_str(report)
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..3], Unwelcome { name: "bob".to_string() });
        assert!(err.is::<Unwelcome>());
        assert!(!err.is::<Silent>());
        assert_eq!(
            err.downcast_ref::<Unwelcome>(),
            Some(&Unwelcome { name: "bob".to_string() }),
        );
    }

    #[test]
    fn report_contains_message_and_help() {
        let err = Error::new(vec![4..7], Unwelcome { name: "bob".to_string() });
        let report = render(&err, "hey bob");
        assert!(report.contains("`bob` is not welcome here"));
        assert!(report.contains("this name"));
        assert!(report.contains("try another name"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::unspanned(Silent);
        let report = render(&err, "");
        assert!(report.contains("nothing to see"));
    }

    #[test]
    fn map_spans() {
        let err = Error::new(vec![0..1, 2..4], Silent).map_spans(|span| span.start + 3..span.end + 3);
        assert_eq!(err.spans, vec![3..4, 5..7]);
    }
}
