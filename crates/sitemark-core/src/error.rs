use crate::span::Span;
use crate::text::TextKind;
use thiserror::Error;

/// Error kinds for categorizing conversion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A bold/italic/code delimiter without its closing partner
    MalformedDelimiter,
    /// Splitting was requested on the empty string
    EmptyDelimiter,
    /// Delimiter splitting was requested for a kind other than bold, italic or code
    UnsupportedKind,
    /// A leaf node without a value reached the renderer
    MissingValue,
    /// A container node without a child list reached the renderer
    MissingChildren,
    /// The document has no level-1 heading
    NoTitleFound,
}

/// A conversion error with optional location information.
///
/// Every error is fatal for the document it occurred in; the span, when
/// present, points at the block that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", location(.span))]
pub struct Error {
    /// Human-readable error message
    pub message: String,
    /// Source location of the failing block
    pub span: Option<Span>,
    /// Error categorization
    pub kind: ErrorKind,
}

fn location(span: &Option<Span>) -> String {
    match span {
        Some(span) => format!(" at bytes {}..{}", span.start, span.end),
        None => String::new(),
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
            kind,
        }
    }

    /// Create an error for an unmatched inline delimiter.
    pub fn malformed_delimiter(delimiter: &str) -> Self {
        Self::new(
            ErrorKind::MalformedDelimiter,
            format!("invalid markdown, unmatched delimiter `{}`", delimiter),
        )
    }

    /// Create an error for an empty delimiter.
    pub fn empty_delimiter() -> Self {
        Self::new(ErrorKind::EmptyDelimiter, "delimiter must not be empty")
    }

    /// Create an error for a kind the delimiter splitter cannot produce.
    pub fn unsupported_kind(kind: TextKind) -> Self {
        Self::new(
            ErrorKind::UnsupportedKind,
            format!("unsupported text kind for delimiter splitting: {:?}", kind),
        )
    }

    /// Create an error for a leaf node without a value.
    pub fn missing_value(tag: Option<&str>) -> Self {
        let message = match tag {
            Some(tag) => format!("leaf node <{}> must have a value", tag),
            None => "leaf node must have a value".to_string(),
        };
        Self::new(ErrorKind::MissingValue, message)
    }

    /// Create an error for a container node without children.
    pub fn missing_children(tag: &str) -> Self {
        Self::new(
            ErrorKind::MissingChildren,
            format!("container node <{}> must have children", tag),
        )
    }

    /// Create an error for a document without a level-1 heading.
    pub fn no_title() -> Self {
        Self::new(ErrorKind::NoTitleFound, "no title found")
    }

    /// Attach the span of the block this error occurred in.
    ///
    /// An existing span is kept.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

/// A collection of errors gathered while validating a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    errors: Vec<Error>,
}

impl Errors {
    /// Create an empty error collection.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection.
    pub fn push(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Check if any errors were collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over the errors.
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.errors.iter()
    }

    /// The first error recorded, if any.
    pub fn first(&self) -> Option<&Error> {
        self.errors.first()
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_span_when_present() {
        let err = Error::malformed_delimiter("**").with_span(Span::new(4, 12));
        assert_eq!(
            err.to_string(),
            "invalid markdown, unmatched delimiter `**` at bytes 4..12"
        );
        assert_eq!(Error::no_title().to_string(), "no title found");
    }

    #[test]
    fn with_span_keeps_the_innermost_span() {
        let err = Error::empty_delimiter()
            .with_span(Span::new(1, 2))
            .with_span(Span::new(0, 10));
        assert_eq!(err.span, Some(Span::new(1, 2)));
    }
}
