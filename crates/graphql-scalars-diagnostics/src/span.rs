//! Source spans for literal nodes and line/column locations for response errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range of a literal inside the query document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span, used for nodes built without a source document
    #[inline]
    pub const fn point(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A line/column pair as it appears in the `locations` list of a GraphQL error.
///
/// Both numbers are 1-based; columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Resolve the start of `span` against the document it was parsed from
    pub fn from_span(span: Span, source: &str) -> Self {
        let (line, column) = offset_to_line_col(source, span.start);
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Convert a byte offset to 1-based line and column numbers.
///
/// `\r\n` counts as a single line break; a lone `\r` also ends a line.
pub fn offset_to_line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    let mut prev_cr = false;

    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        match ch {
            '\n' if prev_cr => {}
            '\n' | '\r' => {
                line += 1;
                col = 1;
            }
            _ => col += 1,
        }
        prev_cr = ch == '\r';
    }

    (line, col)
}

/// A node with an associated span.
///
/// The inner node is flattened when serialized; a missing `span` reads back
/// as the empty span at offset zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spanned<T> {
    #[serde(flatten)]
    pub inner: T,
    #[serde(default)]
    pub span: Span,
}

impl<T> Spanned<T> {
    pub const fn new(inner: T, span: Span) -> Self {
        Self { inner, span }
    }

    /// Wrap a node that has no position in any document
    pub const fn detached(inner: T) -> Self {
        Self {
            inner,
            span: Span::point(0),
        }
    }

    /// Resolve this node's start to a line/column in `source`
    pub fn location(&self, source: &str) -> SourceLocation {
        SourceLocation::from_span(self.span, source)
    }
}

impl<T> std::ops::Deref for Spanned<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_span() {
        let node = Spanned::detached("x");
        assert_eq!(node.span, Span::point(0));
        assert_eq!(node.span.to_string(), "0..0");
        assert_eq!(node.location("abc"), SourceLocation::new(1, 1));
    }

    #[test]
    fn test_offset_to_line_col() {
        let source = "query {\n  user(id: 042)\n}";
        assert_eq!(offset_to_line_col(source, 0), (1, 1));
        assert_eq!(offset_to_line_col(source, 7), (1, 8));
        assert_eq!(offset_to_line_col(source, 8), (2, 1));
        assert_eq!(offset_to_line_col(source, 19), (2, 12));
    }

    #[test]
    fn test_crlf_is_one_line_break() {
        let source = "{\r\n  a(x: 1)\r\n}";
        assert_eq!(offset_to_line_col(source, 3), (2, 1));
        assert_eq!(offset_to_line_col(source, 14), (3, 1));
    }

    #[test]
    fn test_location_from_span() {
        let source = "{\n  f(n: 1.5)\n}";
        let loc = SourceLocation::from_span(Span::new(9, 12), source);
        assert_eq!(loc, SourceLocation::new(2, 8));
        assert_eq!(loc.to_string(), "2:8");
    }
}
