//! Source location tracking for the hipify translator.
//!
//! Every edit the translator produces is a byte-range replacement in one
//! translation unit, so locations are plain byte offsets into the original
//! buffer. This crate provides the offset and span types shared by the
//! lexer, the preprocessor, and the rewrite engine, plus line/column lookup
//! for diagnostics and statistics.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// A byte offset into a source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BytePos(pub u32);

impl BytePos {
    /// The zero position.
    pub const ZERO: Self = Self(0);

    /// Create a new byte position.
    #[must_use]
    pub const fn new(pos: u32) -> Self {
        Self(pos)
    }

    /// Get the raw byte offset.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Get the raw byte offset as usize.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u32> for BytePos {
    type Output = Self;

    fn add(self, rhs: u32) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl std::ops::Sub for BytePos {
    type Output = u32;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// A span of source code, represented as a half-open byte range [lo, hi).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// The start of the span (inclusive).
    pub lo: BytePos,
    /// The end of the span (exclusive).
    pub hi: BytePos,
}

impl Span {
    /// A dummy span for synthesized tokens.
    pub const DUMMY: Self = Self {
        lo: BytePos::ZERO,
        hi: BytePos::ZERO,
    };

    /// Create a new span from byte positions.
    #[must_use]
    pub const fn new(lo: BytePos, hi: BytePos) -> Self {
        Self { lo, hi }
    }

    /// Create a span from raw byte offsets.
    #[must_use]
    pub const fn from_raw(lo: u32, hi: u32) -> Self {
        Self {
            lo: BytePos(lo),
            hi: BytePos(hi),
        }
    }

    /// Get the length of the span in bytes.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.hi.0 - self.lo.0
    }

    /// Check if the span is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.lo.0 == self.hi.0
    }

    /// Create a span that covers from the start of self to the end of other.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self {
            lo: self.lo,
            hi: other.hi,
        }
    }

    /// Check if this span contains the given byte position.
    #[must_use]
    pub const fn contains(self, pos: BytePos) -> bool {
        self.lo.0 <= pos.0 && pos.0 < self.hi.0
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Line and column information for a source location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineCol {
    /// 1-indexed line number.
    pub line: u32,
    /// 1-indexed column number (in bytes).
    pub col: u32,
}

impl LineCol {
    /// Create a new line/column pair.
    #[must_use]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// One translation unit's buffer plus its display name.
///
/// The name is the path reported in diagnostics, which is not necessarily
/// the path the buffer was read from (the driver works on a temporary copy
/// but reports against the original input).
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// The file name or path used in diagnostics.
    pub name: String,
    /// The source code content.
    pub src: String,
    /// Byte offsets of line starts.
    line_starts: Vec<BytePos>,
}

impl SourceFile {
    /// Create a new source file.
    #[must_use]
    pub fn new(name: String, src: String) -> Self {
        let line_starts = std::iter::once(BytePos::ZERO)
            .chain(
                src.match_indices('\n')
                    .map(|(i, _)| BytePos::new(i as u32 + 1)),
            )
            .collect();

        Self {
            name,
            src,
            line_starts,
        }
    }

    /// Get the line/column for a byte position.
    #[must_use]
    pub fn lookup_line_col(&self, pos: BytePos) -> LineCol {
        let line_idx = self
            .line_starts
            .partition_point(|&start| start.0 <= pos.0)
            .saturating_sub(1);

        let line_start = self.line_starts[line_idx];
        let col = pos.0 - line_start.0 + 1;

        LineCol {
            line: line_idx as u32 + 1,
            col,
        }
    }

    /// Get the 1-indexed line number for a byte position.
    #[must_use]
    pub fn lookup_line(&self, pos: BytePos) -> u32 {
        self.lookup_line_col(pos).line
    }

    /// Get the source text for a span.
    #[must_use]
    pub fn source_text(&self, span: Span) -> &str {
        &self.src[span.lo.as_usize()..span.hi.as_usize()]
    }

    /// Get the number of lines in the file.
    #[must_use]
    pub fn num_lines(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_operations() {
        let span1 = Span::from_raw(10, 20);
        let span2 = Span::from_raw(25, 30);

        assert_eq!(span1.len(), 10);
        assert_eq!(span1.to(span2), Span::from_raw(10, 30));
        assert!(span1.contains(BytePos::new(15)));
        assert!(!span1.contains(BytePos::new(25)));
    }

    #[test]
    fn test_source_file_line_lookup() {
        let src = "line 1\nline 2\nline 3";
        let file = SourceFile::new("test.cu".to_string(), src.to_string());

        assert_eq!(file.lookup_line_col(BytePos::new(0)), LineCol::new(1, 1));
        assert_eq!(file.lookup_line_col(BytePos::new(7)), LineCol::new(2, 1));
        assert_eq!(file.lookup_line_col(BytePos::new(10)), LineCol::new(2, 4));
        assert_eq!(file.num_lines(), 3);
    }

    #[test]
    fn test_source_text() {
        let src = "cudaMalloc(&p, n);";
        let file = SourceFile::new("test.cu".to_string(), src.to_string());
        assert_eq!(file.source_text(Span::from_raw(0, 10)), "cudaMalloc");
    }
}
