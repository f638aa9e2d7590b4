//! Edit collection and application for the hipify translator.
//!
//! Every handler in the rewrite engine is a pure producer of [`Edit`]s; the
//! buffer is only mutated once, at the end, by [`ReplacementSet::apply`].
//! The set enforces the two invariants the translator depends on:
//!
//! - duplicate edits (same offset, length, and text) coalesce silently,
//!   because the preprocessor and the matcher layer legitimately visit the
//!   same token twice;
//! - overlapping edits with differing content are rejected at insertion —
//!   such an edit is a translator bug, and losing it is preferable to
//!   corrupting the output.

#![warn(missing_docs)]

use hipify_span::BytePos;

/// A single byte-range replacement in one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    /// Offset of the replaced range in the original buffer.
    pub offset: BytePos,
    /// Length of the replaced range; zero for pure insertions.
    pub old_len: u32,
    /// The replacement text; may be empty.
    pub text: String,
}

impl Edit {
    /// Create a new edit.
    #[must_use]
    pub fn new(offset: BytePos, old_len: u32, text: impl Into<String>) -> Self {
        Self {
            offset,
            old_len,
            text: text.into(),
        }
    }

    /// The end of the replaced range.
    #[must_use]
    pub fn end(&self) -> u32 {
        self.offset.as_u32() + self.old_len
    }
}

/// The outcome of inserting an edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The edit was added.
    Inserted,
    /// An identical edit was already present; this one was dropped.
    Duplicate,
    /// The edit overlaps an existing one with different content and was
    /// rejected.
    Overlap,
}

/// The per-file collection of edits.
#[derive(Debug, Default)]
pub struct ReplacementSet {
    /// Edits kept sorted by offset.
    edits: Vec<Edit>,
}

impl ReplacementSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected edits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Whether no edit has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Iterate the collected edits in offset order.
    pub fn iter(&self) -> impl Iterator<Item = &Edit> {
        self.edits.iter()
    }

    /// Insert an edit, coalescing duplicates and rejecting overlaps.
    ///
    /// Ranges are half-open, so touching ranges do not conflict, and a
    /// pure insertion may sit at the boundary of a replacement (it applies
    /// before it). Conflicts are: intersecting replacement ranges, an
    /// insertion strictly inside a replacement, and two insertions at the
    /// same offset with different text.
    pub fn insert(&mut self, edit: Edit) -> InsertOutcome {
        for existing in &self.edits {
            if existing == &edit {
                return InsertOutcome::Duplicate;
            }
            if conflicts(existing, &edit) {
                return InsertOutcome::Overlap;
            }
        }

        let idx = self.edits.partition_point(|e| sort_key(e) < sort_key(&edit));
        self.edits.insert(idx, edit);
        InsertOutcome::Inserted
    }

    /// Apply all edits to the buffer they were collected against.
    ///
    /// Edits are spliced in ascending offset order with a running delta, so
    /// the result is as if all replacements happened simultaneously against
    /// the original buffer. Regions not covered by any edit are
    /// byte-identical to the input.
    #[must_use]
    pub fn apply(&self, src: &str) -> String {
        let mut out = String::with_capacity(src.len());
        let mut cursor = 0usize;
        for edit in &self.edits {
            let lo = edit.offset.as_usize();
            let hi = lo + edit.old_len as usize;
            out.push_str(&src[cursor..lo]);
            out.push_str(&edit.text);
            cursor = hi;
        }
        out.push_str(&src[cursor..]);
        out
    }
}

/// Application order: ascending offset, insertions before replacements at
/// the same offset (so prepended text lands ahead of a rewritten token that
/// starts the file).
fn sort_key(e: &Edit) -> (u32, bool) {
    (e.offset.as_u32(), e.old_len != 0)
}

fn conflicts(a: &Edit, b: &Edit) -> bool {
    match (a.old_len, b.old_len) {
        (0, 0) => a.offset == b.offset,
        (0, _) => b.offset.as_u32() < a.offset.as_u32() && a.offset.as_u32() < b.end(),
        (_, 0) => a.offset.as_u32() < b.offset.as_u32() && b.offset.as_u32() < a.end(),
        (_, _) => a.offset.as_u32() < b.end() && b.offset.as_u32() < a.end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(offset: u32, old_len: u32, text: &str) -> Edit {
        Edit::new(BytePos::new(offset), old_len, text)
    }

    #[test]
    fn test_apply_in_source_order() {
        let src = "cudaError_t e = cudaMalloc(&p, 16);";
        let mut set = ReplacementSet::new();
        // Inserted out of source order on purpose.
        assert_eq!(set.insert(edit(16, 10, "hipMalloc")), InsertOutcome::Inserted);
        assert_eq!(set.insert(edit(0, 11, "hipError_t")), InsertOutcome::Inserted);
        assert_eq!(set.apply(src), "hipError_t e = hipMalloc(&p, 16);");
    }

    #[test]
    fn test_duplicates_coalesce() {
        let mut set = ReplacementSet::new();
        assert_eq!(set.insert(edit(5, 4, "hip")), InsertOutcome::Inserted);
        assert_eq!(set.insert(edit(5, 4, "hip")), InsertOutcome::Duplicate);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_overlap_rejected() {
        let mut set = ReplacementSet::new();
        assert_eq!(set.insert(edit(5, 10, "a")), InsertOutcome::Inserted);
        assert_eq!(set.insert(edit(8, 4, "b")), InsertOutcome::Overlap);
        assert_eq!(set.insert(edit(5, 10, "c")), InsertOutcome::Overlap);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_touching_ranges_do_not_overlap() {
        let mut set = ReplacementSet::new();
        assert_eq!(set.insert(edit(5, 5, "a")), InsertOutcome::Inserted);
        assert_eq!(set.insert(edit(10, 5, "b")), InsertOutcome::Inserted);
        assert_eq!(set.insert(edit(0, 5, "c")), InsertOutcome::Inserted);
    }

    #[test]
    fn test_insertion_at_start() {
        let src = "int x;";
        let mut set = ReplacementSet::new();
        assert_eq!(
            set.insert(edit(0, 0, "#include <hip/hip_runtime.h>\n")),
            InsertOutcome::Inserted
        );
        assert_eq!(set.apply(src), "#include <hip/hip_runtime.h>\nint x;");
    }

    #[test]
    fn test_conflicting_insertions_at_same_offset() {
        let mut set = ReplacementSet::new();
        assert_eq!(set.insert(edit(0, 0, "a")), InsertOutcome::Inserted);
        assert_eq!(set.insert(edit(0, 0, "b")), InsertOutcome::Overlap);
        assert_eq!(set.insert(edit(0, 0, "a")), InsertOutcome::Duplicate);
    }

    #[test]
    fn test_prepend_coexists_with_edit_at_offset_zero() {
        // A file that *starts* with a renamed token still receives the
        // header insertion, and the inserted text applies first.
        let src = "cudaMalloc(&p, 16);";
        let mut set = ReplacementSet::new();
        assert_eq!(set.insert(edit(0, 10, "hipMalloc")), InsertOutcome::Inserted);
        assert_eq!(
            set.insert(edit(0, 0, "#include <hip/hip_runtime.h>\n")),
            InsertOutcome::Inserted
        );
        assert_eq!(
            set.apply(src),
            "#include <hip/hip_runtime.h>\nhipMalloc(&p, 16);"
        );
    }

    #[test]
    fn test_untouched_regions_identical() {
        let src = "aaa bbb ccc";
        let mut set = ReplacementSet::new();
        set.insert(edit(4, 3, "BBB"));
        assert_eq!(set.apply(src), "aaa BBB ccc");
        // No edits at all reproduces the input.
        assert_eq!(ReplacementSet::new().apply(src), src);
    }
}
