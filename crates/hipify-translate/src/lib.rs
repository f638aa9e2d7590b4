//! The CUDA-to-HIP rewrite engine.
//!
//! One call to [`translate`] runs the whole engine over a translation unit:
//! the preprocessor layer (includes, macro bodies, macro arguments) and the
//! syntactic matcher layer (calls, types, coordinate builtins, enumerator
//! references, kernel launches, dynamic shared-memory declarations, string
//! literals), both feeding one [`ReplacementSet`]. Nothing mutates the
//! buffer: handlers are pure producers of edits, and the caller applies
//! them in a final pass.
//!
//! Every site observed by both layers (a string literal in a macro argument
//! is a preprocessor token *and* a matcher node) produces duplicate edits;
//! the replacement set coalesces them, which is what makes the dual
//! observation safe.

#![warn(missing_docs)]

use hipify_lexer::LexError;
use hipify_maps::{ApiType, ConvType, RenameEntry};
use hipify_pp::PpToken;
use hipify_rewrite::{Edit, InsertOutcome, ReplacementSet};
use hipify_span::{BytePos, SourceFile, Span};
use hipify_stats::Stats;
use tracing::debug;

mod matchers;
mod strings;
mod tokens;

/// The result of translating one file: the edits to apply, the statistics
/// gathered, warnings in emission order, and any front-end errors.
#[derive(Debug)]
pub struct Translation {
    /// Collected replacements, in source order.
    pub edits: ReplacementSet,
    /// Per-file statistics.
    pub stats: Stats,
    /// `[HIPIFY] warning:` lines, in the order produced.
    pub warnings: Vec<String>,
    /// Lexical front-end errors; non-fatal (edits are still usable) but
    /// counted toward the process exit code.
    pub errors: Vec<(LexError, Span)>,
}

/// Translate one file. The file's `name` is what diagnostics cite.
#[must_use]
pub fn translate(file: &SourceFile) -> Translation {
    let mut engine = RewriteEngine::new(file);

    let output = {
        let mut observer = tokens::Observer {
            engine: &mut engine,
        };
        hipify_pp::preprocess(&file.src, &mut observer)
    };

    matchers::run(&mut engine, &output.tokens);
    engine.finish();

    Translation {
        edits: engine.edits,
        stats: engine.stats,
        warnings: engine.warnings,
        errors: output.errors,
    }
}

/// Shared state of one translation: the buffer, the edits, the counters,
/// and the warning sink. Handlers in the two observation layers only ever
/// talk to this.
struct RewriteEngine<'a> {
    file: &'a SourceFile,
    edits: ReplacementSet,
    stats: Stats,
    warnings: Vec<String>,
    /// Set when an include edit already produced the HIP main runtime
    /// header; suppresses the end-of-source insertion.
    main_header_included: bool,
}

impl<'a> RewriteEngine<'a> {
    fn new(file: &'a SourceFile) -> Self {
        Self {
            file,
            edits: ReplacementSet::new(),
            stats: Stats::new(file.name.clone()),
            warnings: Vec::new(),
            main_header_included: false,
        }
    }

    fn src(&self) -> &'a str {
        &self.file.src
    }

    /// Emit a `[HIPIFY] warning` against a byte position.
    fn warn(&mut self, pos: BytePos, message: impl std::fmt::Display) {
        let loc = self.file.lookup_line_col(pos);
        self.warnings.push(format!(
            "[HIPIFY] warning: {}:{}:{}: {message}",
            self.file.name, loc.line, loc.col
        ));
    }

    /// Insert a replacement and book it on the statistics. `site` is the
    /// use-site position whose line is recorded as touched.
    fn replace(&mut self, at: BytePos, old_len: u32, text: impl Into<String>, site: BytePos) {
        let edit = Edit::new(at, old_len, text);
        match self.edits.insert(edit) {
            InsertOutcome::Inserted => {
                self.stats.line_touched(self.file.lookup_line(site));
                self.stats.bytes_changed(u64::from(old_len));
            }
            InsertOutcome::Duplicate => {}
            InsertOutcome::Overlap => {
                debug!(offset = at.as_u32(), "dropped overlapping replacement");
                self.stats.conflicting_edit();
            }
        }
    }

    /// Count a rename-table hit under its own tags.
    fn count(&mut self, src_name: &str, entry: &RenameEntry) {
        self.stats
            .increment(src_name, entry.conv, entry.api, entry.unsupported);
    }

    /// Count a synthetic conversion (launch rewrites, header insertion).
    fn count_synthetic(&mut self, src_name: &str, conv: ConvType, api: ApiType) {
        self.stats.increment(src_name, conv, api, false);
    }

    /// End-of-source hook: a file that received at least one edit gets the
    /// HIP runtime header prepended, unless an include rewrite already
    /// produced it (a translated file carries exactly one).
    fn finish(&mut self) {
        if self.edits.is_empty() || self.main_header_included {
            return;
        }
        let text = format!("#include <{}>\n", hipify_maps::HIP_MAIN_HEADER);
        self.count_synthetic("#include <cuda>", ConvType::IncludeCudaMainH, ApiType::Runtime);
        self.replace(BytePos::ZERO, 0, text, BytePos::ZERO);
    }

    /// The single-token write position: a token from a macro replacement
    /// list is rewritten at its spelling (the `#define`), anything else in
    /// place.
    fn token_write_pos(&self, tok: &PpToken) -> BytePos {
        if tok.from_macro_body {
            tok.spelling().lo
        } else {
            tok.site.lo
        }
    }
}

/// Read and write range selection over the expanded token stream.
///
/// Reading verbatim source prefers use-site (file) locations so arguments
/// that *mention* macros copy the mention, not the macro body; it falls
/// back to spelling locations when an endpoint sits strictly inside a
/// macro expansion. Writing uses file locations unless both endpoints are
/// inside a macro body, in which case the edit lands in the `#define`.
/// Getting these two rules confused corrupts output silently, so they are
/// kept as small, separately-tested functions.
mod ranges {
    use super::{PpToken, Span};

    /// Is this endpoint at a position a file-location range may use?
    /// True for physical tokens and for the first/last token produced by
    /// a macro expansion (detected by its neighbours' use sites).
    fn begin_safe(toks: &[PpToken], idx: usize) -> bool {
        let t = &toks[idx];
        !t.from_macro_body || idx == 0 || toks[idx - 1].site != t.site
    }

    fn end_safe(toks: &[PpToken], idx: usize) -> bool {
        let t = &toks[idx];
        !t.from_macro_body || idx + 1 >= toks.len() || toks[idx + 1].site != t.site
    }

    /// The byte range to read verbatim for tokens `first..=last`.
    pub(crate) fn read_range(toks: &[PpToken], first: usize, last: usize) -> Span {
        if begin_safe(toks, first) && end_safe(toks, last) {
            Span::new(toks[first].site.lo, toks[last].site.hi)
        } else {
            Span::new(toks[first].spelling().lo, toks[last].spelling().hi)
        }
    }

    /// The byte range a replacement of tokens `first..=last` covers.
    pub(crate) fn write_range(toks: &[PpToken], first: usize, last: usize) -> Span {
        if !toks[first].from_macro_body || !toks[last].from_macro_body {
            Span::new(toks[first].site.lo, toks[last].site.hi)
        } else {
            Span::new(toks[first].spelling().lo, toks[last].spelling().hi)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(src: &str) -> (String, Translation) {
        let file = SourceFile::new("test.cu".to_string(), src.to_string());
        let t = translate(&file);
        (t.edits.apply(src), t)
    }

    #[test]
    fn test_untouched_file_is_identical() {
        let src = "int main() { return 0; }\n";
        let (out, t) = run(src);
        assert_eq!(out, src);
        assert!(t.edits.is_empty());
        assert!(t.warnings.is_empty());
    }

    #[test]
    fn test_header_prepended_once() {
        let src = "int f() { return cudaFree(0); }\n";
        let (out, t) = run(src);
        assert!(out.starts_with("#include <hip/hip_runtime.h>\n"));
        assert_eq!(out.matches("#include <hip/hip_runtime.h>").count(), 1);
        assert!(out.contains("hipFree(0)"));
        assert_eq!(t.stats.supported_count(), 2); // the call + the header
    }

    #[test]
    fn test_determinism() {
        let src = "#include <cuda_runtime.h>\ncudaError_t e = cudaMalloc(&p, 16);\n";
        let (first, _) = run(src);
        let (second, _) = run(src);
        assert_eq!(first, second);
    }

    #[test]
    fn test_idempotence_on_output() {
        let src = "#include <cuda_runtime.h>\n\
                   int f() { cudaError_t e = cudaMalloc(&p, 16); return e; }\n";
        let (once, _) = run(src);
        let (twice, t) = run(&once);
        assert_eq!(once, twice);
        assert!(t.edits.is_empty());
    }
}
