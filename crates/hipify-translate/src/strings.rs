//! In-string rewriting of CUDA names.
//!
//! Scans a string-literal body for whitespace-delimited tokens carrying the
//! CUDA prefix and renames the ones the tables know. This is what keeps
//! messages like `"error in cudaMalloc\n"` consistent with the surrounding
//! rewritten code.

use hipify_maps::{ConvType, CUDA_PREFIX};
use hipify_span::BytePos;

use crate::RewriteEngine;

/// Candidate delimiters. Space and tab end a string-embedded token; a
/// backslash does too, because it introduces an escape sequence and can
/// never be part of an identifier. Punctuation does *not* delimit, so a
/// reference like `"cudaMalloc,"` is left alone (known, intentional
/// behavior carried over from the original scanner; flagged for review
/// rather than fixed).
fn is_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\\')
}

/// Rewrite CUDA references inside one literal body.
///
/// `body_lo` is the offset of the body's first byte in the buffer, i.e.
/// just past the opening quote; escape sequences appear as written, so
/// body indices are exact source offsets.
pub(crate) fn rewrite_string(engine: &mut RewriteEngine<'_>, body: &str, body_lo: BytePos) {
    let bytes = body.as_bytes();
    let mut begin = 0usize;

    while let Some(found) = body[begin..].find(CUDA_PREFIX) {
        let b = begin + found;
        // The delimiter search starts past the first few characters of the
        // candidate; every name in the tables is longer than the prefix.
        let end = bytes[(b + 4).min(bytes.len())..]
            .iter()
            .position(|&c| is_delimiter(c))
            .map(|i| (b + 4).min(bytes.len()) + i);
        let candidate = &body[b..end.unwrap_or(bytes.len())];

        if let Some(entry) = hipify_maps::renames().get(candidate) {
            engine.stats.increment(
                candidate,
                ConvType::Literal,
                entry.api,
                entry.unsupported,
            );
            if !entry.unsupported {
                let at = body_lo + b as u32;
                engine.replace(at, candidate.len() as u32, entry.hip_name, at);
            }
        }

        match end {
            Some(e) => begin = e + 1,
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hipify_span::SourceFile;

    fn rewrite(body_at: u32, body: &str, src: &str) -> (String, Vec<String>) {
        let file = SourceFile::new("test.cu".to_string(), src.to_string());
        let mut engine = RewriteEngine::new(&file);
        rewrite_string(&mut engine, body, BytePos::new(body_at));
        (engine.edits.apply(src), engine.warnings)
    }

    #[test]
    fn test_simple_reference() {
        let src = r#""use cudaMalloc here""#;
        let (out, _) = rewrite(1, "use cudaMalloc here", src);
        assert_eq!(out, r#""use hipMalloc here""#);
    }

    #[test]
    fn test_escape_terminates_candidate() {
        let src = r#""error in cudaMalloc\n""#;
        let (out, _) = rewrite(1, r"error in cudaMalloc\n", src);
        assert_eq!(out, r#""error in hipMalloc\n""#);
    }

    #[test]
    fn test_punctuation_adjacent_not_rewritten() {
        let src = r#""cudaMalloc, then more""#;
        let (out, _) = rewrite(1, "cudaMalloc, then more", src);
        assert_eq!(out, src);
    }

    #[test]
    fn test_embedded_prefix_inside_longer_word() {
        // Scanning restarts at each `cu`; a candidate that runs to the next
        // delimiter but matches nothing (`cudaism` inside `docudaism`) is
        // left alone.
        let src = r#""see cudaFree and docudaism""#;
        let (out, _) = rewrite(1, "see cudaFree and docudaism", src);
        assert_eq!(out, r#""see hipFree and docudaism""#);
    }

    #[test]
    fn test_multiple_references() {
        let src = r#""cudaMalloc then cudaFree""#;
        let (out, _) = rewrite(1, "cudaMalloc then cudaFree", src);
        assert_eq!(out, r#""hipMalloc then hipFree""#);
    }

    #[test]
    fn test_unknown_candidate_ignored() {
        let src = r#""cudaNotARealThing stays""#;
        let (out, _) = rewrite(1, "cudaNotARealThing stays", src);
        assert_eq!(out, src);
    }
}
