//! The preprocessor-level observer: include directives, macro definition
//! bodies, and macro uses (name plus unexpanded argument tokens) all funnel
//! through [`Observer`], which rewrites individual tokens.
//!
//! This is the layer that reaches text the syntactic matchers cannot: a
//! `cudaError_t` inside a `#define` body is rewritten here, at its
//! definition site, before any expansion happens.

use hipify_lexer::{Token, TokenKind};
use hipify_pp::PpEvents;
use hipify_span::Span;

use crate::{strings, RewriteEngine};

/// Adapter implementing the preprocessor callbacks against the engine.
pub(crate) struct Observer<'a, 'b> {
    pub(crate) engine: &'a mut RewriteEngine<'b>,
}

impl Observer<'_, '_> {
    /// Look at, and possibly rewrite, one token.
    ///
    /// String literals are scanned for in-string references; identifiers
    /// are looked up in the merged rename map. Anything else is ignored.
    fn rewrite_token(&mut self, tok: &Token) {
        match &tok.kind {
            TokenKind::Str(lit) => {
                if lit.char_byte_width() == 1 {
                    let body = self.engine.src()
                        [lit.body.lo.as_usize()..lit.body.hi.as_usize()]
                        .to_string();
                    strings::rewrite_string(self.engine, &body, lit.body.lo);
                }
            }
            TokenKind::Ident(name) => {
                let Some(entry) = hipify_maps::renames().get(name.as_str()).copied() else {
                    return;
                };
                self.engine.count(name, &entry);
                if entry.unsupported {
                    self.engine
                        .warn(tok.span.lo, format!("unsupported CUDA identifier used: {name}"));
                    return;
                }
                self.engine
                    .replace(tok.span.lo, name.len() as u32, entry.hip_name, tok.span.lo);
            }
            _ => {}
        }
    }
}

impl PpEvents for Observer<'_, '_> {
    fn include_directive(&mut self, hash_span: Span, path: &str, angled: bool, filename_range: Span) {
        // Only angle-includes are rewritten; quoted includes are the
        // user's own headers and stay untouched.
        if !angled {
            return;
        }
        let Some(entry) = hipify_maps::includes().get(path).copied() else {
            return;
        };
        self.engine.count(path, &entry);
        if entry.unsupported {
            self.engine
                .warn(hash_span.lo, format!("unsupported CUDA header used: {path}"));
            return;
        }
        self.engine.main_header_included |= entry.hip_name == hipify_maps::HIP_MAIN_HEADER;
        self.engine.replace(
            filename_range.lo,
            filename_range.len(),
            format!("<{}>", entry.hip_name),
            filename_range.lo,
        );
    }

    fn macro_defined(&mut self, _name: &Token, body: &[Token]) {
        for tok in body {
            self.rewrite_token(tok);
        }
    }

    fn macro_expands(&mut self, name: &Token, args: &[Vec<Token>]) {
        // The macro name itself may be a CUDA identifier, and CUDA
        // vocabulary often reaches code only through macro arguments.
        self.rewrite_token(name);
        for arg in args {
            for tok in arg {
                self.rewrite_token(tok);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::translate;
    use hipify_span::SourceFile;

    fn run(src: &str) -> (String, Vec<String>) {
        let file = SourceFile::new("test.cu".to_string(), src.to_string());
        let t = translate(&file);
        (t.edits.apply(src), t.warnings)
    }

    #[test]
    fn test_include_rewritten_in_place() {
        let src = "#include <cuda_runtime.h>\nint x;\n";
        let (out, _) = run(src);
        assert_eq!(out, "#include <hip/hip_runtime.h>\nint x;\n");
    }

    #[test]
    fn test_secondary_include_gets_header_prepend() {
        let src = "#include <cuda_runtime_api.h>\nint x;\n";
        let (out, _) = run(src);
        // The api header maps to hip_runtime_api.h, which is not the main
        // header, so the main header is still prepended.
        assert_eq!(
            out,
            "#include <hip/hip_runtime.h>\n#include <hip/hip_runtime_api.h>\nint x;\n"
        );
    }

    #[test]
    fn test_quoted_and_foreign_includes_untouched() {
        let src = "#include \"cuda_runtime.h\"\n#include <vector>\nint x;\n";
        let (out, warnings) = run(src);
        assert_eq!(out, src);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unsupported_include_warns_without_edit() {
        let src = "#include <cuda_gl_interop.h>\nint x;\n";
        let (out, warnings) = run(src);
        assert_eq!(out, src);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("[HIPIFY] warning: test.cu:1:1:"));
        assert!(warnings[0].contains("unsupported CUDA header used: cuda_gl_interop.h"));
    }

    #[test]
    fn test_macro_body_rewritten_at_definition() {
        let src = "#define CHECK(x) do { cudaError_t _e = (x); } while (0)\nint y;\n";
        let (out, _) = run(src);
        assert!(out.contains("do { hipError_t _e = (x); } while (0)"));
    }

    #[test]
    fn test_macro_argument_tokens_rewritten() {
        let src = "#define WRAP(x) (x)\nint f() { return WRAP(cudaFree(0)); }\n";
        let (out, _) = run(src);
        assert!(out.contains("WRAP(hipFree(0))"));
    }

    #[test]
    fn test_string_in_macro_argument() {
        let src = "#define MSG(s) log(s)\nvoid f() { MSG(\"cudaMalloc failed\"); }\n";
        let (out, _) = run(src);
        assert!(out.contains("MSG(\"hipMalloc failed\")"));
    }
}
