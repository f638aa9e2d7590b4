//! Preprocessor layer of the hipify front-end.
//!
//! The translator deliberately observes the source at two levels: the
//! preprocessor sees includes, macro definitions, and macro arguments that
//! the syntactic layer would miss (or would only see after substitution has
//! obscured where the text lives), while the syntactic layer sees constructs
//! that cannot be recognized lexically. This crate is the first level. It
//! walks the main file's token stream once, and
//!
//! - recognizes `#include`, `#define`, and `#undef` directives, reporting
//!   includes and macro bodies to an observer;
//! - maintains the macro table and expands object- and function-like macro
//!   uses, reporting each use (name plus unexpanded argument tokens) to the
//!   observer;
//! - produces the *expanded* token stream the matcher layer consumes, with
//!   every token carrying both its spelling span (where its text physically
//!   sits) and its use-site span, plus a flag marking tokens that came out
//!   of a `#define` replacement list.
//!
//! Only the main file is ever lexed, so "main file only" scoping holds by
//! construction. Conditional directives are skipped without evaluation:
//! every branch's ordinary lines flow through, which is what a translator
//! wants, and duplicate observations are harmless downstream.

#![warn(missing_docs)]

use hipify_lexer::{LexError, Punct, Token, TokenKind};
use hipify_span::Span;
use rustc_hash::FxHashMap;

/// A token in the expanded stream, with provenance.
#[derive(Clone, Debug)]
pub struct PpToken {
    /// The token itself; `tok.span` is the spelling span.
    pub tok: Token,
    /// The use-site span. Equals the spelling span outside macros; for a
    /// token produced from a macro replacement list it is the span of the
    /// macro invocation.
    pub site: Span,
    /// True iff the token came from a `#define` replacement list.
    pub from_macro_body: bool,
}

impl PpToken {
    /// The spelling span: where the token's text physically sits.
    #[must_use]
    pub fn spelling(&self) -> Span {
        self.tok.span
    }
}

/// One `#define`d macro.
#[derive(Clone, Debug)]
struct MacroDef {
    /// `Some` for function-like macros, with the parameter names.
    params: Option<Vec<String>>,
    /// The replacement-list tokens.
    body: Vec<Token>,
}

/// Callbacks reported while preprocessing.
///
/// The rewrite engine implements this; the preprocessor stays ignorant of
/// rename tables and edits.
pub trait PpEvents {
    /// An `#include` directive in the main file.
    ///
    /// `filename_range` covers the delimiters too (`<...>` or `"..."`);
    /// `path` is the text between them.
    fn include_directive(&mut self, hash_span: Span, path: &str, angled: bool, filename_range: Span);

    /// A macro was defined; `body` is its replacement list.
    fn macro_defined(&mut self, name: &Token, body: &[Token]);

    /// A macro was used. For function-like macros `args` holds the
    /// unexpanded tokens of each argument; empty for object-like macros.
    fn macro_expands(&mut self, name: &Token, args: &[Vec<Token>]);
}

/// The result of preprocessing one translation unit.
#[derive(Debug)]
pub struct PpOutput {
    /// The expanded token stream, ending with an `Eof` token.
    pub tokens: Vec<PpToken>,
    /// Lexical errors encountered anywhere in the file.
    pub errors: Vec<(LexError, Span)>,
}

/// Preprocess a buffer, reporting observations to `events`.
pub fn preprocess(src: &str, events: &mut dyn PpEvents) -> PpOutput {
    Preprocessor::new(src).run(events)
}

struct Preprocessor<'src> {
    src: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    macros: FxHashMap<String, MacroDef>,
    errors: Vec<(LexError, Span)>,
}

impl<'src> Preprocessor<'src> {
    fn new(src: &'src str) -> Self {
        let tokens = hipify_lexer::tokenize(src);
        Self {
            src,
            tokens,
            pos: 0,
            macros: FxHashMap::default(),
            errors: Vec::new(),
        }
    }

    fn run(mut self, events: &mut dyn PpEvents) -> PpOutput {
        let mut out: Vec<PpToken> = Vec::with_capacity(self.tokens.len());

        while self.pos < self.tokens.len() {
            let tok = &self.tokens[self.pos];
            match &tok.kind {
                TokenKind::Eof => {
                    out.push(plain(tok.clone()));
                    break;
                }
                TokenKind::Error(err) => {
                    self.errors.push((err.clone(), tok.span));
                    self.pos += 1;
                }
                TokenKind::Punct(Punct::Hash) if tok.first_on_line => {
                    self.directive(events);
                }
                TokenKind::Ident(name) if self.macros.contains_key(name) => {
                    let mut active = Vec::new();
                    self.expand_use(events, &mut active, &mut out);
                }
                _ => {
                    out.push(plain(tok.clone()));
                    self.pos += 1;
                }
            }
        }

        PpOutput {
            tokens: out,
            errors: self.errors,
        }
    }

    /// The token indices of the current directive line (after the `#`).
    ///
    /// The lexer marks the first token of each logical line, so a directive
    /// runs from the token after the hash up to the next line start.
    /// Backslash continuations never set the flag, so multi-line macro
    /// bodies stay in one directive.
    fn directive_range(&self) -> (usize, usize) {
        let start = self.pos + 1;
        let mut end = start;
        while end < self.tokens.len() {
            let t = &self.tokens[end];
            if t.first_on_line || t.kind == TokenKind::Eof {
                break;
            }
            end += 1;
        }
        (start, end)
    }

    fn directive(&mut self, events: &mut dyn PpEvents) {
        let hash_span = self.tokens[self.pos].span;
        let (start, end) = self.directive_range();

        let keyword = self
            .tokens
            .get(start)
            .and_then(|t| t.ident())
            .map(str::to_string);
        match keyword.as_deref() {
            Some("include") => self.include_directive(events, hash_span, start),
            Some("define") => self.define_directive(events, start, end),
            Some("undef") if start + 1 < end => {
                let name = self
                    .tokens
                    .get(start + 1)
                    .and_then(|t| t.ident())
                    .map(str::to_string);
                if let Some(name) = name {
                    self.macros.remove(&name);
                }
            }
            // Conditionals, pragmas, and the rest are skipped unevaluated.
            _ => {}
        }

        self.pos = end;
    }

    /// Re-scan the raw header-name of an `#include`. The lexer has no
    /// header-name token (it would have split `<cuda_runtime.h>` at the
    /// dots and slashes), so the path is read straight from the buffer.
    fn include_directive(&mut self, events: &mut dyn PpEvents, hash_span: Span, start: usize) {
        let Some(keyword) = self.tokens.get(start) else {
            return;
        };
        let mut scan = keyword.span.hi.as_usize();
        let bytes = self.src.as_bytes();
        while scan < bytes.len() && (bytes[scan] == b' ' || bytes[scan] == b'\t') {
            scan += 1;
        }
        let (close, angled) = match bytes.get(scan) {
            Some(b'<') => (b'>', true),
            Some(b'"') => (b'"', false),
            _ => return,
        };
        let path_lo = scan + 1;
        let mut path_hi = path_lo;
        while path_hi < bytes.len() && bytes[path_hi] != close && bytes[path_hi] != b'\n' {
            path_hi += 1;
        }
        if bytes.get(path_hi) != Some(&close) {
            return;
        }
        let filename_range = Span::from_raw(scan as u32, path_hi as u32 + 1);
        let path = &self.src[path_lo..path_hi];
        events.include_directive(hash_span, path, angled, filename_range);
    }

    fn define_directive(&mut self, events: &mut dyn PpEvents, start: usize, end: usize) {
        // The name must be on the directive's own logical line.
        if start + 1 >= end {
            return;
        }
        let Some(name_tok) = self.tokens.get(start + 1).cloned() else {
            return;
        };
        let Some(name) = name_tok.ident().map(str::to_string) else {
            return;
        };

        let mut body_start = start + 2;
        let mut params = None;

        // A parameter list only exists when the `(` is glued to the name.
        let lparen = self.tokens.get(start + 2);
        if lparen.is_some_and(|t| t.is_punct(Punct::LParen) && t.span.lo == name_tok.span.hi) {
            let mut names = Vec::new();
            let mut i = start + 3;
            while i < end {
                let t = &self.tokens[i];
                if t.is_punct(Punct::RParen) {
                    i += 1;
                    break;
                }
                if let Some(p) = t.ident() {
                    names.push(p.to_string());
                }
                i += 1;
            }
            params = Some(names);
            body_start = i;
        }

        let body: Vec<Token> = self.tokens[body_start.min(end)..end].to_vec();
        events.macro_defined(&name_tok, &body);
        self.macros.insert(name, MacroDef { params, body });
    }

    /// Expand the macro use at `self.pos` into `out`, reporting the use.
    fn expand_use(
        &mut self,
        events: &mut dyn PpEvents,
        active: &mut Vec<String>,
        out: &mut Vec<PpToken>,
    ) {
        let name_tok = self.tokens[self.pos].clone();
        let name = name_tok.ident().unwrap_or_default().to_string();
        let def = self.macros[&name].clone();

        self.pos += 1;

        let mut args: Vec<Vec<Token>> = Vec::new();
        let mut invocation = name_tok.span;

        if def.params.is_some() {
            if !self.tokens.get(self.pos).is_some_and(|t| t.is_punct(Punct::LParen)) {
                // Function-like macro name without arguments: not a use.
                out.push(plain(name_tok));
                return;
            }
            let (collected, close_span) = self.collect_arguments();
            args = collected;
            invocation = invocation.to(close_span);
        }

        events.macro_expands(&name_tok, &args);

        let substituted = substitute(&def, &args, invocation);
        active.push(name);
        self.rescan(events, active, substituted, out);
        active.pop();
    }

    /// Collect `( ... )` argument tokens, splitting on top-level commas.
    /// Returns the per-argument token lists and the span of the `)`.
    fn collect_arguments(&mut self) -> (Vec<Vec<Token>>, Span) {
        debug_assert!(self.tokens[self.pos].is_punct(Punct::LParen));
        self.pos += 1;

        let mut args: Vec<Vec<Token>> = vec![Vec::new()];
        let mut depth = 0usize;
        let mut close_span = self.tokens[self.pos - 1].span;

        while self.pos < self.tokens.len() {
            let t = self.tokens[self.pos].clone();
            match &t.kind {
                TokenKind::Eof => break,
                TokenKind::Punct(Punct::LParen | Punct::LBracket | Punct::LBrace) => {
                    depth += 1;
                    args.last_mut().unwrap().push(t);
                }
                TokenKind::Punct(Punct::RParen) if depth == 0 => {
                    close_span = t.span;
                    self.pos += 1;
                    break;
                }
                TokenKind::Punct(Punct::RParen | Punct::RBracket | Punct::RBrace) => {
                    depth = depth.saturating_sub(1);
                    args.last_mut().unwrap().push(t);
                }
                TokenKind::Punct(Punct::Comma) if depth == 0 => {
                    args.push(Vec::new());
                }
                _ => args.last_mut().unwrap().push(t),
            }
            self.pos += 1;
        }

        if args.len() == 1 && args[0].is_empty() {
            args.clear();
        }
        (args, close_span)
    }

    /// Rescan substituted tokens for further macro uses. Nested uses do not
    /// re-fire `macro_expands` for replacement-list tokens: those spellings
    /// were already observed at their definition site.
    fn rescan(
        &mut self,
        events: &mut dyn PpEvents,
        active: &mut Vec<String>,
        tokens: Vec<PpToken>,
        out: &mut Vec<PpToken>,
    ) {
        let mut i = 0;
        while i < tokens.len() {
            let pt = &tokens[i];
            let expandable = pt
                .tok
                .ident()
                .is_some_and(|n| self.macros.contains_key(n) && !active.iter().any(|a| a == n));

            if !expandable {
                out.push(pt.clone());
                i += 1;
                continue;
            }

            let name = pt.tok.ident().unwrap_or_default().to_string();
            let def = self.macros[&name].clone();

            let mut args: Vec<Vec<Token>> = Vec::new();
            let mut consumed = 1;
            if def.params.is_some() {
                if !tokens.get(i + 1).is_some_and(|t| t.tok.is_punct(Punct::LParen)) {
                    out.push(pt.clone());
                    i += 1;
                    continue;
                }
                let (collected, used) = collect_nested_arguments(&tokens[i + 1..]);
                args = collected;
                consumed += used;
            }

            if !pt.from_macro_body {
                events.macro_expands(&pt.tok, &args);
            }

            let substituted = substitute(&def, &args, pt.site);
            active.push(name);
            self.rescan(events, active, substituted, out);
            active.pop();
            i += consumed;
        }
    }
}

/// Substitute a macro body, splicing argument tokens for parameters.
///
/// Argument tokens keep their own spans (they are written at the use site);
/// replacement-list tokens carry the invocation as their use site and are
/// marked as coming from the macro body.
fn substitute(def: &MacroDef, args: &[Vec<Token>], invocation: Span) -> Vec<PpToken> {
    let empty: Vec<String> = Vec::new();
    let params = def.params.as_ref().unwrap_or(&empty);

    let mut out = Vec::with_capacity(def.body.len());
    for tok in &def.body {
        let param_idx = tok
            .ident()
            .and_then(|n| params.iter().position(|p| p == n));
        match param_idx {
            Some(idx) => {
                for arg_tok in args.get(idx).map(Vec::as_slice).unwrap_or_default() {
                    out.push(plain(arg_tok.clone()));
                }
            }
            None => out.push(PpToken {
                tok: tok.clone(),
                site: invocation,
                from_macro_body: true,
            }),
        }
    }
    out
}

/// Collect nested-call arguments out of an already-expanded token slice
/// starting at its `(`. Returns the arguments and how many tokens were
/// consumed (including both parentheses).
fn collect_nested_arguments(tokens: &[PpToken]) -> (Vec<Vec<Token>>, usize) {
    debug_assert!(tokens[0].tok.is_punct(Punct::LParen));
    let mut args: Vec<Vec<Token>> = vec![Vec::new()];
    let mut depth = 0usize;
    let mut i = 1;

    while i < tokens.len() {
        let t = &tokens[i].tok;
        match &t.kind {
            TokenKind::Punct(Punct::LParen | Punct::LBracket | Punct::LBrace) => {
                depth += 1;
                args.last_mut().unwrap().push(t.clone());
            }
            TokenKind::Punct(Punct::RParen) if depth == 0 => {
                i += 1;
                break;
            }
            TokenKind::Punct(Punct::RParen | Punct::RBracket | Punct::RBrace) => {
                depth = depth.saturating_sub(1);
                args.last_mut().unwrap().push(t.clone());
            }
            TokenKind::Punct(Punct::Comma) if depth == 0 => {
                args.push(Vec::new());
            }
            _ => args.last_mut().unwrap().push(t.clone()),
        }
        i += 1;
    }

    if args.len() == 1 && args[0].is_empty() {
        args.clear();
    }
    (args, i)
}

fn plain(tok: Token) -> PpToken {
    let site = tok.span;
    PpToken {
        tok,
        site,
        from_macro_body: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        includes: Vec<(String, bool, Span)>,
        defines: Vec<(String, Vec<String>)>,
        expansions: Vec<(String, Vec<Vec<String>>)>,
    }

    fn spelling(tok: &Token) -> String {
        match &tok.kind {
            TokenKind::Ident(n) => n.clone(),
            other => format!("{other:?}"),
        }
    }

    impl PpEvents for Recorder {
        fn include_directive(&mut self, _hash: Span, path: &str, angled: bool, range: Span) {
            self.includes.push((path.to_string(), angled, range));
        }

        fn macro_defined(&mut self, name: &Token, body: &[Token]) {
            self.defines
                .push((spelling(name), body.iter().map(spelling).collect()));
        }

        fn macro_expands(&mut self, name: &Token, args: &[Vec<Token>]) {
            self.expansions.push((
                spelling(name),
                args.iter()
                    .map(|a| a.iter().map(spelling).collect())
                    .collect(),
            ));
        }
    }

    fn idents(out: &PpOutput) -> Vec<&str> {
        out.tokens
            .iter()
            .filter_map(|t| t.tok.ident())
            .collect()
    }

    #[test]
    fn test_include_observation() {
        let src = "#include <cuda_runtime.h>\n#include \"local.h\"\nint x;\n";
        let mut rec = Recorder::default();
        let out = preprocess(src, &mut rec);

        assert_eq!(rec.includes.len(), 2);
        let (path, angled, range) = &rec.includes[0];
        assert_eq!(path, "cuda_runtime.h");
        assert!(*angled);
        assert_eq!(&src[range.lo.as_usize()..range.hi.as_usize()], "<cuda_runtime.h>");
        assert!(!rec.includes[1].1);
        assert!(idents(&out).contains(&"x"));
    }

    #[test]
    fn test_object_macro_expansion() {
        let src = "#define N 16\nint a[N];\n";
        let mut rec = Recorder::default();
        let out = preprocess(src, &mut rec);

        assert_eq!(rec.defines.len(), 1);
        assert_eq!(rec.expansions.len(), 1);
        assert_eq!(rec.expansions[0].0, "N");
        // The 16 from the body appears in the expanded stream, marked as
        // coming from the macro body with the use as its site.
        let n = out
            .tokens
            .iter()
            .find(|t| t.from_macro_body)
            .expect("expanded body token");
        assert_eq!(n.tok.kind, TokenKind::Number);
        assert_eq!(&src[n.site.lo.as_usize()..n.site.hi.as_usize()], "N");
    }

    #[test]
    fn test_function_macro_arguments() {
        let src = "#define CHECK(x) do { x; } while (0)\nCHECK(cudaFree(p));\n";
        let mut rec = Recorder::default();
        let out = preprocess(src, &mut rec);

        assert_eq!(rec.expansions.len(), 1);
        let (name, args) = &rec.expansions[0];
        assert_eq!(name, "CHECK");
        assert_eq!(args.len(), 1);
        assert_eq!(args[0][0], "cudaFree");

        // The argument token keeps its physical location...
        let arg = out
            .tokens
            .iter()
            .find(|t| t.tok.is_ident("cudaFree"))
            .unwrap();
        assert!(!arg.from_macro_body);
        assert_eq!(arg.spelling(), arg.site);
        // ...while body tokens point at the invocation.
        let body = out.tokens.iter().find(|t| t.tok.is_ident("do")).unwrap();
        assert!(body.from_macro_body);
        assert_eq!(
            &src[body.site.lo.as_usize()..body.site.hi.as_usize()],
            "CHECK(cudaFree(p))"
        );
    }

    #[test]
    fn test_define_body_reported_at_definition() {
        let src = "#define E cudaError_t\n";
        let mut rec = Recorder::default();
        preprocess(src, &mut rec);

        assert_eq!(rec.defines.len(), 1);
        assert_eq!(rec.defines[0].1, ["cudaError_t"]);
    }

    #[test]
    fn test_undef_removes_macro() {
        let src = "#define A b\n#undef A\nA;\n";
        let mut rec = Recorder::default();
        let out = preprocess(src, &mut rec);
        assert!(rec.expansions.is_empty());
        assert!(idents(&out).contains(&"A"));
    }

    #[test]
    fn test_nested_expansion_terminates() {
        // Self-referential macros must not loop.
        let src = "#define A A\nA;\n";
        let mut rec = Recorder::default();
        let out = preprocess(src, &mut rec);
        assert_eq!(rec.expansions.len(), 1);
        assert!(idents(&out).contains(&"A"));
    }

    #[test]
    fn test_degenerate_define_is_ignored() {
        // A nameless `#define` must not swallow the next line's tokens.
        let src = "#define\nint x;\n";
        let mut rec = Recorder::default();
        let out = preprocess(src, &mut rec);
        assert!(rec.defines.is_empty());
        assert!(idents(&out).contains(&"int"));
    }

    #[test]
    fn test_spliced_macro_body() {
        let src = "#define LONG \\\n  cudaMalloc\nLONG(p);\n";
        let mut rec = Recorder::default();
        let out = preprocess(src, &mut rec);
        assert_eq!(rec.defines[0].1, ["cudaMalloc"]);
        assert!(out.tokens.iter().any(|t| t.tok.is_ident("cudaMalloc")));
    }

    #[test]
    fn test_lex_errors_surface() {
        let src = "\"unterminated\nint x;\n";
        let mut rec = Recorder::default();
        let out = preprocess(src, &mut rec);
        assert_eq!(out.errors.len(), 1);
        assert!(matches!(out.errors[0].0, LexError::UnterminatedString));
    }
}
