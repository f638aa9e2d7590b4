//! Lexical analysis of C/C++ translation units for the hipify translator.
//!
//! The lexer produces a flat token stream with byte spans into the original
//! buffer. It is a *recognition* front-end, not a compilation one: spellings
//! are preserved exactly, keywords are ordinary identifiers, and comments
//! and whitespace are skipped as trivia. Two departures from plain C++
//! tokenization serve the translator:
//!
//! - `<<<` and `>>>` are lexed as single tokens (the CUDA kernel-launch
//!   extension), with maximal munch ahead of `<<` / `>>`.
//! - Every token records whether it is the first on its logical line, which
//!   is what preprocessor-directive recognition keys off. Backslash-newline
//!   splices continue the logical line.
//!
//! Lexical errors (unterminated literals or comments) become `Error` tokens
//! in the stream; the caller decides whether they are fatal.

#![warn(missing_docs)]

use hipify_span::Span;

mod token;

pub use token::{LexError, Punct, StrLit, StrPrefix, Token, TokenKind};

/// A lexer over one translation unit.
pub struct Lexer<'src> {
    /// The source code being lexed.
    src: &'src str,
    /// Current byte position in the source.
    pos: usize,
    /// Whether the next token starts a logical line.
    at_line_start: bool,
}

/// Tokenize a whole buffer, ending with an `Eof` token.
#[must_use]
pub fn tokenize(src: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.kind == TokenKind::Eof;
        tokens.push(tok);
        if done {
            break;
        }
    }
    tokens
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    #[must_use]
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            pos: 0,
            at_line_start: true,
        }
    }

    fn remaining(&self) -> &'src str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek2(&self) -> Option<char> {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next()
    }

    fn starts_with(&self, s: &str) -> bool {
        self.remaining().starts_with(s)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if pred(c) {
                self.advance();
            } else {
                break;
            }
        }
        &self.src[start..self.pos]
    }

    /// Skip whitespace, comments, and line splices. Returns a lexical error
    /// if an unterminated block comment runs to end of file.
    fn skip_trivia(&mut self) -> Option<(LexError, usize)> {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r') => {
                    self.advance();
                }
                Some('\n') => {
                    self.advance();
                    self.at_line_start = true;
                }
                Some('\\') if self.peek2() == Some('\n') => {
                    // Line splice: the logical line continues.
                    self.advance();
                    self.advance();
                }
                Some('\\') if self.peek2() == Some('\r') => {
                    self.advance();
                    self.advance();
                    if self.peek() == Some('\n') {
                        self.advance();
                    }
                }
                Some('/') if self.peek2() == Some('/') => {
                    self.advance_while(|c| c != '\n');
                }
                Some('/') if self.peek2() == Some('*') => {
                    let start = self.pos;
                    self.advance();
                    self.advance();
                    loop {
                        if self.starts_with("*/") {
                            self.advance();
                            self.advance();
                            break;
                        }
                        if self.advance().is_none() {
                            return Some((LexError::UnterminatedBlockComment, start));
                        }
                    }
                }
                _ => return None,
            }
        }
    }

    /// Lex the next token.
    pub fn next_token(&mut self) -> Token {
        if let Some((err, start)) = self.skip_trivia() {
            return self.make(TokenKind::Error(err), start, false);
        }

        let first_on_line = self.at_line_start;
        self.at_line_start = false;
        let start = self.pos;

        let Some(c) = self.peek() else {
            return self.make(TokenKind::Eof, start, first_on_line);
        };

        let kind = match c {
            c if is_ident_start(c) => self.lex_word(),
            '"' => {
                self.advance();
                self.lex_string_tail(StrPrefix::None, false)
            }
            '\'' => {
                self.advance();
                self.lex_char_tail()
            }
            '0'..='9' => self.lex_number(),
            '.' if matches!(self.peek2(), Some('0'..='9')) => self.lex_number(),
            _ => self.lex_punct(c),
        };

        self.make(kind, start, first_on_line)
    }

    fn make(&self, kind: TokenKind, start: usize, first_on_line: bool) -> Token {
        Token {
            kind,
            span: Span::from_raw(start as u32, self.pos as u32),
            first_on_line,
        }
    }

    /// Lex an identifier, or a string/char literal introduced by an
    /// encoding prefix (`L"..."`, `u8"..."`, `R"(...)"`, ...).
    fn lex_word(&mut self) -> TokenKind {
        let word = self.advance_while(is_ident_continue);

        if self.peek() == Some('"') {
            let (prefix, raw) = match word {
                "R" => (StrPrefix::None, true),
                "u8" => (StrPrefix::Utf8, false),
                "u8R" => (StrPrefix::Utf8, true),
                "u" => (StrPrefix::Utf16, false),
                "uR" => (StrPrefix::Utf16, true),
                "U" => (StrPrefix::Utf32, false),
                "UR" => (StrPrefix::Utf32, true),
                "L" => (StrPrefix::Wide, false),
                "LR" => (StrPrefix::Wide, true),
                _ => return TokenKind::Ident(word.to_string()),
            };
            self.advance();
            return self.lex_string_tail(prefix, raw);
        }

        if self.peek() == Some('\'') && matches!(word, "L" | "u" | "U" | "u8") {
            self.advance();
            return self.lex_char_tail();
        }

        TokenKind::Ident(word.to_string())
    }

    /// Lex a string literal after its opening quote.
    fn lex_string_tail(&mut self, prefix: StrPrefix, raw: bool) -> TokenKind {
        if raw {
            return self.lex_raw_string_tail(prefix);
        }

        let body_lo = self.pos;
        loop {
            match self.peek() {
                None | Some('\n') => return TokenKind::Error(LexError::UnterminatedString),
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some('"') => {
                    let body = Span::from_raw(body_lo as u32, self.pos as u32);
                    self.advance();
                    return TokenKind::Str(StrLit { prefix, body });
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Lex a raw string literal after its opening quote: `delim( ... )delim"`.
    fn lex_raw_string_tail(&mut self, prefix: StrPrefix) -> TokenKind {
        let delim = self.advance_while(|c| c != '(' && c != '\n' && c != '"');
        if self.peek() != Some('(') {
            return TokenKind::Error(LexError::UnterminatedRawString);
        }
        let closer = format!("){delim}\"");
        self.advance();
        let body_lo = self.pos;
        loop {
            if self.starts_with(&closer) {
                let body = Span::from_raw(body_lo as u32, self.pos as u32);
                for _ in 0..closer.len() {
                    self.advance();
                }
                return TokenKind::Str(StrLit { prefix, body });
            }
            if self.advance().is_none() {
                return TokenKind::Error(LexError::UnterminatedRawString);
            }
        }
    }

    /// Lex a character literal after its opening quote.
    fn lex_char_tail(&mut self) -> TokenKind {
        loop {
            match self.peek() {
                None | Some('\n') => return TokenKind::Error(LexError::UnterminatedChar),
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some('\'') => {
                    self.advance();
                    return TokenKind::CharLit;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Lex a preprocessing number: digits, identifier characters, `.`, and
    /// signed exponents. Deliberately permissive; the translator never
    /// interprets the value.
    fn lex_number(&mut self) -> TokenKind {
        while let Some(c) = self.peek() {
            if matches!(c, 'e' | 'E' | 'p' | 'P') && matches!(self.peek2(), Some('+' | '-')) {
                self.advance();
                self.advance();
            } else if is_ident_continue(c) || c == '.' {
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Number
    }

    fn lex_punct(&mut self, c: char) -> TokenKind {
        use Punct::*;

        // Longest-match table for multi-character operators. `<<<` and
        // `>>>` outrank the shift operators.
        static MULTI: &[(&str, Punct)] = &[
            ("<<<", LaunchOpen),
            ("<<=", ShlAssign),
            (">>>", LaunchClose),
            (">>=", ShrAssign),
            ("...", Ellipsis),
            ("<<", Shl),
            (">>", Shr),
            ("<=", Le),
            (">=", Ge),
            ("==", EqEq),
            ("!=", Ne),
            ("->", Arrow),
            ("::", ColonColon),
            ("++", PlusPlus),
            ("--", MinusMinus),
            ("+=", PlusAssign),
            ("-=", MinusAssign),
            ("*=", StarAssign),
            ("/=", SlashAssign),
            ("%=", PercentAssign),
            ("&&", AmpAmp),
            ("&=", AmpAssign),
            ("||", PipePipe),
            ("|=", PipeAssign),
            ("^=", CaretAssign),
            ("##", HashHash),
        ];

        for (text, punct) in MULTI {
            if self.starts_with(text) {
                for _ in 0..text.len() {
                    self.advance();
                }
                return TokenKind::Punct(*punct);
            }
        }

        self.advance();
        let punct = match c {
            '(' => LParen,
            ')' => RParen,
            '[' => LBracket,
            ']' => RBracket,
            '{' => LBrace,
            '}' => RBrace,
            ';' => Semi,
            ',' => Comma,
            '.' => Dot,
            ':' => Colon,
            '?' => Question,
            '~' => Tilde,
            '!' => Not,
            '=' => Assign,
            '<' => Lt,
            '>' => Gt,
            '+' => Plus,
            '-' => Minus,
            '*' => Star,
            '/' => Slash,
            '%' => Percent,
            '&' => Amp,
            '|' => Pipe,
            '^' => Caret,
            '#' => Hash,
            _ => return TokenKind::Error(LexError::InvalidChar(c)),
        };
        TokenKind::Punct(punct)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_identifiers_and_calls() {
        let toks = tokenize("cudaMalloc(&p, 16);");
        assert!(toks[0].is_ident("cudaMalloc"));
        assert!(toks[1].is_punct(Punct::LParen));
        assert!(toks[2].is_punct(Punct::Amp));
        assert!(toks[3].is_ident("p"));
        assert!(toks[4].is_punct(Punct::Comma));
        assert_eq!(toks[5].kind, TokenKind::Number);
        assert_eq!(toks[0].span, Span::from_raw(0, 10));
    }

    #[test]
    fn test_launch_tokens_outrank_shifts() {
        let toks = tokenize("k<<<g, b>>>(x); a << b; c >> d;");
        assert!(toks[1].is_punct(Punct::LaunchOpen));
        assert!(toks[5].is_punct(Punct::LaunchClose));
        assert!(toks.iter().any(|t| t.is_punct(Punct::Shl)));
        assert!(toks.iter().any(|t| t.is_punct(Punct::Shr)));
    }

    #[test]
    fn test_string_literal_body_span() {
        let src = r#"printf("error in cudaMalloc\n");"#;
        let toks = tokenize(src);
        let TokenKind::Str(lit) = &toks[2].kind else {
            panic!("expected string literal, got {:?}", toks[2].kind);
        };
        assert_eq!(lit.prefix, StrPrefix::None);
        assert_eq!(lit.char_byte_width(), 1);
        assert_eq!(
            &src[lit.body.lo.as_usize()..lit.body.hi.as_usize()],
            "error in cudaMalloc\\n"
        );
    }

    #[test]
    fn test_wide_string_prefixes() {
        let toks = tokenize(r#"L"wide" u8"narrow""#);
        let TokenKind::Str(wide) = &toks[0].kind else {
            panic!("expected string literal");
        };
        let TokenKind::Str(narrow) = &toks[1].kind else {
            panic!("expected string literal");
        };
        assert_eq!(wide.prefix, StrPrefix::Wide);
        assert_ne!(wide.char_byte_width(), 1);
        assert_eq!(narrow.prefix, StrPrefix::Utf8);
        assert_eq!(narrow.char_byte_width(), 1);
    }

    #[test]
    fn test_raw_string() {
        let src = r###"R"x(a "quoted" cudaMalloc)x""###;
        let toks = tokenize(src);
        let TokenKind::Str(lit) = &toks[0].kind else {
            panic!("expected raw string literal");
        };
        assert_eq!(
            &src[lit.body.lo.as_usize()..lit.body.hi.as_usize()],
            r#"a "quoted" cudaMalloc"#
        );
    }

    #[test]
    fn test_comments_are_trivia() {
        let toks = kinds("a /* block */ b // line\nc");
        let idents: Vec<_> = toks
            .iter()
            .filter_map(|k| match k {
                TokenKind::Ident(n) => Some(n.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(idents, ["a", "b", "c"]);
    }

    #[test]
    fn test_first_on_line_and_splices() {
        let toks = tokenize("#define A \\\n  cudaMalloc\n#undef A");
        assert!(toks[0].is_punct(Punct::Hash));
        assert!(toks[0].first_on_line);
        // The spliced continuation is still the same logical line.
        assert!(toks[3].is_ident("cudaMalloc"));
        assert!(!toks[3].first_on_line);
        assert!(toks[4].is_punct(Punct::Hash));
        assert!(toks[4].first_on_line);
    }

    #[test]
    fn test_unterminated_string_is_error_token() {
        let toks = tokenize("\"oops\n x");
        assert!(matches!(
            toks[0].kind,
            TokenKind::Error(LexError::UnterminatedString)
        ));
        // Lexing continues after the error.
        assert!(toks.iter().any(|t| t.is_ident("x")));
    }
}
