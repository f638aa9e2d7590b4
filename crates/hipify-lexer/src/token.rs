//! Token definitions for the C/C++ lexer.

use hipify_span::Span;
use std::fmt;

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the source buffer.
    pub span: Span,
    /// Whether this is the first token on its logical line.
    ///
    /// Backslash-newline splices continue the logical line, so a token
    /// after a splice is not first-on-line. Directive recognition keys
    /// off this flag.
    pub first_on_line: bool,
}

impl Token {
    /// The identifier spelling, if this token is an identifier.
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Check whether this token is the identifier `name`.
    ///
    /// C and C++ keywords are lexed as identifiers; the translator only
    /// ever cares about a handful of them (`extern`, `enum`, ...), and a
    /// spelling test keeps the rename-table lookups uniform.
    #[must_use]
    pub fn is_ident(&self, name: &str) -> bool {
        self.ident() == Some(name)
    }

    /// Check whether this token is the given punctuator.
    #[must_use]
    pub fn is_punct(&self, p: Punct) -> bool {
        self.kind == TokenKind::Punct(p)
    }
}

/// The kind of token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// An identifier or keyword: `cudaMalloc`, `extern`, `__shared__`.
    Ident(String),
    /// A preprocessing number: `42`, `0xFF`, `1e-3f`.
    Number,
    /// A character literal, any encoding prefix: `'a'`, `L'x'`.
    CharLit,
    /// A string literal.
    Str(StrLit),
    /// A punctuator or operator.
    Punct(Punct),
    /// End of file.
    Eof,
    /// Lexer error with message.
    Error(LexError),
}

/// A string literal token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrLit {
    /// The encoding prefix.
    pub prefix: StrPrefix,
    /// The byte range of the literal body, between the quotes (or raw
    /// string delimiters). Escape sequences appear as written.
    pub body: Span,
}

impl StrLit {
    /// The width in bytes of one element of the literal.
    ///
    /// Only 1-byte-wide literals are eligible for in-string renaming.
    #[must_use]
    pub const fn char_byte_width(self) -> u32 {
        match self.prefix {
            StrPrefix::None | StrPrefix::Utf8 => 1,
            StrPrefix::Utf16 => 2,
            StrPrefix::Utf32 | StrPrefix::Wide => 4,
        }
    }
}

/// String literal encoding prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrPrefix {
    /// No prefix: `"..."`.
    None,
    /// `u8"..."`.
    Utf8,
    /// `u"..."`.
    Utf16,
    /// `U"..."`.
    Utf32,
    /// `L"..."`.
    Wide,
}

/// Punctuators and operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Punct {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semi,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `...`
    Ellipsis,
    /// `->`
    Arrow,
    /// `::`
    ColonColon,
    /// `:`
    Colon,
    /// `?`
    Question,
    /// `~`
    Tilde,
    /// `!`
    Not,
    /// `!=`
    Ne,
    /// `=`
    Assign,
    /// `==`
    EqEq,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `<<`
    Shl,
    /// `<<=`
    ShlAssign,
    /// `<<<` (CUDA launch-configuration open)
    LaunchOpen,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `>>`
    Shr,
    /// `>>=`
    ShrAssign,
    /// `>>>` (CUDA launch-configuration close)
    LaunchClose,
    /// `+`
    Plus,
    /// `++`
    PlusPlus,
    /// `+=`
    PlusAssign,
    /// `-`
    Minus,
    /// `--`
    MinusMinus,
    /// `-=`
    MinusAssign,
    /// `*`
    Star,
    /// `*=`
    StarAssign,
    /// `/`
    Slash,
    /// `/=`
    SlashAssign,
    /// `%`
    Percent,
    /// `%=`
    PercentAssign,
    /// `&`
    Amp,
    /// `&&`
    AmpAmp,
    /// `&=`
    AmpAssign,
    /// `|`
    Pipe,
    /// `||`
    PipePipe,
    /// `|=`
    PipeAssign,
    /// `^`
    Caret,
    /// `^=`
    CaretAssign,
    /// `#`
    Hash,
    /// `##`
    HashHash,
}

/// Lexer error kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexError {
    /// Unterminated string literal.
    UnterminatedString,
    /// Unterminated raw string literal.
    UnterminatedRawString,
    /// Unterminated character literal.
    UnterminatedChar,
    /// Unterminated block comment.
    UnterminatedBlockComment,
    /// Character that starts no token.
    InvalidChar(char),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => write!(f, "unterminated string literal"),
            Self::UnterminatedRawString => write!(f, "unterminated raw string literal"),
            Self::UnterminatedChar => write!(f, "unterminated character literal"),
            Self::UnterminatedBlockComment => write!(f, "unterminated block comment"),
            Self::InvalidChar(c) => write!(f, "invalid character: {c:?}"),
        }
    }
}
