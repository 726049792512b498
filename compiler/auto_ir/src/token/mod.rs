//! Tokens produced by the lexer.

use std::fmt;

use crate::Pos;

/// Token kinds for auto-lang.
///
/// A closed set: literals, operators, keywords, structural punctuation,
/// format-string sub-tokens, comment markers and end-of-file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    Int,
    Uint,
    U8,
    I8,
    Float,
    Double,
    Str,
    CStr,
    Char,
    Ident,

    // Punctuation and operators
    LParen,
    RParen,
    LSquare,
    RSquare,
    LBrace,
    RBrace,
    Comma,
    Semi,
    Newline,
    Add,
    Sub,
    Star,
    Div,
    Not,
    Lt,
    Gt,
    Le,
    Ge,
    Asn,
    Eq,
    Neq,
    AddEq,
    SubEq,
    MulEq,
    DivEq,
    Dot,
    Range,
    RangeEq,
    Colon,
    VBar,
    Arrow,
    DoubleArrow,
    Question,
    At,
    Hash,

    // Comments
    CommentLine,
    CommentContent,
    CommentStart,
    CommentEnd,

    // Keywords
    True,
    False,
    Nil,
    Null,
    If,
    Else,
    For,
    When,
    Break,
    Is,
    Var,
    In,
    Fn,
    Type,
    Union,
    Tag,
    Let,
    Mut,
    Has,
    Use,
    As,
    Enum,
    On,
    Alias,
    Grid,

    // Format strings
    FStrStart,
    FStrPart,
    FStrEnd,
    FStrNote,

    Eof,
}

impl TokenKind {
    /// Keyword classification for an identifier lexeme.
    ///
    /// Returns `None` when `ident` is an ordinary identifier.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        let kind = match ident {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "nil" => TokenKind::Nil,
            "null" => TokenKind::Null,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "for" => TokenKind::For,
            "when" => TokenKind::When,
            "is" => TokenKind::Is,
            "var" => TokenKind::Var,
            "in" => TokenKind::In,
            "fn" => TokenKind::Fn,
            "type" => TokenKind::Type,
            "union" => TokenKind::Union,
            "tag" => TokenKind::Tag,
            "let" => TokenKind::Let,
            "mut" => TokenKind::Mut,
            "has" => TokenKind::Has,
            "use" => TokenKind::Use,
            "as" => TokenKind::As,
            "enum" => TokenKind::Enum,
            "on" => TokenKind::On,
            "alias" => TokenKind::Alias,
            "break" => TokenKind::Break,
            "grid" => TokenKind::Grid,
            _ => return None,
        };
        Some(kind)
    }

    /// Comment tokens carry no syntax; the parser skips them.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::CommentLine
                | TokenKind::CommentContent
                | TokenKind::CommentStart
                | TokenKind::CommentEnd
        )
    }

    /// Kinds whose lexeme varies, so token dumps show the text.
    pub fn carries_text(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Uint
                | TokenKind::U8
                | TokenKind::I8
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::Str
                | TokenKind::CStr
                | TokenKind::Char
                | TokenKind::Ident
                | TokenKind::CommentContent
                | TokenKind::FStrPart
        )
    }

    #[inline]
    pub fn is_eof(self) -> bool {
        self == TokenKind::Eof
    }

    /// Short display name used in diagnostics and token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Int => "int",
            TokenKind::Uint => "uint",
            TokenKind::U8 => "u8",
            TokenKind::I8 => "i8",
            TokenKind::Float => "float",
            TokenKind::Double => "double",
            TokenKind::Str => "string",
            TokenKind::CStr => "c-string",
            TokenKind::Char => "char",
            TokenKind::Ident => "identifier",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LSquare => "[",
            TokenKind::RSquare => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semi => ";",
            TokenKind::Newline => "newline",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Star => "*",
            TokenKind::Div => "/",
            TokenKind::Not => "!",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Le => "<=",
            TokenKind::Ge => ">=",
            TokenKind::Asn => "=",
            TokenKind::Eq => "==",
            TokenKind::Neq => "!=",
            TokenKind::AddEq => "+=",
            TokenKind::SubEq => "-=",
            TokenKind::MulEq => "*=",
            TokenKind::DivEq => "/=",
            TokenKind::Dot => ".",
            TokenKind::Range => "..",
            TokenKind::RangeEq => "..=",
            TokenKind::Colon => ":",
            TokenKind::VBar => "|",
            TokenKind::Arrow => "->",
            TokenKind::DoubleArrow => "=>",
            TokenKind::Question => "?",
            TokenKind::At => "@",
            TokenKind::Hash => "#",
            TokenKind::CommentLine => "//",
            TokenKind::CommentContent => "comment",
            TokenKind::CommentStart => "/*",
            TokenKind::CommentEnd => "*/",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Nil => "nil",
            TokenKind::Null => "null",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::When => "when",
            TokenKind::Break => "break",
            TokenKind::Is => "is",
            TokenKind::Var => "var",
            TokenKind::In => "in",
            TokenKind::Fn => "fn",
            TokenKind::Type => "type",
            TokenKind::Union => "union",
            TokenKind::Tag => "tag",
            TokenKind::Let => "let",
            TokenKind::Mut => "mut",
            TokenKind::Has => "has",
            TokenKind::Use => "use",
            TokenKind::As => "as",
            TokenKind::Enum => "enum",
            TokenKind::On => "on",
            TokenKind::Alias => "alias",
            TokenKind::Grid => "grid",
            TokenKind::FStrStart => "f-string start",
            TokenKind::FStrPart => "f-string text",
            TokenKind::FStrEnd => "f-string end",
            TokenKind::FStrNote => "f-string marker",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: kind, source position and an owned copy of its lexeme.
///
/// For string-like tokens `text` is the literal body without delimiters.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Pos, text: impl Into<String>) -> Self {
        Token {
            kind,
            pos,
            text: text.into(),
        }
    }

    pub fn eof(pos: Pos) -> Self {
        Token::new(TokenKind::Eof, pos, "")
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Newline => write!(f, "<nl>"),
            TokenKind::Eof => write!(f, "<eof>"),
            kind if kind.carries_text() => write!(f, "<{}:{}>", kind.name(), self.text),
            kind => write!(f, "<{}>", kind.name()),
        }
    }
}
