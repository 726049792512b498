//! Binary and unary operators.

use crate::TokenKind;

/// Binary operators.
///
/// Range operators are not here: `..` and `..=` build [`ExprKind::Range`]
/// nodes directly.
///
/// [`ExprKind::Range`]: crate::ExprKind::Range
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,

    // Member access
    Dot,
}

impl BinaryOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Add => Self::Add,
            TokenKind::Sub => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Div => Self::Div,
            TokenKind::Eq => Self::Eq,
            TokenKind::Neq => Self::NotEq,
            TokenKind::Lt => Self::Lt,
            TokenKind::Gt => Self::Gt,
            TokenKind::Le => Self::LtEq,
            TokenKind::Ge => Self::GtEq,
            TokenKind::Asn => Self::Assign,
            TokenKind::AddEq => Self::AddAssign,
            TokenKind::SubEq => Self::SubAssign,
            TokenKind::MulEq => Self::MulAssign,
            TokenKind::DivEq => Self::DivAssign,
            TokenKind::Dot => Self::Dot,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::Dot => ".",
        }
    }

    #[inline]
    pub fn is_assignment(self) -> bool {
        matches!(
            self,
            Self::Assign | Self::AddAssign | Self::SubAssign | Self::MulAssign | Self::DivAssign
        )
    }

    /// The arithmetic operator a compound assignment applies (`+=` gives `+`).
    pub fn compound_base(self) -> Option<BinaryOp> {
        match self {
            Self::AddAssign => Some(Self::Add),
            Self::SubAssign => Some(Self::Sub),
            Self::MulAssign => Some(Self::Mul),
            Self::DivAssign => Some(Self::Div),
            _ => None,
        }
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
    Plus,
}

impl UnaryOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Sub => Some(Self::Neg),
            TokenKind::Not => Some(Self::Not),
            TokenKind::Add => Some(Self::Plus),
            _ => None,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
            Self::Plus => "+",
        }
    }
}
