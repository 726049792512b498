//! Operator precedence table.
//!
//! Higher binds tighter:
//!
//! | level | operators |
//! |-------|-----------|
//! | 1 | `=` `+=` `-=` `*=` `/=` (right) |
//! | 4 | `==` `!=` `<` `>` `<=` `>=` (right) |
//! | 9 | `..` `..=` |
//! | 10 | `+` `-` |
//! | 11 | `*` `/` |
//! | 12 | prefix `-` `!` `+` |
//! | 15 | postfix `(...)` `[...]` |
//! | 17 | `.` |

use auto_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

pub(super) type Prec = u8;

pub(super) const PREC_NONE: Prec = 0;
pub(super) const PREC_ASN: Prec = 1;
pub(super) const PREC_CMP: Prec = 4;
pub(super) const PREC_RANGE: Prec = 9;
pub(super) const PREC_ADD: Prec = 10;
pub(super) const PREC_MUL: Prec = 11;
pub(super) const PREC_UNARY: Prec = 12;
pub(super) const PREC_CALL: Prec = 15;
pub(super) const PREC_DOT: Prec = 17;

/// What an infix token builds.
#[derive(Copy, Clone, Debug)]
pub(super) enum Infix {
    Binary(BinaryOp),
    /// `..` (false) or `..=` (true).
    Range(bool),
}

impl Infix {
    pub(super) fn prec(self) -> Prec {
        match self {
            Infix::Range(_) => PREC_RANGE,
            Infix::Binary(op) => match op {
                BinaryOp::Assign
                | BinaryOp::AddAssign
                | BinaryOp::SubAssign
                | BinaryOp::MulAssign
                | BinaryOp::DivAssign => PREC_ASN,
                BinaryOp::Eq
                | BinaryOp::NotEq
                | BinaryOp::Lt
                | BinaryOp::Gt
                | BinaryOp::LtEq
                | BinaryOp::GtEq => PREC_CMP,
                BinaryOp::Add | BinaryOp::Sub => PREC_ADD,
                BinaryOp::Mul | BinaryOp::Div => PREC_MUL,
                BinaryOp::Dot => PREC_DOT,
            },
        }
    }

    /// Assignment and comparison chain to the right.
    pub(super) fn is_right_assoc(self) -> bool {
        matches!(self.prec(), PREC_ASN | PREC_CMP)
    }
}

impl Parser<'_> {
    pub(super) fn match_infix(&self) -> Option<Infix> {
        match self.current_kind() {
            TokenKind::Range => Some(Infix::Range(false)),
            TokenKind::RangeEq => Some(Infix::Range(true)),
            kind => BinaryOp::from_token(kind).map(Infix::Binary),
        }
    }

    pub(super) fn match_unary_op(&self) -> Option<UnaryOp> {
        UnaryOp::from_token(self.current_kind())
    }

    /// `(` and `[` directly after an operand.
    pub(super) fn at_postfix(&self) -> bool {
        matches!(self.current_kind(), TokenKind::LParen | TokenKind::LSquare)
    }
}
