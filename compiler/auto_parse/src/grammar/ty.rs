//! Type annotations.
//!
//! ```text
//! int  uint  byte  float  double  bool  char  str  cstr  void
//! []T          array of T
//! *T           pointer to T
//! Name         user type
//! ```

use auto_ir::{TokenKind, Type, TypeKind};
use auto_stack::ensure_sufficient_stack;

use crate::Parser;

impl Parser<'_> {
    /// Parse a type if one starts here. Consumes nothing otherwise.
    pub(crate) fn parse_type(&mut self) -> Option<Type> {
        ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::Ident => Some(Type::from_name(&self.advance().text)),
            TokenKind::LSquare => {
                self.advance();
                self.expect(TokenKind::RSquare);
                Some(Type::array_of(self.parse_elem_type()))
            }
            TokenKind::Star => {
                self.advance();
                Some(Type::ptr_to(self.parse_elem_type()))
            }
            _ => None,
        })
    }

    fn parse_elem_type(&mut self) -> Type {
        self.parse_type()
            .unwrap_or_else(|| Type::new(TypeKind::Unknown))
    }
}
