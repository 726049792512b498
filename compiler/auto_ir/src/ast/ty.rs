//! Declared type annotations.

use auto_stack::ensure_sufficient_stack;

/// Kind of a declared type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Byte,
    Int,
    Uint,
    Float,
    Double,
    Bool,
    Char,
    Str,
    CStr,
    Array,
    Ptr,
    Void,
    Unknown,
    User,
}

impl TypeKind {
    pub const fn name(self) -> &'static str {
        match self {
            TypeKind::Byte => "byte",
            TypeKind::Int => "int",
            TypeKind::Uint => "uint",
            TypeKind::Float => "float",
            TypeKind::Double => "double",
            TypeKind::Bool => "bool",
            TypeKind::Char => "char",
            TypeKind::Str => "str",
            TypeKind::CStr => "cstr",
            TypeKind::Array => "array",
            TypeKind::Ptr => "ptr",
            TypeKind::Void => "void",
            TypeKind::Unknown => "unknown",
            TypeKind::User => "user",
        }
    }
}

/// A static type descriptor, used only for declared annotations.
///
/// `name` is set for user types; `elem` only for arrays and pointers.
#[derive(Eq, PartialEq, Hash, Debug)]
pub struct Type {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub elem: Option<Box<Type>>,
}

// `[][]...T` nests one box per bracket pair.
impl Clone for Type {
    fn clone(&self) -> Self {
        Type {
            kind: self.kind,
            name: self.name.clone(),
            elem: self
                .elem
                .as_ref()
                .map(|elem| ensure_sufficient_stack(|| elem.clone())),
        }
    }
}

impl Drop for Type {
    fn drop(&mut self) {
        if let Some(elem) = self.elem.take() {
            ensure_sufficient_stack(move || drop(elem));
        }
    }
}

impl Type {
    pub fn new(kind: TypeKind) -> Self {
        Type {
            kind,
            name: None,
            elem: None,
        }
    }

    pub fn user(name: impl Into<String>) -> Self {
        Type {
            kind: TypeKind::User,
            name: Some(name.into()),
            elem: None,
        }
    }

    pub fn array_of(elem: Type) -> Self {
        Type {
            kind: TypeKind::Array,
            name: None,
            elem: Some(Box::new(elem)),
        }
    }

    pub fn ptr_to(elem: Type) -> Self {
        Type {
            kind: TypeKind::Ptr,
            name: None,
            elem: Some(Box::new(elem)),
        }
    }

    /// Resolve a type name as written in source: builtin names map to their
    /// kind, anything else is a user type.
    pub fn from_name(name: &str) -> Self {
        let kind = match name {
            "byte" => TypeKind::Byte,
            "int" => TypeKind::Int,
            "uint" => TypeKind::Uint,
            "float" => TypeKind::Float,
            "double" => TypeKind::Double,
            "bool" => TypeKind::Bool,
            "char" => TypeKind::Char,
            "str" => TypeKind::Str,
            "cstr" => TypeKind::CStr,
            "void" => TypeKind::Void,
            _ => return Type::user(name),
        };
        Type::new(kind)
    }
}
