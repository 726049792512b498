//! The Universe: every scope created during one evaluation.
//!
//! Scopes live in a flat arena and are never removed, so a scope that has
//! been exited can still be inspected by id or path. Each scope has a
//! dot-joined path (`block_0.block_1`) that identifies it; the global scope's
//! path is empty.
//!
//! # Name resolution
//!
//! - Reads ([`Universe::get`]) search from the current scope outward.
//! - Writes ([`Universe::set`]) overwrite the nearest enclosing binding of
//!   the name. Only when no scope binds it is a new binding created, in the
//!   current scope.

use auto_ir::Type;
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::Value;

/// What introduced a scope.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScopeKind {
    Global,
    Mod,
    Type,
    Fn,
    Block,
}

impl ScopeKind {
    pub const fn name(self) -> &'static str {
        match self {
            ScopeKind::Global => "global",
            ScopeKind::Mod => "mod",
            ScopeKind::Type => "type",
            ScopeKind::Fn => "fn",
            ScopeKind::Block => "block",
        }
    }
}

/// Index of a scope in its [`Universe`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl ScopeId {
    pub const GLOBAL: ScopeId = ScopeId(0);

    #[allow(clippy::cast_possible_truncation)]
    fn new(index: usize) -> Self {
        ScopeId(index as u32)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One scope: its place in the tree and its bindings.
#[derive(Clone, Debug)]
pub struct Scope {
    kind: ScopeKind,
    path: String,
    parent: Option<ScopeId>,
    kids: Vec<ScopeId>,
    /// Bindings in creation order.
    vars: Vec<(String, Value)>,
    types: Vec<(String, Type)>,
}

impl Scope {
    fn new(kind: ScopeKind, path: String, parent: Option<ScopeId>) -> Self {
        Scope {
            kind,
            path,
            parent,
            kids: Vec::new(),
            vars: Vec::new(),
            types: Vec::new(),
        }
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Scopes entered from this one, in creation order.
    pub fn kids(&self) -> &[ScopeId] {
        &self.kids
    }

    /// Binding of `name` in this scope only.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn vars(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.vars.iter_mut().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    fn bind(&mut self, name: &str, value: Value) {
        match self.get_mut(name) {
            Some(slot) => *slot = value,
            None => self.vars.push((name.to_string(), value)),
        }
    }

    fn declared_type(&self, name: &str) -> Option<&Type> {
        self.types.iter().find(|(n, _)| n == name).map(|(_, t)| t)
    }
}

/// The scope tree plus the current-scope cursor.
#[derive(Clone, Debug)]
pub struct Universe {
    scopes: Vec<Scope>,
    by_path: FxHashMap<String, ScopeId>,
    current: ScopeId,
    /// Numbers `block_N` / `scope_N` names. Never reset.
    counter: u32,
}

impl Universe {
    pub fn new() -> Self {
        let mut by_path = FxHashMap::default();
        by_path.insert(String::new(), ScopeId::GLOBAL);
        Universe {
            scopes: vec![Scope::new(ScopeKind::Global, String::new(), None)],
            by_path,
            current: ScopeId::GLOBAL,
            counter: 0,
        }
    }

    #[inline]
    pub fn global(&self) -> ScopeId {
        ScopeId::GLOBAL
    }

    #[inline]
    pub fn current(&self) -> ScopeId {
        self.current
    }

    pub fn current_scope(&self) -> &Scope {
        self.scope(self.current)
    }

    pub fn current_path(&self) -> &str {
        &self.current_scope().path
    }

    /// The scope with id `id`.
    ///
    /// # Panics
    ///
    /// If `id` was not issued by this universe.
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn scope_by_path(&self, path: &str) -> Option<ScopeId> {
        self.by_path.get(path).copied()
    }

    /// Every scope ever entered, plus the global scope.
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Create a child of the current scope and make it current.
    pub fn enter_scope(&mut self, kind: ScopeKind) -> ScopeId {
        let prefix = if kind == ScopeKind::Block {
            "block"
        } else {
            "scope"
        };
        let name = format!("{prefix}_{}", self.counter);
        self.counter += 1;

        let parent = self.current;
        let parent_path = &self.scopes[parent.index()].path;
        let path = if parent_path.is_empty() {
            name
        } else {
            format!("{parent_path}.{name}")
        };

        let id = ScopeId::new(self.scopes.len());
        debug!(path = %path, kind = kind.name(), "enter scope");
        self.by_path.insert(path.clone(), id);
        self.scopes.push(Scope::new(kind, path, Some(parent)));
        self.scopes[parent.index()].kids.push(id);
        self.current = id;
        id
    }

    /// Make the current scope's parent current. The exited scope and its
    /// bindings stay in the universe. Exiting the global scope does nothing.
    pub fn exit_scope(&mut self) {
        match self.current_scope().parent {
            Some(parent) => {
                trace!(path = %self.current_path(), "exit scope");
                self.current = parent;
            }
            None => warn!("exit_scope at global scope ignored"),
        }
    }

    /// Ids from the current scope out to the global scope.
    fn chain(&self) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(self.current), |id| self.scopes[id.index()].parent)
    }

    /// The nearest binding of `name`, searching outward.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.chain().find_map(|id| self.scopes[id.index()].get(name))
    }

    /// Alias of [`Universe::get`].
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    /// Overwrite the nearest binding of `name`, or create it in the current
    /// scope when no scope binds it.
    pub fn set(&mut self, name: &str, value: Value) {
        let owner = self
            .chain()
            .find(|id| self.scopes[id.index()].has(name))
            .unwrap_or(self.current);
        trace!(name, path = %self.scopes[owner.index()].path, value = %value, "set");
        self.scopes[owner.index()].bind(name, value);
    }

    /// Bind `name` in the current scope, shadowing any outer binding.
    pub fn define(&mut self, name: &str, value: Value) {
        let current = self.current.index();
        self.scopes[current].bind(name, value);
    }

    /// Record the declared type of `name` in the current scope.
    pub fn declare_type(&mut self, name: &str, ty: Type) {
        let scope = &mut self.scopes[self.current.index()];
        match scope.types.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = ty,
            None => scope.types.push((name.to_string(), ty)),
        }
    }

    /// The nearest declared type of `name`, searching outward.
    pub fn type_of(&self, name: &str) -> Option<&Type> {
        self.chain()
            .find_map(|id| self.scopes[id.index()].declared_type(name))
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}
