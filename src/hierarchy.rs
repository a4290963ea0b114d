//! Ancestor-chain fallback interface.
//!
//! When resolution of a class-scoped operation finds no applicable signature,
//! the resolver falls back to ordinary single-dispatch semantics: walk the
//! class's linearized ancestor chain and take the first ancestor whose own
//! declared members (not inherited ones) include a concrete implementation of
//! the operation's name. The surrounding object system exposes that walk
//! through [`ClassHierarchy`] — an explicit, statically-typed interface
//! instead of runtime introspection of a host object model.
//!
//! The universal root types (the top of the object hierarchy and the
//! metaclass root) are excluded from the walk so a lookup never "finds"
//! unrelated default behavior. Abstract declarations are skipped and the walk
//! continues past them.

use rustc_hash::{FxHashMap, FxHashSet};

/// Opaque identity of a class known to the object system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    /// Create a class id from a raw index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw index.
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// The queries the resolver's fallback needs from an object system.
pub trait ClassHierarchy {
    /// Handle for a member declared on a class.
    type Member;

    /// The linearized ancestor chain of `class`, most-derived first,
    /// excluding `class` itself.
    fn linearization(&self, class: ClassId) -> &[ClassId];

    /// Whether `class` is one of the universal roots excluded from fallback.
    fn is_root(&self, class: ClassId) -> bool;

    /// The member named `name` declared directly on `class`.
    ///
    /// Inherited members must not be reported here; the fallback walks the
    /// chain itself and flattened lookup would defeat the abstract-member
    /// skipping.
    fn own_member(&self, class: ClassId, name: &str) -> Option<&Self::Member>;

    /// Whether the member named `name` declared on `class` is an abstract
    /// placeholder rather than a concrete implementation.
    fn is_abstract(&self, class: ClassId, name: &str) -> bool;
}

#[derive(Debug, Clone)]
struct MemberEntry<M> {
    value: M,
    is_abstract: bool,
}

#[derive(Debug, Clone)]
struct ClassEntry<M> {
    linearization: Vec<ClassId>,
    members: FxHashMap<String, MemberEntry<M>>,
}

impl<M> Default for ClassEntry<M> {
    fn default() -> Self {
        Self {
            linearization: Vec::new(),
            members: FxHashMap::default(),
        }
    }
}

/// A table-driven [`ClassHierarchy`].
///
/// Classes are registered with an explicit, already-linearized ancestor
/// chain; the table does not compute a linearization itself. Useful for
/// embedders whose object model is data rather than code, and for tests.
#[derive(Debug, Clone)]
pub struct ClassTable<M> {
    classes: FxHashMap<ClassId, ClassEntry<M>>,
    roots: FxHashSet<ClassId>,
}

impl<M> ClassTable<M> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            classes: FxHashMap::default(),
            roots: FxHashSet::default(),
        }
    }

    /// Register a class with its linearized ancestor chain (most-derived
    /// first, the class itself excluded).
    pub fn add_class(&mut self, class: ClassId, linearization: Vec<ClassId>) {
        self.classes.entry(class).or_default().linearization = linearization;
    }

    /// Mark a class as a universal root, excluding it from fallback walks.
    pub fn add_root(&mut self, class: ClassId) {
        self.roots.insert(class);
    }

    /// Declare a concrete member named `name` directly on `class`.
    pub fn add_member(&mut self, class: ClassId, name: impl Into<String>, member: M) {
        self.classes.entry(class).or_default().members.insert(
            name.into(),
            MemberEntry {
                value: member,
                is_abstract: false,
            },
        );
    }

    /// Declare an abstract member named `name` directly on `class`.
    pub fn add_abstract_member(&mut self, class: ClassId, name: impl Into<String>, member: M) {
        self.classes.entry(class).or_default().members.insert(
            name.into(),
            MemberEntry {
                value: member,
                is_abstract: true,
            },
        );
    }
}

impl<M> Default for ClassTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> ClassHierarchy for ClassTable<M> {
    type Member = M;

    fn linearization(&self, class: ClassId) -> &[ClassId] {
        self.classes
            .get(&class)
            .map(|entry| entry.linearization.as_slice())
            .unwrap_or(&[])
    }

    fn is_root(&self, class: ClassId) -> bool {
        self.roots.contains(&class)
    }

    fn own_member(&self, class: ClassId, name: &str) -> Option<&M> {
        self.classes
            .get(&class)?
            .members
            .get(name)
            .map(|entry| &entry.value)
    }

    fn is_abstract(&self, class: ClassId, name: &str) -> bool {
        self.classes
            .get(&class)
            .and_then(|entry| entry.members.get(name))
            .is_some_and(|entry| entry.is_abstract)
    }
}
