//! Registry of resolvers keyed by operation identity.
//!
//! A process typically owns one [`Dispatcher`] per dispatch namespace. Free
//! operations are keyed by name; class-scoped operations by owning class and
//! name. Resolvers live for the lifetime of the dispatcher and are only ever
//! mutated through registration.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::hierarchy::ClassId;
use crate::resolver::Resolver;
use crate::signature::Signature;

/// Owns one [`Resolver`] per registered operation.
#[derive(Debug, Clone)]
pub struct Dispatcher<S> {
    functions: IndexMap<String, Resolver<S>>,
    methods: FxHashMap<ClassId, IndexMap<String, Resolver<S>>>,
}

impl<S: Signature> Dispatcher<S> {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self {
            functions: IndexMap::new(),
            methods: FxHashMap::default(),
        }
    }

    /// The resolver for the free operation `name`, created on first use.
    pub fn function(&mut self, name: &str) -> &mut Resolver<S> {
        self.functions
            .entry(name.to_string())
            .or_insert_with(|| Resolver::new(name))
    }

    /// The resolver for the method `name` on `owner`, created on first use.
    pub fn method(&mut self, owner: ClassId, name: &str) -> &mut Resolver<S> {
        self.methods
            .entry(owner)
            .or_default()
            .entry(name.to_string())
            .or_insert_with(|| Resolver::in_class(name, owner))
    }

    /// Look up the resolver for a free operation.
    pub fn get_function(&self, name: &str) -> Option<&Resolver<S>> {
        self.functions.get(name)
    }

    /// Look up the resolver for a class-scoped operation.
    pub fn get_method(&self, owner: ClassId, name: &str) -> Option<&Resolver<S>> {
        self.methods.get(&owner)?.get(name)
    }

    /// Names of all registered free operations, in definition order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.functions.keys().map(String::as_str)
    }

    /// Names of all operations registered on `owner`, in definition order.
    pub fn method_names(&self, owner: ClassId) -> impl Iterator<Item = &str> + '_ {
        self.methods
            .get(&owner)
            .into_iter()
            .flat_map(|methods| methods.keys().map(String::as_str))
    }
}

impl<S: Signature> Default for Dispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use crate::pattern::{TupleSignature, TypePattern};
    use crate::resolver::Target;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Ty {
        Int,
        Float,
    }

    impl fmt::Display for Ty {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{self:?}")
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Val {
        Int(i64),
        Float(f64),
    }

    impl TypePattern for Ty {
        type Value = Val;

        fn admits(&self, value: &Val) -> bool {
            match self {
                Ty::Int => matches!(value, Val::Int(_)),
                Ty::Float => matches!(value, Val::Float(_)),
            }
        }

        fn generalizes(&self, other: &Ty) -> bool {
            self == other
        }
    }

    type Sig = TupleSignature<Ty, &'static str, Ty>;

    fn sig(params: Vec<Ty>, name: &'static str) -> Sig {
        TupleSignature::new(params, name, Ty::Int)
    }

    #[test]
    fn test_function_registration() {
        let mut dispatch: Dispatcher<Sig> = Dispatcher::new();
        dispatch.function("f").register(sig(vec![Ty::Int], "f_int"));
        dispatch
            .function("g")
            .register(sig(vec![Ty::Float], "g_float").with_precedence(1));

        let names: Vec<&str> = dispatch.function_names().collect();
        assert_eq!(names, vec!["f", "g"]);

        let f = dispatch.get_function("f").unwrap();
        assert_eq!(f.len(), 1);
        assert!(f.owner().is_none());

        let g = dispatch.get_function("g").unwrap();
        assert_eq!(g.signatures()[0].precedence(), 1);
    }

    #[test]
    fn test_function_resolver_is_reused() {
        let mut dispatch: Dispatcher<Sig> = Dispatcher::new();
        dispatch.function("f").register(sig(vec![Ty::Int], "f_int"));
        dispatch.function("f").register(sig(vec![Ty::Float], "f_float"));

        assert_eq!(dispatch.function_names().count(), 1);
        assert_eq!(dispatch.get_function("f").unwrap().len(), 2);
    }

    #[test]
    fn test_method_registration_is_class_scoped() {
        const A: ClassId = ClassId::new(1);
        const B: ClassId = ClassId::new(2);

        let mut dispatch: Dispatcher<Sig> = Dispatcher::new();
        dispatch.method(A, "f").register(sig(vec![Ty::Int], "a_f"));
        dispatch.method(B, "f").register(sig(vec![Ty::Float], "b_f"));

        let a_f = dispatch.get_method(A, "f").unwrap();
        assert_eq!(a_f.owner(), Some(A));
        assert_eq!(a_f.len(), 1);

        let b_f = dispatch.get_method(B, "f").unwrap();
        assert_eq!(b_f.len(), 1);

        assert!(dispatch.get_method(A, "g").is_none());
        assert!(dispatch.get_function("f").is_none());
    }

    #[test]
    fn test_resolution_through_dispatcher() {
        let mut dispatch: Dispatcher<Sig> = Dispatcher::new();
        dispatch.function("f").register(sig(vec![Ty::Int], "f_int"));

        let resolution = dispatch
            .get_function("f")
            .unwrap()
            .resolve(Target::Args(&[Val::Int(1)][..]))
            .unwrap();
        assert_eq!(*resolution.implementation, "f_int");
    }
}
