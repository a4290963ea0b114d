//! Runtime multiple-dispatch resolution.
//!
//! This crate selects, at call time, which of several competing
//! implementations of a logically-overloaded operation should run, given the
//! runtime types of the supplied arguments. Each implementation is registered
//! under a [`Signature`] — a type pattern the implementation accepts together
//! with a precedence and a declared return type — and a [`Resolver`] finds the
//! unique most specific applicable signature for a call.
//!
//! # Algorithm Overview
//!
//! 1. **Filter applicable**: keep signatures that match the concrete arguments
//!    (or encompass an abstract target signature)
//! 2. **Reduce to the frontier**: incrementally maintain the antichain of
//!    maximally specific applicable signatures
//! 3. **Decide**: a unique survivor wins; multiple survivors are tie-broken by
//!    explicit precedence; otherwise the lookup fails with [`AmbiguityError`]
//! 4. **Fall back**: when nothing matched and the operation is scoped to a
//!    class, walk the class's linearized ancestor chain for an inherited
//!    implementation ([`ClassHierarchy`])
//!
//! Specificity is a preorder supplied by the signature implementation (the
//! [`Specificity`] trait); two signatures may be deliberately incomparable,
//! which is where precedence comes in as the registrant's explicit escape
//! hatch.
//!
//! # Example
//!
//! ```
//! use std::fmt;
//! use multidispatch::{Resolver, Target, TupleSignature, TypePattern};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Ty {
//!     Int,
//!     Number,
//! }
//!
//! impl fmt::Display for Ty {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{self:?}")
//!     }
//! }
//!
//! impl TypePattern for Ty {
//!     type Value = f64;
//!
//!     fn admits(&self, value: &f64) -> bool {
//!         match self {
//!             Ty::Int => value.fract() == 0.0,
//!             Ty::Number => true,
//!         }
//!     }
//!
//!     fn generalizes(&self, other: &Ty) -> bool {
//!         self == other || *self == Ty::Number
//!     }
//! }
//!
//! let mut add = Resolver::new("add");
//! add.register(TupleSignature::new(
//!     vec![Ty::Number, Ty::Number],
//!     "add_generic",
//!     Ty::Number,
//! ));
//! add.register(TupleSignature::new(vec![Ty::Int, Ty::Int], "add_int", Ty::Int));
//!
//! let resolved = add.resolve(Target::Args(&[1.0, 2.0][..])).unwrap();
//! assert_eq!(*resolved.implementation, "add_int");
//! ```
//!
//! # Concurrency
//!
//! Resolution is a pure computation over an immutable snapshot of the
//! registered signatures: [`Resolver::resolve`] takes `&self` and any number
//! of threads may resolve concurrently. Registration takes `&mut self` and is
//! expected to happen at initialization time, before resolution traffic
//! begins; an embedder that must register concurrently wraps the resolver in
//! a reader-writer lock or swaps whole snapshots.
//!
//! # Module Structure
//!
//! - [`order`] - The specificity preorder contract
//! - [`signature`] - The signature abstraction consumed by the resolver
//! - [`pattern`] - A provided tuple-of-type-patterns signature
//! - [`resolver`] - The core resolution algorithm
//! - [`result`] - Lookup failure types
//! - [`hierarchy`] - Ancestor-chain fallback interface
//! - [`dispatcher`] - Registry of resolvers keyed by operation identity

pub mod dispatcher;
pub mod hierarchy;
pub mod order;
pub mod pattern;
pub mod resolver;
pub mod result;
pub mod signature;

pub use dispatcher::Dispatcher;
pub use hierarchy::{ClassHierarchy, ClassId, ClassTable};
pub use order::Specificity;
pub use pattern::{TupleSignature, TypePattern};
pub use resolver::{Resolver, Target};
pub use result::{AmbiguityError, LookupError, NotFoundError, TiedCandidate};
pub use signature::{Resolution, Signature};
