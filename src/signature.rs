//! The signature abstraction consumed by the resolver.
//!
//! A signature is an immutable value representing one registered type pattern
//! plus its implementation handle, declared return type, faithfulness flag,
//! and precedence. The resolver never looks inside the pattern: arity and
//! per-position compatibility are the signature's responsibility, expressed
//! through [`matches`](Signature::matches) for concrete arguments and the
//! [`Specificity`] preorder for abstract targets.

use std::fmt;

use crate::order::Specificity;

/// One registered implementation of an overloaded operation.
pub trait Signature: Specificity + fmt::Display {
    /// The concrete argument tuple this signature is matched against.
    ///
    /// Typically a slice of runtime values; unsized types are fine since the
    /// resolver only ever sees it by reference. The `Debug` bound feeds
    /// lookup-failure diagnostics.
    type Args: ?Sized + fmt::Debug;

    /// Opaque handle for the implementation to run on a successful lookup.
    type Output;

    /// Descriptor for the declared return type.
    type ReturnTy;

    /// Whether this signature admits the given concrete arguments.
    fn matches(&self, args: &Self::Args) -> bool;

    /// Explicit tie-break among otherwise-undecidable candidates; higher wins.
    fn precedence(&self) -> i64;

    /// Whether the declared pattern exactly characterizes the runtime check
    /// used by [`matches`](Signature::matches), with no approximation.
    fn is_faithful(&self) -> bool;

    /// The implementation handle.
    fn implementation(&self) -> &Self::Output;

    /// The declared return type.
    fn return_ty(&self) -> &Self::ReturnTy;

    /// Canonical text rendering of the implementation's declaration plus its
    /// documentation, if any.
    ///
    /// Feeds [`Resolver::document`](crate::Resolver::document). Signatures
    /// registered under several expanded shapes of one implementation should
    /// return the same rendering so the aggregator can de-duplicate them.
    fn doc(&self) -> Option<&str> {
        None
    }
}

/// A successful lookup: the implementation to run and its declared return
/// type.
///
/// `return_ty` is `None` exactly when the implementation was found through
/// the ancestor fallback, which carries no declared return type (the result
/// is unconstrained).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a, F, R> {
    /// The implementation handle of the winning signature.
    pub implementation: &'a F,
    /// The winning signature's declared return type, if any.
    pub return_ty: Option<&'a R>,
}
