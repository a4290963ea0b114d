//! A provided tuple-of-type-patterns signature.
//!
//! Most embedders dispatch on a flat tuple of arguments, one type pattern per
//! position: a method is applicable when arity matches and every argument is
//! admitted by the corresponding pattern, and more specific when it is
//! pointwise at least as specific and strictly so somewhere. [`TupleSignature`]
//! packages that shape; the per-position relation comes from [`TypePattern`].

use std::fmt;

use crate::order::Specificity;
use crate::signature::Signature;

/// A single-position type pattern.
pub trait TypePattern {
    /// The runtime value type this pattern is checked against.
    type Value;

    /// Whether a concrete value is admitted by this pattern.
    fn admits(&self, value: &Self::Value) -> bool;

    /// Whether every value admitted by `other` is admitted by `self`.
    ///
    /// Must be a valid preorder; the tuple-level specificity relation is the
    /// pointwise product of this one.
    fn generalizes(&self, other: &Self) -> bool;
}

/// A signature over a tuple of type patterns.
#[derive(Debug, Clone)]
pub struct TupleSignature<P, F, R> {
    params: Vec<P>,
    implementation: F,
    return_ty: R,
    precedence: i64,
    faithful: bool,
    doc: Option<String>,
}

impl<P, F, R> TupleSignature<P, F, R> {
    /// Create a signature with precedence 0, faithful, and no documentation.
    pub fn new(params: Vec<P>, implementation: F, return_ty: R) -> Self {
        Self {
            params,
            implementation,
            return_ty,
            precedence: 0,
            faithful: true,
            doc: None,
        }
    }

    /// Set the precedence used to tie-break otherwise-ambiguous lookups.
    pub fn with_precedence(mut self, precedence: i64) -> Self {
        self.precedence = precedence;
        self
    }

    /// Mark the pattern as an approximation of the runtime check.
    ///
    /// Use this for predicate-style patterns whose declared shape does not
    /// exactly characterize what [`TypePattern::admits`] tests.
    pub fn unfaithful(mut self) -> Self {
        self.faithful = false;
        self
    }

    /// Attach a documentation block for aggregation.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// The per-position patterns.
    pub fn params(&self) -> &[P] {
        &self.params
    }
}

impl<P: TypePattern, F, R> Specificity for TupleSignature<P, F, R> {
    fn encompasses(&self, other: &Self) -> bool {
        self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .zip(&other.params)
                .all(|(p, q)| p.generalizes(q))
    }
}

impl<P: fmt::Display, F, R> fmt::Display for TupleSignature<P, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")
    }
}

impl<P, F, R> Signature for TupleSignature<P, F, R>
where
    P: TypePattern + fmt::Display,
    P::Value: fmt::Debug,
{
    type Args = [P::Value];
    type Output = F;
    type ReturnTy = R;

    fn matches(&self, args: &[P::Value]) -> bool {
        self.params.len() == args.len()
            && self.params.iter().zip(args).all(|(p, a)| p.admits(a))
    }

    fn precedence(&self) -> i64 {
        self.precedence
    }

    fn is_faithful(&self) -> bool {
        self.faithful
    }

    fn implementation(&self) -> &F {
        &self.implementation
    }

    fn return_ty(&self) -> &R {
        &self.return_ty
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Ty {
        Int,
        Float,
        Number,
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
                Ty::Number => true,
            }
        }

        fn generalizes(&self, other: &Ty) -> bool {
            self == other || *self == Ty::Number
        }
    }

    fn sig(params: Vec<Ty>, name: &'static str) -> TupleSignature<Ty, &'static str, Ty> {
        TupleSignature::new(params, name, Ty::Number)
    }

    #[test]
    fn test_matches_checks_arity() {
        let s = sig(vec![Ty::Int, Ty::Int], "f");

        assert!(s.matches(&[Val::Int(1), Val::Int(2)]));
        assert!(!s.matches(&[Val::Int(1)]));
        assert!(!s.matches(&[Val::Int(1), Val::Int(2), Val::Int(3)]));
    }

    #[test]
    fn test_matches_checks_positions() {
        let s = sig(vec![Ty::Int, Ty::Float], "f");

        assert!(s.matches(&[Val::Int(1), Val::Float(2.0)]));
        assert!(!s.matches(&[Val::Float(1.0), Val::Float(2.0)]));
        assert!(!s.matches(&[Val::Int(1), Val::Int(2)]));
    }

    #[test]
    fn test_pointwise_specificity() {
        let specific = sig(vec![Ty::Int, Ty::Int], "specific");
        let general = sig(vec![Ty::Number, Ty::Number], "general");
        let mixed = sig(vec![Ty::Int, Ty::Float], "mixed");

        assert!(general.encompasses(&specific));
        assert!(!specific.encompasses(&general));
        assert!(specific.strictly_within(&general));

        // Differ in a position where neither pattern generalizes the other.
        assert!(!specific.comparable(&mixed));
    }

    #[test]
    fn test_arity_mismatch_incomparable() {
        let unary = sig(vec![Ty::Number], "unary");
        let binary = sig(vec![Ty::Number, Ty::Number], "binary");

        assert!(!unary.comparable(&binary));
    }

    #[test]
    fn test_builder_defaults() {
        let plain = sig(vec![Ty::Int], "plain");
        assert_eq!(plain.precedence(), 0);
        assert!(plain.is_faithful());
        assert!(plain.doc().is_none());

        let tuned = sig(vec![Ty::Int], "tuned")
            .with_precedence(3)
            .unfaithful()
            .with_doc("Adds things.");
        assert_eq!(tuned.precedence(), 3);
        assert!(!tuned.is_faithful());
        assert_eq!(tuned.doc(), Some("Adds things."));
    }

    #[test]
    fn test_display() {
        let s = sig(vec![Ty::Int, Ty::Number], "f");
        assert_eq!(s.to_string(), "(Int, Number)");
    }
}
