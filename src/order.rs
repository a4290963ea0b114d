//! The specificity preorder contract.
//!
//! Dispatch resolution only ever asks one question of two signatures: does one
//! admit a subset of the calls the other admits? Everything else — equality,
//! strict ordering, comparability — is derived from that single primitive.
//!
//! The relation must be a valid preorder: reflexive and transitive, with
//! antisymmetry up to [`equivalent`](Specificity::equivalent). The incremental
//! frontier reduction in [`crate::resolver`] is order-of-registration
//! independent only under a valid preorder; an intransitive implementation
//! makes it silently order-dependent.

/// A preorder on signatures keyed to specificity.
///
/// `a.encompasses(b)` holds when every call admitted by `b` is admitted by
/// `a` — that is, `b` is at least as specific as `a`. The derived predicates
/// are pure functions of this primitive.
pub trait Specificity {
    /// Returns true when every call admitted by `other` is admitted by `self`.
    fn encompasses(&self, other: &Self) -> bool;

    /// `self` and `other` admit exactly the same calls.
    ///
    /// This is the equality used for registration de-duplication: a resolver
    /// never holds two mutually-equivalent signatures.
    fn equivalent(&self, other: &Self) -> bool {
        self.encompasses(other) && other.encompasses(self)
    }

    /// `self` admits a strict subset of the calls `other` admits.
    fn strictly_within(&self, other: &Self) -> bool {
        other.encompasses(self) && !self.encompasses(other)
    }

    /// Whether the two signatures are ordered at all.
    ///
    /// Comparable iff one of `<`, `==`, `>` holds; incomparable signatures
    /// represent independent branches of specificity.
    fn comparable(&self, other: &Self) -> bool {
        self.encompasses(other) || other.encompasses(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bitmask sets under the superset relation: `a.encompasses(b)` iff
    /// `b ⊆ a`. A textbook preorder (in fact a partial order).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Mask(u8);

    impl Specificity for Mask {
        fn encompasses(&self, other: &Self) -> bool {
            self.0 | other.0 == self.0
        }
    }

    #[test]
    fn test_reflexive() {
        let a = Mask(0b0110);
        assert!(a.encompasses(&a));
        assert!(a.equivalent(&a));
        assert!(!a.strictly_within(&a));
        assert!(a.comparable(&a));
    }

    #[test]
    fn test_strict_subset() {
        let small = Mask(0b0010);
        let big = Mask(0b0110);

        assert!(big.encompasses(&small));
        assert!(!small.encompasses(&big));
        assert!(small.strictly_within(&big));
        assert!(!big.strictly_within(&small));
        assert!(!small.equivalent(&big));
        assert!(small.comparable(&big));
        assert!(big.comparable(&small));
    }

    #[test]
    fn test_incomparable() {
        let left = Mask(0b0011);
        let right = Mask(0b1100);

        assert!(!left.comparable(&right));
        assert!(!left.strictly_within(&right));
        assert!(!right.strictly_within(&left));
        assert!(!left.equivalent(&right));
    }

    #[test]
    fn test_transitive() {
        let a = Mask(0b0001);
        let b = Mask(0b0011);
        let c = Mask(0b0111);

        assert!(a.strictly_within(&b));
        assert!(b.strictly_within(&c));
        assert!(a.strictly_within(&c));
    }
}
