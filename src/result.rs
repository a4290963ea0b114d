//! Lookup failure types.
//!
//! Two failure kinds reach the caller: no applicable signature at all, or
//! several maximally specific signatures with no precedence winner. Both carry
//! enough of the target and candidates for a human-readable report. A third
//! failure class — registration finding more than one signature equivalent to
//! the incoming one — indicates a broken equivalence relation and panics
//! instead of being reported through these types.

use std::fmt;

use thiserror::Error;

/// A failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No registered signature is applicable to the target.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// Several maximally specific signatures tie and precedence does not
    /// single one out.
    #[error(transparent)]
    Ambiguous(#[from] AmbiguityError),
}

/// No applicable signature was found, and the ancestor fallback (if any)
/// found nothing usable either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{target}` could not be resolved")]
pub struct NotFoundError {
    /// Rendering of the unresolvable target.
    pub target: String,
}

/// One of the tied candidates in an ambiguous lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiedCandidate {
    /// Rendering of the candidate signature.
    pub signature: String,
    /// The candidate's precedence.
    pub precedence: i64,
}

/// More than one maximally specific signature is applicable and precedence
/// fails to produce a unique winner.
///
/// Candidates are listed in discovery order (registration order among the
/// applicable set).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct AmbiguityError {
    /// Rendering of the ambiguous target.
    pub target: String,
    /// The tied candidates, in discovery order.
    pub candidates: Vec<TiedCandidate>,
}

impl fmt::Display for AmbiguityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is ambiguous among the following:", self.target)?;
        for candidate in &self.candidates {
            write!(
                f,
                "\n  {} (precedence: {})",
                candidate.signature, candidate.precedence
            )?;
        }
        Ok(())
    }
}
