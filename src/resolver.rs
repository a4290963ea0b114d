//! The core resolution algorithm.
//!
//! A [`Resolver`] owns the ordered collection of signatures registered for
//! one named operation, optionally scoped to an owning class, and answers
//! lookups with the unique most specific applicable signature.
//!
//! # Algorithm Overview
//!
//! 1. **Filter applicable**: keep signatures that match the concrete
//!    arguments, or that encompass an abstract target signature
//! 2. **Reduce to the frontier**: process the applicable signatures in
//!    registration order, maintaining the antichain of maximally specific
//!    candidates seen so far
//! 3. **Decide**: zero candidates fail with [`NotFoundError`]; one wins;
//!    several are tie-broken by precedence or fail with [`AmbiguityError`]
//! 4. **Fall back**: a class-scoped resolver that found nothing walks the
//!    owning class's ancestor chain for an inherited implementation
//!
//! The frontier reduction is incremental but its final result is independent
//! of registration order for any valid specificity preorder; only the
//! ordering of candidates inside an ambiguity report depends on registration
//! order.

use std::fmt;

use tracing::{debug, trace};

use crate::hierarchy::{ClassHierarchy, ClassId};
use crate::order::Specificity;
use crate::result::{AmbiguityError, LookupError, NotFoundError, TiedCandidate};
use crate::signature::{Resolution, Signature};

/// What a lookup is resolving against.
///
/// Either a tuple of concrete argument values, or an abstract signature whose
/// whole call shape must be encompassed by the winning candidate.
pub enum Target<'a, S: Signature> {
    /// Concrete argument values; applicability is the signature's match
    /// predicate.
    Args(&'a S::Args),
    /// An abstract call shape; applicability is encompassment.
    Encompass(&'a S),
}

impl<S: Signature> Target<'_, S> {
    fn admitted_by(&self, candidate: &S) -> bool {
        match self {
            Target::Args(args) => candidate.matches(args),
            Target::Encompass(shape) => candidate.encompasses(shape),
        }
    }
}

impl<S: Signature> Clone for Target<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Signature> Copy for Target<'_, S> {}

impl<S: Signature> fmt::Display for Target<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Args(args) => write!(f, "{args:?}"),
            Target::Encompass(shape) => write!(f, "{shape}"),
        }
    }
}

impl<S: Signature> fmt::Debug for Target<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Args(args) => f.debug_tuple("Args").field(args).finish(),
            Target::Encompass(shape) => {
                f.debug_tuple("Encompass").field(&shape.to_string()).finish()
            }
        }
    }
}

/// Resolver for one named operation.
///
/// Holds the registered signatures in registration order. The collection
/// never contains two mutually-equivalent signatures: registering a signature
/// equivalent to an existing one replaces it in place.
#[derive(Debug, Clone)]
pub struct Resolver<S> {
    name: String,
    owner: Option<ClassId>,
    signatures: Vec<S>,
    faithful: bool,
}

impl<S: Signature> Resolver<S> {
    /// Create a resolver for a free operation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
            signatures: Vec::new(),
            faithful: true,
        }
    }

    /// Create a resolver for an operation scoped to an owning class.
    ///
    /// The scope only matters for the ancestor fallback in
    /// [`resolve_in`](Resolver::resolve_in).
    pub fn in_class(name: impl Into<String>, owner: ClassId) -> Self {
        Self {
            owner: Some(owner),
            ..Self::new(name)
        }
    }

    /// The operation's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning class, if the operation is class-scoped.
    pub fn owner(&self) -> Option<ClassId> {
        self.owner
    }

    /// Number of registered signatures.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether no signatures are registered.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// AND over all registered signatures' faithfulness flags.
    ///
    /// Purely diagnostic; resolution itself never consults it.
    pub fn is_faithful(&self) -> bool {
        self.faithful
    }

    /// The registered signatures, in registration order.
    pub fn signatures(&self) -> &[S] {
        &self.signatures
    }

    /// Register a signature.
    ///
    /// A signature equivalent to an existing entry replaces that entry in
    /// place, supporting redefinition of an already-registered shape; a new
    /// shape is appended. Registration order affects only the ordering inside
    /// ambiguity reports, never which signature wins.
    ///
    /// # Panics
    ///
    /// Panics if more than one existing entry is equivalent to `signature`.
    /// Equivalence must partition the collection into singletons; a larger
    /// equivalence class means the signature's preorder is broken, which is a
    /// programming error rather than a failed lookup.
    pub fn register(&mut self, signature: S) {
        let equal: Vec<usize> = self
            .signatures
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.equivalent(&signature).then_some(i))
            .collect();

        match equal.as_slice() {
            [] => self.signatures.push(signature),
            [index] => {
                debug!(operation = %self.name, %signature, "replacing equivalent signature");
                self.signatures[*index] = signature;
            }
            _ => panic!(
                "signature `{signature}` is equivalent to {} registered signatures; \
                 the equivalence relation must partition the registry",
                equal.len()
            ),
        }

        self.faithful = self.signatures.iter().all(Signature::is_faithful);
    }

    /// Resolve a target to an implementation and declared return type.
    ///
    /// Fails with [`NotFoundError`] when nothing is applicable and with
    /// [`AmbiguityError`] when several maximally specific signatures tie
    /// without a unique precedence winner. Use
    /// [`resolve_in`](Resolver::resolve_in) when a class hierarchy is
    /// available for fallback.
    pub fn resolve(
        &self,
        target: Target<'_, S>,
    ) -> Result<Resolution<'_, S::Output, S::ReturnTy>, LookupError> {
        let found = self.find_signature(target)?;
        Ok(Resolution {
            implementation: found.implementation(),
            return_ty: Some(found.return_ty()),
        })
    }

    /// Resolve a target, falling back to the owning class's ancestor chain
    /// when no signature is applicable.
    ///
    /// The fallback reproduces single-dispatch inherited-method semantics:
    /// the first ancestor (in linearization order, universal roots excluded)
    /// whose own declared members include a non-abstract implementation of
    /// this operation's name wins, with an unconstrained return type. If the
    /// chain is exhausted, or the resolver is not class-scoped, the original
    /// [`NotFoundError`] propagates unchanged.
    pub fn resolve_in<'a, H>(
        &'a self,
        target: Target<'_, S>,
        hierarchy: &'a H,
    ) -> Result<Resolution<'a, S::Output, S::ReturnTy>, LookupError>
    where
        H: ClassHierarchy<Member = S::Output>,
    {
        match self.find_signature(target) {
            Ok(found) => Ok(Resolution {
                implementation: found.implementation(),
                return_ty: Some(found.return_ty()),
            }),
            Err(LookupError::NotFound(not_found)) => self.fall_back(hierarchy, not_found),
            Err(other) => Err(other),
        }
    }

    /// Find the unique most specific signature satisfying `target`.
    fn find_signature(&self, target: Target<'_, S>) -> Result<&S, LookupError> {
        let mut candidates: Vec<&S> = Vec::new();

        for signature in self.signatures.iter().filter(|s| target.admitted_by(s)) {
            // Incomparable with every current candidate: an independent
            // branch of specificity.
            if !candidates.iter().any(|c| c.comparable(signature)) {
                candidates.push(signature);
                continue;
            }

            // Comparable with at least one candidate. The newcomer survives
            // only if it is at least as specific as one of the *current*
            // candidates; either way it evicts everything strictly more
            // general than itself.
            let survives = candidates.iter().any(|c| c.encompasses(signature));
            candidates.retain(|c| {
                let dominated = signature.strictly_within(*c);
                if dominated {
                    trace!(operation = %self.name, candidate = %c, by = %signature, "candidate dominated");
                }
                !dominated
            });
            if survives {
                candidates.push(signature);
            }
        }

        match candidates.as_slice() {
            [] => Err(NotFoundError {
                target: target.to_string(),
            }
            .into()),
            [only] => Ok(*only),
            _ => {
                // Multiple maximally specific signatures. Before failing, try
                // the explicit precedence tie-break: a unique holder of the
                // maximum precedence wins.
                let max = candidates
                    .iter()
                    .map(|c| c.precedence())
                    .max()
                    .unwrap_or(i64::MIN);
                let mut winners = candidates.iter().filter(|c| c.precedence() == max);
                match (winners.next(), winners.next()) {
                    (Some(winner), None) => Ok(*winner),
                    _ => Err(AmbiguityError {
                        target: target.to_string(),
                        candidates: candidates
                            .iter()
                            .map(|c| TiedCandidate {
                                signature: c.to_string(),
                                precedence: c.precedence(),
                            })
                            .collect(),
                    }
                    .into()),
                }
            }
        }
    }

    fn fall_back<'a, H>(
        &self,
        hierarchy: &'a H,
        not_found: NotFoundError,
    ) -> Result<Resolution<'a, S::Output, S::ReturnTy>, LookupError>
    where
        H: ClassHierarchy<Member = S::Output>,
    {
        let Some(owner) = self.owner else {
            // Not class-scoped; nothing to fall back to.
            return Err(not_found.into());
        };

        for &ancestor in hierarchy.linearization(owner) {
            // Never fall through to the universal roots; that would find
            // unrelated default behavior.
            if hierarchy.is_root(ancestor) {
                continue;
            }
            let Some(member) = hierarchy.own_member(ancestor, &self.name) else {
                continue;
            };
            if hierarchy.is_abstract(ancestor, &self.name) {
                continue;
            }
            debug!(operation = %self.name, ?ancestor, "using inherited implementation");
            return Ok(Resolution {
                implementation: member,
                return_ty: None,
            });
        }

        Err(not_found.into())
    }

    /// Concatenate the documentation blocks of all registered signatures.
    ///
    /// Each block is the implementation's [`doc`](Signature::doc) rendering,
    /// falling back to the signature's own rendering when there is none.
    /// Exact-duplicate blocks are dropped (these arise when one
    /// implementation is registered under several expanded shapes of the same
    /// declaration), and a given implementation can be excluded from the
    /// output.
    pub fn document(&self, exclude: Option<&S::Output>) -> String
    where
        S::Output: PartialEq,
    {
        let mut blocks: Vec<String> = Vec::new();
        for signature in &self.signatures {
            if exclude.is_some_and(|excluded| signature.implementation() == excluded) {
                continue;
            }
            let block = match signature.doc() {
                Some(doc) => doc.trim_end().to_string(),
                None => signature.to_string(),
            };
            if !blocks.contains(&block) {
                blocks.push(block);
            }
        }
        blocks.join("\n\n")
    }
}
