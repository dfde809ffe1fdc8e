//! Structural invariant checks for the network link relation.
//!
//! The checkers are surfaced via [`crate::Network::invariants`] so property
//! tests and callers can assert link health after mutating a network without
//! reimplementing the adjacency traversal.

mod endpoints;
mod self_links;
mod symmetry;

use std::collections::BTreeSet;

use thiserror::Error;

use self::{endpoints::check_endpoints, self_links::check_self_links, symmetry::check_symmetry};

/// Enumerates the structural invariants of the link relation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NetworkInvariant {
    /// No node is linked to itself.
    NoSelfLinks,
    /// Every link is stored under both of its endpoints.
    Symmetry,
    /// Every link endpoint is a node of the current node set.
    EndpointsInRange,
}

impl NetworkInvariant {
    /// Returns all invariants in the order they should be evaluated.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::NoSelfLinks, Self::Symmetry, Self::EndpointsInRange]
    }
}

/// Reports an invariant violation surfaced by [`NetworkInvariantChecker`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum NetworkInvariantViolation {
    /// A node lists itself as a neighbour.
    #[error("node {node} is linked to itself")]
    SelfLink {
        /// The self-linked node.
        node: usize,
    },
    /// A link is stored under one endpoint but not the other.
    #[error("link {origin}->{target} is missing the reverse entry")]
    MissingBacklink {
        /// Node whose set holds the one-way entry.
        origin: usize,
        /// Node lacking the reverse entry.
        target: usize,
    },
    /// A link references a node outside the current node set, typically
    /// after the network was shrunk.
    #[error("link {origin}-{target} references a node outside a network of {size} node(s)")]
    DanglingLink {
        /// Lower endpoint of the link.
        origin: usize,
        /// Higher endpoint of the link.
        target: usize,
        /// Node count when the check ran.
        size: usize,
    },
}

/// Helper returned by [`crate::Network::invariants`] to run structural checks.
#[derive(Debug)]
pub struct NetworkInvariantChecker<'network> {
    ctx: LinkContext<'network>,
}

impl<'network> NetworkInvariantChecker<'network> {
    pub(crate) fn new(size: usize, adjacency: &'network [BTreeSet<usize>]) -> Self {
        Self {
            ctx: LinkContext { size, adjacency },
        }
    }

    /// Runs all invariants, returning the first violation encountered.
    ///
    /// # Errors
    /// Returns the first [`NetworkInvariantViolation`] found.
    pub fn check_all(&self) -> Result<(), NetworkInvariantViolation> {
        self.check_many(NetworkInvariant::all())
    }

    /// Runs a custom subset of invariants in the provided order.
    ///
    /// # Errors
    /// Returns the first [`NetworkInvariantViolation`] found.
    pub fn check_many(
        &self,
        invariants: impl IntoIterator<Item = NetworkInvariant>,
    ) -> Result<(), NetworkInvariantViolation> {
        self.run_with_mode(invariants, EvaluationMode::FailFast)
    }

    /// Runs a single invariant.
    ///
    /// # Errors
    /// Returns the first [`NetworkInvariantViolation`] found.
    pub fn check(&self, invariant: NetworkInvariant) -> Result<(), NetworkInvariantViolation> {
        self.check_many([invariant])
    }

    /// Executes every invariant and returns the full set of violations.
    #[must_use]
    pub fn collect_all(&self) -> Vec<NetworkInvariantViolation> {
        self.collect_many(NetworkInvariant::all())
    }

    /// Executes the selected invariants and returns every violation discovered.
    #[must_use]
    pub fn collect_many(
        &self,
        invariants: impl IntoIterator<Item = NetworkInvariant>,
    ) -> Vec<NetworkInvariantViolation> {
        let mut violations = Vec::new();
        // Collect mode records every violation instead of returning early.
        let _ = self.run_with_mode(invariants, EvaluationMode::Collect(&mut violations));
        violations
    }

    fn run_with_mode(
        &self,
        invariants: impl IntoIterator<Item = NetworkInvariant>,
        mut mode: EvaluationMode<'_>,
    ) -> Result<(), NetworkInvariantViolation> {
        for invariant in invariants {
            dispatch(self.ctx, invariant, &mut mode)?;
        }
        Ok(())
    }
}

fn dispatch(
    ctx: LinkContext<'_>,
    invariant: NetworkInvariant,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    match invariant {
        NetworkInvariant::NoSelfLinks => check_self_links(ctx, mode),
        NetworkInvariant::Symmetry => check_symmetry(ctx, mode),
        NetworkInvariant::EndpointsInRange => check_endpoints(ctx, mode),
    }
}

#[derive(Clone, Copy, Debug)]
pub(super) struct LinkContext<'a> {
    size: usize,
    adjacency: &'a [BTreeSet<usize>],
}

impl<'a> LinkContext<'a> {
    /// Iterates every directed entry `(origin, target)` in storage order.
    fn entries(self) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(origin, targets)| targets.iter().map(move |&target| (origin, target)))
    }

    fn contains(self, origin: usize, target: usize) -> bool {
        self.adjacency
            .get(origin)
            .is_some_and(|targets| targets.contains(&target))
    }
}

pub(super) enum EvaluationMode<'a> {
    FailFast,
    Collect(&'a mut Vec<NetworkInvariantViolation>),
}

impl EvaluationMode<'_> {
    fn record(
        &mut self,
        violation: NetworkInvariantViolation,
    ) -> Result<(), NetworkInvariantViolation> {
        match self {
            Self::FailFast => Err(violation),
            Self::Collect(sink) => {
                sink.push(violation);
                Ok(())
            }
        }
    }
}
