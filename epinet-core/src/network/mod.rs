//! Undirected node network with per-node values.
//!
//! A [`Network`] owns a store of `f64` node values, whose length defines the
//! node set, and a symmetric link relation kept as one neighbour set per node.
//! Linking `a` and `b` records `b` under `a` and `a` under `b`, so degree and
//! neighbour queries only touch the node's own set.
//!
//! Shrinking the node set with [`Network::resize`] leaves links that reference
//! removed nodes in place. Such dangling links are reported by
//! [`Network::invariants`] and can be dropped with
//! [`Network::prune_dangling_links`].

mod connect;
mod links;
mod values;

use std::collections::BTreeSet;

use crate::{
    invariants::NetworkInvariantChecker,
    random::{RandomSource, SeededRng},
    stats::DegreeStats,
};

pub use self::links::LinkRejection;

/// Undirected network of value-carrying nodes.
///
/// # Examples
/// ```
/// use epinet_core::Network;
///
/// let mut network = Network::new();
/// network.resize(4);
/// assert!(network.add_link(0, 1));
/// assert!(!network.add_link(1, 0));
/// assert!(!network.add_link(0, 0));
/// assert!(!network.add_link(0, 5));
/// assert_eq!(network.degree(0)?, 1);
/// assert_eq!(network.neighbors(0)?, vec![1]);
/// # Ok::<(), epinet_core::NetworkError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Network<R = SeededRng> {
    values: Vec<f64>,
    adjacency: Vec<BTreeSet<usize>>,
    link_total: usize,
    rng: R,
}

impl Network<SeededRng> {
    /// Creates an empty network drawing from a [`SeededRng`] with the default
    /// seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(SeededRng::default())
    }
}

impl Default for Network<SeededRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Network<R> {
    /// Creates an empty network that draws from `rng`.
    ///
    /// # Examples
    /// ```
    /// use epinet_core::{Network, SeededRng};
    ///
    /// let network = Network::with_source(SeededRng::new(42));
    /// assert_eq!(network.size(), 0);
    /// assert_eq!(network.link_count(), 0);
    /// ```
    #[must_use]
    pub fn with_source(rng: R) -> Self {
        Self {
            values: Vec::new(),
            adjacency: Vec::new(),
            link_total: 0,
            rng,
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns the random source owned by the network.
    #[must_use]
    pub fn source(&self) -> &R {
        &self.rng
    }

    /// Summarises the degree distribution over the current node set.
    ///
    /// # Examples
    /// ```
    /// use epinet_core::Network;
    ///
    /// let mut network = Network::new();
    /// network.resize(3);
    /// network.add_link(0, 1);
    /// let stats = network.degree_stats();
    /// assert_eq!(stats.max(), 1);
    /// assert_eq!(stats.histogram(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn degree_stats(&self) -> DegreeStats {
        DegreeStats::from_degrees(self.adjacency.iter().take(self.size()).map(BTreeSet::len))
    }

    /// Returns a checker for the structural invariants of the link relation.
    #[must_use]
    pub fn invariants(&self) -> NetworkInvariantChecker<'_> {
        NetworkInvariantChecker::new(self.size(), &self.adjacency)
    }

    pub(crate) fn ensure_node(&self, node: usize) -> crate::Result<()> {
        if node < self.size() {
            Ok(())
        } else {
            Err(crate::NetworkError::NodeOutOfBounds {
                node,
                size: self.size(),
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn adjacency_mut(&mut self) -> &mut Vec<BTreeSet<usize>> {
        &mut self.adjacency
    }
}

#[cfg(test)]
mod tests;
