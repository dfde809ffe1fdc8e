//! Link insertion and adjacency queries.

use thiserror::Error;
use tracing::trace;

use crate::{error::Result, random::RandomSource};

use super::Network;

/// Reason an attempted link was not inserted.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum LinkRejection {
    /// Both endpoints were the same node.
    #[error("node {node} cannot link to itself")]
    SelfLoop {
        /// The repeated endpoint.
        node: usize,
    },
    /// An endpoint was not a node of the network.
    #[error("node {node} is out of bounds for a network of {size} node(s)")]
    OutOfBounds {
        /// The first offending endpoint.
        node: usize,
        /// Number of nodes at the time of the attempt.
        size: usize,
    },
    /// The two nodes were already linked, in either orientation.
    #[error("nodes {a} and {b} are already linked")]
    Duplicate {
        /// Endpoint passed first.
        a: usize,
        /// Endpoint passed second.
        b: usize,
    },
}

impl LinkRejection {
    /// Short label used in diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelfLoop { .. } => "self_loop",
            Self::OutOfBounds { .. } => "out_of_bounds",
            Self::Duplicate { .. } => "duplicate",
        }
    }
}

impl<R: RandomSource> Network<R> {
    /// Links nodes `a` and `b`, returning whether a new link was inserted.
    ///
    /// The attempt is rejected without mutation when `a == b`, when either
    /// endpoint is `>= size()`, or when the two nodes are already linked.
    /// [`Network::try_add_link`] reports which of these applied.
    pub fn add_link(&mut self, a: usize, b: usize) -> bool {
        self.try_add_link(a, b).is_ok()
    }

    /// Links nodes `a` and `b`, reporting why the link was refused.
    ///
    /// # Errors
    /// Returns the [`LinkRejection`] describing the refused attempt.
    ///
    /// # Examples
    /// ```
    /// use epinet_core::{LinkRejection, Network};
    ///
    /// let mut network = Network::new();
    /// network.resize(2);
    /// assert_eq!(network.try_add_link(0, 1), Ok(()));
    /// assert_eq!(
    ///     network.try_add_link(1, 0),
    ///     Err(LinkRejection::Duplicate { a: 1, b: 0 }),
    /// );
    /// assert_eq!(
    ///     network.try_add_link(1, 2),
    ///     Err(LinkRejection::OutOfBounds { node: 2, size: 2 }),
    /// );
    /// ```
    pub fn try_add_link(&mut self, a: usize, b: usize) -> core::result::Result<(), LinkRejection> {
        let outcome = self.insert_link(a, b);
        match &outcome {
            Ok(()) => record_link_created(),
            Err(rejection) => {
                trace!(a, b, reason = rejection.as_str(), "link rejected");
                record_link_rejected(rejection);
            }
        }
        outcome
    }

    fn insert_link(&mut self, a: usize, b: usize) -> core::result::Result<(), LinkRejection> {
        if a == b {
            return Err(LinkRejection::SelfLoop { node: a });
        }
        let size = self.size();
        if let Some(node) = [a, b].into_iter().find(|&node| node >= size) {
            return Err(LinkRejection::OutOfBounds { node, size });
        }
        debug_assert!(self.adjacency.len() >= size, "adjacency covers every node");
        if !self.adjacency[a].insert(b) {
            return Err(LinkRejection::Duplicate { a, b });
        }
        self.adjacency[b].insert(a);
        self.link_total += 1;
        Ok(())
    }

    /// Number of links incident to `node`.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::NodeOutOfBounds`] when `node >= size()`.
    pub fn degree(&self, node: usize) -> Result<usize> {
        self.ensure_node(node)?;
        Ok(self.adjacency[node].len())
    }

    /// Nodes linked to `node`, in ascending order.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::NodeOutOfBounds`] when `node >= size()`.
    pub fn neighbors(&self, node: usize) -> Result<Vec<usize>> {
        self.ensure_node(node)?;
        Ok(self.adjacency[node].iter().copied().collect())
    }

    /// Number of undirected links stored, dangling ones included.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.link_total
    }

    /// Iterates every stored link once as `(low, high)`.
    ///
    /// # Examples
    /// ```
    /// use epinet_core::Network;
    ///
    /// let mut network = Network::new();
    /// network.resize(3);
    /// network.add_link(2, 0);
    /// network.add_link(1, 2);
    /// let links: Vec<_> = network.links().collect();
    /// assert_eq!(links, vec![(0, 2), (1, 2)]);
    /// ```
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(low, targets)| {
            targets
                .range(low + 1..)
                .map(move |&high| (low, high))
        })
    }

    /// Removes every link with an endpoint outside the current node set and
    /// returns how many were dropped.
    ///
    /// # Examples
    /// ```
    /// use epinet_core::Network;
    ///
    /// let mut network = Network::new();
    /// network.resize(4);
    /// network.add_link(0, 3);
    /// network.add_link(0, 1);
    /// network.resize(2);
    /// assert_eq!(network.link_count(), 2);
    /// assert_eq!(network.prune_dangling_links(), 1);
    /// assert_eq!(network.neighbors(0)?, vec![1]);
    /// # Ok::<(), epinet_core::NetworkError>(())
    /// ```
    pub fn prune_dangling_links(&mut self) -> usize {
        let size = self.size();
        let removed = self.dangling_link_count();
        self.adjacency.truncate(size);
        for targets in &mut self.adjacency {
            targets.retain(|&target| target < size);
        }
        self.link_total -= removed;
        if removed > 0 {
            trace!(size, removed, "pruned dangling links");
        }
        removed
    }

    pub(super) fn dangling_link_count(&self) -> usize {
        let size = self.size();
        self.links().filter(|&(_, high)| high >= size).count()
    }

    pub(super) fn clear_links(&mut self) {
        self.adjacency.truncate(self.size());
        for targets in &mut self.adjacency {
            targets.clear();
        }
        self.link_total = 0;
    }
}

#[cfg(feature = "metrics")]
fn record_link_created() {
    metrics::counter!("network_links_created").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_link_created() {}

#[cfg(feature = "metrics")]
fn record_link_rejected(rejection: &LinkRejection) {
    metrics::counter!("network_link_rejections", "reason" => rejection.as_str()).increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_link_rejected(_rejection: &LinkRejection) {}
