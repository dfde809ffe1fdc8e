//! Node value storage: resizing, overwriting, and lookups.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{error::Result, random::RandomSource};

use super::Network;

impl<R: RandomSource> Network<R> {
    /// Resizes the node set to exactly `size` nodes and redraws every value.
    ///
    /// After the call each node, old or new, holds an independent Normal(0, 1)
    /// draw. Links are left untouched: shrinking keeps links whose endpoints
    /// now fall outside the node set. Use [`Network::prune_dangling_links`] to
    /// drop them.
    ///
    /// # Examples
    /// ```
    /// use epinet_core::Network;
    ///
    /// let mut network = Network::new();
    /// network.resize(8);
    /// assert_eq!(network.size(), 8);
    /// assert!(network.values().iter().all(|value| value.is_finite()));
    /// ```
    pub fn resize(&mut self, size: usize) {
        self.values.resize(size, 0.0);
        self.rng.fill_normal(&mut self.values);
        if self.adjacency.len() < size {
            self.adjacency.resize_with(size, BTreeSet::new);
        }

        let dangling = self.dangling_link_count();
        if dangling > 0 {
            debug!(size, dangling, "resize left links referencing removed nodes");
        }
    }

    /// Overwrites node values from `new_values`, position by position.
    ///
    /// Only the first `min(size(), new_values.len())` positions are written;
    /// the rest keep their current value and the node set is never resized.
    /// Returns the number of values written.
    ///
    /// # Examples
    /// ```
    /// use epinet_core::Network;
    ///
    /// let mut network = Network::new();
    /// network.resize(3);
    /// assert_eq!(network.set_values(&[1.0, 2.0]), 2);
    /// assert_eq!(network.value(1)?, 2.0);
    /// assert_eq!(network.set_values(&[0.0; 5]), 3);
    /// # Ok::<(), epinet_core::NetworkError>(())
    /// ```
    pub fn set_values(&mut self, new_values: &[f64]) -> usize {
        let mut written = 0;
        for (slot, value) in self.values.iter_mut().zip(new_values) {
            *slot = *value;
            written += 1;
        }
        written
    }

    /// Value carried by `node`.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::NodeOutOfBounds`] when `node >= size()`.
    pub fn value(&self, node: usize) -> Result<f64> {
        self.ensure_node(node)?;
        Ok(self.values[node])
    }

    /// All node values in node order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns a copy of the node values sorted in descending order.
    ///
    /// The stored order is not affected.
    ///
    /// # Examples
    /// ```
    /// use epinet_core::Network;
    ///
    /// let mut network = Network::new();
    /// network.resize(3);
    /// network.set_values(&[0.5, 2.0, -1.0]);
    /// assert_eq!(network.sorted_values(), vec![2.0, 0.5, -1.0]);
    /// assert_eq!(network.values(), &[0.5, 2.0, -1.0]);
    /// ```
    #[must_use]
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut descending = self.values.clone();
        descending.sort_by(|left, right| right.total_cmp(left));
        descending
    }
}
