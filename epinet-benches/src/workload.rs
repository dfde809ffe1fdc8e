//! Seeded workloads shared by the benchmarks.

use epinet_core::{Network, NetworkBuilder};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for a batch of link attempts.
#[derive(Clone, Copy, Debug)]
pub struct LinkWorkloadConfig {
    /// Number of nodes endpoints are drawn from.
    pub node_count: usize,
    /// Number of endpoint pairs to draw.
    pub pair_count: usize,
    /// Seed for the endpoint draws.
    pub seed: u64,
}

/// Endpoint pairs drawn uniformly from `0..node_count`.
///
/// Pairs may repeat or name the same node twice, so replaying them through
/// [`Network::add_link`] exercises the rejection paths as well as insertion.
#[derive(Clone, Debug)]
pub struct LinkWorkload {
    node_count: usize,
    pairs: Vec<(usize, usize)>,
}

impl LinkWorkload {
    /// Draws the pairs described by `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `node_count` is zero.
    ///
    /// # Examples
    /// ```
    /// use epinet_benches::workload::{LinkWorkload, LinkWorkloadConfig};
    ///
    /// let workload = LinkWorkload::generate(&LinkWorkloadConfig {
    ///     node_count: 10,
    ///     pair_count: 25,
    ///     seed: 3,
    /// })?;
    /// assert_eq!(workload.pairs().len(), 25);
    /// # Ok::<(), epinet_benches::error::BenchSetupError>(())
    /// ```
    pub fn generate(config: &LinkWorkloadConfig) -> Result<Self, BenchSetupError> {
        if config.node_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "link workload node_count",
            });
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let pairs = (0..config.pair_count)
            .map(|_| {
                (
                    rng.gen_range(0..config.node_count),
                    rng.gen_range(0..config.node_count),
                )
            })
            .collect();
        Ok(Self {
            node_count: config.node_count,
            pairs,
        })
    }

    /// Number of nodes the pairs were drawn from.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// The drawn endpoint pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Replays every pair into a fresh network and returns the number of
    /// links that were inserted.
    #[must_use]
    pub fn replay(&self) -> usize {
        let mut network = NetworkBuilder::new().with_size(self.node_count).build();
        self.pairs
            .iter()
            .filter(|&&(a, b)| network.add_link(a, b))
            .count()
    }
}

/// Builds a network of `node_count` nodes seeded with `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `node_count` is zero.
pub fn seeded_network(node_count: usize, seed: u64) -> Result<Network, BenchSetupError> {
    if node_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "network node_count",
        });
    }
    Ok(NetworkBuilder::new()
        .with_size(node_count)
        .with_rng_seed(seed)
        .build())
}
