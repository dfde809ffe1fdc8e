//! Benchmark parameter types.
//!
//! Each struct renders as a compact Criterion parameter label.

use std::fmt;

/// Parameters for a random connection benchmark run.
#[derive(Clone, Debug)]
pub struct ConnectBenchParams {
    /// Number of nodes in the network.
    pub node_count: usize,
    /// Mean of the Poisson degree-target distribution.
    pub mean_degree: f64,
}

impl fmt::Display for ConnectBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},lambda={}", self.node_count, self.mean_degree)
    }
}

/// Parameters for a link insertion benchmark run.
#[derive(Clone, Debug)]
pub struct LinkBenchParams {
    /// Number of nodes in the network.
    pub node_count: usize,
    /// Number of link attempts replayed per iteration.
    pub pair_count: usize,
}

impl fmt::Display for LinkBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},pairs={}", self.node_count, self.pair_count)
    }
}
