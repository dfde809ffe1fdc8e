//! Benchmark support crate for epinet.
//!
//! Provides seeded workloads and parameter types used by the Criterion
//! benchmarks for link insertion and Poisson random connection.

pub mod error;
pub mod params;
pub mod workload;
