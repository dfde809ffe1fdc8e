//! Epinet core library.
//!
//! Provides [`Network`], an undirected network of value-carrying nodes used as
//! the substrate for epidemic and diffusion simulations, together with the
//! [`RandomSource`] collaborator that drives value initialisation and
//! Poisson-targeted random linking.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the network emits:
//!
//! - `network_links_created` (counter)
//! - `network_link_rejections` (counter, labelled by `reason`)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod invariants;
mod network;
mod random;
mod stats;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::NetworkBuilder,
    error::{NetworkError, NetworkErrorCode, Result},
    invariants::{NetworkInvariant, NetworkInvariantChecker, NetworkInvariantViolation},
    network::{LinkRejection, Network},
    random::{DEFAULT_RNG_SEED, RandomSource, SeededRng},
    stats::DegreeStats,
};
