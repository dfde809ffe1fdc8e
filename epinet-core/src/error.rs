//! Error types for the epinet core library.
//!
//! Defines the error enum exposed by the public [`crate::Network`] API, its
//! stable machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by checked [`crate::Network`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
    /// A node index was outside `[0, size())`.
    #[error("node {node} is out of bounds for a network of {size} node(s)")]
    NodeOutOfBounds {
        /// The requested node index.
        node: usize,
        /// Number of nodes in the network at the time of the request.
        size: usize,
    },
    /// The mean degree handed to `random_connect` was negative or non-finite.
    #[error("mean degree must be finite and non-negative (got {mean})")]
    InvalidMeanDegree {
        /// The rejected mean degree.
        mean: f64,
    },
    /// The random source could not construct a sampling distribution.
    #[error("random source failed to build a distribution: {reason}")]
    Distribution {
        /// Human-readable description reported by the distribution.
        reason: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// A node index was outside `[0, size())`.
        NodeOutOfBounds => NodeOutOfBounds { .. } => "NETWORK_NODE_OUT_OF_BOUNDS",
        /// The mean degree handed to `random_connect` was invalid.
        InvalidMeanDegree => InvalidMeanDegree { .. } => "NETWORK_INVALID_MEAN_DEGREE",
        /// The random source could not construct a sampling distribution.
        Distribution => Distribution { .. } => "NETWORK_DISTRIBUTION_FAILURE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetworkError>;
