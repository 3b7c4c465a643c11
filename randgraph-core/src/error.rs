//! Error types for the randgraph core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::edge::Weight;

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
            #[must_use]
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
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when validating requests or generating graphs.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A graph must contain at least one node.
    #[error("node count must be at least 1 (got {got})")]
    InvalidNodeCount {
        /// The node count supplied by the caller.
        got: usize,
    },
    /// The lower weight bound exceeded the upper bound.
    #[error("weight range is empty: min_weight {min} is greater than max_weight {max}")]
    InvalidWeightRange {
        /// Requested lower bound.
        min: Weight,
        /// Requested upper bound.
        max: Weight,
    },
    /// The per-edge attempt budget must allow at least one draw.
    #[error("max_attempts_per_edge must be at least 1")]
    InvalidAttemptBudget,
    /// No fresh simple edge was found within the attempt budget.
    #[error("no unused edge found for edge {edge_index} after {attempts} attempts")]
    GenerationFailed {
        /// Zero-based position of the edge that could not be placed.
        edge_index: usize,
        /// Number of candidate draws made before giving up.
        attempts: usize,
    },
    /// Buffers for the requested edge count could not be allocated.
    #[error("cannot allocate storage for {edges} edges")]
    CapacityExceeded {
        /// Clamped edge count that was requested.
        edges: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph must contain at least one node.
        InvalidNodeCount => InvalidNodeCount { .. } => "GRAPH_INVALID_NODE_COUNT",
        /// The lower weight bound exceeded the upper bound.
        InvalidWeightRange => InvalidWeightRange { .. } => "GRAPH_INVALID_WEIGHT_RANGE",
        /// The per-edge attempt budget must allow at least one draw.
        InvalidAttemptBudget => InvalidAttemptBudget => "GRAPH_INVALID_ATTEMPT_BUDGET",
        /// No fresh simple edge was found within the attempt budget.
        GenerationFailed => GenerationFailed { .. } => "GRAPH_GENERATION_FAILED",
        /// Buffers for the requested edge count could not be allocated.
        CapacityExceeded => CapacityExceeded { .. } => "GRAPH_CAPACITY_EXCEEDED",
    }
}

impl GraphError {
    /// Returns `true` when the error stems from malformed caller parameters
    /// rather than from the generation run itself or its resources.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::GraphError;
    ///
    /// assert!(GraphError::InvalidNodeCount { got: 0 }.is_invalid_argument());
    /// assert!(!GraphError::GenerationFailed { edge_index: 3, attempts: 10 }.is_invalid_argument());
    /// ```
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            Self::GenerationFailed { .. } | Self::CapacityExceeded { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
