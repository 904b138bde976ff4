//! Error type for the simulation core
//!
//! Only construction can fail: bad particles or out-of-range scenario
//! values. Degenerate geometry and near-singular distances are handled
//! in place by the field and force code.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Particle mass must be strictly positive and finite
    NonPositiveMass(f64),
    /// A position, velocity or charge value was NaN or infinite
    NonFinite(&'static str),
    /// A vector in a scenario file did not have exactly two components
    BadVectorLength { field: &'static str, len: usize },
    /// A world, parameter or view value is out of its valid range
    InvalidParameter(&'static str),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NonPositiveMass(m) => write!(f, "particle mass must be > 0, got {m}"),
            SimError::NonFinite(what) => write!(f, "particle {what} must be finite"),
            SimError::BadVectorLength { field, len } => {
                write!(f, "`{field}` must have 2 components, got {len}")
            }
            SimError::InvalidParameter(what) => write!(f, "invalid scenario value: {what}"),
        }
    }
}

impl std::error::Error for SimError {}
