//! Design-specific error types.

use thiserror::Error;

/// Errors returned by the string-keyed design entry points.
///
/// Physically infeasible designs are not errors; they are reported as
/// [`DesignWarning`](crate::enclosure::DesignWarning)s inside the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    /// The requested topology name is not one of the five supported kinds.
    #[error(
        "unsupported enclosure topology: {0} (expected Sealed, Ported, Bandpass, TransmissionLine or PassiveRadiator)"
    )]
    UnsupportedTopology(String),
}
