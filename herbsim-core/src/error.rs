//! Error taxonomy for the simulation core.

use thiserror::Error;

/// Deterministic contract violations surfaced to the caller. Nothing in this
/// domain is transient, so no variant is ever retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A configuration field is outside its documented bounds. Raised before
    /// any trial executes.
    #[error("invalid configuration: {field} {message}")]
    InvalidConfiguration {
        field: &'static str,
        message: String,
    },

    /// Harvest was attempted on a live plant that has not finished growing.
    /// This is a programming fault in the caller, not a runtime condition.
    #[error("cannot harvest at growth stage {stage}; the plant is not fully grown")]
    InvalidState { stage: u8 },

    /// An aggregate rate accessor was queried with zero recorded trials.
    #[error("aggregate rates are undefined with zero recorded trials")]
    DivisionByZero,
}
