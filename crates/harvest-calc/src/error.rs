//! Error types for the `harvest-calc` crate.
//!
//! All fallible operations in this crate return [`CalcError`] through the
//! standard [`Result`] type alias.

/// Errors that can occur during farm calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// A farm-level rollup was requested over a farm with no crop entries.
    ///
    /// An empty farm has no defined total; callers must supply at least
    /// one entry (an entry with zero planted units is fine).
    #[error("cannot aggregate over a farm with no crop entries")]
    EmptyFarm,

    /// Arithmetic overflow during a checked operation.
    #[error("arithmetic overflow in farm calculation")]
    ArithmeticOverflow,
}
