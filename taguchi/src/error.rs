//! The error taxonomy shared by every component of the core.

use thiserror::Error;

/// Everything that can go wrong inside the core.
///
/// `ParseError` is intentionally absent: tokenizing the `.tgu` definition
/// format is a `taguchi-cli` concern (see `taguchi_cli::parser`), not a
/// core one — the core only ever sees an already-built [`crate::Definition`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// A factor set, a name, or a level list violated a structural
    /// constraint (zero factors, zero levels, a name or value too long).
    #[error("invalid definition: {0}")]
    Validation(String),

    /// An explicit array name was not found in the catalog.
    #[error("unknown array: {0}")]
    UnknownArray(String),

    /// No catalog array has enough columns for the factor set.
    #[error(
        "no catalog array fits {factor_count} factor(s) with up to {max_level} level(s) each"
    )]
    Capacity {
        /// Number of factors in the definition that could not be placed.
        factor_count: usize,
        /// The largest level count among those factors.
        max_level: usize,
    },

    /// An explicit array was chosen but is too small once column pairing
    /// is taken into account.
    #[error("array {array} has {available} column(s), but {needed} are needed")]
    ColumnOverflow {
        /// Name of the array that was too small.
        array: String,
        /// Columns required by the factor set after pairing.
        needed: usize,
        /// Columns actually available on the array.
        available: usize,
    },
}
