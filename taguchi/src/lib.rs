#![warn(clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

//! Design and analysis of Taguchi-style fractional-factorial experiments.
//!
//! Given a set of [`Factor`](factor::Factor)s with discrete levels, [`catalog`]
//! builds or looks up an [`OrthogonalArray`](catalog::OrthogonalArray), and
//! [`run`] maps the factors onto its columns to emit a balanced schedule of
//! [`Run`](run::Run)s. With the `doe` feature enabled, [`effects`] and
//! [`recommend`] turn externally-collected responses into per-factor main
//! effects and an optimal-level recommendation.
//!
//! This crate is single-threaded and does no I/O: reading experiment
//! definitions from disk, collecting CSV results, and driving external
//! processes are the job of a caller (see the `taguchi-cli` binary in this
//! workspace).

pub mod catalog;
pub mod columns;
pub mod error;
pub mod factor;
mod gf;
pub mod run;
pub mod selector;

#[cfg(feature = "doe")]
pub mod effects;
#[cfg(feature = "doe")]
pub mod recommend;
#[cfg(feature = "doe")]
pub mod result;

pub use catalog::OrthogonalArray;
pub use error::Error;
pub use factor::{Definition, Factor};
pub use run::Run;
pub use selector::select_array;

#[cfg(feature = "doe")]
pub use effects::{calculate_main_effects, MainEffect};
#[cfg(feature = "doe")]
pub use recommend::recommend;
#[cfg(feature = "doe")]
pub use result::ResultSet;

/// Convenience alias for fallible core operations.
pub type Result<T> = std::result::Result<T, Error>;
