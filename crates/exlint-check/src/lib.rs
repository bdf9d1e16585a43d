//! # exlint-check
//!
//! Reconciles every discovered example against its manifest and the
//! workspace registry, and reports the result.
//!
//! Per-project problems become a [`ValidationOutcome`] and never abort the
//! run; only problems that make the whole run untrustworthy (discovery,
//! identity collisions, registry query) surface as [`CheckError`].
//!
//! The engine returns a [`CheckReport`]; mapping it to a process exit code is
//! left to the binary.

pub mod manifest;
pub mod outcome;
pub mod reconcile;
pub mod report;
pub mod run;

mod error;

pub use error::CheckError;
pub use outcome::ValidationOutcome;
pub use reconcile::Reconciler;
pub use report::{CheckReport, ExitStatus, ProjectResult, ReportFormat, Reporter};
pub use run::{CheckOptions, discover, reconcile_all, run_check};
