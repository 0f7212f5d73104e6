//! Error types for selection and acquisition.

use sharestat_data::DataError;
use thiserror::Error;

/// Selector failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// No observation survived the fiscal year filter.
    #[error("no share data for FY > {cutoff}")]
    EmptyAfterFilter {
        /// Cutoff the observations were compared against
        cutoff: String,
    },
}

/// Why a single acquisition tier failed.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// Transport, HTTP status, or parse failure.
    #[error(transparent)]
    Data(#[from] DataError),

    /// The document had no usable observations.
    #[error(transparent)]
    Select(#[from] SelectError),
}
