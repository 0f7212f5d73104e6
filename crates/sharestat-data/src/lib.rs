#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sharestat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod edgar;
pub mod error;
pub mod model;
pub mod snapshot;
pub mod source;

pub use edgar::{Cik, ClientConfig, ConceptClient};
pub use error::{DataError, Result};
pub use model::{ConceptDocument, EntitySummary, Extremum, RawObservation, UNKNOWN_ENTITY};
pub use source::ConceptSource;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
