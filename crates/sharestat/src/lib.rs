#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sharestat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod acquire;
pub mod error;
pub mod extrema;
pub mod identifier;

// Re-export sub-crates
pub use sharestat_data as data;
pub use sharestat_output as output;

pub use acquire::{
    AcquireConfig, Acquirer, Acquisition, LoadObserver, LOADING_MESSAGE, NoopObserver, Tier,
    TierFailure,
};
pub use error::{AcquireError, SelectError};
pub use extrema::{DEFAULT_CUTOFF, ExtremaSelector, Observation};
pub use identifier::{cik_from_page_url, resolve_cik};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
