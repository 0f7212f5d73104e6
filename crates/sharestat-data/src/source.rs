//! Abstraction over where share data comes from.

use crate::edgar::Cik;
use crate::error::Result;
use crate::model::{ConceptDocument, EntitySummary};
use std::future::Future;
use std::path::Path;

/// The three ways share data can be obtained.
///
/// [`ConceptClient`](crate::edgar::ConceptClient) implements this against
/// the local filesystem and EDGAR; tests substitute in-memory fakes.
pub trait ConceptSource {
    /// Read a pre-aggregated snapshot file.
    fn load_snapshot(&self, path: &Path) -> impl Future<Output = Result<EntitySummary>>;

    /// Fetch the company concept straight from EDGAR.
    fn fetch_direct(&self, cik: &Cik) -> impl Future<Output = Result<ConceptDocument>>;

    /// Fetch the company concept through the relay endpoint.
    fn fetch_relayed(&self, cik: &Cik) -> impl Future<Output = Result<ConceptDocument>>;
}
