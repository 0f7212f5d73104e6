//! SEC EDGAR company-concept access.
//!
//! This module provides:
//! - [`Cik`], the validated 10-digit Central Index Key
//! - [`ConceptClient`], which fetches the `dei/EntityCommonStockSharesOutstanding`
//!   concept either directly from `data.sec.gov` or through a public relay
//!
//! # Example
//!
//! ```no_run
//! use sharestat_data::edgar::{Cik, ConceptClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ConceptClient::new()?;
//!     let cik = Cik::parse("0000769397").ok_or("bad CIK")?;
//!     let doc = client.fetch_concept(&cik).await?;
//!     println!("{}: {} observations", doc.entity_name_or_default(), doc.shares().len());
//!     Ok(())
//! }
//! ```

pub mod cik;
pub mod client;

pub use cik::{Cik, DEFAULT_CIK};
pub use client::{
    ClientConfig, ConceptClient, EDGAR_API_BASE, EDGAR_BROWSE_URL, RELAY_BASE, SHARES_CONCEPT,
    SHARES_TAXONOMY, USER_AGENT, browse_url, concept_url, relay_url,
};
