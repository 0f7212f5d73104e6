//! Fetches the shares outstanding concept for a company and lists the
//! observations it reports.
//!
//! Run with:
//! ```bash
//! cargo run -p sharestat-data --example concept_demo -- 0000320193
//! ```
//!
//! Without an argument the default CIK is used. Set `SEC_USER_AGENT` to
//! identify yourself to the SEC.

use sharestat_data::edgar::{Cik, ClientConfig, ConceptClient};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== SEC EDGAR Shares Outstanding ===\n");

    let cik = env::args()
        .nth(1)
        .and_then(|raw| Cik::parse(&raw))
        .unwrap_or_default();

    let mut config = ClientConfig::default();
    if let Ok(user_agent) = env::var("SEC_USER_AGENT") {
        config.user_agent = user_agent;
    }
    let client = ConceptClient::with_config(config)?;

    println!("Fetching {}", client.concept_url(&cik));
    let doc = client.fetch_concept(&cik).await?;

    println!("Company: {}", doc.entity_name_or_default());
    let shares = doc.shares();
    println!("Observations: {}\n", shares.len());

    for obs in &shares {
        match (obs.fiscal_year_label(), obs.value()) {
            (Some(fy), Some(val)) => println!("  FY {fy:<6} {val:>16.0}"),
            _ => println!("  (incomplete entry skipped)"),
        }
    }

    // Relayed form of the same request
    println!("\nRelay URL: {}", client.relayed_concept_url(&cik)?);

    Ok(())
}
