//! Sharestat CLI binary.
//!
//! Runs one load cycle for a company and writes the resulting page, or
//! prints and exports live summaries.

mod progress;

use clap::{Args, Parser, Subcommand};
use progress::Spinner;
use sharestat::{
    AcquireConfig, Acquirer, DEFAULT_CUTOFF, ExtremaSelector, LoadObserver, cik_from_page_url,
    resolve_cik,
};
use sharestat_data::edgar::{RELAY_BASE, USER_AGENT};
use sharestat_data::snapshot::DEFAULT_SNAPSHOT_PATH;
use sharestat_data::{Cik, ClientConfig, ConceptClient, EntitySummary};
use sharestat_output::format::{value_field, year_field};
use sharestat_output::{export_snapshot, render, write_page};
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sharestat")]
#[command(about = "Fiscal-year shares outstanding extrema from SEC EDGAR", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalOptions {
    /// Pre-aggregated snapshot used for the default CIK
    #[arg(long, global = true, default_value = DEFAULT_SNAPSHOT_PATH)]
    snapshot: PathBuf,

    /// User-Agent header sent to SEC EDGAR
    #[arg(long, global = true, default_value = USER_AGENT)]
    user_agent: String,

    /// Relay endpoint used for non-default CIKs
    #[arg(long, global = true, default_value = RELAY_BASE)]
    relay: String,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Only fiscal years sorting after this label are considered
    #[arg(long, global = true, default_value = DEFAULT_CUTOFF)]
    after_year: String,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one load cycle and write the HTML page
    Render {
        /// 10-digit CIK; anything else selects the default entity
        #[arg(long, conflicts_with = "page_url")]
        cik: Option<String>,

        /// Page address to read the `CIK` query parameter from
        #[arg(long)]
        page_url: Option<String>,

        /// Output HTML file
        #[arg(long, default_value = "index.html")]
        out: PathBuf,
    },

    /// Fetch live data and print the summary
    Summary {
        /// 10-digit CIK; anything else selects the default entity
        #[arg(long)]
        cik: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fetch live data and write a snapshot file
    Snapshot {
        /// 10-digit CIK; anything else selects the default entity
        #[arg(long)]
        cik: Option<String>,

        /// Output snapshot file
        #[arg(long, default_value = DEFAULT_SNAPSHOT_PATH)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.options.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let acquirer = build_acquirer(&cli.options)?;

    match cli.command {
        Commands::Render { cik, page_url, out } => {
            let cik = page_url.map_or_else(
                || resolve_cik(cik.as_deref()),
                |url| cik_from_page_url(&url),
            );

            let mut spinner = Spinner::new();
            let result = acquirer.load(&cik, &mut spinner).await;
            let page = render(&result.state);
            write_page(&page, &out)?;

            match result.tier {
                Some(tier) => println!("Wrote {} for CIK {} ({})", out.display(), cik, tier),
                None => println!("Wrote {} for CIK {} (data unavailable)", out.display(), cik),
            }
        }
        Commands::Summary { cik, json } => {
            let cik = resolve_cik(cik.as_deref());
            let summary = fetch_live(&acquirer, &cik).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
        Commands::Snapshot { cik, out } => {
            let cik = resolve_cik(cik.as_deref());
            let summary = fetch_live(&acquirer, &cik).await?;
            export_snapshot(&summary, &out)?;
            info!(path = %out.display(), %cik, "snapshot written");
            println!("Wrote snapshot for {} to {}", summary.entity_name, out.display());
        }
    }

    Ok(())
}

fn build_acquirer(
    options: &GlobalOptions,
) -> Result<Acquirer<ConceptClient>, Box<dyn std::error::Error>> {
    let is_four_digit_year =
        options.after_year.len() == 4 && options.after_year.bytes().all(|b| b.is_ascii_digit());
    if !is_four_digit_year {
        warn!(
            cutoff = %options.after_year,
            "cutoff is not a four-digit year; fiscal years are compared as strings"
        );
    }

    let client = ConceptClient::with_config(ClientConfig {
        user_agent: options.user_agent.clone(),
        relay_base: options.relay.clone(),
        timeout: options.timeout_secs.map(Duration::from_secs),
        ..ClientConfig::default()
    })?;

    let config = AcquireConfig {
        snapshot_path: options.snapshot.clone(),
        selector: ExtremaSelector::with_cutoff(options.after_year.as_str()),
    };

    Ok(Acquirer::with_config(client, config))
}

async fn fetch_live(
    acquirer: &Acquirer<ConceptClient>,
    cik: &Cik,
) -> Result<EntitySummary, Box<dyn std::error::Error>> {
    let mut spinner = Spinner::new();
    spinner.loading(&format!("Fetching CIK {cik}…"));
    let result = acquirer.fetch_live(cik).await;
    spinner.finished();
    Ok(result?)
}

fn print_summary(summary: &EntitySummary) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", summary.entity_name);
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "  Maximum: {:>20}  (FY {})",
        value_field(summary.max.as_ref()),
        year_field(summary.max.as_ref())
    );
    println!(
        "  Minimum: {:>20}  (FY {})",
        value_field(summary.min.as_ref()),
        year_field(summary.min.as_ref())
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["sharestat", "render"]).unwrap();

        assert_eq!(cli.options.snapshot, PathBuf::from("data.json"));
        assert_eq!(cli.options.after_year, "2020");
        assert_eq!(cli.options.timeout_secs, None);
        match cli.command {
            Commands::Render { cik, page_url, out } => {
                assert!(cik.is_none());
                assert!(page_url.is_none());
                assert_eq!(out, PathBuf::from("index.html"));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sharestat",
            "summary",
            "--cik",
            "0000320193",
            "--json",
            "--timeout-secs",
            "10",
            "--after-year",
            "2022",
        ])
        .unwrap();

        assert_eq!(cli.options.timeout_secs, Some(10));
        assert_eq!(cli.options.after_year, "2022");
        assert!(matches!(
            cli.command,
            Commands::Summary { cik: Some(ref c), json: true } if c == "0000320193"
        ));
    }

    #[test]
    fn test_render_cik_conflicts_with_page_url() {
        let result = Cli::try_parse_from([
            "sharestat",
            "render",
            "--cik",
            "0000320193",
            "--page-url",
            "https://example.com/?CIK=0000320193",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_acquirer_applies_options() {
        let cli = Cli::try_parse_from([
            "sharestat",
            "render",
            "--snapshot",
            "fixtures/data.json",
            "--after-year",
            "2019",
        ])
        .unwrap();

        let acquirer = build_acquirer(&cli.options).unwrap();
        assert_eq!(
            acquirer.config().snapshot_path,
            PathBuf::from("fixtures/data.json")
        );
        assert_eq!(acquirer.config().selector.cutoff(), "2019");
    }
}
