//! Acquisition tiers and the load cycle.
//!
//! A load cycle resolves to a [`ViewState`] by trying an ordered list of
//! [`Tier`]s:
//!
//! - default CIK: [`Tier::LocalSnapshot`], then [`Tier::Direct`]
//! - any other CIK: [`Tier::Relayed`]
//!
//! The first tier that succeeds wins. A tier fails on transport errors,
//! non-success HTTP statuses, malformed JSON, or a series with nothing after
//! the cutoff; every failure is recorded and the next tier is tried. When all
//! tiers fail the cycle ends in [`ViewState::Unavailable`].

use crate::error::AcquireError;
use crate::extrema::ExtremaSelector;
use derive_more::Display;
use sharestat_data::edgar::{EDGAR_API_BASE, browse_url, concept_url};
use sharestat_data::snapshot::DEFAULT_SNAPSHOT_PATH;
use sharestat_data::{Cik, ConceptSource, EntitySummary};
use sharestat_output::{SourceLink, ViewState};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Status message shown while loading.
pub const LOADING_MESSAGE: &str = "Loading data…";

/// One way of obtaining share data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Tier {
    /// Pre-aggregated snapshot file
    #[display("local snapshot")]
    LocalSnapshot,

    /// EDGAR, called directly
    #[display("direct EDGAR")]
    Direct,

    /// EDGAR, called through the relay
    #[display("relayed EDGAR")]
    Relayed,
}

impl Tier {
    /// Tiers to try for `cik`, in order.
    pub fn plan(cik: &Cik) -> Vec<Self> {
        if cik.is_default() {
            vec![Self::LocalSnapshot, Self::Direct]
        } else {
            vec![Self::Relayed]
        }
    }

    /// The single network tier used for a live fetch of `cik`.
    pub fn live(cik: &Cik) -> Self {
        if cik.is_default() {
            Self::Direct
        } else {
            Self::Relayed
        }
    }

    /// Link shown when this tier supplied the data.
    pub fn source_link(self, cik: &Cik) -> SourceLink {
        match self {
            Self::LocalSnapshot => SourceLink::new("SEC source", concept_url(EDGAR_API_BASE, cik)),
            Self::Direct => SourceLink::new("SEC live", concept_url(EDGAR_API_BASE, cik)),
            Self::Relayed => SourceLink::new(format!("SEC for {cik}"), browse_url(cik)),
        }
    }
}

/// Receives loading notifications.
pub trait LoadObserver {
    /// Loading started.
    fn loading(&mut self, message: &str);

    /// Loading ended; called before the outcome is returned.
    fn finished(&mut self);
}

/// Observer that ignores notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl LoadObserver for NoopObserver {
    fn loading(&mut self, _message: &str) {}

    fn finished(&mut self) {}
}

/// Acquisition settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquireConfig {
    /// Location of the bundled snapshot
    pub snapshot_path: PathBuf,
    /// Selector applied to fetched series
    pub selector: ExtremaSelector,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            selector: ExtremaSelector::new(),
        }
    }
}

/// A tier that did not produce data.
#[derive(Debug)]
pub struct TierFailure {
    /// The tier that was tried
    pub tier: Tier,
    /// Why it failed
    pub error: AcquireError,
}

/// Result of one load cycle.
#[derive(Debug)]
pub struct Acquisition {
    /// Resolved CIK
    pub cik: Cik,
    /// What to render
    pub state: ViewState,
    /// Tier that supplied the data, if any
    pub tier: Option<Tier>,
    /// Failed tiers, in the order they were tried
    pub failures: Vec<TierFailure>,
}

/// Runs acquisition tiers against a [`ConceptSource`].
#[derive(Debug)]
pub struct Acquirer<S> {
    source: S,
    config: AcquireConfig,
}

impl<S: ConceptSource> Acquirer<S> {
    /// Create an acquirer with default settings.
    pub fn new(source: S) -> Self {
        Self::with_config(source, AcquireConfig::default())
    }

    /// Create an acquirer with custom settings.
    pub const fn with_config(source: S, config: AcquireConfig) -> Self {
        Self { source, config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &AcquireConfig {
        &self.config
    }

    /// Run one load cycle for `cik`.
    ///
    /// Never fails: exhausting every tier yields [`ViewState::Unavailable`].
    pub async fn load<O: LoadObserver>(&self, cik: &Cik, observer: &mut O) -> Acquisition {
        observer.loading(LOADING_MESSAGE);

        let mut failures = Vec::new();
        let mut outcome = None;
        for tier in Tier::plan(cik) {
            debug!(%cik, %tier, "trying tier");
            match self.attempt(tier, cik).await {
                Ok(summary) => {
                    outcome = Some((tier, summary));
                    break;
                }
                Err(error) => {
                    warn!(%cik, %tier, %error, "tier failed");
                    failures.push(TierFailure { tier, error });
                }
            }
        }

        observer.finished();

        let (state, tier) = match outcome {
            Some((tier, summary)) => {
                info!(%cik, %tier, entity = %summary.entity_name, "data loaded");
                let source = tier.source_link(cik);
                (ViewState::Rendered { summary, source }, Some(tier))
            }
            None => {
                info!(%cik, attempts = failures.len(), "data unavailable");
                (ViewState::Unavailable, None)
            }
        };

        Acquisition {
            cik: cik.clone(),
            state,
            tier,
            failures,
        }
    }

    /// Fetch and summarize `cik` from EDGAR, skipping the snapshot.
    pub async fn fetch_live(&self, cik: &Cik) -> Result<EntitySummary, AcquireError> {
        self.attempt(Tier::live(cik), cik).await
    }

    async fn attempt(&self, tier: Tier, cik: &Cik) -> Result<EntitySummary, AcquireError> {
        let selector = &self.config.selector;
        let summary = match tier {
            Tier::LocalSnapshot => self.source.load_snapshot(&self.config.snapshot_path).await?,
            Tier::Direct => selector.select(&self.source.fetch_direct(cik).await?)?,
            Tier::Relayed => selector.select(&self.source.fetch_relayed(cik).await?)?,
        };
        Ok(summary)
    }
}
