//! Fiscal-year extrema of a shares outstanding series.
//!
//! The fiscal year filter compares labels as strings: an observation is kept
//! when its label sorts after the cutoff. This matches numeric order only for
//! four-digit years; labels in any other format are compared as-is.

use crate::error::SelectError;
use serde_json::Value;
use sharestat_data::{ConceptDocument, EntitySummary, Extremum};

/// Observations labelled after this year are kept.
pub const DEFAULT_CUTOFF: &str = "2020";

/// An observation that passed the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Fiscal year label
    pub fy: String,
    /// Finite, non-zero value
    pub val: f64,
}

impl From<&Observation> for Extremum {
    fn from(obs: &Observation) -> Self {
        Self::new(obs.val, obs.fy.clone())
    }
}

/// Picks the largest and smallest observation after a cutoff year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtremaSelector {
    cutoff: String,
}

impl ExtremaSelector {
    /// Selector with the default `"2020"` cutoff.
    pub fn new() -> Self {
        Self::with_cutoff(DEFAULT_CUTOFF)
    }

    /// Selector with a custom cutoff label.
    pub fn with_cutoff(cutoff: impl Into<String>) -> Self {
        Self {
            cutoff: cutoff.into(),
        }
    }

    /// The cutoff label.
    pub fn cutoff(&self) -> &str {
        &self.cutoff
    }

    /// Observations that pass the filter, in document order.
    ///
    /// An observation is kept when its fiscal year label is present and sorts
    /// after the cutoff, and its value is a non-zero finite number.
    pub fn retained(&self, doc: &ConceptDocument) -> Vec<Observation> {
        doc.shares()
            .iter()
            .filter_map(|raw| {
                let fy = raw.fiscal_year_label()?;
                let val = raw.value()?;
                (fy.as_str() > self.cutoff.as_str()).then_some(Observation { fy, val })
            })
            .collect()
    }

    /// Entity name plus largest and smallest retained observation.
    ///
    /// On equal values the later fiscal year label wins, for the minimum as
    /// well as the maximum.
    ///
    /// # Errors
    /// [`SelectError::EmptyAfterFilter`] when nothing is retained.
    pub fn select(&self, doc: &ConceptDocument) -> Result<EntitySummary, SelectError> {
        let retained = self.retained(doc);
        let (first, rest) =
            retained
                .split_first()
                .ok_or_else(|| SelectError::EmptyAfterFilter {
                    cutoff: self.cutoff.clone(),
                })?;

        let mut max = first;
        let mut min = first;
        for obs in rest {
            if obs.val > max.val || (obs.val == max.val && obs.fy > max.fy) {
                max = obs;
            }
            if obs.val < min.val || (obs.val == min.val && obs.fy > min.fy) {
                min = obs;
            }
        }

        Ok(EntitySummary::new(
            doc.entity_name_or_default(),
            max.into(),
            min.into(),
        ))
    }

    /// Same as [`select`](Self::select), starting from raw JSON.
    pub fn select_value(&self, value: &Value) -> Result<EntitySummary, SelectError> {
        let doc = ConceptDocument::from_value(value);
        self.select(&doc)
    }
}

impl Default for ExtremaSelector {
    fn default() -> Self {
        Self::new()
    }
}
