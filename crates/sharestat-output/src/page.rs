//! Page model and HTML rendering.
//!
//! A [`ViewState`] is turned into a [`Page`] by [`render`], which fills the
//! same fixed elements every time:
//!
//! | element id          | content                               |
//! |---------------------|---------------------------------------|
//! | `share-entity-name` | shortened entity name                 |
//! | `share-max-value`   | largest value, digit-grouped          |
//! | `share-max-fy`      | fiscal year of the largest value      |
//! | `share-min-value`   | smallest value, digit-grouped         |
//! | `share-min-fy`      | fiscal year of the smallest value     |
//! | `data-source`       | source link, empty when unavailable   |

use crate::format::{PLACEHOLDER, escape_html, short_entity_name, value_field, year_field};
use crate::view::{SourceLink, ViewState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Element ids of the page.
pub mod ids {
    /// Loading indicator
    pub const LOADER: &str = "loader";
    /// Container of the statistics
    pub const STATS_AREA: &str = "stats-area";
    /// Entity name
    pub const ENTITY_NAME: &str = "share-entity-name";
    /// Largest value
    pub const MAX_VALUE: &str = "share-max-value";
    /// Fiscal year of the largest value
    pub const MAX_FY: &str = "share-max-fy";
    /// Smallest value
    pub const MIN_VALUE: &str = "share-min-value";
    /// Fiscal year of the smallest value
    pub const MIN_FY: &str = "share-min-fy";
    /// Source link area
    pub const DATA_SOURCE: &str = "data-source";
}

/// Title used when no entity is shown.
pub const BASE_TITLE: &str = "Shares Outstanding Stats";

/// Entity name shown when every source failed.
pub const UNAVAILABLE_NAME: &str = "Data unavailable";

/// The rendered text of every page element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Document title
    pub title: String,

    /// Entity name
    pub entity_name: String,

    /// Largest value
    pub max_value: String,

    /// Fiscal year of the largest value
    pub max_fy: String,

    /// Smallest value
    pub min_value: String,

    /// Fiscal year of the smallest value
    pub min_fy: String,

    /// Source link; `None` leaves the source area empty
    pub source: Option<SourceLink>,

    /// When the page was rendered
    pub generated_at: DateTime<Utc>,
}

/// Render a view state, stamped with the current time.
pub fn render(state: &ViewState) -> Page {
    render_at(state, Utc::now())
}

/// Render a view state with an explicit timestamp.
pub fn render_at(state: &ViewState, generated_at: DateTime<Utc>) -> Page {
    match state {
        ViewState::Rendered { summary, source } => {
            let name = short_entity_name(&summary.entity_name);
            Page {
                title: format!("{name} — {BASE_TITLE}"),
                max_value: value_field(summary.max.as_ref()),
                max_fy: year_field(summary.max.as_ref()),
                min_value: value_field(summary.min.as_ref()),
                min_fy: year_field(summary.min.as_ref()),
                entity_name: name,
                source: Some(source.clone()),
                generated_at,
            }
        }
        ViewState::Unavailable => {
            let placeholder = PLACEHOLDER.to_string();
            Page {
                title: BASE_TITLE.to_string(),
                entity_name: UNAVAILABLE_NAME.to_string(),
                max_value: placeholder.clone(),
                max_fy: placeholder.clone(),
                min_value: placeholder.clone(),
                min_fy: placeholder,
                source: None,
                generated_at,
            }
        }
    }
}

impl Page {
    /// Inner HTML of the source area.
    pub fn source_html(&self) -> String {
        self.source.as_ref().map_or_else(String::new, |link| {
            format!(
                r#"<a href="{}" target="_blank">{}</a>"#,
                escape_html(&link.href),
                escape_html(&link.label)
            )
        })
    }

    /// Standalone HTML document.
    ///
    /// The loader is emitted hidden since a page is only rendered once
    /// loading has finished.
    pub fn to_html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 40rem; margin: 3rem auto; padding: 0 1rem; color: #222; }}
    .stat {{ display: flex; justify-content: space-between; padding: .5rem 0; border-bottom: 1px solid #eee; }}
    .value {{ font-variant-numeric: tabular-nums; font-weight: 600; }}
    footer {{ margin-top: 2rem; font-size: .8rem; color: #777; }}
  </style>
</head>
<body>
  <div id="{loader}" style="display:none"></div>
  <main id="{stats_area}" style="opacity:1">
    <h1 id="{entity_id}">{entity_name}</h1>
    <p>Common shares outstanding by fiscal year.</p>
    <div class="stat"><span>Maximum</span><span><span class="value" id="{max_value_id}">{max_value}</span> (FY <span id="{max_fy_id}">{max_fy}</span>)</span></div>
    <div class="stat"><span>Minimum</span><span><span class="value" id="{min_value_id}">{min_value}</span> (FY <span id="{min_fy_id}">{min_fy}</span>)</span></div>
    <p id="{source_id}">{source}</p>
  </main>
  <footer>Generated {generated}</footer>
</body>
</html>
"#,
            title = escape_html(&self.title),
            loader = ids::LOADER,
            stats_area = ids::STATS_AREA,
            entity_id = ids::ENTITY_NAME,
            entity_name = escape_html(&self.entity_name),
            max_value_id = ids::MAX_VALUE,
            max_value = escape_html(&self.max_value),
            max_fy_id = ids::MAX_FY,
            max_fy = escape_html(&self.max_fy),
            min_value_id = ids::MIN_VALUE,
            min_value = escape_html(&self.min_value),
            min_fy_id = ids::MIN_FY,
            min_fy = escape_html(&self.min_fy),
            source_id = ids::DATA_SOURCE,
            source = self.source_html(),
            generated = self.generated_at.to_rfc3339(),
        )
    }
}
