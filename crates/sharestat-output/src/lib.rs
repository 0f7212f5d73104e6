#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/sharestat/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod format;
pub mod page;
pub mod view;

pub use export::{ExportError, export_snapshot, write_page};
pub use format::{PLACEHOLDER, format_value, short_entity_name};
pub use page::{Page, render, render_at};
pub use view::{SourceLink, ViewState};
