//! Writing rendered pages and snapshot files.

use crate::page::Page;
use sharestat_data::EntitySummary;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `summary` as a pre-aggregated snapshot file.
///
/// The file has the shape `{entityName, max: {val, fy}, min: {val, fy}}` and
/// can be served as the bundled snapshot.
pub fn export_snapshot(summary: &EntitySummary, path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json + "\n")?;
    Ok(())
}

/// Write `page` as an HTML document.
pub fn write_page(page: &Page, path: &Path) -> Result<(), ExportError> {
    fs::write(path, page.to_html())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::render;
    use crate::view::ViewState;
    use sharestat_data::Extremum;
    use sharestat_data::snapshot::parse_snapshot;

    #[test]
    fn test_export_snapshot_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let summary = EntitySummary::new(
            "AUTODESK, INC.",
            Extremum::new(219_812_108.0, "2021"),
            Extremum::new(214_201_563.0, "2025"),
        );

        export_snapshot(&summary, &path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"entityName\": \"AUTODESK, INC.\""));
        assert_eq!(parse_snapshot(&json).unwrap(), summary);
    }

    #[test]
    fn test_write_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");

        write_page(&render(&ViewState::Unavailable), &path).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Data unavailable"));
    }

    #[test]
    fn test_export_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("data.json");
        let summary = EntitySummary::new("X", Extremum::new(1.0, "2021"), Extremum::new(1.0, "2021"));

        assert!(matches!(
            export_snapshot(&summary, &path),
            Err(ExportError::Io(_))
        ));
    }
}
