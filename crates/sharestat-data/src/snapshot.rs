//! Bundled snapshot file.

use crate::error::Result;
use crate::model::EntitySummary;
use std::path::Path;
use tracing::debug;

/// Where the snapshot is looked up when no path is configured.
pub const DEFAULT_SNAPSHOT_PATH: &str = "data.json";

/// Parse snapshot JSON.
pub fn parse_snapshot(json: &str) -> Result<EntitySummary> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse the snapshot file at `path`.
pub async fn read_snapshot(path: &Path) -> Result<EntitySummary> {
    debug!(path = %path.display(), "reading snapshot");
    let json = tokio::fs::read_to_string(path).await?;
    parse_snapshot(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use crate::model::Extremum;
    use rstest::rstest;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"entityName":"AUTODESK, INC.","max":{{"val":229000000,"fy":"2021"}},"min":{{"val":213000000,"fy":"2024"}}}}"#
        )
        .unwrap();

        let summary = read_snapshot(file.path()).await.unwrap();
        assert_eq!(summary.entity_name, "AUTODESK, INC.");
        assert_eq!(summary.max, Some(Extremum::new(229_000_000.0, "2021")));
        assert_eq!(summary.min, Some(Extremum::new(213_000_000.0, "2024")));
    }

    #[tokio::test]
    async fn test_read_snapshot_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_snapshot(&dir.path().join("data.json")).await;
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[rstest]
    #[case::missing_name(r#"{"max":{"val":1,"fy":"2021"},"min":{"val":1,"fy":"2021"}}"#)]
    #[case::null_name(r#"{"entityName":null,"max":{"val":1,"fy":"2021"},"min":{"val":1,"fy":"2021"}}"#)]
    fn test_parse_snapshot_without_name_fails(#[case] json: &str) {
        assert!(matches!(
            parse_snapshot(json),
            Err(DataError::Serialization(_))
        ));
    }

    #[test]
    fn test_parse_snapshot_empty_name_is_kept() {
        let summary = parse_snapshot(
            r#"{"entityName":"","max":{"val":1,"fy":"2021"},"min":{"val":1,"fy":"2021"}}"#,
        )
        .unwrap();
        assert_eq!(summary.entity_name, "");
    }

    #[test]
    fn test_parse_snapshot_malformed() {
        assert!(matches!(
            parse_snapshot(""),
            Err(DataError::Serialization(_))
        ));
        assert!(matches!(
            parse_snapshot("{\"max\": 12}"),
            Err(DataError::Serialization(_))
        ));
    }
}
