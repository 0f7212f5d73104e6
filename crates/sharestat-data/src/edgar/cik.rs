//! Central Index Key.

use derive_more::Display;

/// CIK of the entity whose data ships in the bundled snapshot.
pub const DEFAULT_CIK: &str = "0000769397";

/// A zero-padded, 10-digit SEC Central Index Key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Cik(String);

impl Cik {
    /// Parse a CIK, accepting exactly ten ASCII digits after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (trimmed.len() == 10 && trimmed.bytes().all(|b| b.is_ascii_digit()))
            .then(|| Self(trimmed.to_string()))
    }

    /// The default CIK.
    pub fn default_entity() -> Self {
        Self(DEFAULT_CIK.to_string())
    }

    /// Whether this is the default CIK.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_CIK
    }

    /// The CIK as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Cik {
    fn default() -> Self {
        Self::default_entity()
    }
}

impl AsRef<str> for Cik {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0000320193", Some("0000320193"))]
    #[case("  0000320193\n", Some("0000320193"))]
    #[case("320193", None)]
    #[case("00003201930", None)]
    #[case("000032019a", None)]
    #[case("", None)]
    #[case("０００００００００１", None)]
    fn test_parse(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(Cik::parse(raw).as_ref().map(Cik::as_str), expected);
    }

    #[test]
    fn test_default() {
        let cik = Cik::default();
        assert!(cik.is_default());
        assert_eq!(cik.to_string(), DEFAULT_CIK);
        assert!(!Cik::parse("0000320193").unwrap().is_default());
    }
}
