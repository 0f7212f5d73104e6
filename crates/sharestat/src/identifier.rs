//! Resolving which entity to show.

use reqwest::Url;
use sharestat_data::Cik;

/// Query parameter carrying the CIK in a page address.
pub const CIK_QUERY_PARAM: &str = "CIK";

/// The CIK in `raw` when it is ten digits (surrounding whitespace ignored),
/// otherwise the default CIK.
pub fn resolve_cik(raw: Option<&str>) -> Cik {
    raw.and_then(Cik::parse).unwrap_or_default()
}

/// Resolves the first `CIK` query parameter of a page address.
///
/// Unparsable addresses and missing or malformed parameters give the
/// default CIK.
pub fn cik_from_page_url(page_url: &str) -> Cik {
    let Ok(url) = Url::parse(page_url) else {
        return Cik::default();
    };
    let raw = url
        .query_pairs()
        .find(|(key, _)| key == CIK_QUERY_PARAM)
        .map(|(_, value)| value.into_owned());
    resolve_cik(raw.as_deref())
}
