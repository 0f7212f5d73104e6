//! Display formatting for page fields.

use sharestat_data::Extremum;

/// Shown in place of any value that is missing.
pub const PLACEHOLDER: &str = "—";

/// Names at least this long (in UTF-16 units) keep their legal suffix.
const SUFFIX_STRIP_MAX_LEN: usize = 55;

const LEGAL_SUFFIXES: [&str; 5] = ["Inc.", "LLC", "Ltd.", "Corp.", "Corporation"];

/// Shortens an entity name for display.
///
/// Mixed-case names that already carry a ticker such as `(ADSK)` are kept
/// as-is. Otherwise names shorter than 55 characters lose one trailing legal
/// suffix (`Inc.`, `LLC`, `Ltd.`, `Corp.`, `Corporation`), together with the
/// comma before it. Suffix matching is case-sensitive.
pub fn short_entity_name(name: &str) -> String {
    let has_lowercase = name.bytes().any(|b| b.is_ascii_lowercase());
    if has_lowercase && has_ticker(name) {
        return name.to_string();
    }
    if name.encode_utf16().count() >= SUFFIX_STRIP_MAX_LEN {
        return name.to_string();
    }
    strip_legal_suffix(name).to_string()
}

fn has_ticker(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.iter().enumerate().any(|(open, &b)| {
        if b != b'(' {
            return false;
        }
        let letters = bytes[open + 1..]
            .iter()
            .take_while(|b| b.is_ascii_uppercase())
            .count();
        (1..=5).contains(&letters) && bytes.get(open + 1 + letters) == Some(&b')')
    })
}

fn strip_legal_suffix(name: &str) -> &str {
    for suffix in LEGAL_SUFFIXES {
        if let Some(stem) = name
            .strip_suffix(suffix)
            .and_then(|rest| rest.strip_suffix(' '))
        {
            return stem.strip_suffix(',').unwrap_or(stem);
        }
    }
    name
}

/// Formats a number with en-US digit grouping and at most three fraction
/// digits, e.g. `219436089` as `219,436,089` and `1234.5678` as `1,234.568`.
pub fn format_value(val: f64) -> String {
    let fixed = format!("{:.3}", val.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if val.is_sign_negative() {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Value field of an extremum; the placeholder when absent or zero.
pub fn value_field(extremum: Option<&Extremum>) -> String {
    extremum
        .map(|e| e.val)
        .filter(|val| *val != 0.0 && !val.is_nan())
        .map_or_else(|| PLACEHOLDER.to_string(), format_value)
}

/// Fiscal year field of an extremum; the placeholder when absent, empty or
/// zero.
pub fn year_field(extremum: Option<&Extremum>) -> String {
    extremum
        .map(|e| e.fy.as_str())
        .filter(|fy| !fy.is_empty() && *fy != "0")
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

/// Escapes text for use in HTML content and quoted attributes.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
