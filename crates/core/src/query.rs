//! Query-string decoding and tolerant integer parsing.
//!
//! Pagination parameters arrive as raw wire strings. Parsing is deliberately
//! lenient: a value like `"12abc"` yields `12`, and anything without a
//! leading digit run yields `None` so the caller can fall back to its
//! default. Strict full-string validation would reject inputs the API has
//! always accepted.

use std::borrow::Cow;

use url::form_urlencoded;

/// Decode a raw query string (`limit=20&offset=40`) into key/value pairs.
///
/// Percent-decoding and `+`-as-space handling follow standard
/// form-url-encoding rules.
pub fn decode(raw_query: &str) -> impl Iterator<Item = (Cow<'_, str>, Cow<'_, str>)> {
    form_urlencoded::parse(raw_query.as_bytes())
}

/// Parse the leading base-10 integer prefix of a string.
///
/// Mirrors `parseInt(value, 10)` semantics: leading whitespace is skipped,
/// an optional `+`/`-` sign is honored, digits are consumed until the first
/// non-digit, and trailing garbage is ignored. Returns `None` when no digit
/// follows the optional sign.
///
/// Digit runs that exceed `i64` saturate at `i64::MAX` / `i64::MIN`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let d = i64::from(b - b'0');
        // Accumulate away from zero so i64::MIN is reachable for "-92233...".
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    if seen_digit {
        Some(value)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
