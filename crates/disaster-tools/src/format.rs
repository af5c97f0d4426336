//! Small text helpers shared by the tools.

use chrono::{DateTime, Utc};

/// Capitalize the first letter of each word, lowercasing the rest.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// First `max_chars` characters of `input`, never splitting a code point.
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

/// Render a magnitude threshold the way the USGS feed names expect
/// (`4.5`, `2.5`, `1.0`).
pub fn magnitude_label(magnitude: f64) -> String {
    if magnitude.fract() == 0.0 {
        format!("{:.1}", magnitude)
    } else {
        magnitude.to_string()
    }
}

/// Epoch milliseconds as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn utc_from_millis(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Current time as RFC 3339, stamped on every remote-data result.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hurricane"), "Hurricane");
        assert_eq!(title_case("EARTHQUAKE"), "Earthquake");
        assert_eq!(title_case("new orleans"), "New Orleans");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("ñandú", 2), "ña");
    }

    #[test]
    fn test_magnitude_label() {
        assert_eq!(magnitude_label(4.5), "4.5");
        assert_eq!(magnitude_label(1.0), "1.0");
        assert_eq!(magnitude_label(2.5), "2.5");
    }

    #[test]
    fn test_utc_from_millis() {
        assert_eq!(
            utc_from_millis(1_700_000_000_000).as_deref(),
            Some("2023-11-14 22:13:20 UTC")
        );
    }
}
