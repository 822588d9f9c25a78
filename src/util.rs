//! Small helpers shared across modules.

use std::borrow::Cow;

/// Decode HTML bytes to text.
///
/// UTF-8 first (a BOM is honored), then the charset the document declares,
/// then Windows-1252.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    if let Some((encoding, bom_len)) = encoding_rs::Encoding::for_bom(bytes) {
        let (result, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return result;
    }

    let (result, malformed) = encoding_rs::UTF_8.decode_without_bom_handling(bytes);
    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _) = encoding.decode_without_bom_handling(bytes);
        return result;
    }

    let (result, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
    result
}

/// Find a `charset=` declaration in the first kilobyte of a document.
pub fn sniff_meta_charset(bytes: &[u8]) -> Option<&str> {
    let head = &bytes[..bytes.len().min(1024)];
    let needle = b"charset=";
    let start = head
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))?
        + needle.len();

    let rest = &head[start..];
    let rest = rest
        .strip_prefix(b"\"")
        .or_else(|| rest.strip_prefix(b"'"))
        .unwrap_or(rest);
    let end = rest
        .iter()
        .position(|b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace())
        .unwrap_or(rest.len());

    std::str::from_utf8(&rest[..end]).ok().filter(|s| !s.is_empty())
}

/// Convert an attribute value to a number the way JavaScript's `Number()`
/// does: surrounding whitespace is ignored, an empty string is zero,
/// `0x`/`0o`/`0b` prefixes select a radix, and anything unparsable is NaN.
pub fn js_number(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(prefix_end) = trimmed.get(..2)
            && prefix_end.eq_ignore_ascii_case(prefix)
        {
            return parse_radix(&trimmed[2..], radix);
        }
    }

    // Rust also accepts "inf", "infinity" and "nan" in any case; JavaScript
    // only knows "Infinity".
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned integer digits in `radix`; no sign, no fraction.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}
