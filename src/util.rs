//! Byte-to-text decoding for HTML input.

use std::borrow::Cow;

/// Decode bytes to a string, trying UTF-8 first.
///
/// Falls back to the hinted encoding, then to Windows-1252 (a superset of
/// ISO-8859-1 that accepts any byte sequence).
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    // UTF-8 decoding strips a BOM
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Find a declared character encoding in the first 1024 bytes.
///
/// Recognizes `<meta charset="...">`, the `charset=` parameter of an
/// `http-equiv` content type, and an XML declaration's `encoding="..."`.
pub fn extract_charset(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(1024)];

    for needle in [&b"charset="[..], &b"encoding="[..]] {
        let Some(pos) = prefix
            .windows(needle.len())
            .position(|w| w.eq_ignore_ascii_case(needle))
        else {
            continue;
        };

        let rest = &prefix[pos + needle.len()..];
        let (rest, quote) = match rest.first() {
            Some(&q) if q == b'"' || q == b'\'' => (&rest[1..], Some(q)),
            Some(_) => (rest, None),
            None => continue,
        };

        let end = rest
            .iter()
            .position(|&b| match quote {
                Some(q) => b == q,
                None => b == b'"' || b == b'\'' || b == b';' || b == b'>' || b.is_ascii_whitespace(),
            })
            .unwrap_or(rest.len());

        if end > 0
            && let Ok(label) = std::str::from_utf8(&rest[..end])
        {
            return Some(label);
        }
    }
    None
}
