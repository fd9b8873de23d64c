//! Query-string access: percent-decoding and integer parameters.
//!
//! Parsing never fails outright.  Each lookup yields a [`ParamValue`] that
//! keeps "absent", "present but malformed" and "parsed" apart, so the
//! caller decides which of those is an error.

use std::borrow::Cow;

/// Outcome of reading one integer parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValue {
    /// Integer value, saturated to the `i32` range.
    Parsed(i32),
    Missing,
    Invalid,
}

/// Split a request URI into path and (possibly empty) query string.
pub fn split_uri(uri: &str) -> (&str, &str) {
    match uri.split_once('?') {
        Some((path, query)) => (path, query),
        None => (uri, ""),
    }
}

/// Decode `%XX` escapes and `+` as space.  Malformed escapes are kept
/// literally.
pub fn percent_decode(input: &str) -> Cow<'_, str> {
    if !input.contains(['%', '+']) {
        return Cow::Borrowed(input);
    }
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    Cow::Owned(String::from_utf8_lossy(&out).into_owned())
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decoded value of the first `name=value` pair, if any.
///
/// A bare `name` with no `=` counts as present with an empty value.
pub fn find<'a>(query: &'a str, name: &str) -> Option<Cow<'a, str>> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key) == name).then(|| percent_decode(value))
        })
}

/// Read an integer parameter.
///
/// Strict mode accepts surrounding whitespace, an optional sign and at least
/// one digit, nothing else.  Lenient mode behaves like a C `atoi`: the
/// longest integer prefix wins and no digits at all means `0`.  Values
/// beyond `i32` saturate in both modes.
pub fn int_param(query: &str, name: &str, lenient: bool) -> ParamValue {
    let Some(raw) = find(query, name) else {
        return ParamValue::Missing;
    };
    match parse_int_prefix(raw.trim()) {
        Some((value, rest)) if rest.is_empty() || lenient => ParamValue::Parsed(value),
        None if lenient => ParamValue::Parsed(0),
        _ => ParamValue::Invalid,
    }
}

/// Parse a leading signed integer, saturating on overflow.  Returns the
/// value and the unparsed remainder, or `None` when there are no digits.
fn parse_int_prefix(s: &str) -> Option<(i32, &str)> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let mut acc: i64 = 0;
    for b in digits[..len].bytes() {
        acc = (acc * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    let signed = if negative { -acc } else { acc };
    let value = signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    Some((value, &digits[len..]))
}
