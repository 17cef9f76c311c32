//! Numeric literal parsing.
//!
//! Accepted notations: `0x1F`/`0X1F`, `0b101`/`0B101`, `1Fh`/`1FH` and plain
//! decimal. Commas are stripped first so `0x0C,` reads as `0x0C`. Scanning is
//! lenient: trailing characters that are not digits of the chosen base are
//! ignored, and a literal without a single leading digit is "not a number".

use crate::error::AsmError;

/// Result of scanning a literal in its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    pub value: i64,
    /// Every character after the prefix/suffix was a digit of the base.
    pub complete: bool,
}

/// Trims and removes every comma.
pub fn clean(token: &str) -> String {
    token.trim().replace(',', "")
}

/// Parses a literal. `None` is the not-a-number sentinel; masking sites treat
/// it as zero through [`masked`].
pub fn parse_number(token: &str) -> Option<i64> {
    scan_token(token).map(|s| s.value)
}

/// Like [`parse_number`] but rejects literals with illegal digits.
pub fn parse_number_exact(token: &str) -> Result<i64, AsmError> {
    match scan_token(token) {
        Some(Scan { value, complete: true }) => Ok(value),
        _ => Err(AsmError::InvalidLiteral(clean(token))),
    }
}

pub fn scan_token(token: &str) -> Option<Scan> {
    let t = clean(token);
    if t.is_empty() {
        return Some(Scan { value: 0, complete: true });
    }
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        scan(hex, 16)
    } else if let Some(bin) = t.strip_prefix("0b").or_else(|| t.strip_prefix("0B")) {
        scan(bin, 2)
    } else if let Some(hex) = t.strip_suffix('h').or_else(|| t.strip_suffix('H')) {
        scan(hex, 16)
    } else {
        scan(&t, 10)
    }
}

/// Scans an optionally signed run of digits in `radix`. Base 16 also accepts a
/// second `0x` prefix after the sign. Overflow wraps.
pub fn scan(text: &str, radix: u32) -> Option<Scan> {
    let (neg, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let body = if radix == 16 {
        body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")).unwrap_or(body)
    } else {
        body
    };

    let mut value: i64 = 0;
    let mut digits = 0usize;
    for c in body.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        value = value.wrapping_mul(radix as i64).wrapping_add(d as i64);
        digits += 1;
    }
    if digits == 0 {
        return None;
    }
    Some(Scan {
        value: if neg { value.wrapping_neg() } else { value },
        complete: digits == body.chars().count(),
    })
}

/// `value & mask`, with not-a-number masking to zero.
pub fn masked(value: Option<i64>, mask: u16) -> u16 {
    value.map_or(0, |v| (v & mask as i64) as u16)
}
