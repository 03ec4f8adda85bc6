//! Escape decoding for quoted string literals.
//!
//! The lexer hands quoted tokens through verbatim; their interior escapes
//! are decoded once, when the token becomes a [`Segment`](crate::Segment).
//! Recognized forms are `\n`, `\r`, `\t`, `\xHH` (Latin-1 byte), `\u+HHHH`
//! and `\u-HHHHHH` (Unicode code points), and `\C` for any other `C`,
//! which simply drops the backslash.

const REPLACEMENT: char = '\u{fffd}';

/// Decode backslash escapes in the interior of a quoted literal.
///
/// Malformed escapes never fail the scan: bad `\x` hex keeps the `x`
/// literally and bad `\u` hex degrades to U+FFFD.
pub fn decode_escapes(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;

    while i < bytes.len() {
        // Copy the run up to the next backslash verbatim.
        match raw[i..].find('\\') {
            None => {
                out.push_str(&raw[i..]);
                break;
            }
            Some(0) => i += 1,
            Some(n) => {
                out.push_str(&raw[i..i + n]);
                i += n + 1;
            }
        }
        if i >= bytes.len() {
            // A lone trailing backslash is dropped.
            break;
        }

        match bytes[i] {
            b'n' => {
                out.push('\n');
                i += 1;
            }
            b'r' => {
                out.push('\r');
                i += 1;
            }
            b't' => {
                out.push('\t');
                i += 1;
            }
            b'x' => {
                i += 1;
                let hi = bytes.get(i).copied().and_then(hex_digit);
                let lo = bytes.get(i + 1).copied().and_then(hex_digit);
                if let (Some(hi), Some(lo)) = (hi, lo) {
                    // Values above 0x7F are Latin-1 and become two UTF-8
                    // bytes.
                    out.push(char::from((hi << 4) | lo));
                    i += 2;
                } else {
                    // Bad hex keeps the `x`; the two characters after it
                    // are still consumed whole, keeping the scan on UTF-8
                    // boundaries.
                    out.push('x');
                    for _ in 0..2 {
                        if let Some(c) = raw[i..].chars().next() {
                            i += c.len_utf8();
                        }
                    }
                }
            }
            b'u' => {
                i += 1;
                let width = match bytes.get(i) {
                    Some(b'+') if bytes.len() - i >= 4 => Some(4),
                    Some(b'-') if bytes.len() - i >= 6 => Some(6),
                    _ => None,
                };
                if let Some(width) = width {
                    i += 1;
                    let mut code_point = Some(0u32);
                    for _ in 0..width {
                        let Some(c) = raw[i..].chars().next() else {
                            code_point = None;
                            break;
                        };
                        i += c.len_utf8();
                        code_point = match (code_point, c.to_digit(16)) {
                            (Some(acc), Some(digit)) => Some(acc * 16 + digit),
                            _ => None,
                        };
                    }
                    out.push(code_point.and_then(char::from_u32).unwrap_or(REPLACEMENT));
                } else {
                    // `u` without a `+`/`-` introducer (or with too little
                    // input left) is kept, and the would-be introducer is
                    // consumed.
                    out.push('u');
                    if let Some(c) = raw[i..].chars().next() {
                        i += c.len_utf8();
                    }
                }
            }
            _ => {
                // Any other escaped character is kept, backslash dropped.
                if let Some(c) = raw[i..].chars().next() {
                    out.push(c);
                    i += c.len_utf8();
                }
            }
        }
    }

    out
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
