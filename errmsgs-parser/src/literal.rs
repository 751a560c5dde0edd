//! Decoding of C literal tokens into values.

use errmsgs_errors::{HeaderError, SourceSpan};
use std::borrow::Cow;

/// Decode a C string literal (quotes included) that starts at byte `offset` of the source,
/// appending the bytes it denotes to `out`.
pub fn decode_c_string<'src>(
    lit: &'src str,
    offset: usize,
    out: &mut Vec<u8>,
) -> Result<(), HeaderError<'src>> {
    let inner = &lit[1..lit.len() - 1];
    let base = offset + 1;
    let mut chars = inner.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            let mut buf = [0; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        let invalid = |end: usize| HeaderError::InvalidEscape {
            esc: Cow::Borrowed(&inner[i..end]),
            loc: SourceSpan::from((base + i, end - i)),
        };
        let Some((j, e)) = chars.next() else {
            return Err(invalid(inner.len()));
        };
        let byte = match e {
            'n' => b'\n',
            't' => b'\t',
            'r' => b'\r',
            '\\' => b'\\',
            '"' => b'"',
            '\'' => b'\'',
            '?' => b'?',
            'a' => 0x07,
            'b' => 0x08,
            'f' => 0x0c,
            'v' => 0x0b,
            // line continuation
            '\n' => continue,
            '\r' => {
                chars.next_if(|&(_, c)| c == '\n');
                continue;
            }
            '0'..='7' => {
                let mut value = e as u32 - '0' as u32;
                for _ in 0..2 {
                    let Some((_, d)) = chars.next_if(|&(_, c)| matches!(c, '0'..='7')) else {
                        break;
                    };
                    value = value * 8 + (d as u32 - '0' as u32);
                }
                let end = chars.peek().map_or(inner.len(), |&(k, _)| k);
                u8::try_from(value).map_err(|_| invalid(end))?
            }
            'x' => {
                let mut value = 0u32;
                let mut digits = 0;
                while let Some((_, d)) = chars.next_if(|&(_, c)| c.is_ascii_hexdigit()) {
                    value = value.saturating_mul(16).saturating_add(d.to_digit(16).unwrap_or(0));
                    digits += 1;
                }
                let end = chars.peek().map_or(inner.len(), |&(k, _)| k);
                if digits == 0 {
                    return Err(invalid(end));
                }
                u8::try_from(value).map_err(|_| invalid(end))?
            }
            _ => return Err(invalid(j + e.len_utf8())),
        };
        out.push(byte);
    }
    Ok(())
}

/// Parse a C integer literal: decimal, `0x` hex or leading-zero octal, with any `u`/`l`
/// suffixes. `negative` applies a preceding unary minus.
pub fn parse_c_int<'src>(
    lit: &'src str,
    negative: bool,
    loc: SourceSpan,
) -> Result<i64, HeaderError<'src>> {
    let digits = lit.trim_end_matches(|c: char| matches!(c, 'u' | 'U' | 'l' | 'L'));
    let (radix, digits) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(HeaderError::ExpectedFound {
            ex: "integer literal",
            found: Some(lit.into()),
            loc,
        });
    }
    let out_of_range = || HeaderError::CodeOutOfRange {
        lit: if negative {
            format!("-{lit}").into()
        } else {
            lit.into()
        },
        loc,
    };
    let magnitude = i128::from_str_radix(digits, radix).map_err(|_| out_of_range())?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| out_of_range())
}
