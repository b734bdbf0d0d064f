//! Line-oriented parser for `.properties` text.
//!
//! Supports `#`/`!` comments, `=`/`:`/whitespace separators, backslash line
//! continuations and the usual escape sequences including `\uXXXX`.

use std::collections::BTreeMap;
use std::str::Chars;

/// A parse failure anchored to the line where the offending entry starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParseFailure {
    pub(crate) line: usize,
    pub(crate) message: String,
}

const fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{c}')
}

/// Parse `data` into key/value pairs. Later duplicates replace earlier ones.
pub(crate) fn parse_properties(data: &str) -> Result<BTreeMap<String, String>, ParseFailure> {
    let mut entries = BTreeMap::new();
    let mut lines = physical_lines(data).enumerate();
    while let Some((idx, raw)) = lines.next() {
        let trimmed = raw.trim_start_matches(is_blank);
        if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
            continue;
        }
        let mut logical = String::from(trimmed);
        while has_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }
        let (raw_key, raw_value) = split_entry(&logical);
        let at_line = |message: String| ParseFailure {
            line: idx + 1,
            message,
        };
        let key = unescape(raw_key).map_err(at_line)?;
        let value = unescape(raw_value).map_err(at_line)?;
        entries.insert(key, value);
    }
    Ok(entries)
}

/// Splits `data` on `\r\n`, a lone `\r` or `\n`.
fn physical_lines(data: &str) -> impl Iterator<Item = &str> {
    let mut rest = data;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        let (line, tail) = rest.split_at(end);
        rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.strip_prefix(['\r', '\n']))
            .unwrap_or(tail);
        Some(line)
    })
}

/// A line continues when it ends in an odd number of backslashes.
fn has_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|&ch| ch == '\\').count();
    !trailing.is_multiple_of(2)
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (pos, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
        } else if ch == '=' || ch == ':' || is_blank(ch) {
            key_end = pos;
            break;
        }
    }
    let (key, rest) = line.split_at(key_end);
    let after_blanks = rest.trim_start_matches(is_blank);
    let value = after_blanks
        .strip_prefix(['=', ':'])
        .unwrap_or(after_blanks)
        .trim_start_matches(is_blank);
    (key, value)
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => out.push(decode_unicode(&mut chars)?),
            Some(other) => out.push(other),
            // A lone trailing backslash is dropped.
            None => {}
        }
    }
    Ok(out)
}

fn read_code_unit(chars: &mut Chars<'_>) -> Result<u32, String> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("Malformed \\uxxxx encoding: \\u{hex}"));
    }
    u32::from_str_radix(&hex, 16).map_err(|e| e.to_string())
}

/// Decode the digits following `\u`, pairing UTF-16 surrogates when the high
/// half is followed by another `\u` escape.
fn decode_unicode(chars: &mut Chars<'_>) -> Result<char, String> {
    let unit = read_code_unit(chars)?;
    if let Some(ch) = char::from_u32(unit) {
        return Ok(ch);
    }
    if !(0xD800..=0xDBFF).contains(&unit) {
        return Err(format!("unpaired surrogate \\u{unit:04X}"));
    }
    if chars.next() != Some('\\') || chars.next() != Some('u') {
        return Err(format!("unpaired surrogate \\u{unit:04X}"));
    }
    let low = read_code_unit(chars)?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return Err(format!("invalid low surrogate \\u{low:04X}"));
    }
    let combined = 0x1_0000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(combined).ok_or_else(|| format!("invalid code point {combined:#X}"))
}
