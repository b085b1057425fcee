// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Parsing of `ks param list` output.
//!
//! The table printed by `ks` is meant for humans; everything that depends on its
//! layout lives in [`parse_param_list`] and the constants it reads.

use crate::constants::output::{PARAM_LIST_HEADER_ROWS, PARAM_NAME_COLUMN, PARAM_VALUE_COLUMN};
use std::collections::BTreeMap;

/// Parameter name to value for one environment
pub type ParameterMap = BTreeMap<String, String>;

/// Parse the `ks param list --env <env>` table.
///
/// ```text
/// COMPONENT    PARAM         VALUE
/// =========    =====         =====
/// guestbook-ui image         "gcr.io/heptio-images/ks-guestbook-demo:0.1"
/// guestbook-ui replicas      1
/// ```
///
/// Values that are quoted literals are unquoted, anything else is kept as
/// printed. A name seen twice keeps the value from the later row.
pub fn parse_param_list(output: &str) -> Result<ParameterMap, String> {
    let mut params = ParameterMap::new();

    for row in output.lines().skip(PARAM_LIST_HEADER_ROWS) {
        if row.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = row.split_whitespace().collect();
        let (Some(name), Some(raw)) = (fields.get(PARAM_NAME_COLUMN), fields.get(PARAM_VALUE_COLUMN))
        else {
            return Err(format!("unexpected row in parameter table: {:?}", row));
        };
        let value = unquote(raw).unwrap_or_else(|| raw.to_string());
        params.insert(name.to_string(), value);
    }

    Ok(params)
}

/// Interpret a quoted string literal: `"..."` with backslash escapes, a raw
/// `` `...` `` string, or a single-rune `'.'` literal.
///
/// Returns `None` when the input is not a valid literal.
pub fn unquote(raw: &str) -> Option<String> {
    let quote = raw.chars().next().filter(|c| matches!(c, '"' | '`' | '\''))?;
    if raw.len() < 2 || !raw.ends_with(quote) {
        return None;
    }
    let body = &raw[1..raw.len() - 1];

    match quote {
        '`' => (!body.contains('`')).then(|| body.replace('\r', "")),
        '"' => unescape(body, '"'),
        '\'' => unescape(body, '\'').filter(|s| s.chars().count() == 1),
        _ => None,
    }
}

fn unescape(body: &str, quote: char) -> Option<String> {
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c == quote || c == '\n' {
            return None;
        }
        if c != '\\' {
            push_char(&mut out, c);
            continue;
        }

        match chars.next()? {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' => out.push(b'\\'),
            esc @ ('"' | '\'') if esc == quote => out.push(esc as u8),
            'x' => out.push(u8::try_from(digits(&mut chars, 2, 16)?).ok()?),
            'u' => push_char(&mut out, char::from_u32(digits(&mut chars, 4, 16)?)?),
            'U' => push_char(&mut out, char::from_u32(digits(&mut chars, 8, 16)?)?),
            first @ '0'..='7' => {
                let rest = digits(&mut chars, 2, 8)?;
                let value = first.to_digit(8)? * 64 + rest;
                out.push(u8::try_from(value).ok()?);
            }
            _ => return None,
        }
    }

    String::from_utf8(out).ok()
}

fn digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    (0..count).try_fold(0u32, |acc, _| Some(acc * radix + chars.next()?.to_digit(radix)?))
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
