/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::angle::Angle;
use crate::err::ColorError;
use crate::rgb::Srgb;

/// One lexical element of a color expression.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Name(String),
    Angle(Angle),
    Percentage(f64),
    Integer(i64),
    Float(f64),
    Ncol(Angle),
    Hex(Srgb),
    Empty,
    CallStart,
    CallEnd,
}

impl TokenKind {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            TokenKind::Name(_) => "name",
            TokenKind::Angle(_) => "angle",
            TokenKind::Percentage(_) => "percentage",
            TokenKind::Integer(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::Ncol(_) => "natural color",
            TokenKind::Hex(_) => "hex color",
            TokenKind::Empty => "empty argument",
            TokenKind::CallStart => "opening parenthesis",
            TokenKind::CallEnd => "closing parenthesis",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) column: usize,
    pub(crate) rawtext: String,
}

/// How a token was terminated.
enum Sep {
    /// A comma, a slash, a lone whitespace run or the end of the input.
    Plain,
    Open,
    Close,
}

/// Separator search after a candidate token ending at `q`: skip whitespace,
/// then accept `,`, `/`, a parenthesis or end-of-input. A whitespace run with
/// nothing else after it separates on its own.
///
/// Returns the separator, its column, and the position right after the
/// separator and its trailing whitespace.
fn find_sep(chars: &[char], q: usize) -> Option<(Sep, usize, usize)> {
    let mut r = q;
    while r < chars.len() && chars[r].is_whitespace() {
        r += 1;
    }
    if r == chars.len() {
        return Some((Sep::Plain, r, r));
    }
    let consume_trailing = |mut e: usize| {
        while e < chars.len() && chars[e].is_whitespace() {
            e += 1;
        }
        e
    };
    match chars[r] {
        ',' | '/' => Some((Sep::Plain, r, consume_trailing(r + 1))),
        '(' => Some((Sep::Open, r, consume_trailing(r + 1))),
        ')' => Some((Sep::Close, r, consume_trailing(r + 1))),
        _ if r > q => Some((Sep::Plain, r - 1, r)),
        _ => None,
    }
}

/// Scans digits with at most one dot, at least one digit overall. `"30"`,
/// `"30."` and `".5"` all qualify, a lone `"."` does not.
fn scan_decimal(chars: &[char], start: usize) -> Option<usize> {
    let mut q = start;
    while q < chars.len() && chars[q].is_ascii_digit() {
        q += 1;
    }
    let int_digits = q - start;
    if q < chars.len() && chars[q] == '.' {
        let mut f = q + 1;
        while f < chars.len() && chars[f].is_ascii_digit() {
            f += 1;
        }
        if int_digits > 0 || f > q + 1 {
            q = f;
        }
    }
    if q == start { None } else { Some(q) }
}

fn scan_sign(chars: &[char], p: usize) -> usize {
    if p < chars.len() && (chars[p] == '+' || chars[p] == '-') {
        p + 1
    } else {
        p
    }
}

fn has_dot(chars: &[char], start: usize, end: usize) -> bool {
    chars[start..end].contains(&'.')
}

fn starts_with_ci(chars: &[char], p: usize, word: &str) -> bool {
    let mut q = p;
    for w in word.chars() {
        if q >= chars.len() || chars[q].to_ascii_lowercase() != w {
            return false;
        }
        q += 1;
    }
    true
}

fn match_unit(chars: &[char], p: usize) -> Option<(usize, fn(f64) -> Angle)> {
    const UNITS: [(&str, fn(f64) -> Angle); 5] = [
        ("turns", Angle::Turns),
        ("turn", Angle::Turns),
        ("grad", Angle::Gradians),
        ("deg", Angle::Degrees),
        ("rad", Angle::Radians),
    ];
    UNITS
        .into_iter()
        .find(|(word, _)| starts_with_ci(chars, p, word))
        .map(|(word, make)| (p + word.len(), make))
}

fn parse_f64(chars: &[char], start: usize, end: usize) -> Option<f64> {
    chars[start..end].iter().collect::<String>().parse().ok()
}

/// `[+-]? number \s* (deg|grad|rad|turns?)`, unit case-insensitive.
fn try_angle(chars: &[char], p: usize) -> Option<(usize, Angle)> {
    let num_start = scan_sign(chars, p);
    let num_end = scan_decimal(chars, num_start)?;
    let mut u = num_end;
    while u < chars.len() && chars[u].is_whitespace() {
        u += 1;
    }
    let (q, make) = match_unit(chars, u)?;
    Some((q, make(parse_f64(chars, p, num_end)?)))
}

/// `[+-]? number \s* %`; the stored value is the fraction, not the percent.
fn try_percentage(chars: &[char], p: usize) -> Option<(usize, f64)> {
    let num_start = scan_sign(chars, p);
    let num_end = scan_decimal(chars, num_start)?;
    let mut u = num_end;
    while u < chars.len() && chars[u].is_whitespace() {
        u += 1;
    }
    if u < chars.len() && chars[u] == '%' {
        Some((u + 1, parse_f64(chars, p, num_end)? / 100.0))
    } else {
        None
    }
}

fn try_integer(chars: &[char], p: usize) -> Option<(usize, i64)> {
    let num_start = scan_sign(chars, p);
    let mut q = num_start;
    while q < chars.len() && chars[q].is_ascii_digit() {
        q += 1;
    }
    if q == num_start {
        return None;
    }
    let value = chars[p..q].iter().collect::<String>().parse().ok()?;
    Some((q, value))
}

fn try_float(chars: &[char], p: usize) -> Option<(usize, f64)> {
    let num_start = scan_sign(chars, p);
    let num_end = scan_decimal(chars, num_start)?;
    if !has_dot(chars, num_start, num_end) {
        return None;
    }
    Some((num_end, parse_f64(chars, p, num_end)?))
}

/// A hue letter followed by up to two digits and an optional fraction.
/// The numeric part is `None` when absent or unparsable, in which case the
/// caller degrades the shorthand to a plain name.
fn try_ncol(chars: &[char], p: usize) -> Option<(usize, char, Option<f64>)> {
    let letter = chars.get(p)?.to_ascii_uppercase();
    if !"RYGCBM".contains(letter) {
        return None;
    }
    let mut q = p + 1;
    let digits_start = q;
    while q < chars.len() && q - digits_start < 2 && chars[q].is_ascii_digit() {
        q += 1;
    }
    if q < chars.len() && chars[q] == '.' {
        q += 1;
        while q < chars.len() && chars[q].is_ascii_digit() {
            q += 1;
        }
    }
    let number = if q == digits_start {
        None
    } else {
        parse_f64(chars, digits_start, q)
    };
    Some((q, letter, number))
}

/// `#` plus exactly 3, 4, 6 or 8 hex digits.
fn try_hex(chars: &[char], p: usize) -> Option<(usize, usize)> {
    if chars.get(p) != Some(&'#') {
        return None;
    }
    let mut q = p + 1;
    while q < chars.len() && chars[q].is_ascii_hexdigit() {
        q += 1;
    }
    let run = q - (p + 1);
    if matches!(run, 3 | 4 | 6 | 8) {
        Some((q, run))
    } else {
        None
    }
}

fn try_name(chars: &[char], p: usize) -> Option<usize> {
    let mut q = p;
    while q < chars.len()
        && (chars[q].is_ascii_alphanumeric() || chars[q] == '_' || chars[q] == '-')
    {
        q += 1;
    }
    if q > p { Some(q) } else { None }
}

fn hex_byte(chars: &[char], p: usize) -> u8 {
    let hi = chars[p].to_digit(16).unwrap_or(0) as u8;
    let lo = chars[p + 1].to_digit(16).unwrap_or(0) as u8;
    hi << 4 | lo
}

/// Splits a color expression into tokens.
///
/// Every token must be terminated by a separator: a comma, a slash, a
/// whitespace run, a parenthesis or the end of the input. Alternatives are
/// tried in a fixed order (angle, percentage, integer, float, natural color,
/// hex, name), moving on to the next one when the separator check fails, so
/// `30deg` is an angle while `30d` is a name. Two consecutive separators
/// produce an empty-argument token, except right after a closing parenthesis
/// where `f(a, b) / c` would otherwise grow a spurious argument.
pub(crate) fn tokenize(expr: &str, extended_hex: bool) -> Result<Vec<Token>, ColorError> {
    let chars: Vec<char> = expr.chars().collect();
    let text = |a: usize, b: usize| chars[a..b].iter().collect::<String>();

    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut was_call_end = false;

    while start < chars.len() {
        let mut p = start;
        while p < chars.len() && chars[p].is_whitespace() {
            p += 1;
        }

        let mut arg: Option<(TokenKind, String)> = None;
        let mut sep: Option<(Sep, usize, usize)> = None;

        if let Some((q, angle)) = try_angle(&chars, p) {
            if let Some(s) = find_sep(&chars, q) {
                arg = Some((TokenKind::Angle(angle), text(p, q)));
                sep = Some(s);
            }
        }
        if arg.is_none() {
            if let Some((q, value)) = try_percentage(&chars, p) {
                if let Some(s) = find_sep(&chars, q) {
                    arg = Some((TokenKind::Percentage(value), text(p, q)));
                    sep = Some(s);
                }
            }
        }
        if arg.is_none() {
            if let Some((q, value)) = try_integer(&chars, p) {
                if let Some(s) = find_sep(&chars, q) {
                    arg = Some((TokenKind::Integer(value), text(p, q)));
                    sep = Some(s);
                }
            }
        }
        if arg.is_none() {
            if let Some((q, value)) = try_float(&chars, p) {
                if let Some(s) = find_sep(&chars, q) {
                    arg = Some((TokenKind::Float(value), text(p, q)));
                    sep = Some(s);
                }
            }
        }
        if arg.is_none() {
            if let Some((q, letter, number)) = try_ncol(&chars, p) {
                if let Some(s) = find_sep(&chars, q) {
                    let kind = match number {
                        Some(n) if (0.0..100.0).contains(&n) => {
                            let index = "RYGCBM".find(letter).unwrap_or(0) as f64;
                            TokenKind::Ncol(Angle::Degrees(index * 60.0 + n / 100.0 * 60.0))
                        }
                        // Bare or out-of-range shorthand falls back to a
                        // plain name lookup.
                        _ => TokenKind::Name(text(p, q)),
                    };
                    arg = Some((kind, text(p, q)));
                    sep = Some(s);
                }
            }
        }
        if arg.is_none() {
            if let Some((q, run)) = try_hex(&chars, p) {
                if let Some(s) = find_sep(&chars, q) {
                    if matches!(run, 4 | 8) && !extended_hex {
                        return Err(ColorError::expression(
                            format!(
                                "extended hex values are forbidden: '{}'",
                                text(p, q)
                            ),
                            Some(start),
                        ));
                    }
                    let digits: Vec<char> = if run <= 4 {
                        chars[p + 1..q].iter().flat_map(|c| [*c, *c]).collect()
                    } else {
                        chars[p + 1..q].to_vec()
                    };
                    let alpha = if digits.len() == 8 {
                        hex_byte(&digits, 6) as f64 / 255.0
                    } else {
                        1.0
                    };
                    let color = Srgb::from_bytes(
                        hex_byte(&digits, 0),
                        hex_byte(&digits, 2),
                        hex_byte(&digits, 4),
                        alpha,
                    )?;
                    arg = Some((TokenKind::Hex(color), text(p, q)));
                    sep = Some(s);
                }
            }
        }
        if arg.is_none() {
            if let Some(q) = try_name(&chars, p) {
                if let Some(s) = find_sep(&chars, q) {
                    arg = Some((TokenKind::Name(text(p, q)), text(p, q)));
                    sep = Some(s);
                }
            }
        }

        let (token, (sep_kind, sep_column, end)) = match (arg, sep) {
            (Some((kind, rawtext)), Some(s)) => {
                (
                    Some(Token {
                        kind,
                        column: p,
                        rawtext,
                    }),
                    s,
                )
            }
            _ => {
                // The empty alternative: nothing before the separator.
                if let Some(s) = find_sep(&chars, p) {
                    let token = (!was_call_end).then(|| Token {
                        kind: TokenKind::Empty,
                        column: p,
                        rawtext: String::new(),
                    });
                    (token, s)
                } else if p > start {
                    // A whitespace run in front of an unmatchable character
                    // still separates an empty argument on its own; the
                    // error surfaces on the next round.
                    let token = (!was_call_end).then(|| Token {
                        kind: TokenKind::Empty,
                        column: p - 1,
                        rawtext: String::new(),
                    });
                    (token, (Sep::Plain, p - 1, p))
                } else {
                    let remaining = text(start, chars.len());
                    let preview = if chars.len() - start > 20 {
                        format!("{}...", text(start, start + 17))
                    } else {
                        remaining
                    };
                    return Err(ColorError::expression(
                        format!("syntax error near '{preview}'"),
                        Some(start),
                    ));
                }
            }
        };

        tokens.extend(token);
        let is_call_end = match sep_kind {
            Sep::Plain => false,
            Sep::Open => {
                tokens.push(Token {
                    kind: TokenKind::CallStart,
                    column: sep_column,
                    rawtext: "(".to_string(),
                });
                false
            }
            Sep::Close => {
                tokens.push(Token {
                    kind: TokenKind::CallEnd,
                    column: sep_column,
                    rawtext: ")".to_string(),
                });
                true
            }
        };

        was_call_end = is_call_end;
        start = end;
    }

    Ok(tokens)
}
