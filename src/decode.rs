use std::convert::TryFrom;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::{MAX_DECODE_SIZE, WORD};

/// Returns a line of Chicken text holding exactly `n` chickens.
///
/// The words are separated by a single space. Zero yields an empty line.
///
/// # Errors
///
/// [`Error::TooBig`] is returned when the line would be longer than the
/// largest decoded output this crate produces (`u32::MAX` bytes), or when
/// space for it can't be allocated.
pub fn decode_line(n: u64) -> Result<String> {
    let mut line = alloc(line_len(n))?;
    push_line(&mut line, n);
    Ok(line)
}

/// Decodes MiniChicken into Chicken text.
///
/// The input is split on whitespace and every token must be a non-negative
/// integer. Each integer becomes one line (see [`decode_line`]) and lines are
/// joined with `\n`, without a trailing newline. Empty input decodes to
/// empty output.
///
/// # Errors
///
/// If any token isn't a non-negative integer that fits in a `u64`, then
/// [`Error::Parse`] is returned for the first such token. If the decoded
/// text would exceed `u32::MAX` bytes (or can't be allocated), then
/// [`Error::TooBig`] is returned. In both cases nothing is decoded.
pub fn decode(text: &str) -> Result<String> {
    let counts = parse(text)?;
    let mut len = Some(0u64);
    for (i, &n) in counts.iter().enumerate() {
        let sep = if i > 0 { 1 } else { 0 };
        len = len
            .and_then(|len| len.checked_add(sep))
            .and_then(|len| len.checked_add(line_len(n)?));
    }
    debug!("decoding {} line(s)", counts.len());
    let mut out = alloc(len)?;
    for (i, &n) in counts.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_line(&mut out, n);
    }
    Ok(out)
}

/// Returns the length in bytes of a line holding `n` chickens, or `None`
/// when that doesn't fit in a `u64`.
fn line_len(n: u64) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    let word = WORD.len() as u64 + 1;
    n.checked_mul(word).map(|len| len - 1)
}

/// Allocate an empty string with room for exactly `len` bytes.
fn alloc(len: Option<u64>) -> Result<String> {
    let given = len.unwrap_or(u64::MAX);
    let too_big = Error::TooBig { given, max: MAX_DECODE_SIZE };
    if given > MAX_DECODE_SIZE {
        return Err(too_big);
    }
    let cap = usize::try_from(given).map_err(|_| too_big.clone())?;
    let mut buf = String::new();
    buf.try_reserve_exact(cap).map_err(|_| too_big)?;
    Ok(buf)
}

fn push_line(out: &mut String, n: u64) {
    for i in 0..n {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(WORD);
    }
}

fn parse(text: &str) -> Result<Vec<u64>> {
    let mut counts = Vec::new();
    for (index, token) in text.split_whitespace().enumerate() {
        match token.parse::<u64>() {
            Ok(n) => {
                trace!("token {} is {}", index, n);
                counts.push(n);
            }
            Err(_) => {
                return Err(Error::Parse {
                    index: index as u64,
                    token: token.to_string(),
                });
            }
        }
    }
    Ok(counts)
}
