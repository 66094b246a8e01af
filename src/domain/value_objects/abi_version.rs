//! ABI version directory selection
//!
//! The kernel tree keeps one directory per ABI under `<debian>/abi/`. The most
//! recent one is the lexicographically greatest name. That agrees with version
//! order for the usual `3.2.0-23.36` style names but not across digit-count
//! changes (`9` sorts after `10`), so the natural ordering is computed too and
//! a disagreement is reported to the caller.

use std::cmp::Ordering;

/// Outcome of picking the latest ABI directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiSelection {
    /// Lexicographically greatest directory name
    pub chosen: String,
    /// Name natural version ordering would have picked, when it differs
    pub natural_choice: Option<String>,
}

/// Pick the latest ABI directory name, or `None` if there are none.
pub fn select_latest(names: &[String]) -> Option<AbiSelection> {
    let chosen = names.iter().max()?;
    let natural = names
        .iter()
        .max_by(|a, b| natural_cmp(a, b))
        .filter(|natural| *natural != chosen)
        .cloned();
    Some(AbiSelection {
        chosen: chosen.clone(),
        natural_choice: natural,
    })
}

/// Compare strings treating runs of ASCII digits as numbers.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(ln), Ok(rn)) => ln.cmp(&rn),
                    _ => l.cmp(r),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Splits a string into alternating digit / non-digit runs.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}
