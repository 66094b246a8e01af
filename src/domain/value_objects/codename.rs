//! Distribution codename as reported by `lsb_release -c`

use once_cell::sync::Lazy;
use regex::Regex;

static CODENAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Codename:\s+(\S+)").expect("Invalid codename regex"));

/// Parse the codename from `lsb_release -c` output (`Codename:\tprecise`).
pub fn parse_codename(output: &str) -> Option<String> {
    CODENAME_REGEX
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Whether the codename is one the flavour workflow has been tried on.
pub fn is_known(codename: &str, known: &[String]) -> bool {
    known.iter().any(|k| k == codename)
}
