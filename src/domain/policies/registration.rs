//! Flavour registration policies
//!
//! The Ubuntu build files list flavours on single lines, e.g.
//!
//! ```text
//! getall amd64 generic server virtual          (debian.master/etc/getabis)
//! flavours        = generic server virtual     (debian.master/rules.d/amd64.mk)
//! ```
//!
//! Registering a flavour appends its name to those lines. Each file gets a
//! named pattern; a line matches when its trimmed text starts with the
//! pattern. These depend on upstream phrasing, so the tests pin the exact
//! rewritten output for known layouts.

use regex::Regex;

use crate::error::PrepResult;

/// A named line pattern in one build-control file
#[derive(Debug, Clone)]
pub struct RegistrationPolicy {
    name: &'static str,
    pattern: Regex,
}

/// Result of applying a policy to file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Number of lines the flavour was appended to
    pub matched: usize,
}

impl RegistrationPolicy {
    /// `getall <arch> ...` lines in `etc/getabis`
    pub fn getabis(arch: &str) -> PrepResult<Self> {
        Self::new("getabis", &format!(r"^getall\s+{}", regex::escape(arch)))
    }

    /// `flavours = ...` lines in `rules.d/<arch>.mk`
    pub fn rules_flavours() -> PrepResult<Self> {
        Self::new("rules-flavours", r"^flavours.*")
    }

    fn new(name: &'static str, pattern: &str) -> PrepResult<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line.trim())
    }

    /// Append ` <flavour>` to every matching line.
    ///
    /// A matching line is emitted trimmed and newline-terminated; every other
    /// line is copied byte for byte, including its line ending.
    pub fn apply(&self, content: &str, flavour: &str) -> Rewrite {
        let mut out = String::with_capacity(content.len() + flavour.len() + 2);
        let mut matched = 0;
        for line in content.split_inclusive('\n') {
            if self.matches(line) {
                out.push_str(line.trim());
                out.push(' ');
                out.push_str(flavour);
                out.push('\n');
                matched += 1;
            } else {
                out.push_str(line);
            }
        }
        Rewrite {
            content: out,
            matched,
        }
    }
}
