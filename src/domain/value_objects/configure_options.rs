//! ConfigureOptions value object - contents of a `<project>.conf` file
//!
//! Every line that is not blank and does not start with `#` (after trimming)
//! is one argument passed verbatim to `configure`.

/// Extra `configure` arguments for a project, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigureOptions {
    args: Vec<String>,
}

impl ConfigureOptions {
    /// Parse option file content.
    pub fn parse(content: &str) -> Self {
        let args = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { args }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments joined with single spaces, as shown to the user
    pub fn joined(&self) -> String {
        self.args.join(" ")
    }
}
