//! Operator port - interactive console input
//!
//! The flavour pipeline asks the person at the terminal for an architecture,
//! a seed config, a local version suffix and the go-ahead for the destructive
//! reset. All of that goes through this trait so tests can script the answers.

use crate::error::{PrepError, PrepResult};

/// Source of operator answers
pub trait Operator {
    /// Show an informational line to the operator
    fn notify(&self, message: &str);

    /// Ask for a line of text. `None` means input is closed.
    fn read_line(&self, prompt: &str) -> PrepResult<Option<String>>;

    /// Ask a yes/no question. Only an answer of exactly `y` counts as yes.
    fn confirm(&self, prompt: &str) -> PrepResult<bool> {
        Ok(self
            .read_line(prompt)?
            .is_some_and(|answer| is_affirmative(&answer)))
    }

    /// Let the operator pick one of `items`; returns its index.
    fn choose(&self, prompt: &str, items: &[String]) -> PrepResult<usize> {
        self.notify(prompt);
        for (idx, item) in items.iter().enumerate() {
            self.notify(&format!("  {}: {}", idx + 1, item));
        }
        let input = self
            .read_line("Enter desired number")?
            .unwrap_or_default();
        parse_selection(&input, items.len())
    }
}

impl<T: Operator + ?Sized> Operator for &T {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }

    fn read_line(&self, prompt: &str) -> PrepResult<Option<String>> {
        (**self).read_line(prompt)
    }

    fn confirm(&self, prompt: &str) -> PrepResult<bool> {
        (**self).confirm(prompt)
    }

    fn choose(&self, prompt: &str, items: &[String]) -> PrepResult<usize> {
        (**self).choose(prompt, items)
    }
}

/// Whether a confirmation answer means yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim() == "y"
}

/// Parse a 1-based menu number into a 0-based index.
pub fn parse_selection(input: &str, count: usize) -> PrepResult<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(PrepError::InvalidSelection {
            input: trimmed.to_string(),
        }),
    }
}
