//! Line-oriented prompts for piped or redirected input

use std::io::{BufRead, StdinLock, Write};
use std::sync::Mutex;

use crate::domain::ports::Operator;
use crate::error::PrepResult;

/// Operator reading one answer per line from `R`
pub struct LineOperator<R: BufRead> {
    input: Mutex<R>,
}

impl LineOperator<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> LineOperator<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }
}

impl<R: BufRead> Operator for LineOperator<R> {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }

    fn read_line(&self, prompt: &str) -> PrepResult<Option<String>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{} ", prompt)?;
        stdout.flush()?;

        let mut input = match self.input.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(answer))
    }
}
