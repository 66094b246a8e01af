//! Terminal prompts via dialoguer

use dialoguer::{Input, Select};

use crate::domain::ports::Operator;
use crate::error::PrepResult;

/// Operator on an interactive terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOperator;

impl ConsoleOperator {
    pub fn new() -> Self {
        Self
    }
}

impl Operator for ConsoleOperator {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }

    fn read_line(&self, prompt: &str) -> PrepResult<Option<String>> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(std::io::Error::from)?;
        Ok(Some(answer))
    }

    fn choose(&self, prompt: &str, items: &[String]) -> PrepResult<usize> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(std::io::Error::from)?;
        Ok(selection)
    }
}
