//! Console that replays canned input and records output

use super::{Console, InputClosed};
use anyhow::Result;
use std::collections::VecDeque;

pub(crate) struct ScriptedConsole {
    input: VecDeque<String>,
    pub output: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// All printed text joined by newlines
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn print_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn print_banner(&mut self, text: &str) {
        self.output.push(format!("[{text}]"));
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.input
            .pop_front()
            .ok_or_else(|| InputClosed.into())
    }
}
