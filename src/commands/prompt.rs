use std::io::{BufRead, Write};

pub const CONFIRMATION: &str = "yes";

/// Interactive questions on a line-based input.
///
/// End of input reads as an empty answer, so a closed stdin falls back to
/// the defaults and declines the confirmation.
pub struct Prompter<R> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Prompter { input }
    }

    pub fn ask(&mut self, writer: &mut dyn Write, question: &str) -> anyhow::Result<String> {
        write!(writer, "{question}")?;
        writer.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        Ok(answer.trim().to_string())
    }

    pub fn ask_count(
        &mut self,
        writer: &mut dyn Write,
        question: &str,
        default: u32,
    ) -> anyhow::Result<u32> {
        let answer = self.ask(writer, question)?;

        Ok(parse_count(&answer, default))
    }

    pub fn confirm(&mut self, writer: &mut dyn Write, question: &str) -> anyhow::Result<bool> {
        let answer = self.ask(writer, question)?;

        Ok(is_confirmation(&answer))
    }
}

/// Empty or non-numeric answers (negative numbers included) yield `default`.
pub fn parse_count(answer: &str, default: u32) -> u32 {
    let answer = answer.trim();
    if answer.is_empty() {
        return default;
    }

    answer.parse::<u32>().unwrap_or(default)
}

/// Case-insensitive `yes`. Surrounding whitespace is ignored, so `" Yes "`
/// confirms while `y` or `yes please` cancel.
pub fn is_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(CONFIRMATION)
}
