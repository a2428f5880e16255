//! Interactive confirmation.
//!
//! A prompt is asked once and re-asked until the answer matches one of a
//! fixed set of choices. Input and output streams are parameters, so the
//! same code drives a terminal or a test buffer.

use std::io::{self, BufRead, Write};

/// One selectable answer, e.g. `y` / `yes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub short: String,
    pub label: String,
    pub is_default: bool,
}

impl Choice {
    pub fn new(short: &str, label: &str, is_default: bool) -> Self {
        Self {
            short: short.to_owned(),
            label: label.to_owned(),
            is_default,
        }
    }

    fn matches(&self, answer: &str) -> bool {
        answer.eq_ignore_ascii_case(&self.short) || answer.eq_ignore_ascii_case(&self.label)
    }
}

#[derive(Debug, Clone)]
pub struct Prompt {
    question: String,
    choices: Vec<Choice>,
}

impl Prompt {
    pub fn new(question: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            question: question.into(),
            choices,
        }
    }

    /// Standard yes/no gate; `default_yes` picks which answer an empty line means.
    pub fn yes_no(question: impl Into<String>, default_yes: bool) -> Self {
        Self::new(
            question,
            vec![
                Choice::new("y", "yes", default_yes),
                Choice::new("n", "no", !default_yes),
            ],
        )
    }

    pub fn default_choice(&self) -> Option<&Choice> {
        self.choices.iter().find(|c| c.is_default)
    }

    /// `[y/N]`: the default is shown in upper case.
    fn options_hint(&self) -> String {
        let shorts: Vec<String> = self
            .choices
            .iter()
            .map(|c| {
                if c.is_default {
                    c.short.to_uppercase()
                } else {
                    c.short.clone()
                }
            })
            .collect();
        format!("[{}]", shorts.join("/"))
    }

    /// Ask until a valid answer arrives.
    ///
    /// An empty line selects the default when there is one. End of input
    /// also selects the default; without one it is an `UnexpectedEof` error.
    pub fn ask<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> io::Result<&Choice> {
        loop {
            write!(output, "{} {} ", self.question, self.options_hint())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return self.default_choice().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::UnexpectedEof, "no answer on input")
                });
            }

            let answer = line.trim();
            if answer.is_empty() {
                if let Some(choice) = self.default_choice() {
                    return Ok(choice);
                }
            } else if let Some(choice) = self.choices.iter().find(|c| c.matches(answer)) {
                return Ok(choice);
            }
            let labels: Vec<&str> = self.choices.iter().map(|c| c.label.as_str()).collect();
            writeln!(output, "Please answer {}.", labels.join(" or "))?;
        }
    }

    /// Convenience for yes/no prompts: true when the chosen short code is `y`.
    pub fn confirm<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> io::Result<bool> {
        Ok(self.ask(input, output)?.short == "y")
    }
}
