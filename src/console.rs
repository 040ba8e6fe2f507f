use crate::style::{paint, Style};
use std::io::{self, BufRead, Write};

/// Interactive console used by the setup flow.
///
/// Generic over its input and output so the flow can run against in-memory buffers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over arbitrary input/output.
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Print one styled line.
    pub fn say(&mut self, style: Style, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", paint(style, text, self.color))
    }

    /// Print styled text without a line break.
    pub fn say_inline(&mut self, style: Style, text: &str) -> io::Result<()> {
        write!(self.output, "{}", paint(style, text, self.color))?;
        self.output.flush()
    }

    /// Print `prompt` and read a single answer.
    ///
    /// Line terminators, surrounding whitespace and one pair of surrounding quotes are removed.
    /// End of input yields an empty answer.
    pub fn ask(&mut self, style: Style, prompt: &str) -> io::Result<String> {
        if prompt.ends_with(' ') {
            self.say_inline(style, prompt)?;
        } else {
            self.say(style, prompt)?;
        }
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(clean_answer(&line).to_string())
    }

    /// Wait for the user to acknowledge before the program ends.
    pub fn pause(&mut self) -> io::Result<()> {
        self.say(Style::Plain, "Press Enter to close the program...")?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    /// Consume the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn clean_answer(line: &str) -> &str {
    let s = line.trim();
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return s[1..s.len() - 1].trim();
        }
    }
    s
}
