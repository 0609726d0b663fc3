//! Interactive read-evaluate-print loop

use std::io::{self, BufRead, Write};

use calc_eval::calculate;

use crate::format::format_value;

const DEFAULT_BANNER: &str = "Enter expressions like '2 + 2'. Type 'quit' to exit.";
const DEFAULT_PROMPT: &str = ">> ";

/// Options for the interactive loop
#[derive(Debug, Clone)]
pub struct ReplOptions {
    /// Line printed once before the first prompt (`None` prints nothing)
    pub banner: Option<String>,
    /// Text written before each read, without a trailing newline
    pub prompt: String,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            banner: Some(DEFAULT_BANNER.to_string()),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ReplOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    pub fn no_banner(mut self) -> Self {
        self.banner = None;
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplExit {
    /// The user typed `quit` or `exit`.
    Quit,
    /// Input was exhausted.
    EndOfInput,
}

/// What to do with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Quit,
    Blank,
    Expression(&'a str),
}

impl<'a> Line<'a> {
    fn classify(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            Line::Blank
        } else if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            Line::Quit
        } else {
            Line::Expression(line)
        }
    }
}

pub struct Repl {
    options: ReplOptions,
}

impl Repl {
    pub fn new(options: ReplOptions) -> Self {
        Self { options }
    }

    /// Run the loop until `quit`/`exit` or end of input.
    ///
    /// Evaluation errors are printed as `Error: <message>` and never end the
    /// loop. Only I/O errors on `input` or `output` are returned.
    pub fn run<R, W>(&self, mut input: R, mut output: W) -> io::Result<ReplExit>
    where
        R: BufRead,
        W: Write,
    {
        if let Some(banner) = &self.options.banner {
            writeln!(output, "{}", banner)?;
        }

        let mut buf = String::new();
        loop {
            write!(output, "{}", self.options.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                writeln!(output)?;
                tracing::debug!("end of input");
                return Ok(ReplExit::EndOfInput);
            }

            match Line::classify(&buf) {
                Line::Quit => return Ok(ReplExit::Quit),
                Line::Blank => continue,
                Line::Expression(expression) => {
                    tracing::debug!(expression, "evaluating line");
                    match calculate(expression) {
                        Ok(value) => writeln!(output, "{}", format_value(value))?,
                        Err(e) => {
                            tracing::debug!(kind = ?e.kind(), "evaluation failed");
                            writeln!(output, "Error: {}", e)?;
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> (ReplExit, String) {
        let repl = Repl::new(ReplOptions::default());
        let mut output = Vec::new();
        let exit = repl.run(Cursor::new(input), &mut output).unwrap();
        (exit, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_classify() {
        assert_eq!(Line::classify("  \n"), Line::Blank);
        assert_eq!(Line::classify("QUIT\n"), Line::Quit);
        assert_eq!(Line::classify(" Exit "), Line::Quit);
        assert_eq!(Line::classify(" 2 + 2\n"), Line::Expression("2 + 2"));
        assert_eq!(Line::classify("quitting"), Line::Expression("quitting"));
    }

    #[test]
    fn test_evaluates_until_quit() {
        let (exit, out) = run_session("2 + 3\n6 * 7\nquit\n8 / 2\n");
        assert_eq!(exit, ReplExit::Quit);
        assert_eq!(
            out,
            "Enter expressions like '2 + 2'. Type 'quit' to exit.\n>> 5\n>> 42\n>> "
        );
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let (exit, out) = run_session("8 / 0\n5 ^ 2\n5 +\nfive + two\n10 - 4\nexit\n");
        assert_eq!(exit, ReplExit::Quit);
        let lines: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(
            lines,
            [
                ">> Error: Division by zero is not allowed.",
                ">> Error: Unsupported operator: ^",
                ">> Error: Expression must consist of two operands and one operator separated by spaces.",
                ">> Error: Operands must be numbers.",
                ">> 6",
                ">> ",
            ]
        );
    }

    #[test]
    fn test_extreme_magnitudes_use_exponent_form() {
        let (_, out) = run_session("1e300 * 1\n1 / 4e9\nquit\n");
        assert!(out.contains(">> 1e300\n>> 2.5e-10\n"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (_, out) = run_session("\n   \n1 + 1\nQuit\n");
        assert_eq!(out.matches(">> ").count(), 4);
        assert!(out.contains(">> >> >> 2\n"));
        assert!(!out.contains("Error"));
    }

    #[test]
    fn test_end_of_input() {
        let (exit, out) = run_session("1 - 3\n");
        assert_eq!(exit, ReplExit::EndOfInput);
        assert!(out.ends_with(">> -2\n>> \n"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let (exit, out) = run_session("2 * 2");
        assert_eq!(exit, ReplExit::EndOfInput);
        assert!(out.ends_with(">> 4\n>> \n"));
    }

    #[test]
    fn test_custom_options() {
        let repl = Repl::new(ReplOptions::new().no_banner().prompt("calc> "));
        let mut output = Vec::new();
        repl.run(Cursor::new("3 - 1\n"), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "calc> 2\ncalc> \n");
    }

    #[test]
    fn test_custom_banner() {
        let repl = Repl::new(ReplOptions::new().banner("hi"));
        let mut output = Vec::new();
        repl.run(Cursor::new("exit\n"), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "hi\n>> ");
    }
}
