use std::io::{BufRead, Write};

use secscout_core::{MenuOption, SelectionError, SelectionPrompt};

/// Line-oriented terminal prompt.
///
/// Prompts and menus go to `output`; replies are read one line at a time from `input`.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one line.
    pub fn ask(&mut self, question: &str) -> std::io::Result<String> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> std::io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before a reply was entered",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    fn write_menu(&mut self, options: &[MenuOption<'_>]) -> std::io::Result<()> {
        writeln!(self.output, "\nA few companies match that name:")?;
        for option in options {
            let company = option.candidate;
            writeln!(self.output, "\nOption {}", option.number)?;
            writeln!(
                self.output,
                "\tFull company name: {} (CIK: {}, Ticker: {})",
                company.name, company.cik, company.ticker
            )?;
            writeln!(self.output, "\tLocation: {}", company.location)?;
        }
        writeln!(self.output, "\nEnter the number option you'd like to see:")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> SelectionPrompt for TerminalPrompt<R, W> {
    fn prompt_selection(&mut self, options: &[MenuOption<'_>]) -> Result<String, SelectionError> {
        self.write_menu(options)
            .and_then(|()| self.read_line())
            .map_err(|error| SelectionError::Prompt(error.to_string()))
    }
}
