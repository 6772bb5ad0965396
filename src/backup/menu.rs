//! Interactive menu loop.
//!
//! A small prompt-driven frontend over the engine. Input is read as
//! whitespace-separated tokens, so paths containing spaces are not
//! supported. The loop is generic over its streams so tests can drive it
//! with in-memory buffers.

use crate::backup::engine::BackupEngine;
use crate::backup::journal::{Fault, Journal};

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Whitespace tokenizer over a buffered reader.
pub struct TokenReader<R: BufRead> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> TokenReader<R> {
        TokenReader {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, reading further lines as needed. `None`
    /// signals end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
        Ok(self.pending.pop_front())
    }
}

/// Runs the menu loop until the exit choice or end of input.
///
/// The engine lives as a local value and is replaced wholesale when the
/// destination is reconfigured; the previous instance is released by scope.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, journal: Journal) -> io::Result<()> {
    let mut tokens = TokenReader::new(input);
    let mut engine: Option<BackupEngine> = None;

    loop {
        print_menu(output)?;
        let Some(choice) = tokens.next_token()? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                write!(output, "Enter backup directory: ")?;
                output.flush()?;
                let Some(path) = tokens.next_token()? else {
                    return Ok(());
                };
                match BackupEngine::new(path, journal.clone()) {
                    Ok(built) => engine = Some(built),
                    Err(e) => {
                        engine = None;
                        journal.record(Fault::Config, &e);
                        writeln!(output, "Cannot use backup directory.")?;
                    }
                }
            }
            "2" => {
                let Some(engine) = engine.as_mut() else {
                    writeln!(output, "Set backup directory first.")?;
                    continue;
                };
                write!(output, "Enter directory to backup: ")?;
                output.flush()?;
                let Some(path) = tokens.next_token()? else {
                    return Ok(());
                };
                engine.add_source(path);
            }
            "3" => {
                let Some(engine) = engine.as_mut() else {
                    writeln!(output, "Set backup directory first.")?;
                    continue;
                };
                write!(output, "Enter exclusion path: ")?;
                output.flush()?;
                let Some(path) = tokens.next_token()? else {
                    return Ok(());
                };
                engine.add_exclusion(path);
            }
            "4" => {
                let Some(engine) = engine.as_ref() else {
                    writeln!(output, "Set backup directory first.")?;
                    continue;
                };
                engine.run();
                writeln!(output, "Backup completed.")?;
            }
            "5" => return Ok(()),
            _ => writeln!(output, "Invalid choice, please try again.")?,
        }
    }
}

fn print_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Backup Manager Menu:")?;
    writeln!(output, "1. Set Backup Directory")?;
    writeln!(output, "2. Add Directory to Backup")?;
    writeln!(output, "3. Add Exclusion Path")?;
    writeln!(output, "4. Perform Backup")?;
    writeln!(output, "5. Exit")?;
    write!(output, "Enter your choice: ")?;
    output.flush()
}
