//! Interactive input loop.
//!
//! Repeatedly prompts for a symbol until the `done` sentinel, routing each
//! entry to either quantity accumulation (known symbol) or the registration
//! flow (unknown symbol). The loop reads through the [`LineReader`] trait so
//! the same logic runs against a rustyline editor, plain piped stdin, or a
//! scripted input source in tests.

use std::io::{BufRead, Write};

use colored::Colorize;
use rust_decimal::Decimal;

use crate::catalog::{normalize_symbol, Session};
use crate::cli::formatters;
use crate::error::{Result, TallyError};

/// One line of user input per call. `Ok(None)` signals end of input
/// (Ctrl-D, exhausted script, closed pipe) and ends the session loop.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads from any `BufRead`, echoing the prompt to stdout first. Used when
/// stdin is not a terminal (piped input, e2e tests).
pub struct BufferedReader<R: BufRead> {
    input: R,
}

impl<R: BufRead> BufferedReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineReader for BufferedReader<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        let mut line = String::new();
        let n = self.input.read_line(&mut line).map_err(TallyError::Io)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Scripted input source for tests: yields preset lines, then end-of-input.
#[derive(Debug)]
pub struct ScriptReader {
    lines: std::vec::IntoIter<String>,
}

impl ScriptReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineReader for ScriptReader {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.next())
    }
}

/// Parse a quantity: non-negative integer, zero allowed.
pub fn parse_quantity(raw: &str) -> std::result::Result<u64, TallyError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| TallyError::ParseError(format!("not a whole number: {:?}", trimmed)))?;
    if value < 0 {
        return Err(TallyError::ValidationError(
            "quantity must be non-negative".to_string(),
        ));
    }
    Ok(value as u64)
}

/// Parse a unit price: any decimal value, matching the registration prompt's
/// lenient contract.
pub fn parse_price(raw: &str) -> std::result::Result<Decimal, TallyError> {
    raw.trim()
        .parse()
        .map_err(|_| TallyError::ParseError(format!("not a number: {:?}", raw.trim())))
}

const SENTINEL: &str = "DONE";

/// Run the symbol-entry loop until the sentinel or end of input.
///
/// Before every symbol prompt the current catalog/holdings snapshot is
/// printed. Known symbols go straight to the quantity prompt; unknown symbols
/// go through the confirm-register-price flow, and a failed price parse
/// abandons the registration without touching state.
pub fn run_input_loop(session: &mut Session, reader: &mut dyn LineReader) -> Result<()> {
    loop {
        println!("{}", formatters::format_catalog_snapshot(session));

        let Some(raw) = reader.read_line("Enter stock symbol (or 'done'): ")? else {
            break;
        };
        let symbol = normalize_symbol(&raw);

        if symbol.is_empty() {
            continue;
        }
        if symbol == SENTINEL {
            break;
        }

        if session.catalog.contains(&symbol) {
            let Some(quantity) = prompt_quantity(reader, &symbol)? else {
                break;
            };
            session.add_quantity(&symbol, quantity)?;
            continue;
        }

        // Unknown symbol: offer registration
        println!("{} {} not available.", "❌".red(), symbol.bold());
        let Some(answer) = reader.read_line(&format!("Do you want to add {}? (y/n): ", symbol))?
        else {
            break;
        };
        let answer = answer.trim().to_lowercase();
        if answer != "y" && answer != "yes" {
            continue;
        }

        let Some(price_raw) =
            reader.read_line(&format!("Enter price per share for {}: ", symbol))?
        else {
            break;
        };
        let price = match parse_price(&price_raw) {
            Ok(price) => price,
            Err(e) => {
                println!("{} Invalid price ({}). Skipping this stock.", "❌".red(), e);
                continue;
            }
        };

        session.register(symbol.clone(), price);
        let Some(quantity) = prompt_quantity(reader, &symbol)? else {
            break;
        };
        session.add_quantity(&symbol, quantity)?;
        println!(
            "{} {} added with price ${} and quantity {}.",
            "✓".green().bold(),
            symbol.bold(),
            price,
            quantity
        );
    }

    Ok(())
}

/// Prompt for a quantity until a non-negative integer parses. This prompt
/// never gives up on bad input; only end of input stops it.
fn prompt_quantity(reader: &mut dyn LineReader, symbol: &str) -> Result<Option<u64>> {
    loop {
        let Some(raw) = reader.read_line(&format!("Quantity of {}: ", symbol))? else {
            return Ok(None);
        };
        match parse_quantity(&raw) {
            Ok(quantity) => return Ok(Some(quantity)),
            Err(TallyError::ValidationError(_)) => {
                println!("{} Please enter a non-negative number.", "❌".red());
            }
            Err(_) => {
                println!("{} Invalid quantity. Please enter a number.", "❌".red());
            }
        }
    }
}
