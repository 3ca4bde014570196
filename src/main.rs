use std::io::IsTerminal;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use tally::catalog::Session;
use tally::cli::formatters;
use tally::export::{self, RESULTS_DIR};
use tally::reports::summarize;
use tally::session::{run_input_loop, BufferedReader, LineReader};
use tally::ui::readline::Readline;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    export::ensure_results_dir(Path::new(RESULTS_DIR))?;

    let mut session = Session::with_seed_catalog();
    info!("session started with {} catalog symbols", session.catalog.len());

    println!(
        "{} Welcome to Stock Portfolio Tracker!",
        "📊".cyan().bold()
    );

    // Interactive terminals get readline with symbol completion and history;
    // piped stdin falls back to a plain buffered reader.
    let mut reader: Box<dyn LineReader> = if std::io::stdin().is_terminal() {
        let words: Vec<String> = session
            .catalog
            .symbols()
            .map(str::to_string)
            .chain(std::iter::once("done".to_string()))
            .collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        Box::new(Readline::new(&words, None)?)
    } else {
        Box::new(BufferedReader::new(std::io::stdin().lock()))
    };

    run_input_loop(&mut session, reader.as_mut())?;

    let report = summarize(&session);
    println!("{}", formatters::format_summary(&report));

    export::run_export(reader.as_mut(), &report, Path::new(RESULTS_DIR))?;

    println!(
        "{} Thank you for using Stock Portfolio Tracker!",
        "👋".bold()
    );
    Ok(())
}
