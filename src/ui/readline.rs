//! Readline wrapper with simple symbol completion.

use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Context, Editor, Helper};

use crate::session::LineReader;

/// Completes the line against a fixed word list (catalog symbols plus the
/// session sentinel), case-insensitively, replacing the whole line.
pub struct SymbolHelper {
    words: Vec<String>,
    hinter: HistoryHinter,
}

impl SymbolHelper {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|s| s.to_string()).collect(),
            hinter: HistoryHinter::default(),
        }
    }
}

impl Helper for SymbolHelper {}
impl Validator for SymbolHelper {}
impl Highlighter for SymbolHelper {}

impl Hinter for SymbolHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Completer for SymbolHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = line[..pos].trim_start();
        let start = pos - prefix.len();
        let prefix_lower = prefix.to_lowercase();

        let mut matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|w| w.to_lowercase().starts_with(&prefix_lower))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();

        matches.sort_by(|a, b| a.replacement.cmp(&b.replacement));
        matches.dedup_by(|a, b| a.replacement == b.replacement);

        Ok((start, matches))
    }
}

/// Thin wrapper over `rustyline::Editor` with preset completion words and a
/// history path.
pub struct Readline {
    editor: Editor<SymbolHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Readline {
    pub fn new(words: &[&str], history_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .build();
        let helper = SymbolHelper::new(words);
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(helper));

        let history_path = history_path.unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tally_history")
        });

        let _ = editor.load_history(&history_path);

        Ok(Self {
            editor,
            history_path,
        })
    }

    pub fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        let line = self.editor.readline(prompt)?;
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
            let _ = self.editor.append_history(&self.history_path);
        }
        Ok(line)
    }

    /// Utility for tests to inspect completions without invoking terminal input.
    pub fn completions(&self, line: &str) -> Vec<String> {
        if let Some(helper) = self.editor.helper() {
            let pos = line.len();
            let history = self.editor.history();
            if let Ok((_, pairs)) = helper.complete(line, pos, &Context::new(history)) {
                return pairs.into_iter().map(|p| p.replacement).collect();
            }
        }
        Vec::new()
    }
}

impl LineReader for Readline {
    /// Ctrl-C and Ctrl-D both end the session; anything else is a real
    /// terminal failure.
    fn read_line(&mut self, prompt: &str) -> crate::error::Result<Option<String>> {
        match self.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
