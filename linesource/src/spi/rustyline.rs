use std::io;
use std::path::Path;

use crossterm::tty::IsTty;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::FileHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Context, Editor, Helper};

use crate::core::completer::WordCompleter;
use crate::core::engine::{AcquireError, LineEngine};

/// Production engine backed by `rustyline`.
///
/// Raw-mode handling, key bindings, and rendering all live in rustyline;
/// this wrapper adapts its surface to [`LineEngine`] and routes an
/// installed [`WordCompleter`] through the helper mechanism.
pub struct RustylineEngine {
    editor: Editor<SourceHelper, FileHistory>,
    terminal: bool,
}

/// rustyline helper carrying the optional word completer.
struct SourceHelper {
    completer: Option<WordCompleter>,
}

impl RustylineEngine {
    /// Configure an editor that aborts the pending acquisition on Ctrl-C
    /// and stores history entries exactly as entered (duplicates and
    /// space-prefixed lines included), so recall order matches entry
    /// order.
    pub fn new() -> io::Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .history_ignore_dups(false)
            .map_err(to_io_error)?
            .history_ignore_space(false)
            .build();

        let mut editor: Editor<SourceHelper, FileHistory> =
            Editor::with_config(config).map_err(to_io_error)?;
        editor.set_helper(Some(SourceHelper { completer: None }));

        Ok(Self {
            editor,
            terminal: io::stdin().is_tty(),
        })
    }
}

impl LineEngine for RustylineEngine {
    fn read_line(&mut self, prompt: &str) -> Result<String, AcquireError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Eof) => Err(AcquireError::Eof),
            Err(ReadlineError::Interrupted) => Err(AcquireError::Aborted),
            Err(ReadlineError::Io(err)) => Err(AcquireError::Io(err)),
            Err(err) => Err(AcquireError::Engine(err.to_string())),
        }
    }

    fn set_completer(&mut self, completer: Option<WordCompleter>) {
        self.editor.set_helper(Some(SourceHelper { completer }));
    }

    fn add_history_entry(&mut self, line: &str) {
        // The store applies its own entry policy; a rejected entry is the
        // engine's decision, not an adapter failure.
        let _ = self.editor.add_history_entry(line);
    }

    fn load_history(&mut self, path: &Path) -> io::Result<()> {
        self.editor.load_history(path).map_err(to_io_error)
    }

    fn save_history(&mut self, path: &Path) -> io::Result<()> {
        self.editor.save_history(path).map_err(to_io_error)
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    // rustyline enters raw mode per readline call and restores the tty
    // before returning, so there is nothing held between acquisitions.
    fn shutdown(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn to_io_error(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(err) => err,
        other => io::Error::other(other.to_string()),
    }
}

impl Completer for SourceHelper {
    type Candidate = String;

    // The filter emits full replacement strings (prefix plus candidate),
    // so candidates replace the line from offset 0 up to the cursor.
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        match &self.completer {
            Some(completer) => Ok((0, completer.completions(&line[..pos]))),
            None => Ok((0, Vec::new())),
        }
    }
}

impl Hinter for SourceHelper {
    type Hint = String;
}

impl Highlighter for SourceHelper {}

impl Validator for SourceHelper {}

impl Helper for SourceHelper {}
