use std::cmp;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::debug;

use super::completer::{CompletionAnchor, WordCompleter};
use super::engine::{AcquireError, LineEngine};
use super::history::HistoryFile;
use crate::spi::rustyline::RustylineEngine;

/// End-of-line marker appended to every delivered line unless overridden
/// with [`LineSource::set_eol`].
pub const DEFAULT_EOL: &str = "\r\n";

/// An `io::Read` source that produces interactively edited lines.
///
/// Each time the internal buffer runs dry, the source blocks on the
/// engine for one completed line, records it in history, appends the
/// end-of-line marker, and then serves the bytes across as many partial
/// reads as the caller asks for. The engine is never re-entered mid-line,
/// so consumers like `BufReader::lines` see whole lines regardless of
/// their chunk size.
///
/// The first engine failure (abort, end of input, I/O error) is latched:
/// end of input surfaces as `Ok(0)` on every subsequent read, any other
/// failure as the same `io::Error`, and the engine is not consulted again.
pub struct LineSource<E: LineEngine = RustylineEngine> {
    engine: E,
    prompt: String,
    cont_prompt: String,
    first: bool,
    eol: String,
    history: HistoryFile,
    terminal: bool,
    pending: Vec<u8>,
    latched: Option<AcquireError>,
    closed: bool,
}

impl LineSource<RustylineEngine> {
    /// Create a source backed by the bundled rustyline engine.
    ///
    /// `history` is the persisted history location; `None` disables
    /// persistence. An existing file is loaded eagerly; a missing or
    /// unreadable one yields an empty history without failing
    /// construction.
    pub fn new(prompt: impl Into<String>, history: Option<PathBuf>) -> io::Result<Self> {
        let engine = RustylineEngine::new()?;
        Ok(Self::with_engine(engine, prompt, history))
    }
}

impl<E: LineEngine> LineSource<E> {
    /// Create a source on top of any line-editing engine.
    ///
    /// History persistence is active only when the engine reports a real
    /// terminal; redirected input keeps its history in memory only.
    pub fn with_engine(mut engine: E, prompt: impl Into<String>, history: Option<PathBuf>) -> Self {
        let terminal = engine.is_terminal();
        let history = HistoryFile::new(if terminal { history } else { None });
        history.load(&mut engine);

        let prompt = prompt.into();
        Self {
            engine,
            cont_prompt: prompt.clone(),
            prompt,
            first: true,
            eol: DEFAULT_EOL.to_string(),
            history,
            terminal,
            pending: Vec::new(),
            latched: None,
            closed: false,
        }
    }

    /// Change the prompt shown before the first line of an input.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Change the prompt shown before continuation lines.
    pub fn set_cont_prompt(&mut self, prompt: impl Into<String>) {
        self.cont_prompt = prompt.into();
    }

    /// Start a new logical input: the next acquisition uses the main
    /// prompt again. The prompt switches to the continuation prompt after
    /// each line is read.
    pub fn newline(&mut self) {
        self.first = true;
    }

    /// Change the end-of-line marker appended to every delivered line.
    pub fn set_eol(&mut self, eol: impl Into<String>) {
        self.eol = eol.into();
    }

    /// Install a completion vocabulary.
    ///
    /// With [`CompletionAnchor::LineStart`] candidates complete the whole
    /// line (command names); with [`CompletionAnchor::LastWord`] only the
    /// trailing word. An empty vocabulary uninstalls completion entirely
    /// and the engine performs no lookups.
    pub fn set_completions(&mut self, words: Vec<String>, anchor: CompletionAnchor) {
        let completer = WordCompleter::new(words, anchor);
        if completer.is_empty() {
            self.engine.set_completer(None);
        } else {
            self.engine.set_completer(Some(completer));
        }
    }

    /// Remove the completion vocabulary.
    pub fn clear_completions(&mut self) {
        self.engine.set_completer(None);
    }

    /// Whether the source operates on a terminal that supports editing.
    ///
    /// History persistence is disabled when it does not.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Persist history and release the engine's terminal resources.
    ///
    /// A history file that cannot be written is not an error; the only
    /// failure reported is the engine shutdown itself. Calling `close`
    /// again is a no-op.
    pub fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        self.history.save(&mut self.engine);
        self.engine.shutdown()
    }

    /// Surface the latched condition under the `io::Read` contract: end of
    /// input is a clean `Ok(0)`, everything else an error rebuilt from the
    /// stored cause.
    fn latched_result(err: &AcquireError) -> io::Result<usize> {
        match err {
            AcquireError::Eof => Ok(0),
            // Not ErrorKind::Interrupted: std's buffered readers retry
            // Interrupted, which would spin forever against a sticky latch.
            AcquireError::Aborted => Err(io::Error::other(AcquireError::Aborted.to_string())),
            AcquireError::Io(cause) => Err(io::Error::new(cause.kind(), cause.to_string())),
            AcquireError::Engine(message) => Err(io::Error::other(message.clone())),
        }
    }
}

impl<E: LineEngine> Read for LineSource<E> {
    /// Serve bytes of the current line, blocking on a fresh interactive
    /// acquisition when the internal buffer is drained.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(err) = &self.latched {
            return Self::latched_result(err);
        }

        if self.pending.is_empty() {
            let prompt = if self.first {
                &self.prompt
            } else {
                &self.cont_prompt
            };

            match self.engine.read_line(prompt) {
                Ok(line) => {
                    self.engine.add_history_entry(&line);
                    self.pending = line.into_bytes();
                    self.pending.extend_from_slice(self.eol.as_bytes());
                    self.first = false;
                }
                Err(err) => {
                    debug!(%err, "line acquisition failed");
                    let result = Self::latched_result(&err);
                    self.latched = Some(err);
                    return result;
                }
            }
        }

        let n = cmp::min(buf.len(), self.pending.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.drain(..n);
        Ok(n)
    }
}

impl<E: LineEngine> Drop for LineSource<E> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
