use std::io;
use std::path::Path;

use thiserror::Error;

use super::completer::WordCompleter;

/// Failure of a blocking line acquisition.
///
/// Whatever the engine reports is terminal for the adapter: the first
/// `AcquireError` is latched and no further acquisition is attempted on
/// that instance.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// The input source is exhausted (Ctrl-D on an empty line, or the end
    /// of redirected input).
    #[error("end of input")]
    Eof,

    /// The user aborted the pending acquisition (Ctrl-C).
    #[error("line input aborted")]
    Aborted,

    /// I/O failure on the underlying device.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Any other engine-specific failure.
    #[error("line engine error: {0}")]
    Engine(String),
}

/// Narrow contract for the line-editing collaborator.
///
/// [`LineSource`](super::reader::LineSource) drives any implementation of
/// this trait. The bundled production engine is
/// [`RustylineEngine`](crate::spi::rustyline::RustylineEngine); tests
/// substitute scripted engines to exercise the stream bridge without a
/// terminal.
///
/// Implementations must surface an interrupt of a pending `read_line` as
/// [`AcquireError::Aborted`] rather than delivering a partial line.
pub trait LineEngine {
    /// Print `prompt` and block until the user submits one complete line.
    ///
    /// The returned text carries no trailing newline.
    fn read_line(&mut self, prompt: &str) -> Result<String, AcquireError>;

    /// Install or remove the word completer consulted on tab.
    fn set_completer(&mut self, completer: Option<WordCompleter>);

    /// Record one line in the in-memory history store.
    fn add_history_entry(&mut self, line: &str);

    /// Replace the in-memory history store with the contents of `path`.
    fn load_history(&mut self, path: &Path) -> io::Result<()>;

    /// Serialize the in-memory history store to `path`, creating or
    /// truncating the file.
    fn save_history(&mut self, path: &Path) -> io::Result<()>;

    /// Whether the engine is attached to a terminal that supports editing
    /// (as opposed to input redirected from a file or pipe).
    fn is_terminal(&self) -> bool;

    /// Release terminal resources, restoring the prior terminal mode.
    fn shutdown(&mut self) -> io::Result<()> {
        Ok(())
    }
}
