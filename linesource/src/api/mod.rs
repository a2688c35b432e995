/// L2 API: Public types and traits for the linesource crate.
///
/// Re-exports the main user-facing types from the core layer.
pub use crate::core::completer::{CompletionAnchor, WordCompleter, WORD_DELIMITERS};
pub use crate::core::config::{expand_home, SourceConfig};
pub use crate::core::engine::{AcquireError, LineEngine};
pub use crate::core::history::HistoryFile;
pub use crate::core::reader::{LineSource, DEFAULT_EOL};
pub use crate::spi::rustyline::RustylineEngine;
