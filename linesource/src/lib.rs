#![forbid(unsafe_code)]

/// linesource: interactive line editing exposed as a plain byte stream.
///
/// A [`LineSource`](crate::core::reader::LineSource) wraps a line-editing
/// engine (history recall, tab completion) and implements `std::io::Read`,
/// so any line-oriented consumer can scan interactively edited input
/// without knowing a terminal is involved.
///
/// # Architecture (SEA Pattern)
///
/// - `api/` — public types re-exported at crate root
/// - `core/` — implementations (reader, completer, history, config, engine contract)
/// - `spi/` — external provider integration (rustyline-backed engine)
pub mod api;
pub mod core;
pub mod spi;

// Re-export the API surface at crate root for convenience.
pub use api::*;
