/// End-to-end tests for the stream bridge over a scripted engine.
///
/// These tests verify scanner-style consumption, history persistence
/// across instances, and close semantics without a real terminal.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use linesource::{AcquireError, LineEngine, LineSource, WordCompleter};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// Engine that replays a fixed script and persists its history store one
/// entry per line.
struct ScriptedEngine {
    script: VecDeque<Result<String, AcquireError>>,
    history: Vec<String>,
}

impl ScriptedEngine {
    fn lines(lines: &[&str]) -> Self {
        Self {
            script: lines.iter().map(|l| Ok((*l).to_string())).collect(),
            history: Vec::new(),
        }
    }

    fn failing(err: AcquireError) -> Self {
        Self {
            script: VecDeque::from([Err(err)]),
            history: Vec::new(),
        }
    }
}

impl LineEngine for ScriptedEngine {
    fn read_line(&mut self, _prompt: &str) -> Result<String, AcquireError> {
        self.script.pop_front().unwrap_or(Err(AcquireError::Eof))
    }

    fn set_completer(&mut self, _completer: Option<WordCompleter>) {}

    fn add_history_entry(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn load_history(&mut self, path: &Path) -> io::Result<()> {
        let content = fs::read_to_string(path)?;
        self.history.extend(content.lines().map(String::from));
        Ok(())
    }

    fn save_history(&mut self, path: &Path) -> io::Result<()> {
        let mut out = self.history.join("\n");
        out.push('\n');
        fs::write(path, out)
    }

    fn is_terminal(&self) -> bool {
        true
    }
}

fn temp_history(test_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "linesource_reader_io_{}_{}",
        test_name,
        std::process::id()
    ))
}

fn drain_all(source: &mut LineSource<ScriptedEngine>) {
    let mut sink = Vec::new();
    source.read_to_end(&mut sink).unwrap();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_lines_iterate_like_a_scanner() {
    let engine = ScriptedEngine::lines(&["hello", "", "world"]);
    let source = LineSource::with_engine(engine, "> ", None);

    let collected: Vec<String> = BufReader::new(source)
        .lines()
        .map(|l| l.unwrap())
        .collect();

    // `lines` strips the `\r\n` framing; the iterator ends cleanly at Eof.
    assert_eq!(collected, vec!["hello", "", "world"]);
}

#[test]
fn test_byte_by_byte_equals_bulk() {
    let engine = ScriptedEngine::lines(&["alpha", "beta"]);
    let mut source = LineSource::with_engine(engine, "> ", None);
    let mut trickled = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match source.read(&mut byte).unwrap() {
            0 => break,
            n => trickled.extend_from_slice(&byte[..n]),
        }
    }

    let engine = ScriptedEngine::lines(&["alpha", "beta"]);
    let mut source = LineSource::with_engine(engine, "> ", None);
    let mut bulk = Vec::new();
    source.read_to_end(&mut bulk).unwrap();

    assert_eq!(trickled, b"alpha\r\nbeta\r\n");
    assert_eq!(trickled, bulk);
}

#[test]
fn test_history_persists_across_instances() {
    let path = temp_history("persists");
    let _ = fs::remove_file(&path);

    let engine = ScriptedEngine::lines(&["first", "second"]);
    let mut source = LineSource::with_engine(engine, "> ", Some(path.clone()));
    drain_all(&mut source);
    source.close().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");

    // A fresh instance loads the stored entries and appends to them.
    let engine = ScriptedEngine::lines(&["third"]);
    let mut source = LineSource::with_engine(engine, "> ", Some(path.clone()));
    drain_all(&mut source);
    source.close().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\nthird\n");

    let _ = fs::remove_file(path);
}

#[test]
fn test_missing_history_file_is_tolerated() {
    let path = temp_history("missing");
    let _ = fs::remove_file(&path);

    let engine = ScriptedEngine::lines(&["survivor"]);
    let mut source = LineSource::with_engine(engine, "> ", Some(path.clone()));
    drain_all(&mut source);
    source.close().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "survivor\n");

    let _ = fs::remove_file(path);
}

#[test]
fn test_unwritable_history_path_does_not_fail_close() {
    let path = temp_history("no_dir").join("nested").join("history");

    let engine = ScriptedEngine::lines(&["kept in memory only"]);
    let mut source = LineSource::with_engine(engine, "> ", Some(path));
    drain_all(&mut source);

    assert!(source.close().is_ok());
}

#[test]
fn test_abort_surfaces_once_and_sticks() {
    let engine = ScriptedEngine::failing(AcquireError::Aborted);
    let mut source = LineSource::with_engine(engine, "> ", None);

    let mut buf = [0u8; 8];
    let first = source.read(&mut buf).unwrap_err();
    let second = source.read(&mut buf).unwrap_err();

    assert_ne!(first.kind(), io::ErrorKind::Interrupted);
    assert_eq!(first.kind(), second.kind());
    assert_eq!(first.to_string(), second.to_string());
}
