use std::io::{BufRead, BufReader};

use anyhow::Result;
use linesource::{CompletionAnchor, LineSource, SourceConfig};
use tracing::debug;
use tracing_subscriber::prelude::*;

/// Demo vocabulary offered when the rc file configures none.
const DEMO_WORDS: &[&str] = &[
    "hello", "help", "anywhere", "who", "whatever", "goodbye", "there", "here", "another", "any",
];

fn main() -> Result<()> {
    // Initialize tracing subscriber. Honors RUST_LOG env var for filtering.
    // Default: warnings only. Example: RUST_LOG=linesource=debug
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = SourceConfig::load();
    debug!(prompt = %config.prompt, history = ?config.history_file, "configuration loaded");

    let mut source = LineSource::new(config.prompt.clone(), config.history_path())?;
    source.set_cont_prompt(config.cont_prompt.clone());
    source.set_eol(config.eol.clone());

    if config.completions.is_empty() {
        source.set_completions(
            DEMO_WORDS.iter().map(|w| (*w).to_string()).collect(),
            CompletionAnchor::LastWord,
        );
    } else {
        source.set_completions(config.completions.clone(), config.anchor);
    }

    let mut reader = BufReader::new(source);
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let text = line.trim_end_matches(['\r', '\n']);
                if text.is_empty() {
                    continue;
                }
                println!("scanned: {}", text);
            }
            Err(err) => {
                eprintln!("read error: {}", err);
                break;
            }
        }
    }

    reader.into_inner().close()?;

    Ok(())
}
