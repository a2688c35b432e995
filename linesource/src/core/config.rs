use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::completer::CompletionAnchor;
use super::reader::DEFAULT_EOL;

/// Reader settings loaded from the rc file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Prompt shown before continuation lines of a multiline input.
    #[serde(default = "default_prompt")]
    pub cont_prompt: String,

    /// End-of-line marker appended to every delivered line.
    #[serde(default = "default_eol")]
    pub eol: String,

    /// History file location; a leading `~` expands to the home directory.
    #[serde(default)]
    pub history_file: Option<String>,

    /// Completion vocabulary; empty disables completion.
    #[serde(default)]
    pub completions: Vec<String>,

    #[serde(default = "default_anchor")]
    pub anchor: CompletionAnchor,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            cont_prompt: default_prompt(),
            eol: default_eol(),
            history_file: None,
            completions: Vec::new(),
            anchor: default_anchor(),
        }
    }
}

impl SourceConfig {
    /// Load configuration from `~/.linesourcerc`, falling back to defaults
    /// when the file is missing or malformed.
    pub fn load() -> Self {
        let config_path = std::env::var_os("HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .map(|h| h.join(".linesourcerc"))
            .unwrap_or_else(|| PathBuf::from(".linesourcerc"));

        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<LinesourceRcFile>(&content) {
                return config.reader;
            }
        }

        Self::default()
    }

    /// The configured history location with `~` expanded.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.as_deref().map(expand_home)
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct LinesourceRcFile {
    #[serde(default)]
    reader: SourceConfig,
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        dirs::home_dir()
            .map(|h| h.join(&path[2..]))
            .unwrap_or_else(|| PathBuf::from(path))
    } else if path == "~" {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(path))
    } else {
        PathBuf::from(path)
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_eol() -> String {
    DEFAULT_EOL.to_string()
}

fn default_anchor() -> CompletionAnchor {
    CompletionAnchor::LastWord
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SourceConfig::default();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.cont_prompt, "> ");
        assert_eq!(config.eol, DEFAULT_EOL);
        assert!(config.history_file.is_none());
        assert!(config.completions.is_empty());
        assert_eq!(config.anchor, CompletionAnchor::LastWord);
    }

    #[test]
    fn test_parse_rc_table() {
        let content = r#"
            [reader]
            prompt = "db> "
            cont_prompt = "  ... "
            eol = "\n"
            history_file = "~/.demo_history"
            completions = ["select", "insert"]
            anchor = "linestart"
        "#;

        let rc: LinesourceRcFile = toml::from_str(content).unwrap();
        let config = rc.reader;

        assert_eq!(config.prompt, "db> ");
        assert_eq!(config.cont_prompt, "  ... ");
        assert_eq!(config.eol, "\n");
        assert_eq!(config.completions, vec!["select", "insert"]);
        assert_eq!(config.anchor, CompletionAnchor::LineStart);

        let history = config.history_path().unwrap();
        assert!(history.ends_with(".demo_history"));
        assert!(!history.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_empty_rc_falls_back_to_defaults() {
        let rc: LinesourceRcFile = toml::from_str("").unwrap();
        assert_eq!(rc.reader.prompt, "> ");
        assert_eq!(rc.reader.anchor, CompletionAnchor::LastWord);
    }

    #[test]
    fn test_expand_home_leaves_plain_paths_alone() {
        assert_eq!(expand_home("plain/path"), PathBuf::from("plain/path"));
    }
}
