/// L3 Core: stream bridge, completion filter, history, config, and the
/// engine contract.
pub mod completer;
pub mod config;
pub mod engine;
pub mod history;
pub mod reader;
