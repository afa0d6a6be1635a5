//! minilinker - a terminal URL shortener demo
//!
//! Paste a long URL, get a random-looking short link, and count clicks on it.
//! Entries live in a local key-value store; nothing is resolvable remotely.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//! - **cli**: Headless commands (`add`, `list`, `visit`, `config`)
//! - **full**: All features enabled
//!
//! # Architecture
//! - `utils`: URL validation and short code generation
//! - `storage`: Key-value backends and the persisted entry list
//! - `services`: The link list and its operations
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `system`: Logging and platform helpers

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
