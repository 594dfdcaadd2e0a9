//! reqforge: a CLI that prepares template-driven HTTP requests.
//!
//! Request templates are INI-style files naming a host, headers, query
//! parameters and a body. The crate gathers template filenames from CLI
//! arguments or a stdin pipe, optionally routes a template through the
//! user's editor, and selects the external backend tool (curl, httpie,
//! wget) that would execute the request.
//!
//! The load-bearing primitive underneath all of that is
//! [`parse::tokenize_line`]: a shell-style tokenizer that splits editor
//! command strings and piped filename lists into argument tokens, with
//! quoting, escaping, and positional unterminated-quote diagnostics.
//!
//! # Architecture
//!
//! - **[`parse`]** — The tokenizer and its error-excerpt helper ([`parse::ellipsize()`]).
//! - **[`template`]** — Filename gathering, raw/edited template loading, starter template.
//! - **[`editor`]** — VISUAL/EDITOR resolution and editor invocation.
//! - **[`backend`]** — Backend-priority selection by PATH probing.
//! - **[`env`]** — Environment-file loading (process env wins).
//! - **[`config`]** — Embedded defaults + user overlay merge.
//! - **[`logging`]** — Terminal logger initialization.

/// Request-backend detection and selection.
pub mod backend;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Editor resolution and invocation.
pub mod editor;
/// Environment-file loading.
pub mod env;
/// Logger initialization.
pub mod logging;
/// Shell-style tokenizer and context ellipsizer.
pub mod parse;
/// Template filename gathering and content loading.
pub mod template;

pub use parse::{TokenizeError, ellipsize, tokenize_line};
