//! Palaver is a terminal chat client for a single `/generate` endpoint.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation session, provider/model selection,
//!   configuration, and the request service.
//! - [`ui`] renders the terminal interface and runs the interactive event loop.
//! - [`api`] defines the `/generate` wire types and the HTTP call.
//! - [`cli`] parses arguments and dispatches to chat or one-shot commands.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
