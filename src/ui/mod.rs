//! Terminal UI for interactive chat sessions.
//!
//! - [`chat_loop`]: terminal setup, key handling and the main loop.
//! - [`renderer`]: selectors, transcript and input composition.
//! - [`theme`]: color and style choices.
//!
//! Conversation state and request handling live in [`crate::core`].

pub mod chat_loop;
pub mod renderer;
pub mod theme;
