//! `cursor-agent` — synchronous Rust client for the Cursor Agent CLI.
//!
//! The crate does no agent work itself. It resolves the `cursor-agent`
//! executable once, turns typed options into a command line, runs the tool
//! as a child process and hands back its trimmed stdout.
//!
//! # Architecture
//!
//! ```text
//! CursorAgentClient   ← executable + workspace, fixed at construction
//!     │
//!     ▼
//! AgentOptions + prompt
//!     │
//!     ▼
//! Invocation          ← `cursor-agent --print [--force] [--model m]
//!     │                   [--resume id] --workspace dir agent "<prompt>"`
//!     ▼
//! run_captured        ← blocking std::process spawn; stdout or Process error
//! ```
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cursor_agent::{AgentOptions, CursorAgentClient, Mode};
//!
//! let client = CursorAgentClient::new("cursor-agent", Some("/tmp/ws".into()));
//! let answer = client.ask("What is the capital of France?", Some("gpt-5.2"))?;
//! let patch = client.agent(
//!     "Add a README",
//!     &AgentOptions::default().with_mode(Mode::Agent),
//! )?;
//! ```

pub mod client;
pub mod error;
pub mod process;
pub mod session;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::{CursorAgentClient, DEFAULT_AGENT_PATH};
pub use error::CursorAgentError;
pub use process::Invocation;
pub use session::parse_chat_id;
pub use types::{AgentOptions, Mode, ASK_MARKER, DEBUG_MARKER, PLANNER_MARKER};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, CursorAgentError>;
