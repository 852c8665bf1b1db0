use std::path::{Path, PathBuf};

use crate::process::{self, Invocation, CREATE_CHAT_SUBCOMMAND};
use crate::session::parse_chat_id;
use crate::types::{AgentOptions, Mode};
use crate::Result;

/// Executable looked up on `PATH` when no explicit path is given.
pub const DEFAULT_AGENT_PATH: &str = "cursor-agent";

// ─── CursorAgentClient ────────────────────────────────────────────────────

/// Synchronous driver for the `cursor-agent` CLI.
///
/// The executable and workspace are resolved once in [`new`](Self::new) and
/// never change afterwards, even if `PATH` or the process cwd do. Every call
/// is an independent subprocess round trip; multi-turn conversations are
/// built by threading a chat id from [`create_chat`](Self::create_chat)
/// through [`AgentOptions::chat_id`].
///
/// # Example
///
/// ```rust,ignore
/// use cursor_agent::{AgentOptions, CursorAgentClient};
///
/// let client = CursorAgentClient::new("cursor-agent", None);
/// let chat = client.create_chat()?;
/// client.agent("My name is Ada.", &AgentOptions::default().with_chat_id(&chat))?;
/// let reply = client.agent("What is my name?", &AgentOptions::default().with_chat_id(&chat))?;
/// ```
#[derive(Debug, Clone)]
pub struct CursorAgentClient {
    agent_path: PathBuf,
    workspace: PathBuf,
}

impl CursorAgentClient {
    /// Resolve `agent_path` on the search path and fix the workspace.
    ///
    /// An executable that cannot be found is kept as the literal value; the
    /// failure then surfaces as [`CursorAgentError::Spawn`](crate::CursorAgentError::Spawn)
    /// on the first invocation. `workspace` defaults to the current directory.
    pub fn new(agent_path: impl AsRef<Path>, workspace: Option<PathBuf>) -> Self {
        let agent_path = agent_path.as_ref();
        let resolved = match which::which(agent_path) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(
                    agent = %agent_path.display(),
                    error = %e,
                    "cursor-agent not found on PATH; using literal path"
                );
                agent_path.to_path_buf()
            }
        };

        let workspace = workspace.unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        });

        tracing::debug!(
            agent = %resolved.display(),
            workspace = %workspace.display(),
            "cursor-agent client configured"
        );

        Self {
            agent_path: resolved,
            workspace,
        }
    }

    pub fn agent_path(&self) -> &Path {
        &self.agent_path
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Assemble the command line for `prompt` without running it.
    pub fn invocation(&self, prompt: &str, opts: &AgentOptions) -> Invocation {
        Invocation {
            program: self.agent_path.clone(),
            args: process::build_args(&self.workspace, prompt, opts),
        }
    }

    /// Run the agent with `prompt` and return its trimmed stdout.
    pub fn agent(&self, prompt: &str, opts: &AgentOptions) -> Result<String> {
        tracing::info!(
            mode = %opts.mode,
            model = opts.model.as_deref().unwrap_or("default"),
            force = opts.force,
            resume = opts.chat_id.is_some(),
            "running cursor-agent"
        );
        self.invocation(prompt, opts).run()
    }

    /// Create a new empty chat and return its id.
    ///
    /// A failed `create-chat` reports its stderr, or its stdout when stderr
    /// is empty, using the same rule as [`agent`](Self::agent).
    pub fn create_chat(&self) -> Result<String> {
        let out = process::run_captured(&self.agent_path, [CREATE_CHAT_SUBCOMMAND])?;
        let chat_id = parse_chat_id(&out)?;
        tracing::info!(chat_id = %chat_id, "created chat");
        Ok(chat_id)
    }

    /// Ask a question. Never auto-approves, since ask mode must not modify files.
    pub fn ask(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        self.agent(prompt, &helper_options(Mode::Ask, model).with_force(false))
    }

    pub fn debug(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        self.agent(prompt, &helper_options(Mode::Debug, model))
    }

    pub fn plan(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        self.agent(prompt, &helper_options(Mode::Planner, model))
    }
}

impl Default for CursorAgentClient {
    fn default() -> Self {
        Self::new(DEFAULT_AGENT_PATH, None)
    }
}

pub(crate) fn helper_options(mode: Mode, model: Option<&str>) -> AgentOptions {
    AgentOptions {
        model: model.map(str::to_owned),
        mode,
        ..Default::default()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
