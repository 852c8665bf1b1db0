use std::fmt;
use std::str::FromStr;

// ─── Mode markers ─────────────────────────────────────────────────────────

pub const ASK_MARKER: &str =
    "[MODE: ASK - Please answer the question without modifying any files]";
pub const DEBUG_MARKER: &str = "[MODE: DEBUG - Focus on finding and fixing bugs in the code]";
pub const PLANNER_MARKER: &str =
    "[MODE: PLANNER - Create a detailed plan for the following task but do not execute yet]";

// ─── Mode ─────────────────────────────────────────────────────────────────

/// Behavioural hint for a single invocation.
///
/// `cursor-agent` has no protocol-level mode switch, so every mode other
/// than [`Mode::Agent`] is expressed as a bracketed marker prefixed to the
/// prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Answer only; never touch the workspace.
    Ask,
    /// Plain agent run, prompt passed through untouched.
    #[default]
    Agent,
    /// Produce a plan without executing it.
    Planner,
    /// Focus on locating and fixing bugs.
    Debug,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ask => "ask",
            Mode::Agent => "agent",
            Mode::Planner => "planner",
            Mode::Debug => "debug",
        }
    }

    /// The fixed prompt prefix for this mode, if any.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Mode::Ask => Some(ASK_MARKER),
            Mode::Agent => None,
            Mode::Planner => Some(PLANNER_MARKER),
            Mode::Debug => Some(DEBUG_MARKER),
        }
    }

    /// Rewrite `prompt` for this mode: `"{marker} {prompt}"`, or the prompt
    /// unchanged for [`Mode::Agent`].
    pub fn apply(&self, prompt: &str) -> String {
        match self.marker() {
            Some(marker) => format!("{marker} {prompt}"),
            None => prompt.to_owned(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ask" => Ok(Mode::Ask),
            "agent" => Ok(Mode::Agent),
            "planner" | "plan" => Ok(Mode::Planner),
            "debug" => Ok(Mode::Debug),
            other => Err(format!(
                "unknown mode '{other}' (expected ask, agent, planner or debug)"
            )),
        }
    }
}

// ─── AgentOptions ─────────────────────────────────────────────────────────

/// Per-call options for [`CursorAgentClient::agent`](crate::CursorAgentClient::agent).
///
/// Built fresh for every call and never stored by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOptions {
    /// Model name passed via `--model` (e.g. `"gpt-5.2"`)
    pub model: Option<String>,
    pub mode: Mode,
    /// Auto-approve file changes and commands (`--force`)
    pub force: bool,
    /// Opaque chat id from [`create_chat`](crate::CursorAgentClient::create_chat),
    /// passed via `--resume`
    pub chat_id: Option<String>,
    /// Request non-interactive printed output (`--print`)
    pub print_output: bool,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            model: None,
            mode: Mode::Agent,
            force: true,
            chat_id: None,
            print_output: true,
        }
    }
}

impl AgentOptions {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_chat_id(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = Some(chat_id.into());
        self
    }

    pub fn with_print_output(mut self, print_output: bool) -> Self {
        self.print_output = print_output;
        self
    }
}
