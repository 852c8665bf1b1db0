use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::types::AgentOptions;
use crate::{CursorAgentError, Result};

pub const PRINT_FLAG: &str = "--print";
pub const FORCE_FLAG: &str = "--force";
pub const MODEL_FLAG: &str = "--model";
pub const RESUME_FLAG: &str = "--resume";
pub const WORKSPACE_FLAG: &str = "--workspace";

pub const AGENT_SUBCOMMAND: &str = "agent";
pub const CREATE_CHAT_SUBCOMMAND: &str = "create-chat";

// ─── Invocation ───────────────────────────────────────────────────────────

/// A fully assembled command line: the resolved program plus its arguments.
///
/// Building one never spawns anything, so the exact argument vector can be
/// inspected (and printed by `cursor-sdk args`) before it is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Program followed by every argument, lossily converted for display.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect()
    }

    /// Run to completion and return stdout with surrounding whitespace removed.
    pub fn run(&self) -> Result<String> {
        run_captured(&self.program, &self.args).map(|out| out.trim().to_owned())
    }
}

// ─── Command builder ──────────────────────────────────────────────────────

/// Assemble the argument vector for an `agent` call.
///
/// Order is fixed: `--print`, `--force`, `--model <m>`, `--resume <id>`,
/// `--workspace <dir>`, then the `agent` sub-command and the (mode-rewritten)
/// prompt as the last two entries.
pub fn build_args(workspace: &Path, prompt: &str, opts: &AgentOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();

    if opts.print_output {
        args.push(PRINT_FLAG.into());
    }

    if opts.force {
        args.push(FORCE_FLAG.into());
    }

    if let Some(model) = non_empty(&opts.model) {
        args.push(MODEL_FLAG.into());
        args.push(model.into());
    }

    if let Some(chat_id) = non_empty(&opts.chat_id) {
        args.push(RESUME_FLAG.into());
        args.push(chat_id.into());
    }

    if !workspace.as_os_str().is_empty() {
        args.push(WORKSPACE_FLAG.into());
        args.push(workspace.as_os_str().to_owned());
    }

    args.push(AGENT_SUBCOMMAND.into());
    args.push(opts.mode.apply(prompt).into());
    args
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ─── Execution ────────────────────────────────────────────────────────────

/// Spawn `program` with `args`, block until it exits and return its raw
/// stdout.
///
/// Stdin is inherited from the current process; stdout and stderr are
/// captured and decoded lossily. A non-zero exit (or death by signal)
/// becomes [`CursorAgentError::Process`] carrying stderr, or stdout when
/// stderr is empty.
pub fn run_captured<I, S>(program: &Path, args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<S> = args.into_iter().collect();
    let mut cmd = Command::new(program);
    cmd.args(&args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::debug!(
        program = %program.display(),
        args = args.len(),
        "spawning cursor-agent"
    );

    let output = cmd.output().map_err(|source| CursorAgentError::Spawn {
        program: program.display().to_string(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let code = output.status.code();
    tracing::debug!(?code, stdout_bytes = output.stdout.len(), "cursor-agent exited");

    if output.status.success() {
        return Ok(stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    let message = if stderr.is_empty() { stdout } else { stderr };
    tracing::warn!(?code, "cursor-agent failed");

    Err(CursorAgentError::Process { message, code })
}

// ─── Tests ────────────────────────────────────────────────────────────────
