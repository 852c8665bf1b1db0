use anyhow::Context;
use clap::Args;
use cursor_agent::{AgentOptions, CursorAgentClient, Mode};
use serde::Serialize;

use crate::output::{print_json, print_value};

// ---------------------------------------------------------------------------
// Shared options
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct InvocationArgs {
    /// Mode: ask, agent, planner (or plan), debug
    #[arg(long, default_value = "agent")]
    mode: Mode,

    /// Do not auto-approve file changes and commands
    #[arg(long)]
    no_force: bool,

    /// Resume an existing chat (id from `create-chat`)
    #[arg(long, alias = "resume")]
    chat_id: Option<String>,

    /// Let the agent run interactively instead of printing its response
    #[arg(long)]
    no_print: bool,
}

impl InvocationArgs {
    fn into_options(self, model: Option<&str>) -> AgentOptions {
        AgentOptions {
            model: model.map(str::to_owned),
            mode: self.mode,
            force: !self.no_force,
            chat_id: self.chat_id,
            print_output: !self.no_print,
        }
    }
}

// ---------------------------------------------------------------------------
// agent / ask / debug / plan
// ---------------------------------------------------------------------------

pub fn run(
    client: &CursorAgentClient,
    prompt: &str,
    args: InvocationArgs,
    model: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let opts = args.into_options(model);
    let response = client
        .agent(prompt, &opts)
        .with_context(|| format!("cursor-agent failed in {} mode", opts.mode))?;
    print_value("response", &response, json)
}

pub fn ask(
    client: &CursorAgentClient,
    prompt: &str,
    model: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let response = client
        .ask(prompt, model)
        .context("cursor-agent failed in ask mode")?;
    print_value("response", &response, json)
}

pub fn debug(
    client: &CursorAgentClient,
    prompt: &str,
    model: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let response = client
        .debug(prompt, model)
        .context("cursor-agent failed in debug mode")?;
    print_value("response", &response, json)
}

pub fn plan(
    client: &CursorAgentClient,
    prompt: &str,
    model: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let response = client
        .plan(prompt, model)
        .context("cursor-agent failed in planner mode")?;
    print_value("response", &response, json)
}

// ---------------------------------------------------------------------------
// args (dry run)
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CommandLine {
    program: String,
    args: Vec<String>,
}

pub fn show_args(
    client: &CursorAgentClient,
    prompt: &str,
    args: InvocationArgs,
    model: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let opts = args.into_options(model);
    let mut argv = client.invocation(prompt, &opts).argv().into_iter();
    let program = argv.next().unwrap_or_default();
    let args: Vec<String> = argv.collect();

    if json {
        return print_json(&CommandLine { program, args });
    }

    println!("{program}");
    for arg in &args {
        println!("{arg}");
    }
    Ok(())
}
