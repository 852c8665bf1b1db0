mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::agent::InvocationArgs;
use cursor_agent::{CursorAgentClient, DEFAULT_AGENT_PATH};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cursor-sdk",
    about = "Drive the Cursor Agent CLI — ask, plan, debug, and resume chats from scripts",
    version,
    propagate_version = true
)]
struct Cli {
    /// Path or name of the cursor-agent executable (looked up on PATH)
    #[arg(long, global = true, env = "CURSOR_AGENT_PATH", default_value = DEFAULT_AGENT_PATH)]
    agent_path: PathBuf,

    /// Workspace directory handed to the agent (default: current directory)
    #[arg(long, global = true, env = "CURSOR_AGENT_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Model to use (e.g. gpt-5.2, gemini-3-flash)
    #[arg(long, global = true, env = "CURSOR_AGENT_MODEL")]
    model: Option<String>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log subprocess activity to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the agent with a prompt
    Agent {
        /// Task or question for the agent
        prompt: String,

        #[command(flatten)]
        args: InvocationArgs,
    },

    /// Ask a question without modifying any files
    Ask {
        prompt: String,
    },

    /// Find and fix bugs
    Debug {
        prompt: String,
    },

    /// Produce a plan without executing it
    Plan {
        prompt: String,
    },

    /// Create a new empty chat and print its id
    CreateChat,

    /// Print the command line `agent` would run, without running it
    Args {
        prompt: String,

        #[command(flatten)]
        args: InvocationArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let client = CursorAgentClient::new(&cli.agent_path, cli.workspace);
    let model = cli.model.as_deref();

    let result = match cli.command {
        Commands::Agent { prompt, args } => cmd::agent::run(&client, &prompt, args, model, cli.json),
        Commands::Ask { prompt } => cmd::agent::ask(&client, &prompt, model, cli.json),
        Commands::Debug { prompt } => cmd::agent::debug(&client, &prompt, model, cli.json),
        Commands::Plan { prompt } => cmd::agent::plan(&client, &prompt, model, cli.json),
        Commands::CreateChat => cmd::chat::create(&client, cli.json),
        Commands::Args { prompt, args } => {
            cmd::agent::show_args(&client, &prompt, args, model, cli.json)
        }
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
