mod cmd;
mod logging;
mod prompt;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use dailyprompt_core::config::loader::ConfigLoader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "dprompt",
    version,
    about = "Answer your daily prompts into a section of today's note"
)]
pub struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Answer the configured prompts and write them into the daily note
    Fill(FillArgs),

    /// Print the prompt section of a daily note
    Show(ShowArgs),

    /// Manage the list of prompts
    #[command(subcommand)]
    Questions(QuestionsCommand),

    /// Generate a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct FillArgs {
    /// Date of the daily note (YYYY-MM-DD, "today" or "yesterday"); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Answer for the next question, in order (repeatable)
    #[arg(long = "answer", short = 'a')]
    pub answers: Vec<String>,

    /// Never prompt; fail if an answer is missing
    #[arg(long)]
    pub batch: bool,

    /// Print the resulting note instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Date of the daily note (YYYY-MM-DD, "today" or "yesterday"); defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum QuestionsCommand {
    /// List the configured prompts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a prompt at the end of the list
    Add {
        /// Prompt text
        text: String,

        /// Field type: text, note, embedded-note-file, checkbox, text-area, slider
        #[arg(long, default_value = "text")]
        field: String,
    },

    /// Remove a prompt by its 1-based position
    Remove {
        /// Position as shown by `questions list`
        index: usize,
    },

    /// Change the text or field type of a prompt
    Edit {
        /// Position as shown by `questions list`
        index: usize,

        /// New prompt text
        #[arg(long)]
        text: Option<String>,

        /// New field type
        #[arg(long)]
        field: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let _log_guard = ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref())
        .ok()
        .and_then(|cfg| logging::init(&cfg.logging));

    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Fill(args) => cmd::fill::run(config, profile, &args),
        Commands::Show(args) => cmd::show::run(config, profile, &args),
        Commands::Questions(command) => cmd::questions::run(config, command),
        Commands::Completions { shell } => cmd::completions::run(shell),
    }
}
