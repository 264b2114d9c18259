use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "qna", about = "Terminal client for a local Q&A answer service")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the interactive shell
    Run,
    /// Submit one question and print the answer
    Ask {
        /// The question text
        question: String,
        /// Username sent along with the question
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Check whether the answer service is reachable
    Health,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}
