use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "zentro")]
#[command(about = "A terminal focus timer with session history")]
#[command(long_about = "zentro - a terminal focus timer

Set a duration, start the countdown, and stay on task. When the timer
runs out you get a motivational message and the session is logged.
The last 10 sessions are kept, along with a count for the past week.

QUICK START:
  zentro                 Open the timer (25 minutes by default)
  zentro run -m 50       Open the timer with 50 minutes filled in
  zentro history         List recent sessions
  zentro stats           Sessions completed this week

KEYS (inside the timer):
  s start   p pause   r reset   0-9 edit minutes   Enter apply   q quit")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Data directory (defaults to ~/.zentro)
    #[arg(long, env = "ZENTRO_HOME", global = true)]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer
    ///
    /// This is the default when no command is given.
    ///
    /// # Examples
    ///
    ///   zentro run              Use the configured default duration
    ///   zentro run -m 45        Start with 45 in the minutes field
    #[command(alias = "r")]
    Run(RunArgs),

    /// List recent focus sessions
    ///
    /// Shows the most recent sessions, newest first, with a relative
    /// date ("Today", "Yesterday", or the date) and the duration.
    ///
    /// # Examples
    ///
    ///   zentro history
    ///   zentro history -n 3
    ///   zentro history -o json
    #[command(alias = "h")]
    History {
        /// Maximum number of sessions to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show sessions completed in the last 7 days
    Stats,

    /// Delete all session history
    Clear {
        /// Skip the safety check
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    ///
    /// Example: zentro completions bash > ~/.bash_completion.d/zentro
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for the interactive timer.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Initial value of the minutes field
    #[arg(short, long)]
    pub minutes: Option<String>,
}
