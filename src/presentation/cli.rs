//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --out, --task, --entry, --parallel, --json, --verbose)
//!   are inherited by all subcommands
//! - Hosts given on the command line replace the host list of the config file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Which generated script a command refers to
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Run,
    Clean,
}

/// Fire - generate rsync + tmux deployment scripts for a set of hosts
#[derive(Parser, Debug)]
#[command(name = "fire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Deployment file (default: ./fire.toml, then the user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for config.json, run and clean
    #[arg(short, long, global = true)]
    pub out: Option<PathBuf>,

    /// Task (session) name
    #[arg(short, long, global = true)]
    pub task: Option<String>,

    /// Local application entry file
    #[arg(short, long, global = true)]
    pub entry: Option<PathBuf>,

    /// Run the push phase of all hosts in parallel
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Print a JSON summary instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write config.json, run and clean
    Generate {
        /// Target hosts (user@host)
        hosts: Vec<String>,
    },

    /// Generate, then execute the run script
    Run {
        /// Target hosts (user@host)
        hosts: Vec<String>,
    },

    /// Generate, then execute the clean script
    Clean {
        /// Target hosts (user@host)
        hosts: Vec<String>,
    },

    /// Generate, then print one of the scripts
    Show {
        /// Script to print
        #[arg(value_enum)]
        script: ScriptKind,

        /// Target hosts (user@host)
        hosts: Vec<String>,
    },
}

impl Commands {
    /// Hosts passed on the command line
    pub fn hosts(&self) -> &[String] {
        match self {
            Commands::Generate { hosts }
            | Commands::Run { hosts }
            | Commands::Clean { hosts }
            | Commands::Show { hosts, .. } => hosts,
        }
    }

    /// Script to execute after generating, if any
    pub fn script_to_execute(&self) -> Option<ScriptKind> {
        match self {
            Commands::Run { .. } => Some(ScriptKind::Run),
            Commands::Clean { .. } => Some(ScriptKind::Clean),
            Commands::Generate { .. } | Commands::Show { .. } => None,
        }
    }
}
