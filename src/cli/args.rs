//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// In-memory course catalog: ordered listing, lookup, keyword search and prerequisite ranking
#[derive(Parser, Debug)]
#[command(name = "course-planner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Catalog file (CSV: id,name[,prerequisite...])
    #[arg(short, long, global = true, env = "COURSE_PLANNER_CATALOG", value_hint = ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// Catalog has no header row
    #[arg(long, global = true)]
    pub no_header: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print all courses in identifier order
    List,

    /// Print one course and its prerequisites
    Show {
        /// Course identifier (case-insensitive)
        id: String,
    },

    /// Find courses whose id or name contains a keyword
    Search {
        /// Keyword (case-insensitive)
        keyword: String,
    },

    /// Print courses by number of prerequisites, most first
    #[command(name = "by-prereqs")]
    ByPrereqs,

    /// Show the shape of the index
    Tree,

    /// Query the document store
    Store {
        #[command(subcommand)]
        command: StoreCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum StoreCommands {
    /// Print every course in the store
    List,

    /// Print one course from the store
    Show {
        /// Course identifier (case-insensitive)
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create local config in the current directory instead of the global one
        #[arg(short, long)]
        local: bool,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
