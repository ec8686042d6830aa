//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Deposit form helpers: leaf traversal over metadata trees, category labels, list-entry models
#[derive(Parser, Debug)]
#[command(name = "rdm-deposit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding a local .rdm-deposit.toml (default: cwd)
    #[arg(short = 'C', long, global = true, env = "RDMDEPOSIT_PROJECT_DIR", value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every leaf value of a JSON/TOML document
    Leaves {
        /// Document file (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Prefix each value with its field path
        #[arg(short, long)]
        paths: bool,
    },

    /// Print the number of leaves and nesting depth
    Count {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show a document as a tree
    Tree {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print the display label of a category
    Label {
        /// Category key (default: configured category)
        key: Option<String>,
        /// Plural form
        #[arg(short, long)]
        plural: bool,
        /// Upper-case first letter
        #[arg(short, long)]
        capitalized: bool,
    },

    /// List field paths of a repeatable entry group
    Fields {
        /// Entry kind: publication or project
        kind: String,
        /// Field path prefix
        #[arg(long, default_value = "")]
        prefix: String,
        /// Entry index
        #[arg(long, default_value_t = 0)]
        index: usize,
    },

    /// Sort select options by text
    SortOptions {
        /// JSON/TOML list of {text, value} (or table with `options`)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
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
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
