//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::Label;
use crate::render::RenderStyle;

/// Rebuild binary trees from inorder and postorder sequences
#[derive(Parser, Debug)]
#[command(name = "retree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild a tree and print it
    Rebuild {
        /// Inorder labels, comma-separated
        #[arg(short, long, value_delimiter = ',', num_args = 0.., allow_negative_numbers = true)]
        inorder: Vec<Label>,

        /// Postorder labels, comma-separated
        #[arg(short, long, value_delimiter = ',', num_args = 0.., allow_negative_numbers = true)]
        postorder: Vec<Label>,

        /// Rendering (default from config)
        #[arg(short, long, value_enum)]
        render: Option<RenderStyle>,
    },

    /// Print the postorder of the balanced tree over 0..n-1
    Balanced {
        /// Number of nodes
        n: usize,
    },

    /// Time reconstructions of balanced trees
    Bench {
        /// Tree sizes, comma-separated (default from config)
        #[arg(short, long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
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

    /// Show config paths
    Path,
}
