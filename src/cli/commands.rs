//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docpeek")]
#[command(about = "Preview vim help tags, man pages and topics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Verbose logging to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: $DOCPEEK_CONFIG, then the user config dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Pipe output through this command, e.g. "bat -l help"
    #[arg(long, value_name = "CMD", global = true)]
    pub formatter: Option<String>,

    /// When to style output (auto, always, never)
    #[arg(long, value_name = "WHEN", global = true)]
    pub color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preview a vim help entry
    #[command(name = "vim:help")]
    VimHelp {
        /// Key of help item
        #[arg(short, long)]
        key: String,

        /// Path of the vim runtime (default: /usr/share/nvim/runtime)
        #[arg(short = 'r', long = "vimruntime", value_name = "DIR")]
        runtime: Option<PathBuf>,

        /// Most lines to display (default: 20)
        #[arg(short = 'l', long = "max-lines", value_name = "N",
              value_parser = clap::value_parser!(u32).range(1..))]
        max_lines: Option<u32>,
    },

    /// Show manpage/help for a CLI command
    #[command(name = "cli:help")]
    CliHelp {
        /// Key of item (program name)
        #[arg(short, long)]
        key: String,
    },

    /// Preview a top-level topic
    #[command(name = "vim:toplevel")]
    VimToplevel {
        /// Key of item (topic name)
        #[arg(short, long, required_unless_present = "list")]
        key: Option<String>,

        /// List topic names instead
        #[arg(long, conflicts_with = "key")]
        list: bool,
    },

    /// Show the effective configuration
    Config,
}
