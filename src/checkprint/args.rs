use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "checkprint", version)]
#[command(about = "Lay out checklists for thermal receipt printers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options shared by every command that produces a document.
#[derive(Args, Debug, Default, Clone)]
pub struct LayoutArgs {
    /// Printable columns (defaults to the configured width)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Pin the "Printed:" timestamp, as "YYYY-MM-DD HH:MM"
    #[arg(long, value_name = "TIMESTAMP")]
    pub printed_at: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a checklist JSON file to stdout
    #[command(alias = "r")]
    Render {
        /// Checklist file, or - for stdin
        file: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render a checklist and send it to the configured printer
    #[command(alias = "p")]
    Print {
        /// Checklist file, or - for stdin
        file: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render the built-in demo checklist
    Demo {
        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (width, printer, output-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
