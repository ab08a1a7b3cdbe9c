use crate::core::input::InputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rtable
/// CLI application to print CSV/TSV/JSON data as aligned terminal tables
#[derive(Parser)]
#[command(
    name = "rtable",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print CSV, TSV or JSON rows as an aligned, optionally colorized terminal table",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Render rows read from a file (or stdin) as an aligned table
    Render {
        /// Input file; omit or use "-" to read stdin
        #[arg(value_name = "FILE")]
        file: Option<String>,

        /// Input format
        #[arg(long, value_enum, default_value = "csv")]
        format: InputFormat,

        /// Field delimiter for CSV input (overrides config)
        #[arg(long, short = 'd')]
        delimiter: Option<char>,

        /// String printed before every row (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        prefix: Option<String>,

        /// String printed between columns (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        spacing: Option<String>,

        /// Treat the first record as a header row
        #[arg(long = "header", short = 'H')]
        header: bool,

        /// Header style, e.g. "bold+blue" or "none" (overrides config)
        #[arg(long = "header-style", value_name = "STYLE")]
        header_style: Option<String>,

        /// Draw a horizontal rule above and below the table
        #[arg(long)]
        rule: bool,

        /// Print the number of rendered rows and the input format after the table
        #[arg(long)]
        count: bool,
    },
}
