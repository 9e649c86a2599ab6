use clap::{Parser, Subcommand};
use globstore_core::{Subscript, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "globstore", about = "Globstore hierarchical store CLI", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Connection file for a remote server (key:value lines: ip, port,
    /// namespace, username, password). Without it, operations run against
    /// an in-process store that lives for this invocation only.
    #[arg(long, global = true)]
    pub connect: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set a value at global(subscripts...)
    Set {
        /// Global name
        global: String,

        /// Subscript path; numeric-looking args become numbers, wrap in
        /// double quotes (e.g. '"1"') to force a string subscript
        #[arg(num_args = 1.., required = true)]
        path: Vec<String>,

        /// Value to store
        #[arg(short = 'e', long = "value")]
        value: String,
    },

    /// Get the value at global(subscripts...)
    Get {
        /// Global name
        global: String,

        /// Subscript path
        #[arg(num_args = 1.., required = true)]
        path: Vec<String>,
    },

    /// Remove a subtree (no path removes the whole global)
    Kill {
        /// Global name
        global: String,

        /// Subscript path of the subtree to remove
        #[arg(num_args = 0..)]
        path: Vec<String>,

        /// Required to confirm removing an entire global (empty path)
        #[arg(long)]
        force: bool,
    },

    /// Bulk-load a text file, one record per line, under 1-based subscripts
    Load {
        /// Global name
        global: String,

        /// File to load
        file: PathBuf,
    },

    /// Print the direct children of a prefix in canonical order
    View {
        /// Global name
        global: String,

        /// Subscript prefix (empty for the root children)
        #[arg(num_args = 0..)]
        prefix: Vec<String>,
    },
}

/// Parse a subscript argument. Double-quoted text forces a string subscript
/// so numeric-looking keys like "1" can be addressed from the shell.
pub fn parse_subscript_arg(arg: &str) -> Subscript {
    if arg.len() >= 2 && arg.starts_with('"') && arg.ends_with('"') {
        return Subscript::Str(arg[1..arg.len() - 1].to_string());
    }
    Subscript::parse(arg)
}

pub fn parse_path_args(args: &[String]) -> Vec<Subscript> {
    args.iter().map(|a| parse_subscript_arg(a)).collect()
}

/// Parse a value argument: canonical integers and decimals become numbers,
/// booleans become booleans, everything else is stored as a string.
pub fn parse_value_arg(arg: &str) -> Value {
    match arg {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    match Subscript::parse(arg) {
        Subscript::Int(i) => Value::Long(i),
        Subscript::Num(n) => Value::Double(n),
        Subscript::Str(_) => Value::Str(arg.to_string()),
    }
}
