//! CLI argument parsing for snag.
//!
//! Uses clap derive macros for declarative argument definitions. Flags here
//! override values from an optional YAML config file; the merge lives in
//! [`Config::assemble`](crate::config::Config::assemble).

use clap::Parser;
use std::path::PathBuf;

/// Snag: interactive oneliner picker.
///
/// Walks a directory tree, lets you pick a file from a searchable list,
/// and prints a ready-to-paste transfer command with your target address,
/// port, and protocol filled in.
#[derive(Parser, Debug)]
#[command(name = "snag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root folder to enumerate.
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Target address substituted for every [IP] token in the template.
    #[arg(short, long)]
    pub ip: Option<String>,

    /// Target port substituted for every [PORT] token in the template.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Use https for the [PROTO] token instead of http.
    #[arg(long)]
    pub tls: bool,

    /// Path to a template file overriding the built-in oneliners template.
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Glob patterns excluded from enumeration (matched against the
    /// root-relative path).
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Path to a YAML config file supplying defaults for the flags above.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
