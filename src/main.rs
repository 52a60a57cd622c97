//! Snag: interactive oneliner picker.
//!
//! One invocation does four things in order: load the oneliners template,
//! substitute the configured target address/port/protocol into it, walk the
//! root folder and let the operator pick a file from a searchable list, then
//! render the template for the picked file to stdout.
//!
//! The prompt UI lives on stderr; stdout carries nothing but the final
//! rendered oneliner, so the output can be piped or captured directly.

mod cli;
mod config;
mod error;
mod exit_codes;
mod scan;
mod select;
mod template;

use cli::Cli;
use config::Config;
use error::{Result, SnagError};
use select::{Outcome, Picker};
use std::io::Write;
use std::process::ExitCode;
use template::Engine;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Load, substitute, enumerate, select, render. Cancellation ends the
/// invocation silently with a success exit code.
fn run(cli: Cli) -> Result<()> {
    let config = Config::assemble(&cli)?;

    let raw = template::load(config.template.as_deref())?;
    let doc = template::substitute_globals(&raw, &config);

    let excludes = config.exclude_set()?;
    let files = scan::enumerate(&config.root, &excludes)?;
    if files.is_empty() {
        return Err(SnagError::NoItems(format!(
            "'{}' contains no files",
            config.root.display()
        )));
    }

    let engine = Engine::new();
    let picker = Picker::new("File", &files);

    match picker.run(|entry| template::render_entry(&engine, &doc, entry))? {
        Outcome::Confirmed(index) => {
            let rendered = template::render_entry(&engine, &doc, &files[index])?;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| SnagError::Template(format!("failed to write oneliner: {}", e)))?;
            Ok(())
        }
        Outcome::Cancelled => Ok(()),
    }
}
