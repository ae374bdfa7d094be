// WRT - wrt-disasm
// Module: CLI Adapter
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Command-line entry point. Reads a Wasm file, disassembles it, and writes
//! the dump to stdout. Logging goes to stderr only, never interleaved with
//! the dump stream.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::Colorize;

/// Forensic disassembler for WebAssembly module binaries.
#[derive(Debug, Parser)]
#[command(name = "wrt-disasm", version, about)]
struct Cli {
    /// Path to the Wasm module to disassemble.
    file: PathBuf,

    /// Bytes per hex row.
    #[arg(short = 'w', long = "width", default_value_t = 8)]
    width: usize,

    /// Spaces per structured-control-flow indent level.
    #[arg(long = "indent", default_value_t = 2)]
    indent: usize,

    /// Recursive block-nesting cap.
    #[arg(long = "max-depth", default_value_t = 1024)]
    max_depth: usize,

    /// Raise log verbosity to debug.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Whether structural banner lines get ANSI styling.
    #[arg(long = "color", value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.color {
        ColorMode::Auto => {}
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }

    run(cli)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> ExitCode {
    let Cli { file, width, indent, max_depth, .. } = cli;

    let buffer = match fs::read(&file).with_context(|| format!("reading {}", file.display())) {
        Ok(buffer) => buffer,
        Err(error) => {
            eprintln!("{}: {error:#}", "error".red().bold());
            return ExitCode::from(2);
        }
    };

    let config = wrt_disasm::FormatConfig::new(buffer.len() as u64, width, indent, max_depth, true);
    let path = file.display().to_string();

    match wrt_disasm::disassemble(path.clone(), buffer, &config) {
        Ok(dump) => {
            print!("{dump}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}: {path}: {error}", "error".red().bold());
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    #[test]
    fn cli_definition_is_well_formed() {
        Cli::command().debug_assert();
    }
}
