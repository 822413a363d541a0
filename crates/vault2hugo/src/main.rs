#![doc = include_str!("../README.md")]

/// CLI module - command-line interface for vault2hugo
mod cli;

fn main() {
    cli::run_cli();
}
