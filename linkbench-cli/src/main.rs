//! Interactive doubly linked list exerciser.
//!
//! Reads single-line commands from stdin, applies them to an arena-backed
//! doubly linked list, and reports the elapsed wall time of every
//! list-touching operation. Diagnostics go to stderr via `tracing`
//! (`RUST_LOG=debug` to see command dispatch).

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bench;
mod command;
mod shell;

use shell::Shell;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive doubly linked list exerciser")]
struct Args {
    /// Initial arena capacity of the list
    #[arg(long, default_value_t = 16)]
    capacity: usize,

    /// RNG seed for `random` and `bench` (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let stdout = io::stdout();
    let mut shell = Shell::new(args.capacity, args.seed, stdout.lock());
    shell.greet()?;
    shell.run(io::stdin().lock())?;

    Ok(())
}
