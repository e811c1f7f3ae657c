use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{command, Parser};

use thruster::amplifier::{max_signal, Wiring};
use thruster::process::parse_program;

// Where to find the puzzle input.
#[derive(Parser)]
#[command(author, about, version)]
struct Cli {
    #[arg(short, long, default_value = "inputs/day07")]
    input: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let program = parse_program(&fs::read_to_string(&args.input)?)?;

    // For part 1, the amplifiers run as a single chain, so we look for the
    // best ordering of the low phases.
    println!("p1: {}", max_signal(&program, &[0, 1, 2, 3, 4], Wiring::Serial)?);

    // For part 2, the last amplifier feeds the first and the high phases
    // keep the loop alive until the programs halt on their own.
    println!(
        "p2: {}",
        max_signal(&program, &[5, 6, 7, 8, 9], Wiring::Feedback)?
    );

    Ok(())
}
