use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{command, Parser};

// Where to find the puzzle input.
#[derive(Parser)]
#[command(author, about, version)]
struct Cli {
    #[arg(short, long, default_value = "inputs/day04")]
    input: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let input = fs::read_to_string(&args.input)?;
    let (low, high) = input
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow!("expected a low-high range"))?;
    let (low, high) = (low.parse::<u32>()?, high.parse::<u32>()?);

    // We check every password in the range against both rule sets in one
    // scan. The adjacency rules only differ in how long a run may be.
    let (mut p1, mut p2) = (0, 0);
    for password in low..=high {
        let digits = password.to_string().into_bytes();
        if !non_decreasing(&digits) {
            continue;
        }
        if has_adjacent_pair(&digits) {
            p1 += 1;
        }
        if has_lone_pair(&digits) {
            p2 += 1;
        }
    }
    println!("p1: {}", p1);
    println!("p2: {}", p2);

    Ok(())
}

// Left to right, the digits only ever increase or stay the same.
fn non_decreasing(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] <= pair[1])
}

// Some digit appears at least twice in a row.
fn has_adjacent_pair(digits: &[u8]) -> bool {
    digits.windows(2).any(|pair| pair[0] == pair[1])
}

// Some run of equal digits is exactly two long, not part of a larger group.
fn has_lone_pair(digits: &[u8]) -> bool {
    let mut index = 0;
    while index < digits.len() {
        let mut end = index;
        while end < digits.len() && digits[end] == digits[index] {
            end += 1;
        }
        if end - index == 2 {
            return true;
        }
        index = end;
    }
    false
}

#[cfg(test)]
mod test {
    use super::*;

    fn digits(password: u32) -> Vec<u8> {
        password.to_string().into_bytes()
    }

    #[test]
    fn test_first_rules() {
        assert!(non_decreasing(&digits(111111)) && has_adjacent_pair(&digits(111111)));
        assert!(!non_decreasing(&digits(223450)));
        assert!(!has_adjacent_pair(&digits(123789)));
    }

    #[test]
    fn test_lone_pair() {
        assert!(has_lone_pair(&digits(112233)));
        assert!(!has_lone_pair(&digits(123444)));
        assert!(has_lone_pair(&digits(111122)));
    }
}
