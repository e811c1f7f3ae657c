use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{command, Parser};

// Where to find the puzzle input.
#[derive(Parser)]
#[command(author, about, version)]
struct Cli {
    #[arg(short, long, default_value = "inputs/day03")]
    input: PathBuf,
}

type Point = (i32, i32);

fn main() -> Result<()> {
    let args = Cli::parse();
    let input = fs::read_to_string(&args.input)?;
    let mut lines = input.lines();
    let first = trace(lines.next().ok_or_else(|| anyhow!("missing first wire"))?)?;
    let second = trace(lines.next().ok_or_else(|| anyhow!("missing second wire"))?)?;

    // For part 1, we want the crossing closest to the central port.
    let p1 = closest(&first, &second).ok_or_else(|| anyhow!("the wires never cross"))?;
    println!("p1: {}", p1);

    // For part 2, we want the crossing that both wires reach the soonest.
    let p2 = fewest_steps(&first, &second).ok_or_else(|| anyhow!("the wires never cross"))?;
    println!("p2: {}", p2);

    Ok(())
}

// Walk a wire cell by cell, recording the step count of the first visit to
// each point. The central port itself is never recorded.
fn trace(path: &str) -> Result<HashMap<Point, u32>> {
    let mut visited = HashMap::new();
    let (mut x, mut y) = (0, 0);
    let mut steps = 0;
    for motion in path.trim().split(',') {
        let mut chars = motion.chars();
        let direction = chars.next().ok_or_else(|| anyhow!("empty motion"))?;
        let (dx, dy) = match direction {
            'U' => (0, 1),
            'D' => (0, -1),
            'R' => (1, 0),
            'L' => (-1, 0),
            _ => return Err(anyhow!("unknown direction {}", direction)),
        };
        let amount: u32 = chars.as_str().parse()?;
        for _ in 0..amount {
            x += dx;
            y += dy;
            steps += 1;
            visited.entry((x, y)).or_insert(steps);
        }
    }
    Ok(visited)
}

// The Manhattan distance of the crossing closest to the central port.
fn closest(first: &HashMap<Point, u32>, second: &HashMap<Point, u32>) -> Option<i32> {
    first
        .keys()
        .filter(|&point| second.contains_key(point))
        .map(|(x, y)| x.abs() + y.abs())
        .min()
}

// The smallest combined step count over all crossings, using each wire's
// first visit to the crossing.
fn fewest_steps(first: &HashMap<Point, u32>, second: &HashMap<Point, u32>) -> Option<u32> {
    first
        .iter()
        .filter_map(|(point, steps)| second.get(point).map(|other| steps + other))
        .min()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_small_example() {
        let first = trace("R8,U5,L5,D3").unwrap();
        let second = trace("U7,R6,D4,L4").unwrap();
        assert_eq!(closest(&first, &second), Some(6));
        assert_eq!(fewest_steps(&first, &second), Some(30));
    }

    #[test]
    fn test_larger_examples() {
        let first = trace("R75,D30,R83,U83,L12,D49,R71,U7,L72").unwrap();
        let second = trace("U62,R66,U55,R34,D71,R55,D58,R83").unwrap();
        assert_eq!(closest(&first, &second), Some(159));
        assert_eq!(fewest_steps(&first, &second), Some(610));

        let first = trace("R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51").unwrap();
        let second = trace("U98,R91,D20,R16,D67,R40,U7,R15,U6,R7").unwrap();
        assert_eq!(closest(&first, &second), Some(135));
        assert_eq!(fewest_steps(&first, &second), Some(410));
    }

    #[test]
    fn test_first_visit_wins() {
        // The wire crosses its own path; the earlier step count stays.
        let wire = trace("R2,U1,L1,D1,R1").unwrap();
        assert_eq!(wire[&(2, 0)], 2);
    }
}
