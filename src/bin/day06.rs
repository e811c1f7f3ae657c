use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{command, Parser};
use pathfinding::directed::bfs::bfs;

// Where to find the puzzle input.
#[derive(Parser)]
#[command(author, about, version)]
struct Cli {
    #[arg(short, long, default_value = "inputs/day06")]
    input: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let input = fs::read_to_string(&args.input)?;
    let parents = parse(&input)?;

    // For part 1, every object orbits everything on its chain back to the
    // center of mass.
    println!("p1: {}", checksum(&parents));

    // For part 2, we hop between orbits, starting from what YOU orbit and
    // ending at what SAN orbits.
    let p2 = transfers(&parents, "YOU", "SAN")
        .ok_or_else(|| anyhow!("no route between YOU and SAN"))?;
    println!("p2: {}", p2);

    Ok(())
}

// Each line is one orbit, written CENTER)SATELLITE.
fn parse(input: &str) -> Result<HashMap<&str, &str>> {
    let mut parents = HashMap::new();
    for line in input.lines() {
        let (center, satellite) = line
            .trim()
            .split_once(')')
            .ok_or_else(|| anyhow!("malformed orbit: {}", line))?;
        parents.insert(satellite, center);
    }
    Ok(parents)
}

// The orbit count checksum: one orbit per ancestor, summed over every
// object.
fn checksum(parents: &HashMap<&str, &str>) -> usize {
    parents
        .keys()
        .map(|object| {
            let mut chain = 0;
            let mut current = object;
            while let Some(parent) = parents.get(current) {
                chain += 1;
                current = parent;
            }
            chain
        })
        .sum()
}

// The minimum number of orbital transfers between the objects two
// satellites orbit. Orbits can be traversed in either direction, so this is
// a shortest path over the undirected orbit graph, minus the hop off each
// endpoint.
fn transfers(parents: &HashMap<&str, &str>, from: &str, to: &str) -> Option<usize> {
    let mut neighbors: HashMap<&str, Vec<&str>> = HashMap::new();
    for (&satellite, &center) in parents {
        neighbors.entry(satellite).or_default().push(center);
        neighbors.entry(center).or_default().push(satellite);
    }

    let path = bfs(
        &from,
        |object| neighbors.get(object).cloned().unwrap_or_default(),
        |object| *object == to,
    )?;
    Some(path.len().saturating_sub(3))
}
