use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{command, Parser};

// The transmitted image is always 25 pixels wide and 6 tall.
const WIDTH: usize = 25;
const HEIGHT: usize = 6;

// Where to find the puzzle input.
#[derive(Parser)]
#[command(author, about, version)]
struct Cli {
    #[arg(short, long, default_value = "inputs/day08")]
    input: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let input = fs::read_to_string(&args.input)?;
    let pixels = input
        .trim()
        .chars()
        .map(|c| c.to_digit(10).ok_or_else(|| anyhow!("bad pixel: {}", c)))
        .collect::<Result<Vec<_>, _>>()?;
    if pixels.is_empty() || pixels.len() % (WIDTH * HEIGHT) != 0 {
        return Err(anyhow!(
            "image is not a whole number of {}x{} layers",
            WIDTH,
            HEIGHT
        ));
    }

    // For part 1, the corruption check: on the layer with the fewest 0s,
    // multiply the count of 1s by the count of 2s.
    let layer = pixels
        .chunks(WIDTH * HEIGHT)
        .min_by_key(|layer| count(layer, 0))
        .ok_or_else(|| anyhow!("empty image"))?;
    println!("p1: {}", count(layer, 1) * count(layer, 2));

    // For part 2, stack the layers and print the message.
    println!("p2:");
    for row in decode(&pixels, WIDTH, HEIGHT) {
        println!("{}", row);
    }

    Ok(())
}

fn count(layer: &[u32], digit: u32) -> usize {
    layer.iter().filter(|&&pixel| pixel == digit).count()
}

// Flatten the layers into one image: the first non-transparent pixel wins,
// front layer first. White renders as '#', black and transparent as a
// space.
fn decode(pixels: &[u32], width: usize, height: usize) -> Vec<String> {
    (0..height)
        .map(|row| {
            (0..width)
                .map(|column| {
                    let pixel = pixels[row * width + column..]
                        .iter()
                        .step_by(width * height)
                        .find(|&&pixel| pixel != 2)
                        .copied()
                        .unwrap_or(2);
                    if pixel == 1 {
                        '#'
                    } else {
                        ' '
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(count(&[1, 2, 3, 4, 5, 6], 0), 0);
        assert_eq!(count(&[0, 0, 1, 2, 2, 2], 2), 3);
    }

    #[test]
    fn test_decode() {
        // The 2x2 example: the stacked image is a black/white checker.
        let pixels = [0, 2, 2, 2, 1, 1, 2, 2, 2, 2, 1, 2, 0, 0, 0, 0];
        assert_eq!(decode(&pixels, 2, 2), vec![" #", "# "]);
    }
}
