/// An implementation of the Intcode computer from Advent of Code 2019, and
/// the five-stage amplifier network from day 7 built on top of it.
pub mod amplifier;
pub mod error;
pub mod instruction;
pub mod parameter;
pub mod process;
