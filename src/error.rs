use std::num::ParseIntError;

use thiserror::Error;

/// A fault raised by the Intcode computer or the amplifier network. Faults
/// are never used for control flow: a program that halts normally is
/// reported through the engine's run result, not through this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The program source could not be parsed as comma-separated integers.
    #[error("malformed program: {0}")]
    MalformedProgram(#[from] ParseIntError),

    /// The value at the instruction pointer is not a supported opcode.
    #[error("invalid opcode {opcode} at address {address}")]
    InvalidOpcode { opcode: i64, address: usize },

    /// A read parameter carried a mode digit other than position or
    /// immediate.
    #[error("invalid parameter mode {mode} in instruction {instruction}")]
    InvalidParameterMode { mode: i64, instruction: i64 },

    /// An instruction referenced an address outside the memory tape.
    #[error("address {address} is outside the memory tape")]
    OutOfBounds { address: i64 },

    /// An input instruction ran with no pending input value to consume.
    #[error("input requested at address {address} but none was pending")]
    InputExhausted { address: usize },

    /// An amplifier halted before producing its output signal.
    #[error("amplifier {amplifier} halted without producing a signal")]
    HaltedWithoutOutput { amplifier: usize },

    /// An amplifier left the feedback loop in a different cycle than its
    /// peers.
    #[error("amplifier {amplifier} did not halt in the same cycle as its peers")]
    DivergentHalt { amplifier: usize },
}
