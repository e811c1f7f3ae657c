use crate::parameter::Parameter;

/// An instruction that can be executed by the Intcode computer. The final
/// `usize` on the writing instructions is the memory address the result is
/// stored at; it is an address no matter which mode digit the instruction
/// value carries for that slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Instruction {
    /// Add two values and store the result in a third.
    Add(Parameter, Parameter, usize),
    /// Multiply two values and store the result in a third.
    Multiply(Parameter, Parameter, usize),
    /// Read the next pending input value and store it in memory.
    Input(usize),
    /// Yield a value to the caller.
    Output(Parameter),
    /// Jump to a new instruction if the value is non-zero.
    JumpIfTrue(Parameter, Parameter),
    /// Jump to a new instruction if the value is zero.
    JumpIfFalse(Parameter, Parameter),
    /// Store 1 in the third parameter if the first parameter is less than
    /// the second parameter, otherwise store 0.
    LessThan(Parameter, Parameter, usize),
    /// Store 1 in the third parameter if the first parameter is equal to the
    /// second parameter, otherwise store 0.
    Equals(Parameter, Parameter, usize),
    /// Halt the program.
    Halt,
}

impl Instruction {
    /// Get the number of parameters for a given instruction. Useful for
    /// incrementing the instruction pointer.
    pub fn parameter_count(&self) -> usize {
        match self {
            Instruction::Add(_, _, _) => 3,
            Instruction::Multiply(_, _, _) => 3,
            Instruction::Input(_) => 1,
            Instruction::Output(_) => 1,
            Instruction::JumpIfTrue(_, _) => 2,
            Instruction::JumpIfFalse(_, _) => 2,
            Instruction::LessThan(_, _, _) => 3,
            Instruction::Equals(_, _, _) => 3,
            Instruction::Halt => 0,
        }
    }
}
