use crate::error::Error;
use crate::instruction::Instruction;
use crate::parameter::Parameter;

/// Parse a program source: a single line of comma separated integers.
/// Surrounding whitespace is trimmed, but the values themselves must be bare
/// integers, so "1, 2" is malformed.
pub fn parse_program(input: &str) -> Result<Vec<i64>, Error> {
    input
        .trim()
        .split(',')
        .map(|value| Ok(value.parse()?))
        .collect()
}

/// Why the computer gave control back: it either produced an output value or
/// it reached a halt instruction. Faults travel separately, as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exec {
    /// The program produced an output and is suspended just past it.
    Output(i64),
    /// The program reached a halt instruction and will never run again.
    Halted,
}

/// A process that runs an Intcode program. It owns the entire state of a
/// suspended run: the memory tape, the instruction pointer, and whether the
/// program has halted. The tape is private, so two processes built from the
/// same program can never observe each other's writes.
#[derive(Debug, Clone)]
pub struct Process {
    /// The memory of the computer.
    memory: Vec<i64>,

    /// The current instruction pointer.
    instruction_pointer: usize,

    /// Whether the computer has halted.
    halted: bool,
}

impl Process {
    /// Create a new process with its own copy of the given program.
    pub fn new(program: &[i64]) -> Self {
        Self {
            memory: program.to_vec(),
            instruction_pointer: 0,
            halted: false,
        }
    }

    /// Whether the program has reached a halt instruction.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// A read-only view of the memory tape.
    pub fn memory(&self) -> &[i64] {
        &self.memory
    }

    /// Run until the program yields an output or halts. `inputs` holds the
    /// values available to this call; each input instruction takes the next
    /// one, and asking for more than were given is a fault, not a wait. The
    /// memory and instruction pointer persist across calls, so a suspended
    /// process picks up exactly where it stopped, and running a halted
    /// process just reports `Halted` again.
    pub fn run(&mut self, inputs: impl IntoIterator<Item = i64>) -> Result<Exec, Error> {
        let mut inputs = inputs.into_iter();
        while !self.halted {
            let (instruction, instruction_size) = self.next_instruction()?;
            match instruction {
                Instruction::Add(left, right, dest) => {
                    let value = self.value(left)? + self.value(right)?;
                    self.write(dest, value)?;
                    self.instruction_pointer += instruction_size;
                }
                Instruction::Multiply(left, right, dest) => {
                    let value = self.value(left)? * self.value(right)?;
                    self.write(dest, value)?;
                    self.instruction_pointer += instruction_size;
                }
                Instruction::Input(dest) => {
                    let value = inputs.next().ok_or(Error::InputExhausted {
                        address: self.instruction_pointer,
                    })?;
                    self.write(dest, value)?;
                    self.instruction_pointer += instruction_size;
                }
                Instruction::Output(value) => {
                    let value = self.value(value)?;
                    self.instruction_pointer += instruction_size;
                    return Ok(Exec::Output(value));
                }
                Instruction::JumpIfTrue(value, dest) => {
                    if self.value(value)? != 0 {
                        self.instruction_pointer = Self::address(self.value(dest)?)?;
                    } else {
                        self.instruction_pointer += instruction_size;
                    }
                }
                Instruction::JumpIfFalse(value, dest) => {
                    if self.value(value)? == 0 {
                        self.instruction_pointer = Self::address(self.value(dest)?)?;
                    } else {
                        self.instruction_pointer += instruction_size;
                    }
                }
                Instruction::LessThan(left, right, dest) => {
                    let value = match self.value(left)? < self.value(right)? {
                        true => 1,
                        false => 0,
                    };
                    self.write(dest, value)?;
                    self.instruction_pointer += instruction_size;
                }
                Instruction::Equals(left, right, dest) => {
                    let value = match self.value(left)? == self.value(right)? {
                        true => 1,
                        false => 0,
                    };
                    self.write(dest, value)?;
                    self.instruction_pointer += instruction_size;
                }
                Instruction::Halt => {
                    self.halted = true;
                }
            }
        }
        Ok(Exec::Halted)
    }

    /// Get the next instruction and the size of the instruction.
    fn next_instruction(&self) -> Result<(Instruction, usize), Error> {
        // Get the opcode and the first two digits (the operation).
        let opcode = self.read(self.instruction_pointer)?;
        let op = opcode % 100;

        // These macros simplify creating the parameters for the instruction.
        // param! decodes the nth operand with its mode digit; target! takes
        // the nth operand as a write address outright.
        macro_rules! param {
            ($n:literal) => {
                Parameter::new(opcode, $n, self.read(self.instruction_pointer + $n)?)?
            };
        }
        macro_rules! target {
            ($n:literal) => {
                Self::address(self.read(self.instruction_pointer + $n)?)?
            };
        }

        // Create the instruction based on the opcode.
        let instruction = match op {
            1 => Instruction::Add(param!(1), param!(2), target!(3)),
            2 => Instruction::Multiply(param!(1), param!(2), target!(3)),
            3 => Instruction::Input(target!(1)),
            4 => Instruction::Output(param!(1)),
            5 => Instruction::JumpIfTrue(param!(1), param!(2)),
            6 => Instruction::JumpIfFalse(param!(1), param!(2)),
            7 => Instruction::LessThan(param!(1), param!(2), target!(3)),
            8 => Instruction::Equals(param!(1), param!(2), target!(3)),
            99 => Instruction::Halt,
            _ => {
                return Err(Error::InvalidOpcode {
                    opcode: op,
                    address: self.instruction_pointer,
                })
            }
        };

        Ok((instruction, instruction.parameter_count() + 1))
    }

    /// Evaluate a read parameter against the current memory.
    fn value(&self, parameter: Parameter) -> Result<i64, Error> {
        match parameter {
            Parameter::Position(position) => self.read(position),
            Parameter::Immediate(value) => Ok(value),
        }
    }

    /// Convert a cell value into a memory address. Negative values have no
    /// home on the tape.
    fn address(value: i64) -> Result<usize, Error> {
        usize::try_from(value).map_err(|_| Error::OutOfBounds { address: value })
    }

    fn read(&self, address: usize) -> Result<i64, Error> {
        self.memory
            .get(address)
            .copied()
            .ok_or(Error::OutOfBounds {
                address: address as i64,
            })
    }

    fn write(&mut self, address: usize, value: i64) -> Result<(), Error> {
        match self.memory.get_mut(address) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Error::OutOfBounds {
                address: address as i64,
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::iter::empty;

    // The day 5 comparison and jump programs. Each takes one input and
    // produces one output.
    const EQUAL_TO_8_POSITION: &[i64] = &[3, 9, 8, 9, 10, 9, 4, 9, 99, -1, 8];
    const LESS_THAN_8_POSITION: &[i64] = &[3, 9, 7, 9, 10, 9, 4, 9, 99, -1, 8];
    const EQUAL_TO_8_IMMEDIATE: &[i64] = &[3, 3, 1108, -1, 8, 3, 4, 3, 99];
    const LESS_THAN_8_IMMEDIATE: &[i64] = &[3, 3, 1107, -1, 8, 3, 4, 3, 99];
    const JUMP_POSITION: &[i64] = &[3, 12, 6, 12, 15, 1, 13, 14, 13, 4, 13, 99, -1, 0, 1, 9];
    const JUMP_IMMEDIATE: &[i64] = &[3, 3, 1105, -1, 9, 1101, 0, 0, 12, 4, 12, 99, 1];

    fn single_output(program: &[i64], input: i64) -> i64 {
        let mut process = Process::new(program);
        match process.run([input]) {
            Ok(Exec::Output(value)) => value,
            other => panic!("expected an output, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_program() {
        assert_eq!(parse_program("1,-2,33\n"), Ok(vec![1, -2, 33]));
        assert!(matches!(
            parse_program("1,two,3"),
            Err(Error::MalformedProgram(_))
        ));
        assert!(matches!(
            parse_program("1, 2"),
            Err(Error::MalformedProgram(_))
        ));
    }

    #[test]
    fn test_add_and_multiply() {
        let mut process = Process::new(&[1, 0, 0, 0, 99]);
        assert_eq!(process.run(empty()), Ok(Exec::Halted));
        assert_eq!(process.memory(), &[2, 0, 0, 0, 99]);

        let mut process = Process::new(&[2, 4, 4, 5, 99, 0]);
        assert_eq!(process.run(empty()), Ok(Exec::Halted));
        assert_eq!(process.memory(), &[2, 4, 4, 5, 99, 9801]);

        let mut process = Process::new(&[1, 1, 1, 4, 99, 5, 6, 0, 99]);
        assert_eq!(process.run(empty()), Ok(Exec::Halted));
        assert_eq!(process.memory(), &[30, 1, 1, 4, 2, 5, 6, 0, 99]);
    }

    #[test]
    fn test_write_targets_ignore_mode_digits() {
        // 1002 multiplies position 4 by an immediate 3 and stores through
        // its third operand, leaving a stray 99 in cell 4.
        let mut process = Process::new(&[1002, 4, 3, 4, 33]);
        assert_eq!(process.run(empty()), Ok(Exec::Halted));
        assert_eq!(process.memory(), &[1002, 4, 3, 4, 99]);

        // 11102 carries a mode digit over the target slot; the write still
        // lands at the address in cell 3.
        let mut process = Process::new(&[11102, 2, 3, 5, 99, 0]);
        assert_eq!(process.run(empty()), Ok(Exec::Halted));
        assert_eq!(process.memory(), &[11102, 2, 3, 5, 99, 6]);
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(single_output(EQUAL_TO_8_POSITION, 8), 1);
        assert_eq!(single_output(EQUAL_TO_8_POSITION, 7), 0);
        assert_eq!(single_output(LESS_THAN_8_POSITION, 7), 1);
        assert_eq!(single_output(LESS_THAN_8_POSITION, 9), 0);
        assert_eq!(single_output(EQUAL_TO_8_IMMEDIATE, 8), 1);
        assert_eq!(single_output(EQUAL_TO_8_IMMEDIATE, 9), 0);
        assert_eq!(single_output(LESS_THAN_8_IMMEDIATE, 3), 1);
        assert_eq!(single_output(LESS_THAN_8_IMMEDIATE, 8), 0);
    }

    #[test]
    fn test_jumps() {
        // Both jump flavors report whether the input was non-zero.
        assert_eq!(single_output(JUMP_POSITION, 0), 0);
        assert_eq!(single_output(JUMP_POSITION, 5), 1);
        assert_eq!(single_output(JUMP_IMMEDIATE, 0), 0);
        assert_eq!(single_output(JUMP_IMMEDIATE, -3), 1);
    }

    #[test]
    fn test_output_suspends_execution() {
        let mut process = Process::new(&[104, 10, 104, 20, 99]);
        assert_eq!(process.run(empty()), Ok(Exec::Output(10)));
        assert_eq!(process.run(empty()), Ok(Exec::Output(20)));
        assert_eq!(process.run(empty()), Ok(Exec::Halted));
    }

    #[test]
    fn test_halted_runs_are_inert() {
        let mut process = Process::new(&[99, 7]);
        assert_eq!(process.run(empty()), Ok(Exec::Halted));
        assert!(process.halted());

        // Another run with inputs queued changes nothing.
        assert_eq!(process.run([5]), Ok(Exec::Halted));
        assert_eq!(process.memory(), &[99, 7]);
    }

    #[test]
    fn test_input_exhausted_is_recoverable() {
        let mut process = Process::new(&[3, 3, 99, 0]);
        assert_eq!(
            process.run(empty()),
            Err(Error::InputExhausted { address: 0 })
        );

        // The fault left the process untouched, so supplying the missing
        // value lets the same run continue.
        assert_eq!(process.run([7]), Ok(Exec::Halted));
        assert_eq!(process.memory(), &[3, 3, 99, 7]);
    }

    #[test]
    fn test_invalid_opcode() {
        let mut process = Process::new(&[1101, 2, 3, 5, 42, 0]);
        assert_eq!(
            process.run(empty()),
            Err(Error::InvalidOpcode {
                opcode: 42,
                address: 4
            })
        );
    }

    #[test]
    fn test_out_of_bounds() {
        // An operand pointing past the end of the tape.
        let mut process = Process::new(&[4, 7, 99]);
        assert_eq!(process.run(empty()), Err(Error::OutOfBounds { address: 7 }));

        // A jump to a negative address.
        let mut process = Process::new(&[1105, 1, -4, 99]);
        assert_eq!(
            process.run(empty()),
            Err(Error::OutOfBounds { address: -4 })
        );

        // Running off the end of the tape without ever halting.
        let mut process = Process::new(&[1101, 0, 0, 0]);
        assert_eq!(process.run(empty()), Err(Error::OutOfBounds { address: 4 }));
    }

    #[test]
    fn test_deterministic_replay() {
        // Feed inputs one resume at a time and collect the full transcript.
        fn transcript(program: &[i64], inputs: &[i64]) -> Vec<Exec> {
            let mut process = Process::new(program);
            let mut inputs = inputs.iter().copied();
            let mut seen = Vec::new();
            loop {
                let exec = process.run(inputs.next()).unwrap();
                seen.push(exec);
                if exec == Exec::Halted {
                    break seen;
                }
            }
        }

        let program = parse_program("3,0,4,0,3,0,1002,0,3,0,4,0,99").unwrap();
        let first = transcript(&program, &[6, 7]);
        assert_eq!(first, vec![Exec::Output(6), Exec::Output(21), Exec::Halted]);
        assert_eq!(first, transcript(&program, &[6, 7]));
    }
}
