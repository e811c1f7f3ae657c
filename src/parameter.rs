use crate::error::Error;

/// A read parameter to an instruction.
///
/// Write targets are not parameters: the address an instruction writes to is
/// always taken literally, whatever mode digit sits above it, so targets are
/// decoded straight to an address instead of going through this type.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Parameter {
    /// A pointer to a position in memory.
    Position(usize),
    /// A literal value.
    Immediate(i64),
}

impl Parameter {
    /// Create a new parameter from an instruction value, a parameter
    /// position, and the operand value. The mode digit for the `position`th
    /// parameter sits at the `position + 2`th decimal digit of the
    /// instruction; missing digits mean position mode.
    pub fn new(instruction: i64, position: u32, value: i64) -> Result<Self, Error> {
        let mode = (instruction / 10_i64.pow(position + 1)) % 10;
        match mode {
            0 if value < 0 => Err(Error::OutOfBounds { address: value }),
            0 => Ok(Self::Position(value as usize)),
            1 => Ok(Self::Immediate(value)),
            _ => Err(Error::InvalidParameterMode { mode, instruction }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parameter_new() {
        // Does the math check out?
        assert_eq!(Parameter::new(1002, 1, 4), Ok(Parameter::Position(4)));
        assert_eq!(Parameter::new(1002, 2, 3), Ok(Parameter::Immediate(3)));
        assert_eq!(Parameter::new(1101, 1, -7), Ok(Parameter::Immediate(-7)));
    }

    #[test]
    fn test_missing_digits_are_position_mode() {
        assert_eq!(Parameter::new(2, 1, 9), Ok(Parameter::Position(9)));
        assert_eq!(Parameter::new(2, 2, 9), Ok(Parameter::Position(9)));
        assert_eq!(Parameter::new(102, 2, 9), Ok(Parameter::Position(9)));
    }

    #[test]
    fn test_unknown_mode() {
        assert_eq!(
            Parameter::new(202, 1, 4),
            Err(Error::InvalidParameterMode {
                mode: 2,
                instruction: 202
            })
        );
        assert_eq!(
            Parameter::new(9002, 2, 4),
            Err(Error::InvalidParameterMode {
                mode: 9,
                instruction: 9002
            })
        );
    }

    #[test]
    fn test_negative_position() {
        assert_eq!(
            Parameter::new(2, 1, -3),
            Err(Error::OutOfBounds { address: -3 })
        );
    }
}
