use core::fmt;

use crate::alu::AluOp;

/// Errors raised by the SCPU core. Only `UnknownOpcode` is recovered from by
/// the run loop; everything else aborts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// Memory access outside of `0..MEM_SIZE`.
    OutOfBounds(usize),
    /// Fetch attempted with the program counter at or past the end of memory.
    ProgramCounterOutOfBounds(usize),
    /// ALU operation name that does not exist.
    InvalidOperation,
    /// Two operand ALU operation invoked with a single operand.
    MissingOperand(AluOp),
    /// Register name that does not exist.
    InvalidRegister,
    /// Opcode byte outside of the instruction table.
    UnknownOpcode(u8),
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CpuError::OutOfBounds(addr) => {
                write!(f, "Memory address 0x{:X} out of bounds", addr)
            }
            CpuError::ProgramCounterOutOfBounds(pc) => {
                write!(f, "Program Counter out of bounds (PC: 0x{:X})", pc)
            }
            CpuError::InvalidOperation => write!(f, "Invalid ALU operation"),
            CpuError::MissingOperand(op) => {
                write!(f, "ALU operation {:?} requires two operands", op)
            }
            CpuError::InvalidRegister => write!(f, "Invalid register name"),
            CpuError::UnknownOpcode(opcode) => write!(f, "Unknown Opcode: 0x{:X}", opcode),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CpuError {}

#[cfg(test)]
mod error_tests {
    use super::CpuError;
    use crate::alu::AluOp;

    #[test]
    fn error_display_test() {
        let src = [
            (CpuError::OutOfBounds(0x100), "Memory address 0x100 out of bounds"),
            (
                CpuError::ProgramCounterOutOfBounds(0x100),
                "Program Counter out of bounds (PC: 0x100)",
            ),
            (CpuError::InvalidOperation, "Invalid ALU operation"),
            (
                CpuError::MissingOperand(AluOp::ADD),
                "ALU operation ADD requires two operands",
            ),
            (CpuError::UnknownOpcode(0x7), "Unknown Opcode: 0x7"),
        ];

        for (err, expect) in src.iter() {
            assert_eq!(err.to_string(), *expect);
        }
    }
}
