use core::fmt;
use core::str::FromStr;

use crate::error::CpuError;

/* Mask used to wrap every ALU result into 8 bits */
const RESULT_MASK: i32 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    ADD,
    SUB,
    AND,
    OR,
    NOT,
}

impl AluOp {
    pub fn is_unary(&self) -> bool {
        match self {
            AluOp::NOT => true,
            _ => false,
        }
    }
}

impl FromStr for AluOp {
    type Err = CpuError;

    fn from_str(name: &str) -> Result<AluOp, CpuError> {
        match name {
            "ADD" => Ok(AluOp::ADD),
            "SUB" => Ok(AluOp::SUB),
            "AND" => Ok(AluOp::AND),
            "OR" => Ok(AluOp::OR),
            "NOT" => Ok(AluOp::NOT),
            _ => Err(CpuError::InvalidOperation),
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

///
/// ## `compute` Function
///
/// Performs an ALU operation on one or two 8-bit operands. The operation is
/// carried out at native integer width and then masked down to 8 bits, which
/// gives the wraparound behavior for carries and borrows:
///
///   - `ADD(200, 100)` => `0x2C`
///   - `SUB(5, 10)` => `0xFB`
///   - `NOT(0)` => `0xFF`
///
/// # Arguments
///
///  - `op` - Operation to perform
///  - `a` - First operand
///  - `b` - Second operand. Ignored by `NOT`, required by everything else.
///
/// # Results
///
///  - `u8` result of the operation, or `MissingOperand` when a two operand
///    operation is missing `b`.
///
pub fn compute(op: AluOp, a: u8, b: Option<u8>) -> Result<u8, CpuError> {
    let a = a as i32;
    let result = match op {
        AluOp::NOT => !a,
        _ => {
            let b = match b {
                Some(b) => b as i32,
                None => return Err(CpuError::MissingOperand(op)),
            };
            match op {
                AluOp::ADD => a + b,
                AluOp::SUB => a - b,
                AluOp::AND => a & b,
                AluOp::OR => a | b,
                AluOp::NOT => !a,
            }
        }
    };

    Ok((result & RESULT_MASK) as u8)
}

///
/// Same as `compute`, but resolves the operation from its mnemonic. Unknown
/// mnemonics fail with `InvalidOperation` instead of silently yielding zero.
///
pub fn compute_named(name: &str, a: u8, b: Option<u8>) -> Result<u8, CpuError> {
    let op: AluOp = name.parse()?;
    compute(op, a, b)
}
