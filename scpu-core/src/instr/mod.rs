use core::fmt;

use crate::consts::{opcode, MAX_OPERANDS};
use crate::mem::Register;

pub mod arith;
pub mod cf;
pub mod io;
pub mod ldst;
pub mod logic;

pub use arith::ScpuArith;
pub use cf::ScpuControlFlow;
pub use io::ScpuIo;
pub use ldst::ScpuLoadStore;
pub use logic::ScpuLogic;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScpuMnem {
    LOAD,
    ADD,
    AND,
    OUT,
    HLT,
}

impl ScpuMnem {
    pub fn opcode(&self) -> u8 {
        match self {
            ScpuMnem::LOAD => opcode::LOAD,
            ScpuMnem::ADD => opcode::ADD,
            ScpuMnem::AND => opcode::AND,
            ScpuMnem::OUT => opcode::OUT,
            ScpuMnem::HLT => opcode::HLT,
        }
    }

    ///
    /// Number of operand bytes that follow the opcode byte in memory.
    ///
    pub fn arity(&self) -> usize {
        match self {
            ScpuMnem::LOAD | ScpuMnem::ADD | ScpuMnem::AND => 2,
            ScpuMnem::OUT => 1,
            ScpuMnem::HLT => 0,
        }
    }
}

impl fmt::Display for ScpuMnem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScpuInst {
    pub pc: u16,
    pub mnem: ScpuMnem,
    pub operands: [u8; MAX_OPERANDS],
}

impl ScpuInst {
    pub fn new(pc: u16, mnem: ScpuMnem) -> ScpuInst {
        ScpuInst {
            pc: pc,
            mnem: mnem,
            operands: [0; MAX_OPERANDS],
        }
    }

    ///
    /// Total size of the instruction in bytes, opcode included.
    ///
    pub fn len(&self) -> usize {
        1 + self.mnem.arity()
    }

    ///
    /// Register named by the first operand byte. This is the destination for
    /// LOAD, ADD and AND and the source for OUT.
    ///
    pub fn get_dest(&self) -> Register {
        Register::from_id(self.operands[0])
    }

    ///
    /// Register named by the second operand byte (ADD and AND).
    ///
    pub fn get_src(&self) -> Register {
        Register::from_id(self.operands[1])
    }

    ///
    /// Immediate value carried by the second operand byte (LOAD).
    ///
    pub fn get_imm(&self) -> u8 {
        self.operands[1]
    }
}

impl fmt::Display for ScpuInst {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mnem {
            ScpuMnem::LOAD => write!(f, "LOAD {}, {}", self.get_dest(), self.get_imm()),
            ScpuMnem::ADD | ScpuMnem::AND => {
                write!(f, "{} {}, {}", self.mnem, self.get_dest(), self.get_src())
            }
            ScpuMnem::OUT => write!(f, "OUT {}", self.get_dest()),
            ScpuMnem::HLT => write!(f, "HLT"),
        }
    }
}

#[cfg(test)]
mod inst_tests {
    use super::{ScpuInst, ScpuMnem};
    use crate::mem::Register;

    #[test]
    fn test_mnem_arity() {
        let src = [
            (ScpuMnem::LOAD, 0x01, 2),
            (ScpuMnem::ADD, 0x02, 2),
            (ScpuMnem::AND, 0x03, 2),
            (ScpuMnem::OUT, 0x04, 1),
            (ScpuMnem::HLT, 0xFF, 0),
        ];
        for (mnem, opcode, arity) in src.iter() {
            assert_eq!(mnem.opcode(), *opcode, "Opcode mismatch for {:?}", mnem);
            assert_eq!(mnem.arity(), *arity, "Arity mismatch for {:?}", mnem);
            assert_eq!(ScpuInst::new(0, *mnem).len(), 1 + *arity);
        }
    }

    #[test]
    fn test_inst_operands() {
        let mut i = ScpuInst::new(0x10, ScpuMnem::ADD);
        i.operands = [0x03, 0x09];
        assert_eq!(i.get_dest(), Register::D);
        // Unknown register ids fall back to A
        assert_eq!(i.get_src(), Register::A);
        assert_eq!(i.get_imm(), 0x09);
    }

    #[test]
    fn test_inst_display() {
        let mut i = ScpuInst::new(0, ScpuMnem::LOAD);
        i.operands = [0x01, 20];
        assert_eq!(format!("{}", i), "LOAD B, 20");

        i.mnem = ScpuMnem::AND;
        i.operands = [0x00, 0x02];
        assert_eq!(format!("{}", i), "AND A, C");

        i.mnem = ScpuMnem::OUT;
        assert_eq!(format!("{}", i), "OUT A");

        i.mnem = ScpuMnem::HLT;
        assert_eq!(format!("{}", i), "HLT");
    }
}
