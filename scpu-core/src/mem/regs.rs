use core::fmt;
use core::str::FromStr;

use crate::consts;
use crate::error::CpuError;

use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl Register {
    pub const ALL: [Register; consts::NUM_REGS] = [Register::A, Register::B, Register::C, Register::D];

    ///
    /// Decodes a register-id byte. Any id outside of the register table maps
    /// to register A.
    ///
    pub fn from_id(id: u8) -> Register {
        match id {
            consts::cpu::REG_A => Register::A,
            consts::cpu::REG_B => Register::B,
            consts::cpu::REG_C => Register::C,
            consts::cpu::REG_D => Register::D,
            _ => Register::A,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Register {
    type Err = CpuError;

    fn from_str(name: &str) -> Result<Register, CpuError> {
        match name {
            "A" | "a" => Ok(Register::A),
            "B" | "b" => Ok(Register::B),
            "C" | "c" => Ok(Register::C),
            "D" | "d" => Ok(Register::D),
            _ => Err(CpuError::InvalidRegister),
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone)]
pub struct ScpuRegs {
    regs: [u8; consts::NUM_REGS],
}

impl ScpuRegs {
    pub fn new() -> ScpuRegs {
        ScpuRegs {
            regs: [0; consts::NUM_REGS],
        }
    }

    pub fn reset(&mut self) {
        self.regs = [0; consts::NUM_REGS];
    }

    pub fn read(&self, reg: Register) -> u8 {
        self.regs[reg.index()]
    }

    ///
    /// Writes `value` into `reg`. Only the lower 8 bits of the value are
    /// kept.
    ///
    pub fn write(&mut self, reg: Register, value: u16) {
        trace!("Reg Write: {}: 0x{:x}", reg, value);
        self.regs[reg.index()] = (value & 0xFF) as u8;
    }

    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot { values: self.regs }
    }
}

///
/// Copy of the register file taken at a point in time, used to report the
/// final CPU state.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterSnapshot {
    values: [u8; consts::NUM_REGS],
}

impl RegisterSnapshot {
    pub fn get(&self, reg: Register) -> u8 {
        self.values[reg.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Register, u8)> + '_ {
        (0..consts::NUM_REGS).map(move |idx| (Register::ALL[idx], self.values[idx]))
    }
}

impl fmt::Display for RegisterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, (reg, val)) in self.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {} (0x{:02X})", reg, val, val)?;
        }
        Ok(())
    }
}
