use core::fmt;

use crate::instr::ScpuMnem;
use crate::mem::{Register, RegisterSnapshot};

///
/// ## ExecEvent
///
/// Record of a single executed instruction, handed to the observer after the
/// instruction has updated the CPU state. `pc` is the address of the opcode
/// byte.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecEvent {
    Load { pc: u16, reg: Register, value: u8 },
    Add { pc: u16, dest: Register, src: Register, result: u8 },
    And { pc: u16, dest: Register, src: Register, result: u8 },
    Out { pc: u16, reg: Register, value: u8 },
    Halt { pc: u16 },
    UnknownOpcode { pc: u16, opcode: u8 },
}

impl ExecEvent {
    pub fn pc(&self) -> u16 {
        match *self {
            ExecEvent::Load { pc, .. }
            | ExecEvent::Add { pc, .. }
            | ExecEvent::And { pc, .. }
            | ExecEvent::Out { pc, .. }
            | ExecEvent::Halt { pc }
            | ExecEvent::UnknownOpcode { pc, .. } => pc,
        }
    }

    pub fn mnem(&self) -> Option<ScpuMnem> {
        match self {
            ExecEvent::Load { .. } => Some(ScpuMnem::LOAD),
            ExecEvent::Add { .. } => Some(ScpuMnem::ADD),
            ExecEvent::And { .. } => Some(ScpuMnem::AND),
            ExecEvent::Out { .. } => Some(ScpuMnem::OUT),
            ExecEvent::Halt { .. } => Some(ScpuMnem::HLT),
            ExecEvent::UnknownOpcode { .. } => None,
        }
    }
}

impl fmt::Display for ExecEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExecEvent::Load { reg, value, .. } => write!(f, "LOAD {}, {}", reg, value),
            ExecEvent::Add { dest, src, result, .. } => {
                write!(f, "ADD {}, {} (Result: {})", dest, src, result)
            }
            ExecEvent::And { dest, src, result, .. } => {
                write!(f, "AND {}, {} (Result: {})", dest, src, result)
            }
            ExecEvent::Out { reg, value, .. } => {
                write!(f, "OUTPUT: Register {} = {}", reg, value)
            }
            ExecEvent::Halt { .. } => write!(f, "HLT (Halt)"),
            ExecEvent::UnknownOpcode { opcode, .. } => write!(f, "Unknown Opcode: 0x{:x}", opcode),
        }
    }
}

///
/// Receiver of execution events. The CPU only ever hands out shared
/// references, so an observer cannot change the course of a run.
///
pub trait ScpuObserver {
    fn on_exec(&mut self, event: &ExecEvent);

    ///
    /// Called once when HLT executes with the final register state.
    ///
    fn on_halt(&mut self, _snapshot: &RegisterSnapshot) {}
}

/// Observer that drops everything.
pub struct NullObserver;

impl ScpuObserver for NullObserver {
    fn on_exec(&mut self, _event: &ExecEvent) {}
}
