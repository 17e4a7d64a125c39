#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod alu;
pub mod consts;
pub mod cpu;
pub mod disasm;
pub mod error;
pub mod instr;
pub mod mem;
pub mod periph;

pub use cpu::ScpuCpu;
pub use error::CpuError;
