mod ram;
mod regs;


pub use ram::ScpuRam;
pub use regs::{Register, RegisterSnapshot, ScpuRegs};
