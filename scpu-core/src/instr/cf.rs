use super::ScpuInst;
use crate::cpu::ScpuCpu;
use crate::error::CpuError;
use crate::periph::ExecEvent;

pub trait ScpuControlFlow {
    fn hlt(&mut self, inst: &ScpuInst) -> Result<u16, CpuError>;
}

impl<'a> ScpuControlFlow for ScpuCpu<'a> {
    ///
    /// ## HLT instruction
    ///
    ///  Drops the running flag so the run loop stops after this cycle, then
    ///  hands the final register state to the observer.
    ///
    fn hlt(&mut self, inst: &ScpuInst) -> Result<u16, CpuError> {
        self.running = false;

        self.notify(ExecEvent::Halt { pc: inst.pc });
        self.notify_halt();
        Ok(inst.len() as u16)
    }
}
