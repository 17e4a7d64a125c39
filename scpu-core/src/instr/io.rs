use super::ScpuInst;
use crate::cpu::ScpuCpu;
use crate::error::CpuError;
use crate::periph::ExecEvent;

use log::debug;

pub trait ScpuIo {
    fn out(&mut self, inst: &ScpuInst) -> Result<u16, CpuError>;
}

impl<'a> ScpuIo for ScpuCpu<'a> {
    ///
    /// ## OUT instruction
    ///
    ///  Reports the value of a register to the observer. No CPU state is
    ///  changed.
    ///
    fn out(&mut self, inst: &ScpuInst) -> Result<u16, CpuError> {
        let reg = inst.get_dest();
        let value = self.read_reg(reg);
        debug!("OUT {}: 0x{:02x}", reg, value);

        self.notify(ExecEvent::Out {
            pc: inst.pc,
            reg: reg,
            value: value,
        });
        Ok(inst.len() as u16)
    }
}
