use super::ScpuInst;
use crate::cpu::ScpuCpu;
use crate::error::CpuError;
use crate::periph::ExecEvent;

pub trait ScpuLoadStore {
    fn load(&mut self, inst: &ScpuInst) -> Result<u16, CpuError>;
}

impl<'a> ScpuLoadStore for ScpuCpu<'a> {
    ///
    /// ## LOAD instruction
    ///
    ///  The LOAD instruction copies the immediate byte into the register
    ///  named by the first operand.
    ///
    /// ### Parameters
    ///
    ///   - inst - `ScpuInst` structure that contains the register id and
    ///     immediate operand bytes
    ///
    fn load(&mut self, inst: &ScpuInst) -> Result<u16, CpuError> {
        let reg = inst.get_dest();
        let value = inst.get_imm();
        self.write_reg(reg, value);

        self.notify(ExecEvent::Load {
            pc: inst.pc,
            reg: reg,
            value: value,
        });
        Ok(inst.len() as u16)
    }
}
