use super::ScpuInst;
use crate::alu::{compute, AluOp};
use crate::cpu::ScpuCpu;
use crate::error::CpuError;
use crate::periph::ExecEvent;

pub trait ScpuLogic {
    fn and(&mut self, inst: &ScpuInst) -> Result<u16, CpuError>;
}

impl<'a> ScpuLogic for ScpuCpu<'a> {
    ///
    /// ## AND instruction
    ///
    ///  The AND instruction performs a logical AND between the destination
    ///  and source registers. The value is stored in the destination.
    ///
    fn and(&mut self, inst: &ScpuInst) -> Result<u16, CpuError> {
        let dest = inst.get_dest();
        let src = inst.get_src();

        let result = compute(AluOp::AND, self.read_reg(dest), Some(self.read_reg(src)))?;
        self.write_reg(dest, result);

        self.notify(ExecEvent::And {
            pc: inst.pc,
            dest: dest,
            src: src,
            result: result,
        });
        Ok(inst.len() as u16)
    }
}
