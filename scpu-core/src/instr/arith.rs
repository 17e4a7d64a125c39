use super::ScpuInst;
use crate::alu::{compute, AluOp};
use crate::cpu::ScpuCpu;
use crate::error::CpuError;
use crate::periph::ExecEvent;

pub trait ScpuArith {
    fn add(&mut self, inst: &ScpuInst) -> Result<u16, CpuError>;
}

impl<'a> ScpuArith for ScpuCpu<'a> {
    ///
    /// ## ADD instruction
    ///
    ///  The ADD instruction adds the source register to the destination
    ///  register and stores the 8-bit wrapped sum in the destination.
    ///
    /// ### Parameters
    ///
    ///   - inst - `ScpuInst` structure that contains the destination and
    ///     source register ids
    ///
    fn add(&mut self, inst: &ScpuInst) -> Result<u16, CpuError> {
        let dest = inst.get_dest();
        let src = inst.get_src();

        let result = compute(AluOp::ADD, self.read_reg(dest), Some(self.read_reg(src)))?;
        self.write_reg(dest, result);

        self.notify(ExecEvent::Add {
            pc: inst.pc,
            dest: dest,
            src: src,
            result: result,
        });
        Ok(inst.len() as u16)
    }
}
