use crate::consts::{opcode, MEM_SIZE};
use crate::error::CpuError;
use crate::instr::{ScpuInst, ScpuMnem};

///
/// Decodes a single opcode byte into an instruction with no operands filled
/// in yet. Opcodes outside of the instruction table return `UnknownOpcode`.
///
pub fn disasm(pc: u16, op: u8) -> Result<ScpuInst, CpuError> {
    let mnem = match op {
        opcode::LOAD => ScpuMnem::LOAD,
        opcode::ADD => ScpuMnem::ADD,
        opcode::AND => ScpuMnem::AND,
        opcode::OUT => ScpuMnem::OUT,
        opcode::HLT => ScpuMnem::HLT,
        _ => return Err(CpuError::UnknownOpcode(op)),
    };
    Ok(ScpuInst::new(pc, mnem))
}

///
/// ## ScpuDisasmIter
///
/// Walks a program image the same way the CPU would, decoding each
/// instruction along with its operand bytes. Each item carries the address
/// of the opcode byte. Unknown opcodes are reported and skipped over one
/// byte at a time. An instruction cut short by the end of the image yields
/// `OutOfBounds` for the first missing byte and ends the walk.
///
pub struct ScpuDisasmIter<'a> {
    program: &'a [u8],
    addr: usize,
}

impl<'a> ScpuDisasmIter<'a> {
    pub fn new(program: &'a [u8]) -> ScpuDisasmIter<'a> {
        let len = program.len().min(MEM_SIZE);
        ScpuDisasmIter {
            program: &program[..len],
            addr: 0,
        }
    }
}

impl<'a> Iterator for ScpuDisasmIter<'a> {
    type Item = (u16, Result<ScpuInst, CpuError>);

    fn next(&mut self) -> Option<Self::Item> {
        let pc = self.addr;
        let op = *self.program.get(pc)?;
        self.addr += 1;

        let mut inst = match disasm(pc as u16, op) {
            Ok(i) => i,
            Err(e) => return Some((pc as u16, Err(e))),
        };

        for idx in 0..inst.mnem.arity() {
            match self.program.get(self.addr) {
                Some(b) => inst.operands[idx] = *b,
                None => {
                    let missing = self.addr;
                    self.addr = self.program.len();
                    return Some((pc as u16, Err(CpuError::OutOfBounds(missing))));
                }
            }
            self.addr += 1;
        }

        Some((pc as u16, Ok(inst)))
    }
}
