
/* Number of bytes within the SCPU memory */
pub const MEM_SIZE: usize = 256;

/* Number of general purpose registers */
pub const NUM_REGS: usize = 4;

/* Maximum number of operand bytes following an opcode */
pub const MAX_OPERANDS: usize = 2;

pub mod opcode {
    pub const LOAD: u8 = 0x01;
    pub const ADD: u8 = 0x02;
    pub const AND: u8 = 0x03;
    pub const OUT: u8 = 0x04;
    pub const HLT: u8 = 0xFF;
}

pub mod cpu {
    pub const REG_A: u8 = 0x0;
    pub const REG_B: u8 = 0x1;
    pub const REG_C: u8 = 0x2;
    pub const REG_D: u8 = 0x3;
}
