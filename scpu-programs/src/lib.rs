#![no_std]

// LOAD A, 10 / LOAD B, 20 / ADD A, B / OUT A / HLT
pub static SAMPLE_PROGRAM: &'static [u8] = include_bytes!("../res/SAMPLE.BIN");

// LOAD A, 12 / LOAD B, 10 / AND A, B / OUT A / HLT
pub static MASK_PROGRAM: &'static [u8] = include_bytes!("../res/MASK.BIN");

// LOAD A, 250 / LOAD B, 10 / ADD A, B / OUT A / HLT
pub static WRAP_PROGRAM: &'static [u8] = include_bytes!("../res/WRAP.BIN");

pub static HALT_PROGRAM: &'static [u8] = &[0xFF];
