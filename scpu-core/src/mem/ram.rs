use crate::consts::MEM_SIZE;
use crate::error::CpuError;
use log::{debug, trace};

#[derive(Clone)]
pub struct ScpuRam {
    bytes: [u8; MEM_SIZE],
}

impl ScpuRam {
    ///
    /// Constructor for ScpuRam structure. This will create a blank RAM state of
    /// all zeros.
    ///
    pub fn new() -> ScpuRam {
        ScpuRam {
            bytes: [0; MEM_SIZE],
        }
    }

    pub fn reset(&mut self) {
        self.bytes = [0; MEM_SIZE];
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    ///
    /// Copies a program image into memory starting at address 0. Bytes that
    /// do not fit within memory are dropped. Memory past the end of the
    /// image keeps its previous contents.
    ///
    /// # Arguments
    ///
    ///  - `program` - Image to copy into memory
    ///
    /// # Return Value
    ///
    ///  - Number of bytes placed into memory
    ///
    pub fn load(&mut self, program: &[u8]) -> usize {
        let count = program.len().min(MEM_SIZE);
        self.bytes[..count].copy_from_slice(&program[..count]);
        if count < program.len() {
            debug!(
                "Program truncated: {} bytes given, {} bytes loaded",
                program.len(),
                count
            );
        }
        count
    }

    ///
    /// Reads the byte at `addr`.
    ///
    /// # Return Value
    ///
    ///  - `u8` value stored at `addr`, or `OutOfBounds` if `addr` is not within
    ///    memory
    ///
    pub fn read(&self, addr: usize) -> Result<u8, CpuError> {
        let res = *self.bytes.get(addr).ok_or(CpuError::OutOfBounds(addr))?;
        trace!("RAM Read: 0x{:02x}: 0x{:02x}", addr, res);
        Ok(res)
    }

    pub fn write(&mut self, addr: usize, value: u8) -> Result<(), CpuError> {
        trace!("RAM Write: 0x{:02x}: 0x{:02x}", addr, value);
        match self.bytes.get_mut(addr) {
            Some(b) => {
                *b = value;
                Ok(())
            }
            None => Err(CpuError::OutOfBounds(addr)),
        }
    }
}

#[cfg(test)]
mod ram_unittests {
    use super::ScpuRam;
    use crate::consts::MEM_SIZE;
    use crate::error::CpuError;

    #[test]
    ///
    /// # Description
    ///
    /// Ensures every address can be written and read back, and that the first
    /// address past the end of memory is rejected.
    ///
    fn test_ram_read_write() {
        let mut ram = ScpuRam::new();
        for addr in 0..MEM_SIZE {
            let val = (addr as u8) ^ 0xA5;
            ram.write(addr, val).unwrap();
            assert_eq!(ram.read(addr), Ok(val), "Readback failed at 0x{:x}", addr);
        }

        assert_eq!(ram.read(MEM_SIZE), Err(CpuError::OutOfBounds(MEM_SIZE)));
        assert_eq!(ram.write(MEM_SIZE, 1), Err(CpuError::OutOfBounds(MEM_SIZE)));
        assert_eq!(ram.read(usize::MAX), Err(CpuError::OutOfBounds(usize::MAX)));
    }

    #[test]
    fn test_ram_load_truncates() {
        let mut ram = ScpuRam::new();
        let program: Vec<u8> = (0..MEM_SIZE + 10).map(|i| (i % 251) as u8).collect();

        assert_eq!(ram.load(&program), MEM_SIZE);
        assert_eq!(ram.len(), MEM_SIZE);
        for addr in 0..MEM_SIZE {
            assert_eq!(ram.read(addr), Ok(program[addr]));
        }
    }

    #[test]
    fn test_ram_load_keeps_tail() {
        let mut ram = ScpuRam::new();
        ram.write(10, 0x42).unwrap();

        assert_eq!(ram.load(&[1, 2, 3]), 3);
        assert_eq!(ram.read(0), Ok(1));
        assert_eq!(ram.read(2), Ok(3));
        assert_eq!(ram.read(10), Ok(0x42));

        ram.reset();
        assert_eq!(ram.read(0), Ok(0));
        assert_eq!(ram.read(10), Ok(0));
    }
}
