use log::{debug, info, trace, warn};

use crate::consts::MEM_SIZE;
use crate::disasm::disasm;
use crate::error::CpuError;
use crate::instr::{ScpuArith, ScpuControlFlow, ScpuIo, ScpuLoadStore, ScpuLogic};
use crate::instr::{ScpuInst, ScpuMnem};
use crate::mem::{Register, RegisterSnapshot, ScpuRam, ScpuRegs};
use crate::periph::{ExecEvent, ScpuObserver};

pub struct ScpuCpu<'a> {
    ram: ScpuRam,
    regs: ScpuRegs,
    pc: usize,
    pub(crate) running: bool,
    pub total_cycles: usize,
    observer: &'a mut dyn ScpuObserver,
}

impl<'a> ScpuCpu<'a> {
    pub fn new(observer: &'a mut dyn ScpuObserver) -> ScpuCpu<'a> {
        ScpuCpu {
            ram: ScpuRam::new(),
            regs: ScpuRegs::new(),
            pc: 0,
            running: false,
            total_cycles: 0,
            observer: observer,
        }
    }

    ///
    /// ## `load_program` Function
    ///
    /// Copies a program image into memory starting at address 0. Anything
    /// past the end of memory is dropped.
    ///
    /// ### Result
    ///
    /// Number of bytes that were placed into memory.
    ///
    pub fn load_program(&mut self, program: &[u8]) -> usize {
        let count = self.ram.load(program);
        info!("Program loaded ({} bytes).", program.len());
        count
    }

    ///
    /// Points the program counter back at address 0. Registers and memory
    /// are left as they are.
    ///
    pub fn reset(&mut self) {
        self.pc = 0;
    }

    ///
    /// Prepares the CPU for a run: resets the program counter and raises the
    /// running flag. Registers set beforehand keep their values.
    ///
    pub fn start(&mut self) {
        self.reset();
        self.running = true;
        info!("CPU START");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn read(&self, addr: usize) -> Result<u8, CpuError> {
        self.ram.read(addr)
    }

    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), CpuError> {
        self.ram.write(addr, val)
    }

    pub fn read_reg(&self, reg: Register) -> u8 {
        self.regs.read(reg)
    }

    pub fn write_reg(&mut self, reg: Register, val: u8) {
        self.regs.write(reg, val as u16)
    }

    pub fn snapshot(&self) -> RegisterSnapshot {
        self.regs.snapshot()
    }

    pub(crate) fn notify(&mut self, event: ExecEvent) {
        trace!("Event: {:?}", event);
        self.observer.on_exec(&event);
    }

    pub(crate) fn notify_halt(&mut self) {
        let snapshot = self.regs.snapshot();
        self.observer.on_halt(&snapshot);
    }

    ///
    /// ## `fetch` Function
    ///
    /// Reads the byte at the program counter and advances the counter by
    /// one. Used for both opcode and operand bytes.
    ///
    /// ### Result
    ///
    /// The fetched byte, or `ProgramCounterOutOfBounds` if the program
    /// counter already points past the end of memory.
    ///
    pub fn fetch(&mut self) -> Result<u8, CpuError> {
        if self.pc >= MEM_SIZE {
            return Err(CpuError::ProgramCounterOutOfBounds(self.pc));
        }

        let val = self.ram.read(self.pc)?;
        self.pc += 1;
        Ok(val)
    }

    fn fetch_operands(&mut self, inst: &mut ScpuInst) -> Result<(), CpuError> {
        for idx in 0..inst.mnem.arity() {
            inst.operands[idx] = self.fetch()?;
        }
        Ok(())
    }

    pub fn execute(&mut self, inst: &ScpuInst) -> Result<u16, CpuError> {
        match inst.mnem {
            ScpuMnem::LOAD => self.load(inst),
            ScpuMnem::ADD => self.add(inst),
            ScpuMnem::AND => self.and(inst),
            ScpuMnem::OUT => self.out(inst),
            ScpuMnem::HLT => self.hlt(inst),
        }
    }

    pub fn print_state(&self) {
        let snap = self.regs.snapshot();
        debug!(
            "PC: {:02x} A: {:02x} B: {:02x} C: {:02x} D: {:02x} RUN: {}",
            self.pc,
            snap.get(Register::A),
            snap.get(Register::B),
            snap.get(Register::C),
            snap.get(Register::D),
            self.running
        );
    }

    ///
    /// ## `step` Function
    ///
    /// Runs a single fetch / decode / execute cycle. An unknown opcode is
    /// reported to the observer and skipped without touching any register.
    /// Memory and fetch errors are returned to the caller.
    ///
    /// ### Result
    ///
    /// The running flag after the cycle.
    ///
    pub fn step(&mut self) -> Result<bool, CpuError> {
        let addr = self.pc;
        let op = self.fetch()?;

        let mut inst = match disasm(addr as u16, op) {
            Ok(i) => i,
            Err(CpuError::UnknownOpcode(op)) => {
                warn!("Unknown Opcode: 0x{:x} at 0x{:02x}", op, addr);
                self.notify(ExecEvent::UnknownOpcode {
                    pc: addr as u16,
                    opcode: op,
                });
                self.total_cycles += 1;
                return Ok(self.running);
            }
            Err(e) => return Err(e),
        };

        self.fetch_operands(&mut inst)?;
        debug!("{:02x}: {}", addr, inst);

        let cycles = self.execute(&inst)?;
        self.total_cycles += cycles as usize;
        self.print_state();

        Ok(self.running)
    }

    ///
    /// ## `run` Function
    ///
    /// Starts the CPU and steps it until HLT executes. Any error aborts the
    /// run immediately and is handed back to the caller.
    ///
    /// ### Result
    ///
    /// Number of fetch / execute cycles performed, HLT included.
    ///
    pub fn run(&mut self) -> Result<usize, CpuError> {
        self.start();

        let mut steps = 0;
        while self.running {
            self.step()?;
            steps += 1;
        }

        info!("CPU STOPPED");
        Ok(steps)
    }
}
