use crate::cpu::ScpuCpu;
use crate::mem::RegisterSnapshot;
use crate::periph::{ExecEvent, ScpuObserver};

///
/// Observer that keeps every event and halt snapshot for later inspection.
///
#[derive(Default)]
pub struct TestObserver {
    pub events: Vec<ExecEvent>,
    pub halts: Vec<RegisterSnapshot>,
}

impl ScpuObserver for TestObserver {
    fn on_exec(&mut self, event: &ExecEvent) {
        self.events.push(*event);
    }

    fn on_halt(&mut self, snapshot: &RegisterSnapshot) {
        self.halts.push(*snapshot);
    }
}

#[allow(dead_code)]
pub fn init_cpu<'a>(observer: &'a mut dyn ScpuObserver) -> ScpuCpu<'a> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut cpu = ScpuCpu::new(observer);
    cpu.reset();
    cpu
}

#[allow(dead_code)]
pub fn init_with_program<'a>(observer: &'a mut dyn ScpuObserver, program: &[u8]) -> ScpuCpu<'a> {
    let mut cpu = init_cpu(observer);
    cpu.load_program(program);
    cpu.start();
    cpu
}

#[allow(dead_code)]
pub fn validate_cpu_state(cpu: &ScpuCpu, expect_pc: usize) {
    assert_eq!(cpu.pc(), expect_pc, "Program counter mismatch");
}

mod arith;
