use log::info;

use scpu_core::mem::RegisterSnapshot;
use scpu_core::periph::{ExecEvent, ScpuObserver};

///
/// ## LogObserver
///
/// Reports every executed instruction and the final register state through
/// the `log` facade at `info` level.
///
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        LogObserver
    }
}

impl ScpuObserver for LogObserver {
    fn on_exec(&mut self, event: &ExecEvent) {
        match event {
            ExecEvent::Out { .. } => info!("--> {}", event),
            ExecEvent::UnknownOpcode { .. } => info!("{}", event),
            _ => info!("EXEC: {}", event),
        }
    }

    fn on_halt(&mut self, snapshot: &RegisterSnapshot) {
        info!("Final Register State:");
        for (reg, val) in snapshot.iter() {
            info!("{}: {} (0x{:02X})", reg, val, val);
        }
    }
}

#[cfg(test)]
mod logger_tests {
    use super::LogObserver;
    use scpu_core::ScpuCpu;

    #[test]
    fn logger_runs_sample() {
        let mut obs = LogObserver::new();
        let mut cpu = ScpuCpu::new(&mut obs);
        cpu.load_program(scpu_programs::SAMPLE_PROGRAM);
        assert_eq!(cpu.run(), Ok(5));
    }
}
