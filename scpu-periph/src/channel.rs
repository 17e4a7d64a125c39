use crossbeam_channel::{unbounded, Receiver, Sender};
use log::warn;

use scpu_core::mem::RegisterSnapshot;
use scpu_core::periph::{ExecEvent, ScpuObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverMsg {
    Exec(ExecEvent),
    Halt(RegisterSnapshot),
}

///
/// ## ChannelObserver
///
/// Forwards execution events over a channel so they can be consumed away
/// from the CPU loop. Sending never blocks, and a closed channel only
/// produces a warning; the run carries on regardless.
///
pub struct ChannelObserver {
    tx: Sender<ObserverMsg>,
}

impl ChannelObserver {
    pub fn new() -> (Self, Receiver<ObserverMsg>) {
        let (tx, rx) = unbounded();
        (ChannelObserver { tx: tx }, rx)
    }

    fn send(&self, msg: ObserverMsg) {
        if self.tx.send(msg).is_err() {
            warn!("Observer channel closed. Dropping {:?}", msg);
        }
    }
}

impl ScpuObserver for ChannelObserver {
    fn on_exec(&mut self, event: &ExecEvent) {
        self.send(ObserverMsg::Exec(*event));
    }

    fn on_halt(&mut self, snapshot: &RegisterSnapshot) {
        self.send(ObserverMsg::Halt(*snapshot));
    }
}

#[cfg(test)]
mod channel_tests {
    use super::{ChannelObserver, ObserverMsg};
    use scpu_core::mem::Register;
    use scpu_core::periph::ExecEvent;
    use scpu_core::ScpuCpu;

    #[test]
    fn channel_forwards_events() {
        let (mut obs, rx) = ChannelObserver::new();
        {
            let mut cpu = ScpuCpu::new(&mut obs);
            cpu.load_program(scpu_programs::SAMPLE_PROGRAM);
            cpu.run().unwrap();
        }

        let msgs: Vec<ObserverMsg> = rx.try_iter().collect();
        assert_eq!(msgs.len(), 6);
        assert_eq!(
            msgs[3],
            ObserverMsg::Exec(ExecEvent::Out {
                pc: 9,
                reg: Register::A,
                value: 30
            })
        );
        match msgs[5] {
            ObserverMsg::Halt(snap) => assert_eq!(snap.get(Register::A), 30),
            _ => panic!("Expected final register snapshot, got {:?}", msgs[5]),
        }
    }

    #[test]
    fn channel_closed_does_not_stop_cpu() {
        let (mut obs, rx) = ChannelObserver::new();
        drop(rx);

        let mut cpu = ScpuCpu::new(&mut obs);
        cpu.load_program(scpu_programs::WRAP_PROGRAM);
        assert_eq!(cpu.run(), Ok(5));
        assert_eq!(cpu.read_reg(Register::A), 4);
    }
}
