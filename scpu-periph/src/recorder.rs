use scpu_core::mem::{Register, RegisterSnapshot};
use scpu_core::periph::{ExecEvent, ScpuObserver};

///
/// ## RecordingObserver
///
/// Keeps up to `N` execution events in a fixed capacity buffer so it can be
/// used without an allocator. Events past the capacity are counted but not
/// stored. The snapshot of the most recent HLT is kept as well.
///
pub struct RecordingObserver<const N: usize> {
    events: heapless::Vec<ExecEvent, N>,
    dropped: usize,
    last_halt: Option<RegisterSnapshot>,
}

impl<const N: usize> RecordingObserver<N> {
    pub fn new() -> Self {
        RecordingObserver {
            events: heapless::Vec::new(),
            dropped: 0,
            last_halt: None,
        }
    }

    pub fn events(&self) -> &[ExecEvent] {
        &self.events
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn last_halt(&self) -> Option<&RegisterSnapshot> {
        self.last_halt.as_ref()
    }

    ///
    /// Register values reported by OUT instructions, in execution order.
    ///
    pub fn outputs(&self) -> impl Iterator<Item = (Register, u8)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            ExecEvent::Out { reg, value, .. } => Some((reg, value)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
        self.last_halt = None;
    }
}

impl<const N: usize> ScpuObserver for RecordingObserver<N> {
    fn on_exec(&mut self, event: &ExecEvent) {
        if self.events.push(*event).is_err() {
            self.dropped += 1;
        }
    }

    fn on_halt(&mut self, snapshot: &RegisterSnapshot) {
        self.last_halt = Some(*snapshot);
    }
}
