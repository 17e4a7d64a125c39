#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "log-periph")]
mod logger;

#[cfg(feature = "log-periph")]
pub use crate::logger::LogObserver;

#[cfg(feature = "heapless-periph")]
mod recorder;

#[cfg(feature = "heapless-periph")]
pub use crate::recorder::RecordingObserver;

#[cfg(feature = "channel-periph")]
mod channel;

#[cfg(feature = "channel-periph")]
pub use crate::channel::{ChannelObserver, ObserverMsg};

pub use scpu_core::periph::{ExecEvent, NullObserver, ScpuObserver};
