//! sortvis Playback
//!
//! Time-driven replay of traced sorts.
//!
//! # Features
//!
//! - **Timer Queue**: cancellable, generational one-shot timers on a virtual clock
//! - **Playback Controller**: one step per tick with pause, resume, delay changes
//!   and the zero-delay jump to the sorted result
//! - **Session**: original input, idle/running/paused status, abort and restart
//! - **Driver**: tokio event loop feeding the session from a command channel

pub mod driver;
pub mod playback;
pub mod scheduler;
pub mod session;

pub use driver::{PlaybackDriver, SessionCommand};
pub use playback::{PlaybackController, DEFAULT_DELAY_MS};
pub use scheduler::{TimerId, TimerQueue};
pub use session::Session;
