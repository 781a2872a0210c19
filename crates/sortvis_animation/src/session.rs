//! Visualizer session
//!
//! Page-level orchestration around a [`PlaybackController`]: keeps the
//! original input for abort/restart, the `is_sorted` flag, the configured
//! input size, and the idle/running/paused status machine.

use sortvis_core::input::{clamp_size, DEFAULT_SIZE};
use sortvis_core::{
    status_machine, Algorithm, Command, Frame, InputSource, Status, StatusContext, StatusMachine,
    Trace, Value,
};

use crate::playback::PlaybackController;

/// Receives `(status, is_sorted)` after every status change
pub type StatusHook = Box<dyn FnMut(Status, bool) + Send>;

pub struct Session {
    algorithm: Algorithm,
    size: usize,
    original: Vec<Value>,
    is_sorted: bool,
    status: StatusMachine,
    controller: PlaybackController,
    on_status: Option<StatusHook>,
}

impl Session {
    pub fn new(algorithm: Algorithm, controller: PlaybackController) -> Self {
        let mut status = status_machine();
        status.observe(|from, command, to| {
            tracing::info!(%from, %to, ?command, "status changed");
        });

        Self {
            algorithm,
            size: DEFAULT_SIZE,
            original: Vec::new(),
            is_sorted: false,
            status,
            controller,
            on_status: None,
        }
    }

    pub fn on_status<F: FnMut(Status, bool) + Send + 'static>(&mut self, hook: F) {
        self.on_status = Some(Box::new(hook));
    }

    fn context(&self) -> StatusContext {
        StatusContext {
            has_input: !self.original.is_empty(),
            is_sorted: self.is_sorted,
        }
    }

    fn send(&mut self, command: Command) -> bool {
        let ctx = self.context();
        if self.status.send(command, &ctx).is_some() {
            true
        } else {
            tracing::debug!(?command, status = %self.status(), "command ignored");
            false
        }
    }

    fn notify(&mut self) {
        let (status, is_sorted) = (self.status(), self.is_sorted);
        if let Some(hook) = self.on_status.as_mut() {
            hook(status, is_sorted);
        }
    }

    fn reload(&mut self) {
        self.is_sorted = false;
        let trace = Trace::new(self.original.clone(), self.algorithm);
        self.controller.load(trace);
    }

    /// Move to idle once the controller has played to the end
    fn sync_finish(&mut self) {
        if self.status.is_in(Status::Running) && self.controller.is_finished() {
            self.is_sorted = true;
            self.send(Command::Finish);
        }
    }

    /// Draw a new input of the configured size. Refused while running.
    pub fn generate(&mut self, source: &mut dyn InputSource) -> bool {
        if !self.status.can_send(Command::Generate, &self.context()) {
            tracing::debug!("generate ignored while running");
            return false;
        }
        let values = source.generate(self.size);
        self.set_input(values)
    }

    /// Use `values` as the new input. Refused while running.
    pub fn set_input(&mut self, values: Vec<Value>) -> bool {
        if !self.send(Command::Generate) {
            return false;
        }
        self.original = values;
        self.reload();
        self.notify();
        true
    }

    pub fn start(&mut self) -> bool {
        if !self.send(Command::Start) {
            return false;
        }
        self.controller.start();
        self.sync_finish();
        self.notify();
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.send(Command::Pause) {
            return false;
        }
        self.controller.pause();
        self.notify();
        true
    }

    pub fn resume(&mut self) -> bool {
        if !self.send(Command::Resume) {
            return false;
        }
        self.controller.resume();
        self.sync_finish();
        self.notify();
        true
    }

    /// Stop playback and show the original input again
    pub fn abort(&mut self) -> bool {
        if !self.send(Command::Abort) {
            return false;
        }
        self.reload();
        self.notify();
        true
    }

    /// Re-trace the original input and play it from the first step
    pub fn restart(&mut self) -> bool {
        if !self.send(Command::Restart) {
            return false;
        }
        self.reload();
        self.controller.start();
        self.sync_finish();
        self.notify();
        true
    }

    pub fn set_delay(&mut self, ms: i64) {
        self.controller.set_delay(ms);
    }

    /// Change the generated input length; only while idle
    pub fn set_size(&mut self, size: usize) -> bool {
        if !self.status.is_in(Status::Idle) {
            return false;
        }
        self.size = clamp_size(size);
        true
    }

    /// Switch algorithms and re-trace the current input; only while idle
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> bool {
        if !self.status.is_in(Status::Idle) {
            return false;
        }
        self.algorithm = algorithm;
        if !self.original.is_empty() {
            self.reload();
            self.notify();
        }
        true
    }

    /// Report elapsed time to the controller
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.controller.advance(elapsed_ms);
        self.sync_finish_and_notify();
    }

    /// Move the controller clock to an absolute time
    pub fn advance_to(&mut self, now_ms: u64) {
        self.controller.advance_to(now_ms);
        self.sync_finish_and_notify();
    }

    fn sync_finish_and_notify(&mut self) {
        let before = self.status();
        self.sync_finish();
        if self.status() != before {
            self.notify();
        }
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.controller.next_deadline()
    }

    pub fn status(&self) -> Status {
        self.status.current_state()
    }

    pub fn status_history(&self) -> &[(Status, Command, Status)] {
        self.status.history()
    }

    pub fn is_sorted(&self) -> bool {
        self.is_sorted
    }

    pub fn original(&self) -> &[Value] {
        &self.original
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn frame(&self) -> &Frame {
        self.controller.frame()
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }
}
