//! Playback controller
//!
//! Replays a [`Trace`] one step per tick. The controller owns its own
//! virtual clock and timer queue; an outer event loop only reports elapsed
//! time through [`PlaybackController::advance`] and sleeps until
//! [`PlaybackController::next_deadline`].
//!
//! Every state-changing command cancels the pending tick, and a tick
//! re-checks `running && !paused` when it fires, so a tick scheduled before
//! a pause or load can never move the cursor.

use sortvis_core::{Frame, Trace, Value};

use crate::scheduler::{TimerId, TimerQueue};

/// Default delay between steps
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Receives every published frame
pub type PublishHook = Box<dyn FnMut(&Frame) + Send>;

/// Receives the sorted values once per completed playback
pub type FinishHook = Box<dyn FnMut(&[Value]) + Send>;

pub struct PlaybackController {
    trace: Option<Trace>,
    cursor: usize,
    running: bool,
    paused: bool,
    finished: bool,
    delay_ms: u64,

    now_ms: u64,
    timers: TimerQueue,
    pending: Option<TimerId>,

    frame: Frame,
    on_publish: Option<PublishHook>,
    on_finish: Option<FinishHook>,
}

impl PlaybackController {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            trace: None,
            cursor: 0,
            running: false,
            paused: false,
            finished: false,
            delay_ms,
            now_ms: 0,
            timers: TimerQueue::new(),
            pending: None,
            frame: Frame::default(),
            on_publish: None,
            on_finish: None,
        }
    }

    /// Register the renderer hook
    pub fn on_publish<F: FnMut(&Frame) + Send + 'static>(&mut self, hook: F) {
        self.on_publish = Some(Box::new(hook));
    }

    /// Register the finish hook
    pub fn on_finish<F: FnMut(&[Value]) + Send + 'static>(&mut self, hook: F) {
        self.on_finish = Some(Box::new(hook));
    }

    /// Replace the held trace and show its input.
    ///
    /// Resets the cursor, stops playback and invalidates any pending tick.
    pub fn load(&mut self, trace: Trace) {
        self.cancel_pending();
        tracing::debug!(
            algorithm = %trace.algorithm(),
            steps = trace.len(),
            "loading trace"
        );

        self.frame = Frame::idle(trace.input().to_vec());
        self.trace = Some(trace);
        self.cursor = 0;
        self.running = false;
        self.paused = false;
        self.finished = false;
        self.publish();
    }

    /// Begin playback. No-op while running, once finished, or with nothing
    /// loaded.
    pub fn start(&mut self) -> bool {
        let loaded = self.trace.as_ref().is_some_and(|trace| !trace.is_empty());
        if self.running || self.finished || !loaded {
            return false;
        }

        self.running = true;
        self.paused = false;

        if self.delay_ms == 0 {
            self.finish();
        } else {
            self.tick();
        }
        true
    }

    /// Suspend playback, keeping the cursor. No-op unless running.
    pub fn pause(&mut self) -> bool {
        if !self.running || self.paused {
            return false;
        }
        self.paused = true;
        self.cancel_pending();
        tracing::debug!(cursor = self.cursor, "paused");
        true
    }

    /// Continue from the current cursor. No-op unless paused.
    pub fn resume(&mut self) -> bool {
        if !self.running || !self.paused {
            return false;
        }
        self.paused = false;
        tracing::debug!(cursor = self.cursor, "resumed");
        self.tick();
        true
    }

    /// Delay used for ticks scheduled from now on; negatives become 0.
    pub fn set_delay(&mut self, ms: i64) {
        self.delay_ms = u64::try_from(ms).unwrap_or(0);
    }

    /// Move the virtual clock forward, firing every tick that falls due.
    /// Each tick runs at its own deadline.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let target = self.now_ms.saturating_add(elapsed_ms);
        while let Some((id, due_ms)) = self.timers.pop_due(target) {
            self.now_ms = self.now_ms.max(due_ms);
            self.fire(id);
        }
        self.now_ms = target;
    }

    /// Move the virtual clock to an absolute time (never backwards)
    pub fn advance_to(&mut self, now_ms: u64) {
        self.advance(now_ms.saturating_sub(self.now_ms));
    }

    /// Virtual time of the next tick, if one is scheduled
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    fn fire(&mut self, id: TimerId) {
        if self.pending != Some(id) {
            tracing::trace!("dropping stale tick");
            return;
        }
        self.pending = None;
        self.tick();
    }

    fn tick(&mut self) {
        if !self.running || self.paused {
            return;
        }
        let Some(trace) = self.trace.as_ref() else {
            return;
        };

        let Some(step) = trace.get(self.cursor) else {
            self.finish();
            return;
        };

        tracing::trace!(cursor = self.cursor, "tick");
        self.frame = Frame::from(step);
        self.cursor += 1;
        self.publish();

        if self.delay_ms == 0 {
            self.finish();
        } else {
            let due = self.now_ms.saturating_add(self.delay_ms);
            self.pending = Some(self.timers.schedule(due));
        }
    }

    /// Publish the terminal frame and stop
    fn finish(&mut self) {
        self.cancel_pending();
        let values = self
            .trace
            .as_ref()
            .and_then(Trace::terminal)
            .map(|step| step.values.clone())
            .unwrap_or_default();

        self.frame = Frame::terminal(values);
        self.running = false;
        self.paused = false;
        self.finished = true;
        self.publish();

        tracing::info!(len = self.frame.values.len(), "playback finished");
        if let Some(hook) = self.on_finish.as_mut() {
            hook(&self.frame.values);
        }
    }

    fn publish(&mut self) {
        if let Some(hook) = self.on_publish.as_mut() {
            hook(&self.frame);
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.timers.cancel(id);
        }
    }

    /// The currently visible frame
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Current virtual time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MS)
    }
}
