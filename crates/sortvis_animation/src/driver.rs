//! Async playback driver
//!
//! Runs a [`Session`] on a tokio event loop. The loop sleeps until the
//! controller's next tick and wakes early for commands arriving on an mpsc
//! channel. Both paths first bring the controller clock up to the elapsed
//! wall time, so the controller only ever sees monotonic virtual time.

use std::time::Duration;

use sortvis_core::{Algorithm, InputSource, Status};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::session::Session;

/// Commands accepted by the driver
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    Pause,
    Resume,
    Abort,
    Restart,
    Generate,
    SetDelay(i64),
    SetSize(usize),
    SetAlgorithm(Algorithm),
    Quit,
}

pub struct PlaybackDriver<S> {
    session: Session,
    source: S,
    commands: mpsc::Receiver<SessionCommand>,
    exit_on_finish: bool,
}

impl<S: InputSource> PlaybackDriver<S> {
    pub fn new(session: Session, source: S, commands: mpsc::Receiver<SessionCommand>) -> Self {
        Self {
            session,
            source,
            commands,
            exit_on_finish: false,
        }
    }

    /// Stop the loop as soon as a playback completes
    pub fn exit_on_finish(mut self, exit: bool) -> Self {
        self.exit_on_finish = exit;
        self
    }

    /// Run until `Quit`, until the command stream closes with nothing left
    /// to play, or (with `exit_on_finish`) until playback completes.
    /// Returns the session for inspection.
    pub async fn run(mut self) -> Session {
        let origin = Instant::now();
        let mut commands_open = true;

        loop {
            if self.exit_on_finish && self.finished() {
                break;
            }
            if !commands_open && self.session.status() != Status::Running {
                break;
            }

            let deadline = self
                .session
                .next_deadline()
                .map(|ms| origin + Duration::from_millis(ms));

            tokio::select! {
                command = self.commands.recv(), if commands_open => {
                    self.catch_up(origin);
                    match command {
                        Some(SessionCommand::Quit) => break,
                        Some(command) => self.apply(command),
                        None => {
                            tracing::debug!("command stream closed");
                            commands_open = false;
                        }
                    }
                }
                _ = sleep_until(deadline.unwrap_or(origin)), if deadline.is_some() => {
                    self.catch_up(origin);
                }
                else => break,
            }
        }

        self.session
    }

    fn finished(&self) -> bool {
        self.session.is_sorted() && self.session.status() == Status::Idle
    }

    fn catch_up(&mut self, origin: Instant) {
        let elapsed = u64::try_from(origin.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.session.advance_to(elapsed);
    }

    fn apply(&mut self, command: SessionCommand) {
        tracing::debug!(?command, "applying command");
        let accepted = match command {
            SessionCommand::Start => self.session.start(),
            SessionCommand::Pause => self.session.pause(),
            SessionCommand::Resume => self.session.resume(),
            SessionCommand::Abort => self.session.abort(),
            SessionCommand::Restart => self.session.restart(),
            SessionCommand::Generate => self.session.generate(&mut self.source),
            SessionCommand::SetDelay(ms) => {
                self.session.set_delay(ms);
                true
            }
            SessionCommand::SetSize(size) => self.session.set_size(size),
            SessionCommand::SetAlgorithm(algorithm) => self.session.set_algorithm(algorithm),
            SessionCommand::Quit => true,
        };
        if !accepted {
            tracing::debug!(status = %self.session.status(), "command had no effect");
        }
    }
}
