//! Playback status
//!
//! The idle/running/paused status shown by the page and the guarded
//! transition table that drives it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fsm::{StateMachine, Transition};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Running,
    Paused,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Idle => "idle",
            Status::Running => "running",
            Status::Paused => "paused",
        })
    }
}

/// Events that move the status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Pause,
    Resume,
    Abort,
    Restart,
    /// Playback reached the terminal step
    Finish,
    /// New input requested
    Generate,
}

/// What the guards may inspect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusContext {
    pub has_input: bool,
    /// The last playback ran to completion; only restart applies
    pub is_sorted: bool,
}

pub type StatusMachine = StateMachine<Status, Command, StatusContext>;

/// Build the status machine, starting in [`Status::Idle`]
pub fn status_machine() -> StatusMachine {
    use Command::*;
    use Status::*;

    let with_input = |ctx: &StatusContext| ctx.has_input;
    let unsorted_input = |ctx: &StatusContext| ctx.has_input && !ctx.is_sorted;

    StateMachine::builder(Idle)
        .transition(Transition::new(Idle, Start, Running).with_guard(unsorted_input))
        .on(Running, Pause, Paused)
        .on(Paused, Resume, Running)
        .on(Running, Abort, Idle)
        .on(Paused, Abort, Idle)
        .transition(Transition::new(Idle, Restart, Running).with_guard(with_input))
        .transition(Transition::new(Running, Restart, Running).with_guard(with_input))
        .transition(Transition::new(Paused, Restart, Running).with_guard(with_input))
        .on(Running, Finish, Idle)
        .on(Idle, Generate, Idle)
        .on(Paused, Generate, Idle)
        .build()
}
