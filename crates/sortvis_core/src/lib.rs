//! sortvis Core
//!
//! This crate provides the pure half of the sorting visualizer:
//!
//! - **Step Tracing**: bubble, selection and quick sort traced into an
//!   ordered list of snapshots
//! - **Input Generation**: seeded or entropy-backed random element sequences
//! - **Status Machine**: the guarded idle/running/paused transition table
//!
//! # Example
//!
//! ```rust
//! use sortvis_core::{trace, Algorithm};
//!
//! let steps = trace(&[5, 3, 1], Algorithm::Bubble);
//!
//! let last = steps.last().unwrap();
//! assert_eq!(last.values, vec![1, 3, 5]);
//! assert_eq!(last.sorted, vec![0, 1, 2]);
//! assert!(last.active.is_empty());
//! ```

pub mod error;
pub mod fsm;
pub mod input;
pub mod status;
pub mod step;
pub mod trace;

pub use error::SortvisError;
pub use fsm::{StateMachine, Transition};
pub use input::{FixedInput, InputSource, RandomInput};
pub use status::{status_machine, Command, Status, StatusContext, StatusMachine};
pub use step::{ActivePair, Algorithm, Frame, QuickMeta, Step, Value};
pub use trace::{trace, Trace};
