//! State Machine Runtime
//!
//! A small flat state machine used for the playback status. Supports:
//! - Typed states and events
//! - Guards evaluated against a caller-supplied context
//! - Transition observers
//! - Transition history

use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A guard that decides whether a transition may fire
pub type Guard<C> = Box<dyn Fn(&C) -> bool + Send>;

/// Called after every transition with `(from, event, to)`
pub type Observer<S, E> = Box<dyn FnMut(S, E, S) + Send>;

/// A transition in the state machine
pub struct Transition<S, E, C> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
    pub guard: Option<Guard<C>>,
}

impl<S, E, C> Transition<S, E, C> {
    /// Create a transition without guard
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
        }
    }

    /// Add a guard condition
    pub fn with_guard<F: Fn(&C) -> bool + Send + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    fn allows(&self, ctx: &C) -> bool {
        match &self.guard {
            Some(guard) => guard(ctx),
            None => true,
        }
    }
}

type TransitionTable<S, E, C> = FxHashMap<(S, E), SmallVec<[Transition<S, E, C>; 2]>>;

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E, C> {
    initial_state: S,
    transitions: TransitionTable<S, E, C>,
    observers: Vec<Observer<S, E>>,
}

impl<S, E, C> StateMachineBuilder<S, E, C>
where
    S: Copy + Eq + Hash,
    E: Copy + Eq + Hash,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: FxHashMap::default(),
            observers: Vec::new(),
        }
    }

    /// Add a transition. Transitions sharing `(from, event)` are tried in
    /// insertion order; the first whose guard passes fires.
    pub fn transition(mut self, transition: Transition<S, E, C>) -> Self {
        self.transitions
            .entry((transition.from_state, transition.event))
            .or_default()
            .push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(self, from: S, event: E, to: S) -> Self {
        self.transition(Transition::new(from, event, to))
    }

    /// Observe every transition
    pub fn observe<F: FnMut(S, E, S) + Send + 'static>(mut self, observer: F) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E, C> {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            observers: self.observers,
            history: Vec::new(),
        }
    }
}

/// A state machine instance
pub struct StateMachine<S, E, C> {
    current_state: S,
    transitions: TransitionTable<S, E, C>,
    observers: Vec<Observer<S, E>>,
    /// History of state transitions (for debugging)
    history: Vec<(S, E, S)>,
}

impl<S, E, C> StateMachine<S, E, C>
where
    S: Copy + Eq + Hash,
    E: Copy + Eq + Hash,
{
    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E, C> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Get transition history
    pub fn history(&self) -> &[(S, E, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Register an observer after construction
    pub fn observe<F: FnMut(S, E, S) + Send + 'static>(&mut self, observer: F) {
        self.observers.push(Box::new(observer));
    }

    fn find(&self, event: E, ctx: &C) -> Option<S> {
        self.transitions
            .get(&(self.current_state, event))?
            .iter()
            .find(|t| t.allows(ctx))
            .map(|t| t.to_state)
    }

    /// Check if an event can trigger a transition from the current state
    pub fn can_send(&self, event: E, ctx: &C) -> bool {
        self.find(event, ctx).is_some()
    }

    /// Send an event. Returns the new state if a transition fired, `None`
    /// if the event is not valid in the current state.
    pub fn send(&mut self, event: E, ctx: &C) -> Option<S> {
        let from = self.current_state;
        let to = self.find(event, ctx)?;

        self.current_state = to;
        self.history.push((from, event, to));

        for observer in self.observers.iter_mut() {
            observer(from, event, to);
        }

        Some(to)
    }
}
