//! Initialization state machine for objects with a two-phase setup

/// Tracks an object's progress through two-phase initialization.
///
/// Transitions are linear and one-way: `Uninitialized` → `Initializing` →
/// `Valid`. There is no recovery state: if initialization fails, the object
/// must be discarded. Using an object out of order is a caller bug, reported
/// by a panic rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitializationState {
    Uninitialized,
    Initializing,
    Valid,
}

impl InitializationState {
    /// Creates a state machine in `Uninitialized`
    pub fn new() -> Self {
        InitializationState::Uninitialized
    }

    /// Marks initialization as started; panics unless `Uninitialized`
    pub fn set_initializing(&mut self) {
        assert_eq!(
            *self,
            InitializationState::Uninitialized,
            "set_initializing called twice"
        );
        *self = InitializationState::Initializing;
    }

    /// Marks initialization as complete; panics unless `Initializing`
    pub fn set_valid(&mut self) {
        assert_eq!(
            *self,
            InitializationState::Initializing,
            "set_valid called without set_initializing"
        );
        *self = InitializationState::Valid;
    }

    /// Checks that the object is fully initialized; panics otherwise
    pub fn assert_valid(&self) {
        assert_eq!(
            *self,
            InitializationState::Valid,
            "object used before successful initialization"
        );
    }

    /// Returns true once initialization has completed
    pub fn is_valid(&self) -> bool {
        *self == InitializationState::Valid
    }
}

impl Default for InitializationState {
    fn default() -> Self {
        InitializationState::new()
    }
}
