//! State machine trait for status enums.
//!
//! Lifecycle enums (such as the generation status) declare their legal edges
//! once and get validated transitions from this trait.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for GenerationStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Idle, Streaming) | (Streaming, Completed))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Streaming],
///             // ...
///         }
///     }
/// }
///
/// let status = GenerationStatus::Idle.transition_to(GenerationStatus::Streaming)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Switch {
        Off,
        On,
        Broken,
    }

    impl StateMachine for Switch {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Switch::Off => vec![Switch::On],
                Switch::On => vec![Switch::Off, Switch::Broken],
                Switch::Broken => vec![],
            }
        }
    }

    #[test]
    fn transition_to_follows_declared_edges() {
        assert_eq!(Switch::Off.transition_to(Switch::On).unwrap(), Switch::On);
        assert!(Switch::Off.transition_to(Switch::Broken).is_err());
    }

    #[test]
    fn rejected_transition_names_both_states() {
        let err = Switch::Broken.transition_to(Switch::On).unwrap_err();
        assert!(err.to_string().contains("Broken"));
        assert!(err.to_string().contains("On"));
    }

    #[test]
    fn state_without_edges_is_terminal() {
        assert!(Switch::Broken.is_terminal());
        assert!(!Switch::On.is_terminal());
    }
}
