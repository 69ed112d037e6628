//! State machine trait for lifecycle status enums.

use super::ValidationError;

/// Lifecycle status with an explicit transition table.
///
/// Implementors list the legal moves once; `transition_to` and `is_terminal`
/// are derived from that table so every caller enforces the same rules.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is allowed.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all statuses reachable in one step from self.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns `target` if the move is allowed, otherwise a validation error.
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

    /// True when no outgoing transitions exist.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
