//! Submission cycle state machine

use std::fmt;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Where one submission cycle currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionState {
    /// Waiting for the user; the submit control is enabled
    #[default]
    Idle,

    /// Raw input is being coerced into features
    Validating,

    /// A prediction request is in flight
    Requesting,
}

impl SubmissionState {
    /// Check if this state can transition to another state
    pub fn can_transition_to(&self, target: SubmissionState) -> bool {
        match (self, target) {
            (Self::Idle, Self::Validating) => true,

            // Invalid input goes back to Idle, valid input moves on
            (Self::Validating, Self::Idle) => true,
            (Self::Validating, Self::Requesting) => true,

            // Success and failure both end the cycle
            (Self::Requesting, Self::Idle) => true,

            _ => false,
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Validating => write!(f, "validating"),
            Self::Requesting => write!(f, "requesting"),
        }
    }
}

/// Rejected state change
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid submission transition from '{from}' to '{to}'")]
pub struct TransitionError {
    pub from: SubmissionState,
    pub to: SubmissionState,
}

/// Current state of the input screen's submission plus its last error
///
/// Owned by the active screen. A new cycle can only start from `Idle`, which
/// replaces the ad-hoc busy flag of a plain form.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    state: SubmissionState,
    last_error: Option<String>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Whether the submit control should be disabled
    pub fn is_busy(&self) -> bool {
        self.state != SubmissionState::Idle
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start a new cycle, clearing the previous error
    pub fn begin(&mut self) -> Result<(), DomainError> {
        if self.is_busy() {
            return Err(DomainError::busy(self.state));
        }
        self.transition(SubmissionState::Validating)?;
        self.last_error = None;
        Ok(())
    }

    /// Validation passed; the request is about to be sent
    pub fn start_request(&mut self) -> Result<(), TransitionError> {
        self.transition(SubmissionState::Requesting)
    }

    /// The request succeeded
    pub fn complete(&mut self) -> Result<(), TransitionError> {
        if self.state != SubmissionState::Requesting {
            return Err(TransitionError {
                from: self.state,
                to: SubmissionState::Idle,
            });
        }
        self.transition(SubmissionState::Idle)
    }

    /// Validation or the request failed; record the message and go back to Idle
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), TransitionError> {
        self.transition(SubmissionState::Idle)?;
        self.last_error = Some(message.into());
        Ok(())
    }

    fn transition(&mut self, target: SubmissionState) -> Result<(), TransitionError> {
        if !self.state.can_transition_to(target) {
            return Err(TransitionError {
                from: self.state,
                to: target,
            });
        }
        self.state = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        assert!(SubmissionState::Idle.can_transition_to(SubmissionState::Validating));
        assert!(!SubmissionState::Idle.can_transition_to(SubmissionState::Requesting));
        assert!(!SubmissionState::Idle.can_transition_to(SubmissionState::Idle));

        assert!(SubmissionState::Validating.can_transition_to(SubmissionState::Idle));
        assert!(SubmissionState::Validating.can_transition_to(SubmissionState::Requesting));

        assert!(SubmissionState::Requesting.can_transition_to(SubmissionState::Idle));
        assert!(!SubmissionState::Requesting.can_transition_to(SubmissionState::Validating));
    }

    #[test]
    fn test_tracker_success_cycle() {
        let mut tracker = SubmissionTracker::new();
        assert!(!tracker.is_busy());

        tracker.begin().unwrap();
        assert_eq!(tracker.state(), SubmissionState::Validating);

        tracker.start_request().unwrap();
        assert_eq!(tracker.state(), SubmissionState::Requesting);
        assert!(tracker.is_busy());

        tracker.complete().unwrap();
        assert_eq!(tracker.state(), SubmissionState::Idle);
        assert_eq!(tracker.last_error(), None);
    }

    #[test]
    fn test_tracker_failure_records_message() {
        let mut tracker = SubmissionTracker::new();
        tracker.begin().unwrap();
        tracker.fail("Please enter valid numbers for all features").unwrap();

        assert_eq!(tracker.state(), SubmissionState::Idle);
        assert_eq!(
            tracker.last_error(),
            Some("Please enter valid numbers for all features")
        );
    }

    #[test]
    fn test_tracker_begin_clears_previous_error() {
        let mut tracker = SubmissionTracker::new();
        tracker.begin().unwrap();
        tracker.fail("boom").unwrap();

        tracker.begin().unwrap();
        assert_eq!(tracker.last_error(), None);
    }

    #[test]
    fn test_tracker_rejects_begin_while_busy() {
        let mut tracker = SubmissionTracker::new();
        tracker.begin().unwrap();
        tracker.start_request().unwrap();

        let err = tracker.begin().unwrap_err();
        assert_eq!(err, DomainError::busy(SubmissionState::Requesting));
        assert_eq!(tracker.state(), SubmissionState::Requesting);
    }

    #[test]
    fn test_tracker_rejects_out_of_order_steps() {
        let mut tracker = SubmissionTracker::new();

        assert!(tracker.start_request().is_err());
        assert!(tracker.fail("nothing to fail").is_err());

        tracker.begin().unwrap();
        let err = tracker.complete().unwrap_err();
        assert_eq!(err.from, SubmissionState::Validating);
        assert_eq!(err.to, SubmissionState::Idle);
    }
}
