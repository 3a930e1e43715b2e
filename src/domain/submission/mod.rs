//! Submission domain - The Idle/Validating/Requesting cycle

mod cancel;
mod state;

pub use cancel::{cancellation, CancelHandle, CancelSignal};
pub use state::{SubmissionState, SubmissionTracker, TransitionError};
