//! Application services

mod submission_service;

pub use submission_service::{SubmissionService, SubmissionServiceConfig};
