//! Infrastructure layer - External service implementations

pub mod logging;
pub mod prediction;
pub mod services;
