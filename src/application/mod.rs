//! Application layer with pipeline services and use cases.

/// Pipeline stage services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use use_cases::{ClearAvatarUseCase, SetAvatarOutcome, SetAvatarUseCase};
