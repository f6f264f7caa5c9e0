//! Use case implementations.

mod clear_avatar_use_case;
mod set_avatar_use_case;

pub use clear_avatar_use_case::ClearAvatarUseCase;
pub use set_avatar_use_case::{SetAvatarOutcome, SetAvatarUseCase};
