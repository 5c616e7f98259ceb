pub mod use_flash;
pub mod use_progress;
pub mod use_session;

pub use use_flash::{use_flash, FlashKind, FlashMessage, UseFlashResult};
pub use use_progress::{use_progress, ExerciseOptions, ProgressView, UseProgressResult};
pub use use_session::use_session;
