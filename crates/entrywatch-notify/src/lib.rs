pub mod error;
pub mod pushover;

pub use error::NotifyError;
pub use pushover::{PushoverClient, DEFAULT_SOUND, DEFAULT_TITLE};
