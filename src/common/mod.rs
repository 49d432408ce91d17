pub mod commands;
pub mod events;
pub mod types;

pub use commands::StorageCommand;
pub use events::StorageEvent;
pub use types::{ChatMessage, Sender, User};
