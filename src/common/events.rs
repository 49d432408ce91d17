use crate::common::types::ChatMessage;

/// Events from the storage layer up to the UI.
#[derive(Debug, Clone)]
pub enum StorageEvent {
    MessagesLoaded(Vec<ChatMessage>),
}
