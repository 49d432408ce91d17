use crate::common::ChatMessage;

use super::local_store::LocalStore;

/// The single slot holding the entire serialized history.
pub const MESSAGE_STORAGE_KEY: &str = "chat_messages";

/// Read the persisted history, newest first. A missing key yields an empty
/// list; a read or parse failure is logged and also yields an empty list.
pub fn load_messages(store: &LocalStore) -> Vec<ChatMessage> {
    match store.get(MESSAGE_STORAGE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
            Ok(messages) => messages,
            Err(err) => {
                log::error!("Failed to parse stored messages: {err}");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(err) => {
            log::error!("Failed to load messages: {err}");
            Vec::new()
        }
    }
}

/// Serialize the whole list back under the same key. A write failure is
/// logged only; in-memory state is not rolled back.
pub fn save_messages(store: &LocalStore, messages: &[ChatMessage]) {
    match serde_json::to_string(messages) {
        Ok(json) => {
            if let Err(err) = store.set(MESSAGE_STORAGE_KEY, &json) {
                log::error!("Failed to save messages: {err}");
            }
        }
        Err(err) => {
            log::error!("Failed to serialize messages: {err}");
        }
    }
}
