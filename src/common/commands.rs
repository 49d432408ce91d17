use crate::common::types::ChatMessage;

/// Commands the UI sends down to the storage layer.
#[derive(Debug, Clone)]
pub enum StorageCommand {
    /// Read the whole persisted history.
    LoadMessages,
    /// Overwrite the persisted history with this list (whole-blob write).
    SaveMessages(Vec<ChatMessage>),
}
