use std::io;

use tokio::sync::mpsc;

use crate::common::{StorageCommand, StorageEvent};

use super::local_store::LocalStore;
use super::message_log;

/// Background task owning all key-value reads and writes. Commands arrive
/// in channel order, so concurrent sends from the UI serialize into
/// last-write-wins whole-list writes.
pub struct StorageWorker {
    event_sender: mpsc::Sender<StorageEvent>,
    command_receiver: mpsc::Receiver<StorageCommand>,
    store: LocalStore,
}

impl StorageWorker {
    pub fn new(
        event_sender: mpsc::Sender<StorageEvent>,
        command_receiver: mpsc::Receiver<StorageCommand>,
        store: LocalStore,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
            store,
        }
    }

    pub async fn run(mut self) -> io::Result<()> {
        self.store.ensure_root()?;
        log::info!("Storage event loop started");

        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command).await;
        }

        Ok(())
    }

    async fn handle_command(&mut self, command: StorageCommand) {
        match command {
            StorageCommand::LoadMessages => {
                let messages = message_log::load_messages(&self.store);
                if let Err(err) = self
                    .event_sender
                    .send(StorageEvent::MessagesLoaded(messages))
                    .await
                {
                    log::warn!("Failed to notify UI about loaded history: {err}");
                }
            }
            StorageCommand::SaveMessages(messages) => {
                message_log::save_messages(&self.store, &messages);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ChatMessage, User};

    fn spawn_worker(
        root: &std::path::Path,
    ) -> (mpsc::Sender<StorageCommand>, mpsc::Receiver<StorageEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(16);
        let worker = StorageWorker::new(event_tx, cmd_rx, LocalStore::new(root));
        tokio::spawn(async move {
            worker.run().await.unwrap();
        });
        (cmd_tx, event_rx)
    }

    #[tokio::test]
    async fn load_on_fresh_store_yields_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let (cmd_tx, mut event_rx) = spawn_worker(dir.path());

        cmd_tx.send(StorageCommand::LoadMessages).await.unwrap();
        let StorageEvent::MessagesLoaded(messages) = event_rx.recv().await.unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn save_then_reload_across_worker_restart() {
        let dir = tempfile::tempdir().unwrap();
        let user = User {
            id: 1,
            name: "Nabil".to_string(),
        };
        let history = vec![
            ChatMessage::new(&user, "second".to_string()),
            ChatMessage::new(&user, "first".to_string()),
        ];

        {
            let (cmd_tx, mut event_rx) = spawn_worker(dir.path());
            cmd_tx
                .send(StorageCommand::SaveMessages(history.clone()))
                .await
                .unwrap();
            // A follow-up load proves the write completed before we tear down.
            cmd_tx.send(StorageCommand::LoadMessages).await.unwrap();
            let StorageEvent::MessagesLoaded(messages) = event_rx.recv().await.unwrap();
            assert_eq!(messages, history);
        }

        // New worker over the same directory, as after an app restart.
        let (cmd_tx, mut event_rx) = spawn_worker(dir.path());
        cmd_tx.send(StorageCommand::LoadMessages).await.unwrap();
        let StorageEvent::MessagesLoaded(messages) = event_rx.recv().await.unwrap();
        assert_eq!(messages, history);
    }

    #[tokio::test]
    async fn rapid_saves_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let user = User {
            id: 2,
            name: "Ahmed".to_string(),
        };
        let (cmd_tx, mut event_rx) = spawn_worker(dir.path());

        let mut history = Vec::new();
        for content in ["one", "two"] {
            history.insert(0, ChatMessage::new(&user, content.to_string()));
            cmd_tx
                .send(StorageCommand::SaveMessages(history.clone()))
                .await
                .unwrap();
        }

        cmd_tx.send(StorageCommand::LoadMessages).await.unwrap();
        let StorageEvent::MessagesLoaded(messages) = event_rx.recv().await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "two");
    }
}
