mod auth;
mod common;
mod config;
mod storage;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use storage::{LocalStore, StorageWorker};
use tokio::sync::mpsc;
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "local_chat",
    version,
    about = "Single-device chat with on-device message history"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    // UI -> Storage
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Storage -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // Storage worker runs in the background; the UI never blocks on disk.
    let store = LocalStore::new(&app_config.data_dir);
    tokio::spawn(async move {
        let worker = StorageWorker::new(event_tx, cmd_rx, store);
        if let Err(err) = worker.run().await {
            log::error!("Storage worker terminated: {err}");
        }
    });

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Chat App",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!("Client started with data dir {}", app_config.data_dir);

            Ok(Box::new(ChatApp::new(cc, cmd_tx.clone(), event_receiver)))
        }),
    )
}
