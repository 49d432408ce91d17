pub mod local_store;
pub mod message_log;
pub mod worker;

pub use local_store::LocalStore;
pub use worker::StorageWorker;
