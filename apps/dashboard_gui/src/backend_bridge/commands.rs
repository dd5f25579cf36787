//! Commands the console queues for the backend worker.

pub enum BackendCommand {
    FetchInventory { search: Option<String> },
    FetchOrders,
    FetchAnalytics,
    AssistantPrompt { prompt: String },
}
