//! Worker thread servicing gateway fetches and assistant prompts.

use std::sync::Arc;
use std::thread;

use client_core::{sample, AssistantBackend, CannedAssistant, WarehouseApi};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub struct WorkerConfig {
    pub api_url: String,
    pub offline: bool,
}

/// Spawns the backend worker thread. Commands arrive on `cmd_rx`; every
/// outcome goes back through `ui_tx` so the egui thread never blocks.
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, config: WorkerConfig) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let api = if config.offline {
                tracing::info!("offline mode; serving bundled sample data");
                None
            } else {
                match WarehouseApi::new(config.api_url) {
                    Ok(api) => Some(api),
                    Err(err) => {
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                            UiErrorContext::BackendStartup,
                            format!(
                                "backend worker startup failure: could not build HTTP client: {err}"
                            ),
                        )));
                        tracing::error!("failed to build warehouse API client: {err}");
                        return;
                    }
                }
            };
            let assistant: Arc<dyn AssistantBackend> = Arc::new(CannedAssistant::new());
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchInventory { search } => {
                        tracing::info!(has_search = search.is_some(), "backend: fetch_inventory");
                        let result = match &api {
                            Some(api) => api.fetch_inventory(search.as_deref()).await,
                            None => Ok(sample::inventory_matching(search.as_deref())),
                        };
                        match result {
                            Ok(items) => {
                                let _ = ui_tx.try_send(UiEvent::InventoryLoaded(items));
                            }
                            Err(err) => {
                                tracing::error!("backend: fetch_inventory failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::FetchInventory,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                    BackendCommand::FetchOrders => {
                        tracing::info!("backend: fetch_orders");
                        let result = match &api {
                            Some(api) => api.fetch_orders().await,
                            None => Ok(sample::orders()),
                        };
                        match result {
                            Ok(orders) => {
                                let _ = ui_tx.try_send(UiEvent::OrdersLoaded(orders));
                            }
                            Err(err) => {
                                tracing::error!("backend: fetch_orders failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::FetchOrders,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                    BackendCommand::FetchAnalytics => {
                        tracing::info!("backend: fetch_analytics");
                        let result = match &api {
                            Some(api) => api.fetch_analytics().await,
                            None => Ok(sample::analytics()),
                        };
                        match result {
                            Ok(snapshot) => {
                                let _ = ui_tx.try_send(UiEvent::AnalyticsLoaded(snapshot));
                            }
                            Err(err) => {
                                tracing::error!("backend: fetch_analytics failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::FetchAnalytics,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                    BackendCommand::AssistantPrompt { prompt } => {
                        tracing::info!(prompt_len = prompt.len(), "backend: assistant_prompt");
                        // Replies run on their own task so a pending
                        // reply never stalls dashboard fetches.
                        let assistant = Arc::clone(&assistant);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let reply = assistant.reply(&prompt).await;
                            let _ = ui_tx.try_send(UiEvent::AssistantReplied {
                                content: reply.content,
                                suggestions: reply.suggestions,
                            });
                        });
                    }
                }
            }
        });
    });
}
