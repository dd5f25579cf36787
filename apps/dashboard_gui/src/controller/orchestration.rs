//! Dispatch helpers from UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::FetchInventory { .. } => "fetch_inventory",
        BackendCommand::FetchOrders => "fetch_orders",
        BackendCommand::FetchAnalytics => "fetch_analytics",
        BackendCommand::AssistantPrompt { .. } => "assistant_prompt",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "Backend command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend command processor disconnected (possible startup/runtime \
                       failure); relaunch the console"
                .to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn queues_commands_while_capacity_remains() {
        let (tx, rx) = bounded(2);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::FetchOrders, &mut status);

        assert!(status.is_empty());
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::FetchOrders)));
    }

    #[test]
    fn reports_a_full_queue_without_blocking() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::FetchOrders, &mut status);
        dispatch_backend_command(&tx, BackendCommand::FetchAnalytics, &mut status);

        assert!(status.contains("queue is full"), "got: {status}");
    }

    #[test]
    fn reports_a_disconnected_worker() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::FetchOrders, &mut status);

        assert!(status.contains("disconnected"), "got: {status}");
    }
}
