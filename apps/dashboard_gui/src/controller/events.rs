//! UI/backend events and error modeling for the console controller.

use shared::protocol::{AnalyticsSnapshot, InventoryItemSummary, OrderSummary};

pub enum UiEvent {
    Info(String),
    Error(UiError),
    InventoryLoaded(Vec<InventoryItemSummary>),
    OrdersLoaded(Vec<OrderSummary>),
    AnalyticsLoaded(AnalyticsSnapshot),
    AssistantReplied {
        content: String,
        suggestions: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Api,
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    FetchInventory,
    FetchOrders,
    FetchAnalytics,
    AssistantReply,
    General,
}

/// Short operator-facing line for a failed dashboard fetch.
pub fn friendly_fetch_failure(error: &UiError) -> String {
    let slice = match error.context() {
        UiErrorContext::FetchInventory => "inventory",
        UiErrorContext::FetchOrders => "orders",
        UiErrorContext::FetchAnalytics => "analytics",
        UiErrorContext::AssistantReply => "assistant",
        UiErrorContext::BackendStartup | UiErrorContext::General => "backend",
    };
    match error.category() {
        UiErrorCategory::Transport => {
            format!(
                "Could not reach the warehouse gateway for {slice}; check the API URL and retry."
            )
        }
        UiErrorCategory::Api => {
            format!("Gateway rejected the {slice} request: {}", error.message())
        }
        _ => format!("Problem loading {slice}: {}", error.message()),
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("rejected")
            || message_lower.contains("not_found")
            || message_lower.contains("rate_limited")
            || message_lower.contains("http 4")
            || message_lower.contains("http 5")
        {
            UiErrorCategory::Api
        } else if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
            || message_lower.contains("unreadable payload")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("dns")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_connection_failures_as_transport() {
        let err = UiError::from_message(
            UiErrorContext::FetchOrders,
            "request to http://127.0.0.1:8090/api/orders failed: connection refused",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::FetchOrders);
    }

    #[test]
    fn classifies_gateway_rejections_as_api() {
        let err = UiError::from_message(
            UiErrorContext::FetchInventory,
            "warehouse API rejected http://host/api/inventory: NotFound: unknown item",
        );
        assert_eq!(err.category(), UiErrorCategory::Api);
    }

    #[test]
    fn classifies_bad_payloads_as_validation() {
        let err = UiError::from_message(
            UiErrorContext::FetchAnalytics,
            "unreadable payload from http://host/api/analytics/summary: missing field",
        );
        assert_eq!(err.category(), UiErrorCategory::Validation);
    }

    #[test]
    fn fetch_failure_lines_name_the_slice() {
        let err = UiError::from_message(UiErrorContext::FetchInventory, "connection reset");
        let line = friendly_fetch_failure(&err);
        assert!(line.contains("inventory"), "got: {line}");
    }
}
