//! Simulated assistant for the chat panel.
//!
//! Replies are composed locally from keyword routing over the prompt and
//! delivered after a short delay so the panel's typing indicator behaves
//! like it would against a hosted model.

use std::time::Duration;

use async_trait::async_trait;

/// Matches the latency operators perceive as "thinking" without
/// dragging out the round trip.
pub const ASSISTANT_REPLY_DELAY: Duration = Duration::from_millis(900);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub content: String,
    pub suggestions: Vec<String>,
}

/// Seam for swapping in a hosted model later without touching the
/// panel or the backend worker.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    async fn reply(&self, prompt: &str) -> AssistantReply;
}

#[derive(Debug, Clone)]
pub struct CannedAssistant {
    reply_delay: Duration,
}

impl CannedAssistant {
    pub fn new() -> Self {
        Self {
            reply_delay: ASSISTANT_REPLY_DELAY,
        }
    }

    pub fn with_reply_delay(reply_delay: Duration) -> Self {
        Self { reply_delay }
    }
}

impl Default for CannedAssistant {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssistantBackend for CannedAssistant {
    async fn reply(&self, prompt: &str) -> AssistantReply {
        tokio::time::sleep(self.reply_delay).await;
        compose_reply(prompt)
    }
}

/// Prompt chips shown before the operator has asked anything.
pub fn opening_suggestions() -> Vec<String> {
    vec![
        "What's running low on stock?".to_string(),
        "Summarize today's orders".to_string(),
        "Which bins need a recount?".to_string(),
    ]
}

fn compose_reply(prompt: &str) -> AssistantReply {
    let lower = prompt.to_lowercase();
    // Greetings match on the leading word only; substring matching would
    // misfire on words like "shipping".
    let first_word = lower
        .split_whitespace()
        .next()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .unwrap_or_default();

    if matches!(first_word.as_str(), "hi" | "hello" | "hey") || lower.contains("help") {
        return AssistantReply {
            content: "Hello! I can explain what you're seeing on the Inventory, Orders, \
                      and Analytics views, or help you track down a SKU. What do you need?"
                .to_string(),
            suggestions: opening_suggestions(),
        };
    }

    if contains_any(&lower, &["stock", "inventory", "reorder", "bin", "sku", "recount"]) {
        return AssistantReply {
            content: "Open the Inventory view for live counts. Anything at or below its \
                      reorder point carries a low-stock flag, so scan for flagged rows to \
                      build a replenishment list. Reserved units are already promised to \
                      open orders; go by the available column when picking."
                .to_string(),
            suggestions: vec![
                "Which items are below their reorder point?".to_string(),
                "Explain reserved vs available".to_string(),
                "Summarize today's orders".to_string(),
            ],
        };
    }

    if contains_any(&lower, &["order", "ship", "pick", "pack", "customer"]) {
        return AssistantReply {
            content: "The Orders view lists every order with its fulfilment status. \
                      Pending means nothing has been picked yet, Picking and Packed are \
                      on the floor, and Shipped or Cancelled are closed out. The open \
                      count on the Analytics view tracks the first three."
                .to_string(),
            suggestions: vec![
                "How many orders are still open?".to_string(),
                "What does the Packed status mean?".to_string(),
                "What's running low on stock?".to_string(),
            ],
        };
    }

    if contains_any(&lower, &["analytic", "report", "today", "kpi", "summar"]) {
        return AssistantReply {
            content: "The Analytics view aggregates the day's activity: orders placed, \
                      how many remain open, items flagged low on stock, and total units \
                      on hand. Top movers ranks SKUs by units shipped recently."
                .to_string(),
            suggestions: vec![
                "Which SKUs are the top movers?".to_string(),
                "Which items are below their reorder point?".to_string(),
                "How many orders came in today?".to_string(),
            ],
        };
    }

    AssistantReply {
        content: "I can help with stock levels, order status, and the analytics \
                  summaries. Try asking about a SKU, a customer order, or what needs \
                  reordering."
            .to_string(),
        suggestions: opening_suggestions(),
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
#[path = "tests/assistant_tests.rs"]
mod tests;
