//! UI-side state stores with explicit ownership and change notification.
//!
//! Each store is owned by the surface that renders it and handed around
//! by reference. Interested parties call `subscribe()` and drain the
//! returned receiver whenever convenient; a receiver that was dropped is
//! pruned on the next publish, so stores never accumulate dead channels.

use chrono::Utc;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use shared::domain::{ChatMessage, ChatRole, MessageId};
use shared::protocol::{AnalyticsSnapshot, InventoryItemSummary, OrderSummary};
use tracing::debug;

use crate::assistant;

const STORE_EVENT_BUFFER: usize = 256;

struct SubscriberSet<T> {
    senders: Vec<Sender<T>>,
}

impl<T> Default for SubscriberSet<T> {
    fn default() -> Self {
        Self {
            senders: Vec::new(),
        }
    }
}

impl<T: Clone> SubscriberSet<T> {
    fn subscribe(&mut self) -> Receiver<T> {
        let (tx, rx) = bounded(STORE_EVENT_BUFFER);
        self.senders.push(tx);
        rx
    }

    /// Publishes to every live subscriber. A full queue drops the event
    /// for that subscriber only; a disconnected one is removed.
    fn publish(&mut self, event: T) {
        self.senders.retain(|tx| match tx.try_send(event.clone()) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                debug!("store subscriber queue full; event dropped");
                true
            }
            Err(TrySendError::Disconnected(_)) => false,
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    OpenChanged(bool),
    LoadingChanged(bool),
    MessageAppended(ChatMessage),
    SuggestionsReplaced(Vec<String>),
}

/// Conversation state for the assistant panel.
///
/// Message ids are assigned here, sequentially from 1, so transcript
/// order and id order always agree.
pub struct ChatSessionStore {
    open: bool,
    loading: bool,
    messages: Vec<ChatMessage>,
    suggestions: Vec<String>,
    next_message_id: i64,
    subscribers: SubscriberSet<ChatEvent>,
}

impl ChatSessionStore {
    pub fn new() -> Self {
        Self {
            open: false,
            loading: false,
            messages: Vec::new(),
            suggestions: assistant::opening_suggestions(),
            next_message_id: 1,
            subscribers: SubscriberSet::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn subscribe(&mut self) -> Receiver<ChatEvent> {
        self.subscribers.subscribe()
    }

    pub fn toggle_chat(&mut self) {
        self.open = !self.open;
        self.subscribers.publish(ChatEvent::OpenChanged(self.open));
    }

    /// Appends a message in arrival order and returns its assigned id.
    pub fn add_message(&mut self, content: impl Into<String>, role: ChatRole) -> MessageId {
        let message_id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        let message = ChatMessage {
            message_id,
            content: content.into(),
            role,
            sent_at: Utc::now(),
        };
        self.messages.push(message.clone());
        self.subscribers.publish(ChatEvent::MessageAppended(message));
        message_id
    }

    pub fn set_loading(&mut self, loading: bool) {
        if self.loading == loading {
            return;
        }
        self.loading = loading;
        self.subscribers.publish(ChatEvent::LoadingChanged(loading));
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
        self.subscribers
            .publish(ChatEvent::SuggestionsReplaced(self.suggestions.clone()));
    }
}

impl Default for ChatSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEvent {
    AiEnabledChanged(bool),
}

/// Operator preferences that other surfaces react to.
pub struct SettingsStore {
    ai_enabled: bool,
    subscribers: SubscriberSet<SettingsEvent>,
}

impl SettingsStore {
    pub fn new(ai_enabled: bool) -> Self {
        Self {
            ai_enabled,
            subscribers: SubscriberSet::default(),
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    pub fn set_ai_enabled(&mut self, enabled: bool) {
        if self.ai_enabled == enabled {
            return;
        }
        self.ai_enabled = enabled;
        self.subscribers
            .publish(SettingsEvent::AiEnabledChanged(enabled));
    }

    pub fn subscribe(&mut self) -> Receiver<SettingsEvent> {
        self.subscribers.subscribe()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    InventoryUpdated,
    OrdersUpdated,
    AnalyticsUpdated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSection {
    Inventory,
    Orders,
    Analytics,
}

/// Latest fetched snapshots for the three workspace views, with a
/// per-section in-flight flag so each view can show its own spinner.
pub struct DashboardStore {
    inventory: Vec<InventoryItemSummary>,
    orders: Vec<OrderSummary>,
    analytics: Option<AnalyticsSnapshot>,
    inventory_loading: bool,
    orders_loading: bool,
    analytics_loading: bool,
    subscribers: SubscriberSet<DashboardEvent>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            inventory: Vec::new(),
            orders: Vec::new(),
            analytics: None,
            inventory_loading: false,
            orders_loading: false,
            analytics_loading: false,
            subscribers: SubscriberSet::default(),
        }
    }

    pub fn inventory(&self) -> &[InventoryItemSummary] {
        &self.inventory
    }

    pub fn orders(&self) -> &[OrderSummary] {
        &self.orders
    }

    pub fn analytics(&self) -> Option<&AnalyticsSnapshot> {
        self.analytics.as_ref()
    }

    pub fn is_loading(&self, section: DashboardSection) -> bool {
        match section {
            DashboardSection::Inventory => self.inventory_loading,
            DashboardSection::Orders => self.orders_loading,
            DashboardSection::Analytics => self.analytics_loading,
        }
    }

    pub fn any_loading(&self) -> bool {
        self.inventory_loading || self.orders_loading || self.analytics_loading
    }

    pub fn begin_fetch(&mut self, section: DashboardSection) {
        *self.loading_flag(section) = true;
    }

    /// Clears the in-flight flag without new data, for fetches that
    /// ended in an error.
    pub fn cancel_fetch(&mut self, section: DashboardSection) {
        *self.loading_flag(section) = false;
    }

    pub fn apply_inventory(&mut self, items: Vec<InventoryItemSummary>) {
        self.inventory = items;
        self.inventory_loading = false;
        self.subscribers.publish(DashboardEvent::InventoryUpdated);
    }

    pub fn apply_orders(&mut self, orders: Vec<OrderSummary>) {
        self.orders = orders;
        self.orders_loading = false;
        self.subscribers.publish(DashboardEvent::OrdersUpdated);
    }

    pub fn apply_analytics(&mut self, snapshot: AnalyticsSnapshot) {
        self.analytics = Some(snapshot);
        self.analytics_loading = false;
        self.subscribers.publish(DashboardEvent::AnalyticsUpdated);
    }

    pub fn subscribe(&mut self) -> Receiver<DashboardEvent> {
        self.subscribers.subscribe()
    }

    fn loading_flag(&mut self, section: DashboardSection) -> &mut bool {
        match section {
            DashboardSection::Inventory => &mut self.inventory_loading,
            DashboardSection::Orders => &mut self.orders_loading,
            DashboardSection::Analytics => &mut self.analytics_loading,
        }
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/stores_tests.rs"]
mod tests;
