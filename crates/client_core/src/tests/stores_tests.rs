use super::*;

#[test]
fn messages_append_in_order_with_sequential_ids() {
    let mut store = ChatSessionStore::new();
    let first = store.add_message("How do I flag a recount?", ChatRole::User);
    let second = store.add_message("Use the bin detail page.", ChatRole::Assistant);

    assert_eq!(first, MessageId(1));
    assert_eq!(second, MessageId(2));
    let messages = store.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].sent_at <= messages[1].sent_at);
    assert_eq!(messages[0].role, ChatRole::User);
    assert_eq!(messages[1].role, ChatRole::Assistant);
}

#[test]
fn toggle_chat_flips_state_and_notifies() {
    let mut store = ChatSessionStore::new();
    let events = store.subscribe();

    store.toggle_chat();
    store.toggle_chat();

    assert!(!store.is_open());
    assert_eq!(events.try_recv(), Ok(ChatEvent::OpenChanged(true)));
    assert_eq!(events.try_recv(), Ok(ChatEvent::OpenChanged(false)));
    assert!(events.try_recv().is_err());
}

#[test]
fn repeated_loading_writes_publish_once() {
    let mut store = ChatSessionStore::new();
    let events = store.subscribe();

    store.set_loading(true);
    store.set_loading(true);
    store.set_loading(false);

    assert_eq!(events.try_recv(), Ok(ChatEvent::LoadingChanged(true)));
    assert_eq!(events.try_recv(), Ok(ChatEvent::LoadingChanged(false)));
    assert!(events.try_recv().is_err());
}

#[test]
fn subscribers_observe_events_in_publish_order() {
    let mut store = ChatSessionStore::new();
    let events = store.subscribe();

    store.toggle_chat();
    store.add_message("hello", ChatRole::User);
    store.set_loading(true);

    assert_eq!(events.try_recv(), Ok(ChatEvent::OpenChanged(true)));
    assert!(matches!(
        events.try_recv(),
        Ok(ChatEvent::MessageAppended(message)) if message.content == "hello"
    ));
    assert_eq!(events.try_recv(), Ok(ChatEvent::LoadingChanged(true)));
}

#[test]
fn new_sessions_seed_opening_suggestions() {
    let store = ChatSessionStore::new();
    assert!(!store.suggestions().is_empty());
}

#[test]
fn replacing_suggestions_notifies_with_the_new_set() {
    let mut store = ChatSessionStore::new();
    let events = store.subscribe();

    store.set_suggestions(vec!["Where is bin D-01-1?".to_string()]);

    assert_eq!(store.suggestions().len(), 1);
    assert_eq!(
        events.try_recv(),
        Ok(ChatEvent::SuggestionsReplaced(vec![
            "Where is bin D-01-1?".to_string()
        ]))
    );
}

#[test]
fn dropped_subscribers_are_pruned_on_next_publish() {
    let mut store = ChatSessionStore::new();
    let kept = store.subscribe();
    let dropped = store.subscribe();
    drop(dropped);

    store.toggle_chat();

    assert_eq!(store.subscribers.senders.len(), 1);
    assert_eq!(kept.try_recv(), Ok(ChatEvent::OpenChanged(true)));
}

#[test]
fn settings_store_dedupes_and_notifies() {
    let mut store = SettingsStore::new(true);
    let events = store.subscribe();

    store.set_ai_enabled(true);
    store.set_ai_enabled(false);

    assert!(!store.ai_enabled());
    assert_eq!(events.try_recv(), Ok(SettingsEvent::AiEnabledChanged(false)));
    assert!(events.try_recv().is_err());
}

#[test]
fn applying_data_clears_the_loading_flag_and_notifies() {
    let mut store = DashboardStore::new();
    let events = store.subscribe();

    store.begin_fetch(DashboardSection::Inventory);
    assert!(store.is_loading(DashboardSection::Inventory));
    assert!(store.any_loading());

    store.apply_inventory(crate::sample::inventory());

    assert!(!store.is_loading(DashboardSection::Inventory));
    assert_eq!(store.inventory().len(), 10);
    assert_eq!(events.try_recv(), Ok(DashboardEvent::InventoryUpdated));
}

#[test]
fn cancelling_a_fetch_clears_the_flag_without_an_event() {
    let mut store = DashboardStore::new();
    let events = store.subscribe();

    store.begin_fetch(DashboardSection::Analytics);
    store.cancel_fetch(DashboardSection::Analytics);

    assert!(!store.any_loading());
    assert!(store.analytics().is_none());
    assert!(events.try_recv().is_err());
}

#[test]
fn sections_track_loading_independently() {
    let mut store = DashboardStore::new();

    store.begin_fetch(DashboardSection::Orders);

    assert!(store.is_loading(DashboardSection::Orders));
    assert!(!store.is_loading(DashboardSection::Inventory));
    assert!(!store.is_loading(DashboardSection::Analytics));

    store.apply_orders(crate::sample::orders());
    assert!(!store.any_loading());
}
