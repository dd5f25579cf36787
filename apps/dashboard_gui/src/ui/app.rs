//! Console shell: workspace layout, backend event pump, settings, and
//! persistence.

use std::rc::Rc;
use std::time::Duration;

use client_core::stores::{
    ChatEvent, ChatSessionStore, DashboardSection, DashboardStore, SettingsStore,
};
use crossbeam_channel::{Receiver, Sender};
use panel_core::{PointerCaptureRegistry, Viewport};
use serde::{Deserialize, Serialize};
use shared::domain::ChatRole;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{friendly_fetch_failure, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::assistant::AssistantWidget;
use crate::ui::theme::{self, console_palette, ThemeMode};
use crate::ui::views::{self, InventorySearch};

pub const SETTINGS_STORAGE_KEY: &str = "dashboard_gui.settings";

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
const MIN_TEXT_SCALE: f32 = 0.85;
const MAX_TEXT_SCALE: f32 = 1.6;
const NAV_RAIL_WIDTH: f32 = 170.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkspaceView {
    Inventory,
    Orders,
    Analytics,
}

impl WorkspaceView {
    fn label(self) -> &'static str {
        match self {
            WorkspaceView::Inventory => "Inventory",
            WorkspaceView::Orders => "Orders",
            WorkspaceView::Analytics => "Analytics",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedConsoleSettings {
    theme_mode: ThemeMode,
    text_scale: f32,
    ai_enabled: bool,
}

impl Default for PersistedConsoleSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Dark,
            text_scale: 1.0,
            ai_enabled: true,
        }
    }
}

impl PersistedConsoleSettings {
    fn into_runtime(self) -> (ThemeMode, f32, bool) {
        (
            self.theme_mode,
            self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE),
            self.ai_enabled,
        )
    }

    fn from_runtime(theme_mode: ThemeMode, text_scale: f32, ai_enabled: bool) -> Self {
        Self {
            theme_mode,
            text_scale,
            ai_enabled,
        }
    }
}

pub struct StartupConfig {
    pub persisted_settings: Option<PersistedConsoleSettings>,
    pub hide_assistant: bool,
}

pub struct DashboardGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    view: WorkspaceView,
    dashboard: DashboardStore,
    chat: ChatSessionStore,
    chat_events: Receiver<ChatEvent>,
    settings: SettingsStore,

    capture: Rc<PointerCaptureRegistry>,
    assistant: AssistantWidget,
    hide_assistant: bool,

    search: InventorySearch,
    status: String,
    settings_open: bool,

    theme_mode: ThemeMode,
    text_scale: f32,
    applied_theme: Option<(ThemeMode, f32)>,
    first_frame: bool,
}

impl DashboardGuiApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        config: StartupConfig,
    ) -> Self {
        let (theme_mode, text_scale, ai_enabled) = config
            .persisted_settings
            .unwrap_or_default()
            .into_runtime();

        let mut chat = ChatSessionStore::new();
        let chat_events = chat.subscribe();
        let mut dashboard = DashboardStore::new();
        let capture = PointerCaptureRegistry::new();
        let assistant = AssistantWidget::new(Rc::clone(&capture), Viewport::new(1280.0, 800.0));

        let mut status = String::new();
        dashboard.begin_fetch(DashboardSection::Inventory);
        dispatch_backend_command(
            &cmd_tx,
            BackendCommand::FetchInventory { search: None },
            &mut status,
        );
        dashboard.begin_fetch(DashboardSection::Orders);
        dispatch_backend_command(&cmd_tx, BackendCommand::FetchOrders, &mut status);
        dashboard.begin_fetch(DashboardSection::Analytics);
        dispatch_backend_command(&cmd_tx, BackendCommand::FetchAnalytics, &mut status);

        Self {
            cmd_tx,
            ui_rx,
            view: WorkspaceView::Inventory,
            dashboard,
            chat,
            chat_events,
            settings: SettingsStore::new(ai_enabled),
            capture,
            assistant,
            hide_assistant: config.hide_assistant,
            search: InventorySearch::new(),
            status,
            settings_open: false,
            theme_mode,
            text_scale,
            applied_theme: None,
            first_frame: true,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    tracing::info!("{message}");
                }
                UiEvent::Error(error) => {
                    match error.context() {
                        UiErrorContext::FetchInventory => {
                            self.dashboard.cancel_fetch(DashboardSection::Inventory);
                        }
                        UiErrorContext::FetchOrders => {
                            self.dashboard.cancel_fetch(DashboardSection::Orders);
                        }
                        UiErrorContext::FetchAnalytics => {
                            self.dashboard.cancel_fetch(DashboardSection::Analytics);
                        }
                        UiErrorContext::AssistantReply => {
                            self.chat.set_loading(false);
                        }
                        UiErrorContext::BackendStartup | UiErrorContext::General => {}
                    }
                    tracing::warn!(
                        category = ?error.category(),
                        context = ?error.context(),
                        "backend error: {}",
                        error.message()
                    );
                    self.status = friendly_fetch_failure(&error);
                }
                UiEvent::InventoryLoaded(items) => self.dashboard.apply_inventory(items),
                UiEvent::OrdersLoaded(orders) => self.dashboard.apply_orders(orders),
                UiEvent::AnalyticsLoaded(snapshot) => self.dashboard.apply_analytics(snapshot),
                UiEvent::AssistantReplied {
                    content,
                    suggestions,
                } => {
                    self.chat.add_message(content, ChatRole::Assistant);
                    self.chat.set_suggestions(suggestions);
                    self.chat.set_loading(false);
                }
            }
        }

        while let Ok(event) = self.chat_events.try_recv() {
            if let ChatEvent::OpenChanged(true) = event {
                self.assistant.request_composer_focus();
            }
        }
    }

    fn poll_search_debounce(&mut self) {
        if let Some(query) = self.search.take_due_query(SEARCH_DEBOUNCE) {
            self.dashboard.begin_fetch(DashboardSection::Inventory);
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::FetchInventory { search: query },
                &mut self.status,
            );
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some((self.theme_mode, self.text_scale)) {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = theme::visuals_for_theme(self.theme_mode);
        style.text_styles = theme::scaled_text_styles(self.text_scale);
        ctx.set_style(style);
        self.applied_theme = Some((self.theme_mode, self.text_scale));
    }

    fn show_nav_rail(&mut self, ctx: &egui::Context) {
        let palette = console_palette(self.theme_mode);
        egui::SidePanel::left("nav_rail")
            .exact_width(NAV_RAIL_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::NONE
                    .fill(palette.rail_background)
                    .inner_margin(egui::Margin::symmetric(10, 12)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Stockdeck")
                        .strong()
                        .size(17.0)
                        .color(palette.title_text),
                );
                ui.label(
                    egui::RichText::new("Ops Console")
                        .size(11.0)
                        .color(palette.hint_text),
                );
                ui.add_space(14.0);

                for view in [
                    WorkspaceView::Inventory,
                    WorkspaceView::Orders,
                    WorkspaceView::Analytics,
                ] {
                    let selected = self.view == view;
                    if ui
                        .selectable_label(selected, egui::RichText::new(view.label()).size(13.5))
                        .clicked()
                    {
                        self.view = view;
                    }
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    if ui.button("Settings").clicked() {
                        self.settings_open = !self.settings_open;
                    }
                });
            });
    }

    fn show_status_banner(&mut self, ctx: &egui::Context) {
        if self.status.is_empty() {
            return;
        }
        let palette = console_palette(self.theme_mode);
        egui::TopBottomPanel::top("status_banner")
            .frame(
                egui::Frame::NONE
                    .fill(palette.danger_background)
                    .stroke(egui::Stroke::new(1.0, palette.danger_stroke))
                    .inner_margin(egui::Margin::symmetric(10, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(&self.status).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status.clear();
                        }
                    });
                });
            });
    }

    fn show_workspace(&mut self, ctx: &egui::Context) {
        let palette = console_palette(self.theme_mode);
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(palette.app_background)
                    .inner_margin(egui::Margin::symmetric(16, 14)),
            )
            .show(ctx, |ui| match self.view {
                WorkspaceView::Inventory => {
                    views::show_inventory(ui, &palette, &self.dashboard, &mut self.search);
                }
                WorkspaceView::Orders => views::show_orders(ui, &palette, &self.dashboard),
                WorkspaceView::Analytics => views::show_analytics(ui, &palette, &self.dashboard),
            });
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        let window_frame = egui::Frame::NONE
            .fill(ctx.style().visuals.window_fill)
            .stroke(egui::Stroke::new(
                1.0,
                ctx.style().visuals.window_stroke().color,
            ))
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::symmetric(12, 10));

        let mut settings_open = self.settings_open;
        let mut close_requested = false;

        egui::Window::new("settings_window")
            .title_bar(false)
            .frame(window_frame)
            .open(&mut settings_open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Settings").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            close_requested = true;
                        }
                    });
                });
                ui.separator();

                ui.label("Theme");
                egui::ComboBox::from_id_salt("theme_mode")
                    .selected_text(self.theme_mode.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.theme_mode,
                            ThemeMode::Dark,
                            ThemeMode::Dark.label(),
                        );
                        ui.selectable_value(
                            &mut self.theme_mode,
                            ThemeMode::Light,
                            ThemeMode::Light.label(),
                        );
                    });

                ui.add(
                    egui::Slider::new(&mut self.text_scale, MIN_TEXT_SCALE..=MAX_TEXT_SCALE)
                        .text("Text scale")
                        .step_by(0.05),
                );

                ui.separator();
                let mut ai_enabled = self.settings.ai_enabled();
                if ui
                    .checkbox(&mut ai_enabled, "Show the assistant launcher")
                    .changed()
                {
                    self.settings.set_ai_enabled(ai_enabled);
                }
                ui.small("An open assistant panel stays available until you close it.");
            });

        self.settings_open = settings_open && !close_requested;
    }
}

impl eframe::App for DashboardGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            // Re-anchor the launcher once the real surface size is
            // known; construction guessed the requested window size.
            self.first_frame = false;
            let screen = ctx.screen_rect();
            self.assistant = AssistantWidget::new(
                Rc::clone(&self.capture),
                Viewport::new(screen.width(), screen.height()),
            );
        }

        self.process_ui_events();
        self.poll_search_debounce();
        self.apply_theme_if_needed(ctx);

        self.show_status_banner(ctx);
        self.show_nav_rail(ctx);
        self.show_workspace(ctx);
        if self.settings_open {
            self.show_settings_window(ctx);
        }

        if !self.hide_assistant {
            let palette = console_palette(self.theme_mode);
            self.assistant.show(
                ctx,
                &mut self.chat,
                &self.settings,
                &palette,
                &self.cmd_tx,
                &mut self.status,
            );
        }

        let animating = self.capture.active_count() > 0 || self.chat.is_loading();
        if animating {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedConsoleSettings::from_runtime(
            self.theme_mode,
            self.text_scale,
            self.settings.ai_enabled(),
        );
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_settings_round_trip_through_json() {
        let settings = PersistedConsoleSettings::from_runtime(ThemeMode::Light, 1.25, false);
        let serialized = serde_json::to_string(&settings).expect("settings serialize");
        let restored: PersistedConsoleSettings =
            serde_json::from_str(&serialized).expect("settings deserialize");
        assert_eq!(restored, settings);
    }

    #[test]
    fn out_of_range_text_scale_is_clamped_on_load() {
        let restored: PersistedConsoleSettings =
            serde_json::from_str(r#"{ "theme_mode": "Dark", "text_scale": 9.0 }"#)
                .expect("settings deserialize");
        let (_, text_scale, ai_enabled) = restored.into_runtime();
        assert_eq!(text_scale, MAX_TEXT_SCALE);
        // Field absent in older payloads defaults on.
        assert!(ai_enabled);
    }

    #[test]
    fn unknown_settings_payloads_fall_back_to_defaults() {
        let parsed = serde_json::from_str::<PersistedConsoleSettings>("not json").ok();
        let (theme_mode, text_scale, ai_enabled) =
            parsed.unwrap_or_default().into_runtime();
        assert_eq!(theme_mode, ThemeMode::Dark);
        assert_eq!(text_scale, 1.0);
        assert!(ai_enabled);
    }
}
