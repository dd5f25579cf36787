//! Floating assistant chat widget layered over the workspace.
//!
//! Panel geometry and gesture state live in `panel_core`; this module
//! feeds it pointer samples and renders whatever placement it reports.

use std::rc::Rc;

use client_core::stores::{ChatSessionStore, SettingsStore};
use crossbeam_channel::Sender;
use panel_core::{
    FloatingPanelController, GrabRegion, InteractionKind, PanelMode, Point,
    PointerCaptureRegistry, Viewport, LAUNCHER_SIZE,
};
use shared::domain::{ChatMessage, ChatRole};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::theme::ConsolePalette;

const HEADER_HEIGHT: f32 = 40.0;
const COMPOSER_HEIGHT: f32 = 52.0;
const SUGGESTION_ROW_HEIGHT: f32 = 38.0;
const RESIZE_HANDLE_SIZE: f32 = 16.0;
const HEADER_BUTTONS_WIDTH: f32 = 76.0;

fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

fn sync_chat_open(chat: &mut ChatSessionStore, open: bool) {
    if chat.is_open() != open {
        chat.toggle_chat();
    }
}

pub struct AssistantWidget {
    controller: FloatingPanelController,
    composer: String,
    focus_composer: bool,
}

impl AssistantWidget {
    pub fn new(registry: Rc<PointerCaptureRegistry>, viewport: Viewport) -> Self {
        Self {
            controller: FloatingPanelController::new(registry, viewport),
            composer: String::new(),
            focus_composer: false,
        }
    }

    pub fn request_composer_focus(&mut self) {
        self.focus_composer = true;
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        chat: &mut ChatSessionStore,
        settings: &SettingsStore,
        palette: &ConsolePalette,
        cmd_tx: &Sender<BackendCommand>,
        status: &mut String,
    ) {
        let screen = ctx.screen_rect();
        let viewport = Viewport::new(screen.width(), screen.height());

        self.pump_pointer(ctx, chat, viewport);

        match self.controller.mode() {
            PanelMode::Collapsed => {
                // An operator who disabled the assistant gets their
                // corner back; an already-open panel stays usable.
                if settings.ai_enabled() {
                    self.show_launcher(ctx, palette);
                }
            }
            PanelMode::Open | PanelMode::Fullscreen => {
                self.show_panel(ctx, chat, palette, viewport, cmd_tx, status);
            }
        }

        match self.controller.interaction() {
            InteractionKind::Dragging => ctx.set_cursor_icon(egui::CursorIcon::Grabbing),
            InteractionKind::Resizing => ctx.set_cursor_icon(egui::CursorIcon::ResizeNwSe),
            InteractionKind::Idle => {}
        }
    }

    /// Feeds global pointer samples while a drag or resize is active, so
    /// the gesture keeps tracking after the cursor leaves the widget.
    fn pump_pointer(
        &mut self,
        ctx: &egui::Context,
        chat: &mut ChatSessionStore,
        viewport: Viewport,
    ) {
        if self.controller.interaction() == InteractionKind::Idle {
            return;
        }
        let (latest, released) =
            ctx.input(|i| (i.pointer.latest_pos(), i.pointer.primary_released()));
        if let Some(pos) = latest {
            self.controller.pointer_move(to_point(pos), viewport);
        }
        if released && self.controller.pointer_up(viewport) {
            sync_chat_open(chat, true);
            self.focus_composer = true;
        }
    }

    /// Registers a primary-button press inside `rect` as a grab. The
    /// controller ignores it while another interaction is active.
    fn press_in_rect(&mut self, ctx: &egui::Context, rect: egui::Rect, region: GrabRegion) {
        let pressed_at = ctx.input(|i| {
            if i.pointer.primary_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if let Some(pos) = pressed_at {
            if rect.contains(pos) {
                self.controller.pointer_down(region, to_point(pos));
            }
        }
    }

    fn show_launcher(&mut self, ctx: &egui::Context, palette: &ConsolePalette) {
        let position = self.controller.position();
        let rect = egui::Rect::from_min_size(
            egui::pos2(position.x, position.y),
            egui::vec2(LAUNCHER_SIZE.width, LAUNCHER_SIZE.height),
        );

        egui::Area::new(egui::Id::new("assistant_launcher"))
            .order(egui::Order::Foreground)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(rect, egui::Sense::hover());
                let fill = if response.hovered() {
                    palette.accent_hover
                } else {
                    palette.accent
                };
                ui.painter()
                    .circle_filled(rect.center(), LAUNCHER_SIZE.width * 0.5, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "💬",
                    egui::FontId::proportional(22.0),
                    egui::Color32::WHITE,
                );
                if response.hovered() {
                    ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                }
            });

        self.press_in_rect(ctx, rect, GrabRegion::Launcher);
    }

    fn show_panel(
        &mut self,
        ctx: &egui::Context,
        chat: &mut ChatSessionStore,
        palette: &ConsolePalette,
        viewport: Viewport,
        cmd_tx: &Sender<BackendCommand>,
        status: &mut String,
    ) {
        let (position, size) = self.controller.placement(viewport);
        let rect = egui::Rect::from_min_size(
            egui::pos2(position.x, position.y),
            egui::vec2(size.width, size.height),
        );
        let fullscreen = self.controller.mode() == PanelMode::Fullscreen;
        let corner_radius = if fullscreen {
            egui::CornerRadius::ZERO
        } else {
            egui::CornerRadius::same(12)
        };

        let header_rect = egui::Rect::from_min_max(
            rect.min,
            egui::pos2(rect.right(), rect.top() + HEADER_HEIGHT),
        );
        let drag_rect = egui::Rect::from_min_max(
            header_rect.min,
            egui::pos2(header_rect.right() - HEADER_BUTTONS_WIDTH, header_rect.bottom()),
        );
        let composer_rect = egui::Rect::from_min_max(
            egui::pos2(rect.left(), rect.bottom() - COMPOSER_HEIGHT),
            rect.max,
        );
        let suggestions_visible = !chat.suggestions().is_empty() && !chat.is_loading();
        let suggestions_rect = egui::Rect::from_min_max(
            egui::pos2(rect.left(), composer_rect.top() - SUGGESTION_ROW_HEIGHT),
            egui::pos2(rect.right(), composer_rect.top()),
        );
        let messages_bottom = if suggestions_visible {
            suggestions_rect.top()
        } else {
            composer_rect.top()
        };
        let messages_rect = egui::Rect::from_min_max(
            egui::pos2(rect.left(), header_rect.bottom()),
            egui::pos2(rect.right(), messages_bottom),
        );
        let handle_rect = egui::Rect::from_min_size(
            rect.max - egui::vec2(RESIZE_HANDLE_SIZE, RESIZE_HANDLE_SIZE),
            egui::vec2(RESIZE_HANDLE_SIZE, RESIZE_HANDLE_SIZE),
        );

        let mut close_requested = false;
        let mut fullscreen_toggled = false;
        let mut chosen_suggestion: Option<String> = None;
        let mut submit = false;

        egui::Area::new(egui::Id::new("assistant_panel"))
            .order(egui::Order::Foreground)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                ui.allocate_rect(rect, egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, corner_radius, palette.card_background);
                ui.painter().rect_stroke(
                    rect,
                    corner_radius,
                    egui::Stroke::new(1.0, palette.panel_stroke),
                    egui::StrokeKind::Middle,
                );

                // Header: title on the left, window controls on the right.
                ui_in_rect(ui, header_rect, |ui| {
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new("Warehouse Assistant")
                                .strong()
                                .color(palette.title_text),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.add_space(8.0);
                            if ui.button("✕").clicked() {
                                close_requested = true;
                            }
                            let fullscreen_glyph = if fullscreen { "🗗" } else { "🗖" };
                            if ui.button(fullscreen_glyph).clicked() {
                                fullscreen_toggled = true;
                            }
                        });
                    });
                });
                ui.painter().line_segment(
                    [
                        egui::pos2(rect.left() + 1.0, header_rect.bottom()),
                        egui::pos2(rect.right() - 1.0, header_rect.bottom()),
                    ],
                    egui::Stroke::new(1.0, palette.panel_stroke),
                );

                // Transcript.
                ui_in_rect(ui, messages_rect.shrink2(egui::vec2(10.0, 6.0)), |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("assistant_messages")
                        .auto_shrink([false, false])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            if chat.messages().is_empty() {
                                ui.add_space(10.0);
                                ui.label(
                                    egui::RichText::new(
                                        "Ask about stock levels, orders, or today's numbers.",
                                    )
                                    .color(palette.hint_text),
                                );
                            }
                            for message in chat.messages() {
                                show_message_row(ui, palette, message);
                            }
                            if chat.is_loading() {
                                ui.add_space(4.0);
                                ui.horizontal(|ui| {
                                    ui.add(egui::Spinner::new().size(14.0));
                                    ui.label(
                                        egui::RichText::new("Assistant is typing...")
                                            .color(palette.hint_text),
                                    );
                                });
                            }
                        });
                });

                if suggestions_visible {
                    ui_in_rect(ui, suggestions_rect.shrink2(egui::vec2(10.0, 4.0)), |ui| {
                        ui.horizontal_wrapped(|ui| {
                            for suggestion in chat.suggestions() {
                                let chip = egui::Button::new(
                                    egui::RichText::new(suggestion)
                                        .size(11.0)
                                        .color(palette.body_text),
                                )
                                .fill(palette.card_hover)
                                .corner_radius(egui::CornerRadius::same(12));
                                if ui.add(chip).clicked() {
                                    chosen_suggestion = Some(suggestion.clone());
                                }
                            }
                        });
                    });
                }

                // Composer row.
                ui_in_rect(ui, composer_rect.shrink2(egui::vec2(10.0, 0.0)), |ui| {
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        let send_width = 52.0;
                        let text_width = (ui.available_width() - send_width - 10.0).max(80.0);
                        let edit = egui::TextEdit::singleline(&mut self.composer)
                            .id_salt("assistant_composer")
                            .hint_text(
                                egui::RichText::new("Message the assistant...")
                                    .color(palette.hint_text),
                            );
                        let response = ui.add_sized([text_width, 30.0], edit);
                        if self.focus_composer {
                            response.request_focus();
                            self.focus_composer = false;
                        }
                        let submitted = response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        let clicked = ui
                            .add_enabled(
                                !chat.is_loading(),
                                egui::Button::new("Send").fill(palette.accent),
                            )
                            .clicked();
                        if submitted || clicked {
                            submit = true;
                            self.focus_composer = true;
                        }
                    });
                });

                if !fullscreen {
                    let handle_hovered = ui.rect_contains_pointer(handle_rect)
                        || self.controller.interaction() == InteractionKind::Resizing;
                    let grip_color = if handle_hovered {
                        palette.panel_stroke_active
                    } else {
                        palette.panel_stroke
                    };
                    let corner = rect.max;
                    ui.painter().line_segment(
                        [
                            egui::pos2(corner.x - 11.0, corner.y - 4.0),
                            egui::pos2(corner.x - 4.0, corner.y - 11.0),
                        ],
                        egui::Stroke::new(1.5, grip_color),
                    );
                    ui.painter().line_segment(
                        [
                            egui::pos2(corner.x - 6.0, corner.y - 4.0),
                            egui::pos2(corner.x - 4.0, corner.y - 6.0),
                        ],
                        egui::Stroke::new(1.5, grip_color),
                    );
                    if handle_hovered {
                        ctx.set_cursor_icon(egui::CursorIcon::ResizeNwSe);
                    } else if ui.rect_contains_pointer(drag_rect) {
                        ctx.set_cursor_icon(egui::CursorIcon::Grab);
                    }
                }
            });

        if !fullscreen {
            // Handle gets priority over the header; the controller drops
            // any second press while a gesture is active.
            self.press_in_rect(ctx, handle_rect, GrabRegion::ResizeHandle);
            self.press_in_rect(ctx, drag_rect, GrabRegion::Header);
        }

        if let Some(text) = chosen_suggestion {
            self.composer = text;
            self.focus_composer = true;
        }
        if submit {
            self.submit_prompt(chat, cmd_tx, status);
        }
        if fullscreen_toggled {
            self.controller.toggle_fullscreen();
        }
        if close_requested {
            self.controller.close(viewport);
            if self.controller.mode() == PanelMode::Collapsed {
                sync_chat_open(chat, false);
            }
        }
    }

    fn submit_prompt(
        &mut self,
        chat: &mut ChatSessionStore,
        cmd_tx: &Sender<BackendCommand>,
        status: &mut String,
    ) {
        let prompt = self.composer.trim().to_string();
        if prompt.is_empty() || chat.is_loading() {
            return;
        }
        chat.add_message(prompt.clone(), ChatRole::User);
        chat.set_loading(true);
        dispatch_backend_command(cmd_tx, BackendCommand::AssistantPrompt { prompt }, status);
        self.composer.clear();
    }
}

fn show_message_row(ui: &mut egui::Ui, palette: &ConsolePalette, message: &ChatMessage) {
    let is_user = message.role == ChatRole::User;
    let bubble_fill = if is_user {
        palette.bubble_user
    } else {
        palette.bubble_assistant
    };
    let align = if is_user {
        egui::Align::Max
    } else {
        egui::Align::Min
    };
    let max_bubble_width = ui.available_width() * 0.82;

    ui.add_space(4.0);
    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::NONE
            .fill(bubble_fill)
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(max_bubble_width);
                ui.label(egui::RichText::new(&message.content).color(palette.body_text));
            });
        ui.label(
            egui::RichText::new(
                message
                    .sent_at
                    .with_timezone(&chrono::Local)
                    .format("%H:%M")
                    .to_string(),
            )
            .color(palette.hint_text)
            .size(10.0),
        );
    });
}

fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(rect);
    add(&mut child);
}
