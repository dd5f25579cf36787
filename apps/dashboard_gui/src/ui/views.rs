//! Workspace views: inventory table, orders table, analytics cards.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use client_core::stores::{DashboardSection, DashboardStore};

use crate::ui::theme::ConsolePalette;

/// Search box state for the inventory view. Edits are debounced so a
/// fetch goes out only after typing pauses.
pub struct InventorySearch {
    pub text: String,
    edited_at: Option<Instant>,
    submitted: String,
}

impl InventorySearch {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            edited_at: None,
            submitted: String::new(),
        }
    }

    pub fn mark_edited(&mut self) {
        if self.text.trim() != self.submitted {
            self.edited_at = Some(Instant::now());
        } else {
            self.edited_at = None;
        }
    }

    /// Once the debounce window has passed, returns the query to fetch:
    /// `Some(None)` means fetch unfiltered, `Some(Some(term))` filtered.
    pub fn take_due_query(&mut self, debounce: Duration) -> Option<Option<String>> {
        let edited_at = self.edited_at?;
        if edited_at.elapsed() < debounce {
            return None;
        }
        self.edited_at = None;
        self.submitted = self.text.trim().to_string();
        if self.submitted.is_empty() {
            Some(None)
        } else {
            Some(Some(self.submitted.clone()))
        }
    }
}

impl Default for InventorySearch {
    fn default() -> Self {
        Self::new()
    }
}

pub fn show_inventory(
    ui: &mut egui::Ui,
    palette: &ConsolePalette,
    dashboard: &DashboardStore,
    search: &mut InventorySearch,
) {
    let loading = dashboard.is_loading(DashboardSection::Inventory);
    view_heading(ui, palette, "Inventory", loading);

    let response = ui.add(
        egui::TextEdit::singleline(&mut search.text)
            .id_salt("inventory_search")
            .hint_text(egui::RichText::new("Search SKU, name, or bin...").color(palette.hint_text))
            .desired_width(280.0),
    );
    if response.changed() {
        search.mark_edited();
    }
    ui.add_space(8.0);

    if dashboard.inventory().is_empty() {
        if !loading {
            ui.label(
                egui::RichText::new("No items match the current search.")
                    .color(palette.hint_text),
            );
        }
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("inventory_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("inventory_grid")
                .striped(true)
                .num_columns(7)
                .spacing(egui::vec2(18.0, 6.0))
                .show(ui, |ui| {
                    for title in [
                        "SKU",
                        "Name",
                        "Bin",
                        "On hand",
                        "Reserved",
                        "Available",
                        "Reorder at",
                    ] {
                        ui.label(egui::RichText::new(title).color(palette.hint_text).strong());
                    }
                    ui.end_row();

                    for item in dashboard.inventory() {
                        let flagged = item.is_low_stock();
                        let text_color = if flagged {
                            palette.low_stock
                        } else {
                            palette.body_text
                        };
                        ui.label(
                            egui::RichText::new(&item.sku)
                                .color(text_color)
                                .monospace(),
                        );
                        ui.label(egui::RichText::new(&item.name).color(text_color));
                        ui.label(egui::RichText::new(&item.bin_location).color(palette.hint_text));
                        ui.label(egui::RichText::new(item.on_hand.to_string()).color(text_color));
                        ui.label(
                            egui::RichText::new(item.reserved.to_string())
                                .color(palette.hint_text),
                        );
                        ui.label(
                            egui::RichText::new(item.available().to_string()).color(text_color),
                        );
                        let reorder_cell = if flagged {
                            format!("{} · low", item.reorder_point)
                        } else {
                            item.reorder_point.to_string()
                        };
                        ui.label(egui::RichText::new(reorder_cell).color(if flagged {
                            palette.low_stock
                        } else {
                            palette.hint_text
                        }));
                        ui.end_row();
                    }
                });
        });
}

pub fn show_orders(ui: &mut egui::Ui, palette: &ConsolePalette, dashboard: &DashboardStore) {
    let loading = dashboard.is_loading(DashboardSection::Orders);
    view_heading(ui, palette, "Orders", loading);

    if dashboard.orders().is_empty() {
        if !loading {
            ui.label(egui::RichText::new("No orders loaded yet.").color(palette.hint_text));
        }
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("orders_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("orders_grid")
                .striped(true)
                .num_columns(6)
                .spacing(egui::vec2(18.0, 6.0))
                .show(ui, |ui| {
                    for title in ["Reference", "Customer", "Status", "Lines", "Total", "Placed"] {
                        ui.label(egui::RichText::new(title).color(palette.hint_text).strong());
                    }
                    ui.end_row();

                    for order in dashboard.orders() {
                        ui.label(
                            egui::RichText::new(&order.reference)
                                .color(palette.body_text)
                                .monospace(),
                        );
                        ui.label(egui::RichText::new(&order.customer).color(palette.body_text));
                        let status_color = if order.status.is_open() {
                            palette.status_open
                        } else {
                            palette.status_closed
                        };
                        ui.label(egui::RichText::new(order.status.label()).color(status_color));
                        ui.label(
                            egui::RichText::new(order.line_count.to_string())
                                .color(palette.hint_text),
                        );
                        ui.label(
                            egui::RichText::new(format_cents(order.total_cents))
                                .color(palette.body_text),
                        );
                        ui.label(
                            egui::RichText::new(relative_age(order.placed_at))
                                .color(palette.hint_text),
                        );
                        ui.end_row();
                    }
                });
        });
}

pub fn show_analytics(ui: &mut egui::Ui, palette: &ConsolePalette, dashboard: &DashboardStore) {
    let loading = dashboard.is_loading(DashboardSection::Analytics);
    view_heading(ui, palette, "Analytics", loading);

    let Some(snapshot) = dashboard.analytics() else {
        if !loading {
            ui.label(egui::RichText::new("No analytics snapshot yet.").color(palette.hint_text));
        }
        return;
    };

    ui.horizontal_wrapped(|ui| {
        stat_card(
            ui,
            palette,
            "Orders today",
            snapshot.orders_today.to_string(),
            palette.accent,
        );
        stat_card(
            ui,
            palette,
            "Open orders",
            snapshot.open_orders.to_string(),
            palette.status_open,
        );
        stat_card(
            ui,
            palette,
            "Low stock items",
            snapshot.low_stock_count.to_string(),
            palette.low_stock,
        );
        stat_card(
            ui,
            palette,
            "Units on hand",
            snapshot.inventory_units.to_string(),
            palette.title_text,
        );
    });

    if snapshot.top_movers.is_empty() {
        return;
    }

    ui.add_space(14.0);
    ui.label(
        egui::RichText::new("Top movers")
            .color(palette.title_text)
            .strong(),
    );
    ui.add_space(4.0);
    egui::Grid::new("top_movers_grid")
        .striped(true)
        .num_columns(3)
        .spacing(egui::vec2(18.0, 6.0))
        .show(ui, |ui| {
            for mover in &snapshot.top_movers {
                ui.label(
                    egui::RichText::new(&mover.sku)
                        .color(palette.body_text)
                        .monospace(),
                );
                ui.label(egui::RichText::new(&mover.name).color(palette.body_text));
                ui.label(
                    egui::RichText::new(format!("{} units", mover.units_moved))
                        .color(palette.hint_text),
                );
                ui.end_row();
            }
        });
}

fn view_heading(ui: &mut egui::Ui, palette: &ConsolePalette, title: &str, loading: bool) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(title)
                .heading()
                .color(palette.title_text),
        );
        if loading {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });
    ui.add_space(6.0);
}

fn stat_card(
    ui: &mut egui::Ui,
    palette: &ConsolePalette,
    label: &str,
    value: String,
    value_color: egui::Color32,
) {
    egui::Frame::NONE
        .fill(palette.card_background)
        .stroke(egui::Stroke::new(1.0, palette.panel_stroke))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(label).color(palette.hint_text).size(11.5));
                ui.label(
                    egui::RichText::new(value)
                        .color(value_color)
                        .size(24.0)
                        .strong(),
                );
            });
        });
}

pub fn format_cents(total_cents: i64) -> String {
    let sign = if total_cents < 0 { "-" } else { "" };
    let cents = total_cents.unsigned_abs();
    format!("{sign}${}.{:02}", cents / 100, cents % 100)
}

pub fn relative_age(placed_at: DateTime<Utc>) -> String {
    let minutes = (Utc::now() - placed_at).num_minutes().max(0);
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 48 * 60 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}
