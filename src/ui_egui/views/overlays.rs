//! Transient overlays: first-visit welcome banner and the easter egg toast.

use egui::{Align2, Area, Frame, Id, Margin, Order, RichText, Rounding, Stroke, Ui};

use crate::ui_egui::theme::SnapshotTheme;

const WELCOME_MESSAGE: &str = "Welcome! This page is a daily work journal: every morning the \
task list is updated, and every evening the completed items and open problems are filled in, \
so progress, risks, and blockers stay visible at a glance.\n\nNote: this message is shown only \
on your first visit. A flag is kept in local app data, so opening the dashboard from another \
machine will show it again.";

const EASTER_EGG_TITLE: &str = "\u{1F389} Terrible joke of the day \u{1F389}";
const EASTER_EGG_BODY: &str =
    "The status report writes itself now. Unfortunately, so do the blockers.";

/// First-visit banner. Returns true when the close button was clicked.
pub fn render_welcome_banner(ui: &mut Ui, theme: &SnapshotTheme) -> bool {
    let mut closed = false;

    Frame::none()
        .fill(theme.banner_background)
        .stroke(Stroke::new(1.0, theme.banner_border))
        .rounding(Rounding::same(8.0))
        .inner_margin(Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.set_max_width(ui.available_width() - 30.0);
                    ui.label(RichText::new(WELCOME_MESSAGE).color(theme.text_primary));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    let close = ui.add(
                        egui::Button::new(
                            RichText::new("\u{00D7}").size(16.0).color(theme.text_secondary),
                        )
                        .frame(false),
                    );
                    if close.clicked() {
                        closed = true;
                    }
                });
            });
        });

    closed
}

/// Bottom-right toast shown while the gesture reveal is active. Returns
/// true when the close button was clicked.
pub fn render_easter_egg(ctx: &egui::Context, theme: &SnapshotTheme) -> bool {
    let mut closed = false;

    Area::new(Id::new("easter-egg-toast"))
        .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(Order::Foreground)
        .show(ctx, |ui| {
            Frame::none()
                .fill(theme.toast_background)
                .stroke(Stroke::new(1.0, theme.accent))
                .rounding(Rounding::same(8.0))
                .inner_margin(Margin::same(12.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(EASTER_EGG_TITLE)
                                    .strong()
                                    .color(theme.text_primary),
                            );
                            ui.label(
                                RichText::new(EASTER_EGG_BODY)
                                    .size(11.0)
                                    .color(theme.text_secondary),
                            );
                        });

                        let close = ui.add(
                            egui::Button::new(
                                RichText::new("\u{00D7}")
                                    .size(16.0)
                                    .color(theme.text_secondary),
                            )
                            .frame(false),
                        );
                        if close.clicked() {
                            closed = true;
                        }
                    });
                });
        });

    closed
}
